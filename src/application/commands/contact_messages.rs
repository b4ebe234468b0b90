// src/application/commands/contact_messages.rs
use std::sync::Arc;

use super::{on_field, patch};
use crate::{
    application::{
        dto::{AffectedDto, ContactMessageDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        validation::FieldErrors,
    },
    domain::contact_message::{
        ContactMessage, ContactMessageChanges, ContactMessageRepository, MessageBulkAction,
        MessageStatus, NewContactMessage, PreferredContact,
    },
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct SubmitContactMessageCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "The name field is required and may not be greater than 100 characters."
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(
            min = 1,
            max = 100,
            message = "The email field is required and may not be greater than 100 characters."
        ),
        email(message = "The email must be a valid email address.")
    )]
    pub email: String,
    #[validate(length(max = 20, message = "The phone may not be greater than 20 characters."))]
    pub phone: Option<String>,
    #[validate(length(max = 100, message = "The company may not be greater than 100 characters."))]
    pub company: Option<String>,
    #[validate(length(max = 200, message = "The subject may not be greater than 200 characters."))]
    pub subject: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "The message field is required."))]
    pub message: String,
    #[validate(length(
        max = 100,
        message = "The service interest may not be greater than 100 characters."
    ))]
    pub service_interest: Option<String>,
    #[validate(length(max = 50, message = "The budget range may not be greater than 50 characters."))]
    pub budget_range: Option<String>,
    pub preferred_contact: Option<String>,
}

/// Request metadata recorded with a submission.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateContactMessageCommand {
    pub status: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub admin_notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub replied_at: Option<Option<DateTime<Utc>>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateContactStatusCommand {
    #[serde(default)]
    #[validate(length(min = 1, message = "The status field is required."))]
    pub status: String,
    pub admin_notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BulkUpdateContactMessagesCommand {
    #[serde(default)]
    #[validate(length(min = 1, message = "The ids field must have at least 1 item."))]
    pub ids: Vec<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "The action field is required."))]
    pub action: String,
    pub admin_notes: Option<String>,
}

pub struct ContactMessageCommandService {
    repo: Arc<dyn ContactMessageRepository>,
    clock: Arc<dyn Clock>,
}

impl ContactMessageCommandService {
    pub fn new(repo: Arc<dyn ContactMessageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn submit(
        &self,
        command: SubmitContactMessageCommand,
        client: ClientInfo,
    ) -> ApplicationResult<ContactMessageDto> {
        FieldErrors::collect(&command).into_result()?;
        let preferred_contact = match command.preferred_contact.as_deref() {
            Some(raw) => on_field(raw.parse::<PreferredContact>(), "preferred_contact")?,
            None => PreferredContact::default(),
        };

        let message = self
            .repo
            .insert(NewContactMessage {
                name: command.name,
                email: command.email,
                phone: command.phone,
                company: command.company,
                subject: command.subject,
                message: command.message,
                service_interest: command.service_interest,
                budget_range: command.budget_range,
                preferred_contact,
                ip_address: client.ip_address,
                user_agent: client.user_agent,
                created_at: self.clock.now(),
            })
            .await?;
        info!(message_id = message.id, "contact message received");
        Ok(message.into())
    }

    /// Opening a `new` message marks it `read`.
    pub async fn open(&self, id: i64) -> ApplicationResult<ContactMessageDto> {
        let message = self.load(id).await?;
        if message.status != MessageStatus::New {
            return Ok(message.into());
        }
        let changes = ContactMessageChanges {
            status: Some(MessageStatus::Read),
            ..ContactMessageChanges::default()
        };
        Ok(self.repo.update(id, changes).await?.into())
    }

    pub async fn update(
        &self,
        id: i64,
        command: UpdateContactMessageCommand,
    ) -> ApplicationResult<ContactMessageDto> {
        self.load(id).await?;
        let status = command
            .status
            .as_deref()
            .map(|raw| on_field(raw.parse::<MessageStatus>(), "status"))
            .transpose()?;

        let changes = ContactMessageChanges {
            status,
            admin_notes: command.admin_notes,
            replied_at: command.replied_at,
        }
        .stamp_reply(self.clock.now());
        Ok(self.repo.update(id, changes).await?.into())
    }

    pub async fn update_status(
        &self,
        id: i64,
        command: UpdateContactStatusCommand,
    ) -> ApplicationResult<ContactMessageDto> {
        self.load(id).await?;
        FieldErrors::collect(&command).into_result()?;
        let status = on_field(command.status.parse::<MessageStatus>(), "status")?;

        let changes = ContactMessageChanges {
            status: Some(status),
            admin_notes: command.admin_notes.map(Some),
            replied_at: None,
        }
        .stamp_reply(self.clock.now());
        Ok(self.repo.update(id, changes).await?.into())
    }

    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        self.load(id).await?;
        self.repo.delete(id).await?;
        info!(message_id = id, "contact message deleted");
        Ok(())
    }

    pub async fn bulk_update(
        &self,
        command: BulkUpdateContactMessagesCommand,
    ) -> ApplicationResult<AffectedDto> {
        FieldErrors::collect(&command).into_result()?;
        let action: MessageBulkAction = on_field(command.action.parse(), "action")?;

        let affected = self
            .repo
            .bulk_apply(&command.ids, action, command.admin_notes, self.clock.now())
            .await?;
        info!(?action, affected, "contact messages bulk updated");
        Ok(AffectedDto { affected })
    }

    async fn load(&self, id: i64) -> ApplicationResult<ContactMessage> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Contact message not found"))
    }
}
