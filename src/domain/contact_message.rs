// src/domain/contact_message.rs
use crate::domain::common::{Page, PageRequest};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageStatus {
    New,
    Read,
    Replied,
    Closed,
}

impl MessageStatus {
    pub const ALL: [Self; 4] = [Self::New, Self::Read, Self::Replied, Self::Closed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            "closed" => Ok(Self::Closed),
            other => Err(DomainError::Validation(format!(
                "unknown message status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
    Both,
}

impl PreferredContact {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Both => "both",
        }
    }
}

impl FromStr for PreferredContact {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "both" => Ok(Self::Both),
            other => Err(DomainError::Validation(format!(
                "unknown contact preference '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub service_interest: Option<String>,
    pub budget_range: Option<String>,
    pub preferred_contact: PreferredContact,
    pub status: MessageStatus,
    pub admin_notes: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub replied_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub service_interest: Option<String>,
    pub budget_range: Option<String>,
    pub preferred_contact: PreferredContact,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactMessageChanges {
    pub status: Option<MessageStatus>,
    pub admin_notes: Option<Option<String>>,
    pub replied_at: Option<Option<DateTime<Utc>>>,
}

impl ContactMessageChanges {
    /// Moving to `replied` without an explicit timestamp stamps `replied_at`.
    pub fn stamp_reply(mut self, now: DateTime<Utc>) -> Self {
        if self.status == Some(MessageStatus::Replied) && self.replied_at.is_none() {
            self.replied_at = Some(Some(now));
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageBulkAction {
    MarkRead,
    MarkReplied,
    MarkClosed,
    Delete,
}

impl MessageBulkAction {
    pub fn target_status(self) -> Option<MessageStatus> {
        match self {
            Self::MarkRead => Some(MessageStatus::Read),
            Self::MarkReplied => Some(MessageStatus::Replied),
            Self::MarkClosed => Some(MessageStatus::Closed),
            Self::Delete => None,
        }
    }
}

impl FromStr for MessageBulkAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mark_read" => Ok(Self::MarkRead),
            "mark_replied" => Ok(Self::MarkReplied),
            "mark_closed" => Ok(Self::MarkClosed),
            "delete" => Ok(Self::Delete),
            other => Err(DomainError::Validation(format!(
                "unknown bulk action '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactMessageFilter {
    pub status: Option<MessageStatus>,
    pub service_interest: Option<String>,
    pub budget_range: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    /// Exclusive upper bound.
    pub created_before: Option<DateTime<Utc>>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub total: u64,
    pub new: u64,
    pub read: u64,
    pub replied: u64,
    pub closed: u64,
    pub today: u64,
    pub this_week: u64,
    pub this_month: u64,
    pub top_services: Vec<LabelCount>,
    pub budget_distribution: Vec<LabelCount>,
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage>;
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<ContactMessage>>;
    async fn list_page(
        &self,
        filter: &ContactMessageFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ContactMessage>>;
    /// Unpaged, newest first.
    async fn list_all(&self, filter: &ContactMessageFilter) -> DomainResult<Vec<ContactMessage>>;
    async fn update(
        &self,
        id: i64,
        changes: ContactMessageChanges,
    ) -> DomainResult<ContactMessage>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
    async fn bulk_apply(
        &self,
        ids: &[i64],
        action: MessageBulkAction,
        admin_notes: Option<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<u64>;
    async fn stats(&self, now: DateTime<Utc>) -> DomainResult<ContactStats>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replied_status_stamps_timestamp() {
        let now = Utc::now();
        let changes = ContactMessageChanges {
            status: Some(MessageStatus::Replied),
            ..Default::default()
        }
        .stamp_reply(now);
        assert_eq!(changes.replied_at, Some(Some(now)));
    }

    #[test]
    fn explicit_reply_timestamp_is_kept() {
        let now = Utc::now();
        let earlier = now - chrono::Duration::days(1);
        let changes = ContactMessageChanges {
            status: Some(MessageStatus::Replied),
            replied_at: Some(Some(earlier)),
            ..Default::default()
        }
        .stamp_reply(now);
        assert_eq!(changes.replied_at, Some(Some(earlier)));
    }

    #[test]
    fn other_statuses_do_not_stamp() {
        let changes = ContactMessageChanges {
            status: Some(MessageStatus::Closed),
            ..Default::default()
        }
        .stamp_reply(Utc::now());
        assert!(changes.replied_at.is_none());
    }

    #[test]
    fn bulk_actions_parse() {
        assert_eq!(
            "mark_replied".parse::<MessageBulkAction>().unwrap(),
            MessageBulkAction::MarkReplied
        );
        assert!("archive".parse::<MessageBulkAction>().is_err());
    }
}
