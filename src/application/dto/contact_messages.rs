// src/application/dto/contact_messages.rs
use crate::domain::contact_message::{ContactMessage, ContactStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessageDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub service_interest: Option<String>,
    pub budget_range: Option<String>,
    pub preferred_contact: String,
    pub status: String,
    pub admin_notes: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub replied_at: Option<DateTime<Utc>>,
}

impl From<ContactMessage> for ContactMessageDto {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.name,
            email: message.email,
            phone: message.phone,
            company: message.company,
            subject: message.subject,
            message: message.message,
            service_interest: message.service_interest,
            budget_range: message.budget_range,
            preferred_contact: message.preferred_contact.as_str().to_string(),
            status: message.status.to_string(),
            admin_notes: message.admin_notes,
            ip_address: message.ip_address,
            user_agent: message.user_agent,
            created_at: message.created_at,
            replied_at: message.replied_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactCountsDto {
    pub total: u64,
    pub new: u64,
    pub read: u64,
    pub replied: u64,
    pub closed: u64,
    pub today: u64,
    pub this_week: u64,
    pub this_month: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInterestCountDto {
    pub service_interest: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetRangeCountDto {
    pub budget_range: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactStatsDto {
    pub stats: ContactCountsDto,
    pub top_services: Vec<ServiceInterestCountDto>,
    pub budget_distribution: Vec<BudgetRangeCountDto>,
}

impl From<ContactStats> for ContactStatsDto {
    fn from(stats: ContactStats) -> Self {
        Self {
            stats: ContactCountsDto {
                total: stats.total,
                new: stats.new,
                read: stats.read,
                replied: stats.replied,
                closed: stats.closed,
                today: stats.today,
                this_week: stats.this_week,
                this_month: stats.this_month,
            },
            top_services: stats
                .top_services
                .into_iter()
                .map(|row| ServiceInterestCountDto {
                    service_interest: row.label,
                    count: row.count,
                })
                .collect(),
            budget_distribution: stats
                .budget_distribution
                .into_iter()
                .map(|row| BudgetRangeCountDto {
                    budget_range: row.label,
                    count: row.count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactExportDto {
    pub format: String,
    pub count: usize,
    pub messages: Vec<ContactMessageDto>,
}
