// src/application/dto/service_cards.rs
use crate::domain::service_card::ServiceCard;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceCardDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceCard> for ServiceCardDto {
    fn from(card: ServiceCard) -> Self {
        Self {
            id: card.id,
            name: card.name,
            description: card.description,
            picture: card.picture,
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}
