// src/application/queries/service_cards.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ServiceCardDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::service_card::ServiceCardRepository,
};

pub struct ServiceCardQueryService {
    repo: Arc<dyn ServiceCardRepository>,
}

impl ServiceCardQueryService {
    pub fn new(repo: Arc<dyn ServiceCardRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> ApplicationResult<Vec<ServiceCardDto>> {
        let cards = self.repo.list().await?;
        Ok(cards.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<ServiceCardDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Service card not found"))
    }
}
