// src/application/queries/hosting_types.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::HostingTypeDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::hosting_type::HostingTypeRepository,
};

pub struct HostingTypeQueryService {
    repo: Arc<dyn HostingTypeRepository>,
}

impl HostingTypeQueryService {
    pub fn new(repo: Arc<dyn HostingTypeRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> ApplicationResult<Vec<HostingTypeDto>> {
        let types = self.repo.list().await?;
        Ok(types.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<HostingTypeDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("Hosting type not found"))
    }
}
