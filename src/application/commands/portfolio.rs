// src/application/commands/portfolio.rs
use std::sync::Arc;

use super::{check_string_items, exists_message, on_field, patch};
use crate::{
    application::{
        dto::PortfolioDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::media::{MediaLibrary, MediaNamespace, UploadedFile},
        validation::FieldErrors,
    },
    domain::{
        portfolio::{
            MAX_GALLERY_IMAGES, NewPortfolioItem, PortfolioChanges, PortfolioFlag, PortfolioItem,
            PortfolioRepository, SLUG_FALLBACK,
        },
        service::ServiceRepository,
        slug::SlugAssigner,
    },
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

const MAX_TECHNOLOGY_LEN: usize = 50;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreatePortfolioCommand {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 200,
        message = "The title field is required and may not be greater than 200 characters."
    ))]
    pub title: String,
    #[validate(length(max = 200, message = "The slug may not be greater than 200 characters."))]
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 100, message = "The client name may not be greater than 100 characters."))]
    pub client_name: Option<String>,
    #[validate(
        url(message = "The project url must be a valid URL."),
        length(max = 255, message = "The project url may not be greater than 255 characters.")
    )]
    pub project_url: Option<String>,
    pub featured_image: Option<String>,
    #[validate(length(max = 10, message = "The gallery images may not have more than 10 items."))]
    pub gallery_images: Option<Vec<String>>,
    pub service_id: Option<i64>,
    pub technologies_used: Option<Vec<String>>,
    pub project_date: Option<NaiveDate>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePortfolioCommand {
    #[validate(length(
        min = 1,
        max = 200,
        message = "The title must be between 1 and 200 characters."
    ))]
    pub title: Option<String>,
    #[validate(length(max = 200, message = "The slug may not be greater than 200 characters."))]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 100, message = "The client name may not be greater than 100 characters."))]
    pub client_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    #[validate(
        url(message = "The project url must be a valid URL."),
        length(max = 255, message = "The project url may not be greater than 255 characters.")
    )]
    pub project_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub featured_image: Option<Option<String>>,
    #[validate(length(max = 10, message = "The gallery images may not have more than 10 items."))]
    pub gallery_images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<i64>)]
    pub service_id: Option<Option<i64>>,
    pub technologies_used: Option<Vec<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    #[schema(value_type = Option<NaiveDate>)]
    pub project_date: Option<Option<NaiveDate>>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

pub struct PortfolioCommandService {
    repo: Arc<dyn PortfolioRepository>,
    services: Arc<dyn ServiceRepository>,
    slugs: Arc<SlugAssigner>,
    media: Arc<MediaLibrary>,
    clock: Arc<dyn Clock>,
}

impl PortfolioCommandService {
    pub fn new(
        repo: Arc<dyn PortfolioRepository>,
        services: Arc<dyn ServiceRepository>,
        slugs: Arc<SlugAssigner>,
        media: Arc<MediaLibrary>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            services,
            slugs,
            media,
            clock,
        }
    }

    pub async fn create(&self, command: CreatePortfolioCommand) -> ApplicationResult<PortfolioDto> {
        let mut errors = FieldErrors::collect(&command);
        check_string_items(
            &mut errors,
            "technologies_used",
            command.technologies_used.as_deref(),
            MAX_TECHNOLOGY_LEN,
        );
        self.check_service(&mut errors, command.service_id).await?;
        errors.into_result()?;

        let slug = on_field(
            self.slugs
                .assign(
                    self.repo.as_ref(),
                    &command.title,
                    command.slug.as_deref(),
                    SLUG_FALLBACK,
                )
                .await,
            "slug",
        )?;

        let item = self
            .repo
            .insert(NewPortfolioItem {
                title: command.title,
                slug,
                description: command.description,
                client_name: command.client_name,
                project_url: command.project_url,
                featured_image: command.featured_image,
                gallery_images: command.gallery_images.unwrap_or_default(),
                service_id: command.service_id,
                technologies_used: command.technologies_used.unwrap_or_default(),
                project_date: command.project_date,
                is_featured: command.is_featured.unwrap_or(false),
                is_published: command.is_published.unwrap_or(true),
                created_at: self.clock.now(),
            })
            .await?;
        info!(portfolio_id = item.id, slug = %item.slug, "portfolio item created");
        Ok(item.into())
    }

    pub async fn update(
        &self,
        slug: &str,
        command: UpdatePortfolioCommand,
    ) -> ApplicationResult<PortfolioDto> {
        let current = self.load(slug).await?;
        let mut errors = FieldErrors::collect(&command);
        check_string_items(
            &mut errors,
            "technologies_used",
            command.technologies_used.as_deref(),
            MAX_TECHNOLOGY_LEN,
        );
        self.check_service(&mut errors, command.service_id.flatten())
            .await?;
        errors.into_result()?;

        let new_slug = on_field(
            self.slugs
                .reassign(
                    self.repo.as_ref(),
                    current.id,
                    &current.slug,
                    &current.title,
                    command.title.as_deref(),
                    command.slug.as_deref(),
                    SLUG_FALLBACK,
                )
                .await,
            "slug",
        )?;

        let changes = PortfolioChanges {
            title: command.title,
            slug: (new_slug != current.slug).then_some(new_slug),
            description: command.description,
            client_name: command.client_name,
            project_url: command.project_url,
            featured_image: command.featured_image,
            gallery_images: command.gallery_images,
            service_id: command.service_id,
            technologies_used: command.technologies_used,
            project_date: command.project_date,
            is_featured: command.is_featured,
            is_published: command.is_published,
            updated_at: self.clock.now(),
        };
        let updated = self.repo.update(current.id, changes).await?;
        self.release_unused_media(&current, &updated).await;
        Ok(updated.into())
    }

    pub async fn delete(&self, slug: &str) -> ApplicationResult<()> {
        let current = self.load(slug).await?;
        self.repo.delete(current.id).await?;
        self.media.discard_all(current.media()).await;
        info!(portfolio_id = current.id, "portfolio item deleted");
        Ok(())
    }

    pub async fn toggle(&self, slug: &str, flag: PortfolioFlag) -> ApplicationResult<PortfolioDto> {
        let current = self.load(slug).await?;
        Ok(self
            .repo
            .toggle(current.id, flag, self.clock.now())
            .await?
            .into())
    }

    pub async fn upload_featured_image(
        &self,
        slug: &str,
        file: UploadedFile,
    ) -> ApplicationResult<PortfolioDto> {
        let current = self.load(slug).await?;
        let path = self.media.store(MediaNamespace::Portfolio, file).await?;

        let mut changes = PortfolioChanges::at(self.clock.now());
        changes.featured_image = Some(Some(path));
        let updated = self.repo.update(current.id, changes).await?;
        self.release_unused_media(&current, &updated).await;
        Ok(updated.into())
    }

    /// Replaces the whole gallery with the uploaded images.
    pub async fn upload_gallery(
        &self,
        slug: &str,
        files: Vec<UploadedFile>,
    ) -> ApplicationResult<PortfolioDto> {
        let current = self.load(slug).await?;
        if files.is_empty() {
            return Err(ApplicationError::field("files", "The files field is required."));
        }
        if files.len() > MAX_GALLERY_IMAGES {
            return Err(ApplicationError::field(
                "files",
                format!("The files may not have more than {MAX_GALLERY_IMAGES} items."),
            ));
        }

        let paths = self
            .media
            .store_all(MediaNamespace::Portfolio, files)
            .await?;
        let mut changes = PortfolioChanges::at(self.clock.now());
        changes.gallery_images = Some(paths);
        let updated = self.repo.update(current.id, changes).await?;
        self.release_unused_media(&current, &updated).await;
        Ok(updated.into())
    }

    /// Discards every file the previous version referenced that the new one no longer does.
    async fn release_unused_media(&self, previous: &PortfolioItem, current: &PortfolioItem) {
        let kept: Vec<&str> = current.media().collect();
        let released: Vec<&str> = previous
            .media()
            .filter(|reference| !kept.contains(reference))
            .collect();
        self.media.discard_all(released).await;
    }

    async fn check_service(
        &self,
        errors: &mut FieldErrors,
        service_id: Option<i64>,
    ) -> ApplicationResult<()> {
        if let Some(service_id) = service_id
            && self.services.find_by_id(service_id).await?.is_none()
        {
            errors.add("service_id", exists_message("service_id"));
        }
        Ok(())
    }

    async fn load(&self, slug: &str) -> ApplicationResult<PortfolioItem> {
        self.repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Portfolio item not found"))
    }
}
