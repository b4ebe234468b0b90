// src/application/services/media.rs
use crate::application::{
    ApplicationResult,
    ports::{storage::FileStorage, time::Clock},
    validation::FieldErrors,
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::warn;

const MIB: usize = 1024 * 1024;

pub const ACCEPTED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/jpg",
    "image/gif",
    "image/webp",
];

/// Directory an entity's uploads live under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaNamespace {
    Portfolio,
    Team,
    Testimonials,
    Settings,
    Partners,
    ServiceCards,
    HostingTypes,
}

impl MediaNamespace {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portfolio => "portfolio",
            Self::Team => "team",
            Self::Testimonials => "testimonials",
            Self::Settings => "settings",
            Self::Partners => "partners",
            Self::ServiceCards => "services_cards",
            Self::HostingTypes => "type_of_hostings",
        }
    }

    pub fn max_bytes(self) -> usize {
        match self {
            Self::Portfolio => 5 * MIB,
            Self::Team => 3 * MIB,
            _ => 2 * MIB,
        }
    }
}

/// One file part of a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field path used when reporting errors, e.g. `file` or `files.2`.
    pub field: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    fn image_type(&self) -> Option<String> {
        if let Some(content_type) = &self.content_type {
            let essence = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            if essence != "application/octet-stream" {
                return Some(essence);
            }
        }
        let extension = self.file_name.rsplit_once('.')?.1.to_ascii_lowercase();
        let guessed = match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => return None,
        };
        Some(guessed.to_string())
    }
}

/// Validates uploads and keeps the storage in step with entity media references.
pub struct MediaLibrary {
    storage: Arc<dyn FileStorage>,
    clock: Arc<dyn Clock>,
}

impl MediaLibrary {
    pub fn new(storage: Arc<dyn FileStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    pub fn check(&self, namespace: MediaNamespace, file: &UploadedFile, errors: &mut FieldErrors) {
        let accepted = file
            .image_type()
            .is_some_and(|kind| ACCEPTED_IMAGE_TYPES.contains(&kind.as_str()));
        if !accepted {
            errors.add(
                &file.field,
                format!(
                    "The {} must be a file of type: jpeg, png, jpg, gif, webp.",
                    file.field
                ),
            );
        }
        let max = namespace.max_bytes();
        if file.bytes.len() > max {
            errors.add(
                &file.field,
                format!(
                    "The {} may not be greater than {} kilobytes.",
                    file.field,
                    max / 1024
                ),
            );
        }
    }

    /// Stores one image and returns its public path.
    pub async fn store(
        &self,
        namespace: MediaNamespace,
        file: UploadedFile,
    ) -> ApplicationResult<String> {
        let mut errors = FieldErrors::new();
        self.check(namespace, &file, &mut errors);
        errors.into_result()?;
        self.put(namespace, file).await
    }

    /// Stores every image or none of them.
    pub async fn store_all(
        &self,
        namespace: MediaNamespace,
        files: Vec<UploadedFile>,
    ) -> ApplicationResult<Vec<String>> {
        let mut errors = FieldErrors::new();
        for file in &files {
            self.check(namespace, file, &mut errors);
        }
        errors.into_result()?;

        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            match self.put(namespace, file).await {
                Ok(path) => stored.push(path),
                Err(err) => {
                    self.discard_all(stored.iter().map(String::as_str)).await;
                    return Err(err);
                }
            }
        }
        Ok(stored)
    }

    async fn put(
        &self,
        namespace: MediaNamespace,
        file: UploadedFile,
    ) -> ApplicationResult<String> {
        let file_name = format!(
            "{}_{}",
            self.clock.now().timestamp(),
            sanitize_file_name(&file.file_name)
        );
        self.storage
            .put(namespace.as_str(), &file_name, file.bytes)
            .await
    }

    /// Removes a locally stored file. Remote URLs and removal failures are ignored.
    pub async fn discard(&self, reference: Option<&str>) {
        let Some(reference) = reference else {
            return;
        };
        if !self.storage.owns(reference) {
            return;
        }
        if let Err(err) = self.storage.delete(reference).await {
            warn!(error = %err, path = reference, "failed to remove stored file");
        }
    }

    pub async fn discard_all<'a>(&self, references: impl IntoIterator<Item = &'a str>) {
        for reference in references {
            self.discard(Some(reference)).await;
        }
    }

    /// Discards `previous` when a write replaced it with something else.
    pub async fn discard_replaced(&self, previous: Option<&str>, current: Option<&str>) {
        if previous != current {
            self.discard(previous).await;
        }
    }
}

/// Last path component of an upload name with whitespace turned into `_`.
pub fn sanitize_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, content_type: Option<&str>, size: usize) -> UploadedFile {
        UploadedFile {
            field: "file".into(),
            file_name: name.into(),
            content_type: content_type.map(str::to_string),
            bytes: Bytes::from(vec![0_u8; size]),
        }
    }

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(sanitize_file_name("my photo.png"), "my_photo.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\a b.jpg"), "a_b.jpg");
        assert_eq!(sanitize_file_name(".."), "upload");
    }

    #[test]
    fn image_type_falls_back_to_extension() {
        assert_eq!(
            upload("a.JPG", None, 1).image_type().as_deref(),
            Some("image/jpeg")
        );
        assert_eq!(
            upload("a.bin", Some("application/octet-stream"), 1).image_type(),
            None
        );
        assert_eq!(
            upload("a", Some("image/png; charset=binary"), 1)
                .image_type()
                .as_deref(),
            Some("image/png")
        );
    }

    #[test]
    fn namespace_limits() {
        assert_eq!(MediaNamespace::Portfolio.max_bytes(), 5 * MIB);
        assert_eq!(MediaNamespace::Team.max_bytes(), 3 * MIB);
        assert_eq!(MediaNamespace::Partners.max_bytes(), 2 * MIB);
        assert_eq!(MediaNamespace::ServiceCards.as_str(), "services_cards");
    }
}
