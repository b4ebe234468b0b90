// src/infrastructure/storage.rs
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::storage::FileStorage,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

/// Files under `root`, published beneath `public_prefix` by the static file service.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_prefix: &str) -> Self {
        let trimmed = public_prefix.trim_end_matches('/');
        let public_prefix = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self {
            root: root.into(),
            public_prefix,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    /// Disk location of a public path, refusing anything that climbs out of `root`.
    fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        let relative = public_path
            .strip_prefix(&self.public_prefix)?
            .trim_start_matches('/');
        let relative = Path::new(relative);
        if relative.as_os_str().is_empty()
            || !relative
                .components()
                .all(|part| matches!(part, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn put(
        &self,
        namespace: &str,
        file_name: &str,
        bytes: Bytes,
    ) -> ApplicationResult<String> {
        let public_path = format!("{}/{namespace}/{file_name}", self.public_prefix);
        let target = self.resolve(&public_path).ok_or_else(|| {
            ApplicationError::infrastructure(format!("unsafe upload path {public_path}"))
        })?;
        if let Some(dir) = target.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        }
        tokio::fs::write(&target, &bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(public_path)
    }

    async fn delete(&self, public_path: &str) -> ApplicationResult<()> {
        let Some(target) = self.resolve(public_path) else {
            return Ok(());
        };
        match tokio::fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
        }
    }

    fn owns(&self, reference: &str) -> bool {
        !reference.contains("://")
            && reference
                .strip_prefix(&self.public_prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(root: &Path) -> LocalFileStorage {
        LocalFileStorage::new(root, "uploads/")
    }

    #[test]
    fn only_prefixed_local_paths_are_owned() {
        let storage = storage(Path::new("/tmp/none"));
        assert_eq!(storage.public_prefix(), "/uploads");
        assert!(storage.owns("/uploads/team/1_a.png"));
        assert!(!storage.owns("https://cdn.example.com/uploads/team/a.png"));
        assert!(!storage.owns("/uploadsx/a.png"));
        assert!(!storage.owns("/elsewhere/a.png"));
    }

    #[test]
    fn traversal_is_not_resolved() {
        let storage = storage(Path::new("/srv/public"));
        assert!(storage.resolve("/uploads/../etc/passwd").is_none());
        assert_eq!(
            storage.resolve("/uploads/team/a.png"),
            Some(PathBuf::from("/srv/public/team/a.png"))
        );
    }

    #[tokio::test]
    async fn put_then_delete_round_trips_on_disk() {
        let root = std::env::temp_dir().join(format!("site_cms_storage_{}", uuid::Uuid::new_v4()));
        let storage = storage(&root);
        let path = storage
            .put("partners", "1_logo.png", Bytes::from_static(b"png"))
            .await
            .unwrap();
        assert_eq!(path, "/uploads/partners/1_logo.png");
        assert!(root.join("partners/1_logo.png").exists());

        storage.delete(&path).await.unwrap();
        assert!(!root.join("partners/1_logo.png").exists());
        storage.delete(&path).await.unwrap();
        let _ = std::fs::remove_dir_all(root);
    }
}
