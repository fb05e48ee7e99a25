// src/services/profile_picture_service.rs
use std::path::{Path, PathBuf};
use log::{debug, info};
use thiserror::Error;
use uuid::Uuid;

pub const MAX_PROFILE_PICTURE_BYTES: usize = 5 * 1024 * 1024;
pub const PROFILE_PICTURE_URL: &str = "/profile/avatar.jpg";
const PROFILE_PICTURE_FILE: &str = "avatar.jpg";

#[derive(Debug, Error)]
pub enum ProfilePictureError {
    #[error("No file provided")]
    MissingFile,
    #[error("File must be an image")]
    InvalidType,
    #[error("File must be smaller than 5MB")]
    TooLarge,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Only the media type is checked, e.g. `image/png` or `image/x-icon`.
pub fn validate_content_type(content_type: Option<&str>) -> Result<(), ProfilePictureError> {
    match content_type {
        Some(ct) if ct.trim().to_ascii_lowercase().starts_with("image/") => Ok(()),
        _ => Err(ProfilePictureError::InvalidType),
    }
}

pub fn validate_size(size: usize) -> Result<(), ProfilePictureError> {
    if size > MAX_PROFILE_PICTURE_BYTES {
        return Err(ProfilePictureError::TooLarge);
    }
    Ok(())
}

/// The site's single profile picture, kept as one file on disk.
#[derive(Debug, Clone)]
pub struct ProfilePictureService {
    dir: PathBuf,
    path: PathBuf,
}

impl ProfilePictureService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let path = dir.join(PROFILE_PICTURE_FILE);
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn public_url(&self) -> &'static str {
        PROFILE_PICTURE_URL
    }

    /// Creates the picture directory if needed. Safe to call repeatedly.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Validates and stores `bytes` as the profile picture, replacing any previous one.
    ///
    /// Nothing is touched on disk when validation fails. The new content is written to a
    /// temporary file first and renamed into place, so readers see the old or the new
    /// picture, never a partial one. Returns the public URL of the picture.
    pub async fn store(
        &self,
        bytes: &[u8],
        content_type: Option<&str>,
    ) -> Result<&'static str, ProfilePictureError> {
        validate_content_type(content_type)?;
        validate_size(bytes.len())?;

        self.ensure_dir().await?;

        let tmp = self
            .dir
            .join(format!(".{}.{}.tmp", PROFILE_PICTURE_FILE, Uuid::new_v4()));
        debug!("Writing {} bytes to {}", bytes.len(), tmp.display());

        if let Err(e) = tokio::fs::write(&tmp, bytes).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        info!("Profile picture saved to {} ({} bytes)", self.path.display(), bytes.len());
        Ok(PROFILE_PICTURE_URL)
    }

    /// Whether a picture is currently stored. Probe errors count as "no picture".
    pub async fn exists(&self) -> bool {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta.is_file(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(tmp: &TempDir) -> ProfilePictureService {
        ProfilePictureService::new(tmp.path().join("profile"))
    }

    #[test]
    fn content_type_must_be_an_image() {
        assert!(validate_content_type(Some("image/jpeg")).is_ok());
        assert!(validate_content_type(Some("image/svg+xml")).is_ok());
        assert!(validate_content_type(Some("IMAGE/PNG")).is_ok());
        assert!(matches!(
            validate_content_type(Some("text/plain")),
            Err(ProfilePictureError::InvalidType)
        ));
        assert!(matches!(
            validate_content_type(Some("application/image")),
            Err(ProfilePictureError::InvalidType)
        ));
        assert!(matches!(validate_content_type(None), Err(ProfilePictureError::InvalidType)));
    }

    #[test]
    fn size_ceiling_is_inclusive() {
        assert!(validate_size(0).is_ok());
        assert!(validate_size(MAX_PROFILE_PICTURE_BYTES).is_ok());
        assert!(matches!(
            validate_size(MAX_PROFILE_PICTURE_BYTES + 1),
            Err(ProfilePictureError::TooLarge)
        ));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ProfilePictureError::MissingFile.to_string(), "No file provided");
        assert_eq!(ProfilePictureError::InvalidType.to_string(), "File must be an image");
        assert_eq!(ProfilePictureError::TooLarge.to_string(), "File must be smaller than 5MB");
    }

    #[actix_web::test]
    async fn store_then_exists() {
        let tmp = TempDir::new().unwrap();
        let svc = service(&tmp);
        assert!(!svc.exists().await);

        let url = svc.store(b"\x89PNG fake", Some("image/png")).await.unwrap();
        assert_eq!(url, "/profile/avatar.jpg");
        assert!(svc.exists().await);
        assert_eq!(std::fs::read(svc.path()).unwrap(), b"\x89PNG fake");
    }

    #[actix_web::test]
    async fn second_store_overwrites_first() {
        let tmp = TempDir::new().unwrap();
        let svc = service(&tmp);

        svc.store(b"first", Some("image/jpeg")).await.unwrap();
        svc.store(b"second", Some("image/jpeg")).await.unwrap();

        assert_eq!(std::fs::read(svc.path()).unwrap(), b"second");
        // no temp files left behind
        let entries: Vec<_> = std::fs::read_dir(tmp.path().join("profile"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("avatar.jpg")]);
    }

    #[actix_web::test]
    async fn invalid_type_leaves_existing_picture() {
        let tmp = TempDir::new().unwrap();
        let svc = service(&tmp);
        svc.store(b"original", Some("image/png")).await.unwrap();

        let err = svc.store(b"hello", Some("text/plain")).await.unwrap_err();
        assert!(matches!(err, ProfilePictureError::InvalidType));
        assert_eq!(std::fs::read(svc.path()).unwrap(), b"original");
    }

    #[actix_web::test]
    async fn too_large_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let svc = service(&tmp);

        let big = vec![0u8; 6 * 1024 * 1024];
        let err = svc.store(&big, Some("image/png")).await.unwrap_err();
        assert!(matches!(err, ProfilePictureError::TooLarge));
        assert!(!svc.exists().await);
    }

    #[actix_web::test]
    async fn ensure_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let svc = ProfilePictureService::new(tmp.path().join("a").join("b"));
        svc.ensure_dir().await.unwrap();
        svc.ensure_dir().await.unwrap();
        assert!(tmp.path().join("a").join("b").is_dir());
        assert!(!svc.exists().await);
    }

    #[actix_web::test]
    async fn directory_at_picture_path_is_not_a_picture() {
        let tmp = TempDir::new().unwrap();
        let svc = service(&tmp);
        std::fs::create_dir_all(svc.path()).unwrap();
        assert!(!svc.exists().await);
    }

    #[actix_web::test]
    async fn write_failure_is_io_error() {
        let tmp = TempDir::new().unwrap();
        // a plain file where the profile directory should be
        std::fs::write(tmp.path().join("profile"), b"blocker").unwrap();
        let svc = service(&tmp);

        let err = svc.store(b"img", Some("image/png")).await.unwrap_err();
        assert!(matches!(err, ProfilePictureError::Io(_)));
    }
}
