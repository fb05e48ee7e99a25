// src/services/achievement_service.rs
use std::path::{Path, PathBuf};
use log::{debug, warn};

use crate::models::achievement::{is_gallery_image, AchievementImage};

pub const ACHIEVEMENTS_ROUTE: &str = "/achievements";

/// Read-only view over the achievements image directory.
#[derive(Debug, Clone)]
pub struct AchievementService {
    dir: PathBuf,
    route: String,
}

impl AchievementService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            route: ACHIEVEMENTS_ROUTE.to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lists the gallery images currently in the directory, sorted by name.
    ///
    /// A missing or unreadable directory yields an empty list, never an error.
    pub async fn list(&self) -> Vec<AchievementImage> {
        let names = match self.read_names().await {
            Ok(names) => names,
            Err(e) => {
                warn!("Cannot read achievements dir {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut images: Vec<AchievementImage> = names
            .iter()
            .filter(|name| is_gallery_image(name))
            .map(|name| AchievementImage::new(&self.route, name))
            .collect();
        images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        debug!("Found {} achievement images of {} entries", images.len(), names.len());
        images
    }

    /// Public paths of [`list`](Self::list), in the same order.
    pub async fn public_paths(&self) -> Vec<String> {
        self.list().await.into_iter().map(|img| img.public_path).collect()
    }

    async fn read_names(&self) -> std::io::Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            // non UTF-8 names can't be turned into a public path
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}
