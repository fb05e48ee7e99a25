// src/models/achievement.rs

use std::sync::LazyLock;
use regex::Regex;

/// Image extensions shown in the achievements gallery.
static IMAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(png|jpe?g|webp|gif|svg)$").unwrap());

pub fn is_gallery_image(file_name: &str) -> bool {
    IMAGE_NAME.is_match(file_name)
}

/// One image file placed in the achievements directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementImage {
    pub file_name: String,
    pub public_path: String,
}

impl AchievementImage {
    pub fn new(route: &str, file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            public_path: format!("{}/{}", route.trim_end_matches('/'), file_name),
        }
    }
}
