// src/dtos/profile_picture_dtos.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadProfilePictureResponse {
    pub success: bool,
    pub url: String,
    pub message: String,
}

/// `url` is only present when a picture is stored.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfilePictureStatus {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
