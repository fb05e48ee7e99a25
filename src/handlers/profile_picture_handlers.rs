// src/handlers/profile_picture_handlers.rs
use actix_multipart::{Field, Multipart};
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Responder, ResponseError};
use futures::StreamExt;
use log::{error, info, warn};

use crate::AppState;
use crate::dtos::profile_picture::{ErrorResponse, ProfilePictureStatus, UploadProfilePictureResponse};
use crate::services::profile_picture_service::{
    validate_content_type, validate_size, ProfilePictureError, MAX_PROFILE_PICTURE_BYTES,
};

const FILE_FIELD: &str = "file";

impl ResponseError for ProfilePictureError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProfilePictureError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ProfilePictureError::Io(_) => "Failed to upload profile picture".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { error: message })
    }
}

/// POST /api/profile-picture
/// Multipart upload, the picture goes in the `file` field.
#[post("/api/profile-picture")]
pub async fn upload_profile_picture(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, ProfilePictureError> {
    let result = match read_picture(payload).await {
        Ok((bytes, content_type)) => state
            .profile_picture
            .store(&bytes, Some(content_type.as_str()))
            .await,
        Err(e) => Err(e),
    };

    match result {
        Ok(url) => {
            info!("Profile picture uploaded");
            Ok(HttpResponse::Ok().json(UploadProfilePictureResponse {
                success: true,
                url: url.to_string(),
                message: "Profile picture uploaded successfully".to_string(),
            }))
        }
        Err(ProfilePictureError::Io(e)) => {
            error!("Profile picture upload error: {}", e);
            Err(ProfilePictureError::Io(e))
        }
        Err(e) => {
            warn!("Rejected profile picture upload: {}", e);
            Err(e)
        }
    }
}

/// GET /api/profile-picture
/// Reports whether a picture is stored, never reads its content.
#[get("/api/profile-picture")]
pub async fn profile_picture_status(state: web::Data<AppState>) -> impl Responder {
    let svc = &state.profile_picture;
    let status = if svc.exists().await {
        ProfilePictureStatus { exists: true, url: Some(svc.public_url().to_string()) }
    } else {
        ProfilePictureStatus { exists: false, url: None }
    };
    HttpResponse::Ok().json(status)
}

/// Pulls the `file` part out of the form, checking its type before reading the body.
async fn read_picture(mut payload: Multipart) -> Result<(Vec<u8>, String), ProfilePictureError> {
    while let Some(item) = payload.next().await {
        let field = item.map_err(|e| {
            warn!("Malformed multipart body: {}", e);
            ProfilePictureError::MissingFile
        })?;

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(|m| m.essence_str().to_string());
        validate_content_type(content_type.as_deref())?;

        let bytes = read_capped(field).await?;
        return Ok((bytes, content_type.unwrap_or_default()));
    }

    Err(ProfilePictureError::MissingFile)
}

/// Stops reading as soon as the part grows past the size ceiling.
async fn read_capped(mut field: Field) -> Result<Vec<u8>, ProfilePictureError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| {
            warn!("Upload stream broke off: {}", e);
            ProfilePictureError::MissingFile
        })?;
        validate_size(bytes.len() + chunk.len())?;
        bytes.extend_from_slice(&chunk);
    }
    debug_assert!(bytes.len() <= MAX_PROFILE_PICTURE_BYTES);
    Ok(bytes)
}
