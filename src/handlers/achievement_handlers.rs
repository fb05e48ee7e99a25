// src/handlers/achievement_handlers.rs
use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;
use crate::dtos::achievements::AchievementsResponse;

/// GET /api/achievements
/// Public paths of every gallery image. Always 200; a missing directory is an empty list.
#[get("/api/achievements")]
pub async fn list_achievements(state: web::Data<AppState>) -> impl Responder {
    let images = state.achievements.public_paths().await;
    HttpResponse::Ok().json(AchievementsResponse { images })
}
