pub mod achievement_handlers;
pub mod asset_handlers;
pub mod profile_picture_handlers;

use actix_web::web;

use achievement_handlers::list_achievements;
use asset_handlers::serve_asset;
use profile_picture_handlers::{profile_picture_status, upload_profile_picture};

/// Registers every route. The static asset catch-all has to stay last.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_achievements)          // GET  /api/achievements
        .service(upload_profile_picture)    // POST /api/profile-picture
        .service(profile_picture_status)    // GET  /api/profile-picture
        .service(serve_asset);              // GET  /{path}
}
