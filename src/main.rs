// src/main.rs
mod config;
mod dtos;
mod handlers;
mod models;
mod services;

use std::path::PathBuf;
use actix_cors::Cors;
use actix_web::{App, HttpServer, web, middleware::Logger};
use log::{error, info};

use crate::config::AppConfig;
use crate::services::achievement_service::AchievementService;
use crate::services::profile_picture_service::ProfilePictureService;

pub struct AppState {
    pub achievements: AchievementService,
    pub profile_picture: ProfilePictureService,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            achievements: AchievementService::new(cfg.achievements_dir()),
            profile_picture: ProfilePictureService::new(cfg.profile_dir()),
            public_dir: cfg.public_dir().to_path_buf(),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let state = web::Data::new(AppState::from_config(&cfg));

    if let Err(e) = state.profile_picture.ensure_dir().await {
        error!("Failed to create profile picture directory {}: {}", cfg.profile_dir().display(), e);
        std::process::exit(1);
    }

    info!("Serving public assets from {}", cfg.public_dir().display());
    info!("Achievements dir: {}", state.achievements.dir().display());
    info!("Starting server on {}", cfg.bind_address());

    let allowed_origins = cfg.allowed_origins.clone();

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["content-type", "accept"])
            .max_age(3600);

        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(cfg.bind_address())?
    .run()
    .await
}
