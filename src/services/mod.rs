pub mod achievement_service;
pub mod profile_picture_service;
