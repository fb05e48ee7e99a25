pub mod achievement_dtos;
pub mod profile_picture_dtos;
// aliases so handlers can use `crate::dtos::achievements` and `crate::dtos::profile_picture`
pub use achievement_dtos as achievements;
pub use profile_picture_dtos as profile_picture;
