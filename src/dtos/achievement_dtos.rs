use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AchievementsResponse {
    pub images: Vec<String>,
}
