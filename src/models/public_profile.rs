use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// Public-facing profile, keyed by the same `_id` as its source user.
/// Written by the migration scripts, owned by the app afterwards.
///
/// `createdAt`/`updatedAt` are server-generated (`$currentDate`), so the
/// scripts never serialize them; they only appear when reading back.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}
