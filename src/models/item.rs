use serde::{Deserialize, Serialize};

/// Listing document. `ownerName` is denormalized from the owning user so
/// the app can render lists without a per-item user lookup.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

impl Item {
    /// Owner id, treating an empty string as absent.
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref().filter(|id| !id.is_empty())
    }

    /// True when `ownerName` is missing, empty, or whitespace-only.
    /// Anything else already has a real value and must be left alone.
    pub fn needs_owner_name(&self) -> bool {
        self.owner_name
            .as_deref()
            .map(|name| name.trim().is_empty())
            .unwrap_or(true)
    }
}
