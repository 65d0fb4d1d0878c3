use serde::{Deserialize, Serialize};

/// User document owned by the host application (read-only here).
///
/// Historical schema drift left two spellings for both the display name
/// and the photo URL, so every field is optional and the helpers below
/// apply the same fallback order the app uses.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// `name`, falling back to `displayName`, then "". An empty string
    /// counts as missing, the same way the app treats it.
    pub fn resolved_name(&self) -> String {
        pick(&self.name, &self.display_name)
    }

    /// `profilePicUrl`, falling back to `photoUrl`, then "".
    pub fn resolved_photo_url(&self) -> String {
        pick(&self.profile_pic_url, &self.photo_url)
    }

    pub fn resolved_bio(&self) -> String {
        self.bio.clone().unwrap_or_default()
    }

    pub fn resolved_email(&self) -> String {
        self.email.clone().unwrap_or_default()
    }
}

fn pick(first: &Option<String>, second: &Option<String>) -> String {
    first
        .as_deref()
        .filter(|value| !value.is_empty())
        .or_else(|| second.as_deref().filter(|value| !value.is_empty()))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, display_name: Option<&str>) -> User {
        User {
            id: "u1".to_string(),
            name: name.map(String::from),
            display_name: display_name.map(String::from),
            bio: None,
            profile_pic_url: None,
            photo_url: None,
            email: None,
        }
    }

    #[test]
    fn name_wins_over_display_name() {
        let u = user(Some("Ann"), Some("Annie"));
        assert_eq!(u.resolved_name(), "Ann");
    }

    #[test]
    fn empty_name_falls_back_to_display_name() {
        let u = user(Some(""), Some("Annie"));
        assert_eq!(u.resolved_name(), "Annie");
    }

    #[test]
    fn missing_both_names_resolves_to_empty() {
        let u = user(None, None);
        assert_eq!(u.resolved_name(), "");
    }

    #[test]
    fn profile_pic_url_wins_over_photo_url() {
        let mut u = user(None, None);
        u.profile_pic_url = Some("https://cdn.example/a.jpg".to_string());
        u.photo_url = Some("https://cdn.example/b.jpg".to_string());
        assert_eq!(u.resolved_photo_url(), "https://cdn.example/a.jpg");
    }

    #[test]
    fn bio_and_email_default_to_empty() {
        let u = user(None, None);
        assert_eq!(u.resolved_bio(), "");
        assert_eq!(u.resolved_email(), "");
    }

    #[test]
    fn deserializes_camel_case_wire_names() {
        let u: User = serde_json::from_value(serde_json::json!({
            "_id": "u7",
            "displayName": "Bea",
            "profilePicUrl": "https://cdn.example/bea.jpg"
        }))
        .unwrap();

        assert_eq!(u.id, "u7");
        assert_eq!(u.resolved_name(), "Bea");
        assert_eq!(u.resolved_photo_url(), "https://cdn.example/bea.jpg");
    }
}
