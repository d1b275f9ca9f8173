use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Open key/value details rendered in a user-info panel.
pub type UserInfoData = HashMap<String, serde_json::Value>;

/// Presentation attributes for a user's avatar image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Display shape for a user-info block: an optional avatar and an open set
/// of detail fields. No logic lives here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UserInfoData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_info_serde_round_trip() {
        let mut data = UserInfoData::new();
        data.insert("name".to_string(), json!("Ada"));
        data.insert("score".to_string(), json!(42));

        let info = UserInfo {
            avatar: Some(Avatar {
                src: Some("avatar.png".to_string()),
                alt: Some("Ada".to_string()),
                width: Some(64),
                height: None,
            }),
            data: Some(data),
        };

        let json = serde_json::to_string(&info).unwrap();
        let loaded: UserInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, info);
    }

    #[test]
    fn test_empty_user_info_serializes_compact() {
        let info = UserInfo::default();
        assert_eq!(serde_json::to_string(&info).unwrap(), "{}");
    }
}
