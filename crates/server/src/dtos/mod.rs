pub mod advisor;
pub mod course;
pub mod instructor;
pub mod staff;
pub mod student;
pub mod user;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Keeps an explicit `null` apart from a missing field
///
/// Pair with `#[serde(default)]` so a missing field stays `None`.
pub(crate) fn explicit<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Confirmation returned by delete routes
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::explicit")]
        value: Option<Option<i32>>,
    }

    #[test]
    fn missing_null_and_value_are_distinct() {
        let missing: Patch = serde_json::from_value(json!({})).unwrap();
        let null: Patch = serde_json::from_value(json!({ "value": null })).unwrap();
        let set: Patch = serde_json::from_value(json!({ "value": 4 })).unwrap();

        assert_eq!(missing.value, None);
        assert_eq!(null.value, Some(None));
        assert_eq!(set.value, Some(Some(4)));
    }
}
