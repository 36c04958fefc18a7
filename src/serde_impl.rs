//! Serde support for `OptionalBox` (feature-gated)
//!
//! A box serializes exactly like `Option<T>`: the bare value when present,
//! `null` (or the format's "none") when absent.
//!
//! # Example
//!
//! ```rust,ignore
//! use optional_box::OptionalBox;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Profile {
//!     nickname: OptionalBox<String>,
//! }
//!
//! let json = r#"{"nickname": null}"#;
//! let profile: Profile = serde_json::from_str(json).unwrap();
//! assert!(profile.nickname.is_absent());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::OptionalBox;

impl<T> Serialize for OptionalBox<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for OptionalBox<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(OptionalBox::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Profile {
        name: String,
        nickname: OptionalBox<String>,
        age: OptionalBox<u32>,
    }

    #[test]
    fn test_serialize_present_and_absent() {
        let profile = Profile {
            name: "Alice".to_string(),
            nickname: OptionalBox::of("Al".to_string()),
            age: OptionalBox::absent(),
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"name":"Alice","nickname":"Al","age":null}"#);
    }

    #[test]
    fn test_deserialize_null_is_absent() {
        let json = r#"{"name":"Bob","nickname":null,"age":30}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.nickname.is_absent());
        assert_eq!(profile.age, OptionalBox::of(30));
    }

    #[test]
    fn test_deserialize_wrong_type_fails() {
        let json = r#"{"name":"Bob","nickname":null,"age":"thirty"}"#;
        let result: Result<Profile, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip() {
        let original = Profile {
            name: "Carol".to_string(),
            nickname: OptionalBox::absent(),
            age: OptionalBox::of(41),
        };

        let json = serde_json::to_string(&original).unwrap();
        let restored: Profile = serde_json::from_str(&json).unwrap();

        assert_eq!(original, restored);
    }
}
