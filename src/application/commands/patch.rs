// src/application/commands/patch.rs
//! Serde helpers for partial updates.
//!
//! An update field typed `Option<Option<T>>` distinguishes an absent key
//! (`None`, leave unchanged) from an explicit `null` (`Some(None)`, clear).

use serde::{Deserialize, Deserializer};

pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Changes {
        #[serde(default, deserialize_with = "super::nullable")]
        description: Option<Option<String>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Changes = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.description, None);

        let cleared: Changes = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: Changes = serde_json::from_str(r#"{"description":"hi"}"#).unwrap();
        assert_eq!(set.description, Some(Some("hi".into())));
    }
}
