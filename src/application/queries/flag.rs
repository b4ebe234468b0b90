// src/application/queries/flag.rs
//! Lenient boolean query parameters: `1/0`, `true/false`, `yes/no`, `on/off`.

use serde::{Deserialize, Deserializer, de::Error};

pub fn parse(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn optional<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => parse(value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("'{value}' is not a boolean"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "optional")]
        active: Option<bool>,
    }

    #[test]
    fn accepts_common_spellings() {
        assert_eq!(parse("1"), Some(true));
        assert_eq!(parse("FALSE"), Some(false));
        assert_eq!(parse("maybe"), None);
    }

    #[test]
    fn deserializes_from_json_strings() {
        let params: Params = serde_json::from_str(r#"{"active":"on"}"#).unwrap();
        assert_eq!(params.active, Some(true));
        let params: Params = serde_json::from_str("{}").unwrap();
        assert_eq!(params.active, None);
        assert!(serde_json::from_str::<Params>(r#"{"active":"x"}"#).is_err());
    }
}
