// src/application/validation.rs
use serde::Serialize;
use std::{collections::BTreeMap, fmt};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Field-level validation failures keyed by (dotted) field path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Runs the derived constraints of `input`.
    pub fn collect<T: Validate>(input: &T) -> Self {
        match input.validate() {
            Ok(()) => Self::new(),
            Err(errors) => Self::from(errors),
        }
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn absorb(&mut self, prefix: Option<&str>, errors: &ValidationErrors) {
        for (field, kind) in errors.errors() {
            let path = match prefix {
                Some(prefix) => format!("{prefix}.{field}"),
                None => field.to_string(),
            };
            match kind {
                ValidationErrorsKind::Field(list) => {
                    for error in list {
                        let message = error.message.as_ref().map_or_else(
                            || format!("The {path} field is invalid."),
                            ToString::to_string,
                        );
                        self.add(&path, message);
                    }
                }
                ValidationErrorsKind::Struct(nested) => self.absorb(Some(&path), nested),
                ValidationErrorsKind::List(items) => {
                    for (index, nested) in items {
                        let item_path = format!("{path}.{index}");
                        self.absorb(Some(&item_path), nested);
                    }
                }
            }
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = Self::new();
        out.absorb(None, &errors);
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Item {
        #[validate(length(min = 1, max = 5, message = "The label must be 1-5 characters."))]
        label: String,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "The name field is required."))]
        name: String,
        #[validate(nested)]
        items: Vec<Item>,
    }

    #[test]
    fn nested_errors_are_flattened_to_dotted_paths() {
        let payload = Payload {
            name: String::new(),
            items: vec![
                Item {
                    label: "ok".into(),
                },
                Item {
                    label: "too long".into(),
                },
            ],
        };

        let errors = FieldErrors::collect(&payload);
        assert_eq!(errors.messages("name"), ["The name field is required."]);
        assert_eq!(
            errors.messages("items.1.label"),
            ["The label must be 1-5 characters."]
        );
        assert!(!errors.contains("items.0.label"));
    }

    #[test]
    fn manual_errors_accumulate() {
        let mut errors = FieldErrors::new();
        assert!(errors.clone().into_result().is_ok());
        errors.add("email", "The email has already been taken.");
        errors.add("email", "Another.");
        assert_eq!(errors.messages("email").len(), 2);
        assert!(errors.into_result().is_err());
    }
}
