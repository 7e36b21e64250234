//! Declarative validation for the authentication forms
//!
//! A [`FormSchema`] lists every field together with its rules. The schema is
//! evaluated once per submit attempt and produces a [`FieldErrors`] map that the
//! form components render inline next to each input.

use std::collections::BTreeMap;

/// Message shown for an empty required field
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message shown when the password confirmation differs from the password
pub const PASSWORDS_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// A single validation rule applied to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field must not be empty
    Required,
    /// Field must equal the value of another field
    Matches {
        field: &'static str,
        message: &'static str,
    },
}

/// Validation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty
    Required,
    /// Field does not match its counterpart
    Mismatch(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required => write!(f, "{}", REQUIRED_MESSAGE),
            ValidationError::Mismatch(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Rule {
    fn check(&self, value: &str, source: &impl FieldSource) -> Result<(), ValidationError> {
        match self {
            Rule::Required => {
                if value.is_empty() {
                    Err(ValidationError::Required)
                } else {
                    Ok(())
                }
            }
            Rule::Matches { field, message } => {
                if source.field_value(field).unwrap_or_default() == value {
                    Ok(())
                } else {
                    Err(ValidationError::Mismatch(message))
                }
            }
        }
    }
}

/// Anything that can hand out field values by their wire name
pub trait FieldSource {
    fn field_value(&self, name: &str) -> Option<&str>;
}

/// A field together with the rules it must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn matches(mut self, field: &'static str, message: &'static str) -> Self {
        self.rules.push(Rule::Matches { field, message });
        self
    }
}

/// Ordered list of field specs for one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Evaluate every field, keeping the first failing rule per field.
    ///
    /// A field missing from the source is treated as empty.
    pub fn validate(&self, source: &impl FieldSource) -> FieldErrors {
        let mut errors = FieldErrors::new();

        for spec in &self.fields {
            let value = source.field_value(spec.name).unwrap_or_default();
            if let Some(error) = spec
                .rules
                .iter()
                .find_map(|rule| rule.check(value, source).err())
            {
                errors.insert(spec.name, error);
            }
        }

        errors
    }
}

/// Per-field validation errors, keyed by wire name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn insert(&mut self, field: &'static str, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: &str) -> Option<ValidationError> {
        self.errors.get(field).copied()
    }

    /// User-facing message for a field, if it failed
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    /// Convert to Result, keeping the full map on failure
    pub fn to_result(self) -> Result<(), FieldErrors> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Values(HashMap<&'static str, &'static str>);

    impl FieldSource for Values {
        fn field_value(&self, name: &str) -> Option<&str> {
            self.0.get(name).copied()
        }
    }

    fn values(pairs: &[(&'static str, &'static str)]) -> Values {
        Values(pairs.iter().copied().collect())
    }

    fn password_schema() -> FormSchema {
        FormSchema::new()
            .field(FieldSpec::new("password").required())
            .field(
                FieldSpec::new("confirmPassword")
                    .required()
                    .matches("password", PASSWORDS_MISMATCH_MESSAGE),
            )
    }

    #[test]
    fn test_required_rejects_empty() {
        let schema = FormSchema::new().field(FieldSpec::new("email").required());

        let errors = schema.validate(&values(&[("email", "")]));
        assert_eq!(errors.get("email"), Some(ValidationError::Required));
        assert_eq!(errors.message("email").as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_missing_field_counts_as_empty() {
        let schema = FormSchema::new().field(FieldSpec::new("email").required());

        let errors = schema.validate(&values(&[]));
        assert!(!errors.is_valid());
        assert_eq!(errors.get("email"), Some(ValidationError::Required));
    }

    #[test]
    fn test_required_does_not_trim() {
        let schema = FormSchema::new().field(FieldSpec::new("email").required());

        assert!(schema.validate(&values(&[("email", " ")])).is_valid());
    }

    #[test]
    fn test_mismatch_message() {
        let errors = password_schema().validate(&values(&[
            ("password", "secret1"),
            ("confirmPassword", "secret2"),
        ]));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message("confirmPassword").as_deref(),
            Some(PASSWORDS_MISMATCH_MESSAGE)
        );
    }

    #[test]
    fn test_required_wins_over_mismatch() {
        let errors =
            password_schema().validate(&values(&[("password", "secret"), ("confirmPassword", "")]));

        assert_eq!(errors.get("confirmPassword"), Some(ValidationError::Required));
    }

    #[test]
    fn test_mismatch_against_empty_password() {
        let errors =
            password_schema().validate(&values(&[("password", ""), ("confirmPassword", "abc")]));

        assert_eq!(errors.get("password"), Some(ValidationError::Required));
        assert_eq!(
            errors.get("confirmPassword"),
            Some(ValidationError::Mismatch(PASSWORDS_MISMATCH_MESSAGE))
        );
    }

    #[test]
    fn test_matching_passwords_pass() {
        let errors = password_schema().validate(&values(&[
            ("password", "secret"),
            ("confirmPassword", "secret"),
        ]));

        assert!(errors.is_valid());
        assert!(errors.clone().to_result().is_ok());
    }

    #[test]
    fn test_to_result_keeps_all_errors() {
        let err = password_schema()
            .validate(&values(&[]))
            .to_result()
            .unwrap_err();

        let fields: Vec<_> = err.fields().collect();
        assert_eq!(fields, vec!["confirmPassword", "password"]);
        assert_eq!(
            err.to_string(),
            "confirmPassword: This field is required, password: This field is required"
        );
    }
}
