//! Credentials collected by the login and signup forms
//!
//! Credentials only live for the duration of one submission and are never
//! written to storage.

use serde::Serialize;

use super::validation::{FieldErrors, FieldSource, FieldSpec, FormSchema, PASSWORDS_MISMATCH_MESSAGE};

/// Endpoint for logging in an existing user
pub const LOGIN_ENDPOINT: &str = "/api/user/login";

/// Endpoint for creating a new account
pub const SIGNUP_ENDPOINT: &str = "/api/user/signup";

/// Which authentication action a submission performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthAction {
    Login,
    Signup,
}

impl AuthAction {
    /// Fixed endpoint the credentials are posted to
    pub fn endpoint(self) -> &'static str {
        match self {
            AuthAction::Login => LOGIN_ENDPOINT,
            AuthAction::Signup => SIGNUP_ENDPOINT,
        }
    }

    /// Parse the path segment after `/api/user/`
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "login" => Some(AuthAction::Login),
            "signup" => Some(AuthAction::Signup),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuthAction::Login => "Login",
            AuthAction::Signup => "Signup",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AuthAction::Login => "Login successful",
            AuthAction::Signup => "Signup successful",
        }
    }
}

/// A set of credentials that can be validated and submitted
pub trait Credentials: Serialize + FieldSource + Sized {
    const ACTION: AuthAction;

    /// Validation schema for this form
    fn schema() -> FormSchema;

    /// Run the schema against these credentials
    fn validate(&self) -> FieldErrors {
        Self::schema().validate(self)
    }
}

/// Login form credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl FieldSource for LoginCredentials {
    fn field_value(&self, name: &str) -> Option<&str> {
        match name {
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            _ => None,
        }
    }
}

impl Credentials for LoginCredentials {
    const ACTION: AuthAction = AuthAction::Login;

    fn schema() -> FormSchema {
        FormSchema::new()
            .field(FieldSpec::new("email").required())
            .field(FieldSpec::new("password").required())
    }
}

/// Signup form credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupCredentials {
    pub fullname: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

impl SignupCredentials {
    pub fn new(
        fullname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            fullname: fullname.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

impl FieldSource for SignupCredentials {
    fn field_value(&self, name: &str) -> Option<&str> {
        match name {
            "fullname" => Some(&self.fullname),
            "email" => Some(&self.email),
            "password" => Some(&self.password),
            "confirmPassword" => Some(&self.confirm_password),
            _ => None,
        }
    }
}

impl Credentials for SignupCredentials {
    const ACTION: AuthAction = AuthAction::Signup;

    fn schema() -> FormSchema {
        FormSchema::new()
            .field(FieldSpec::new("fullname").required())
            .field(FieldSpec::new("email").required())
            .field(FieldSpec::new("password").required())
            .field(
                FieldSpec::new("confirmPassword")
                    .required()
                    .matches("password", PASSWORDS_MISMATCH_MESSAGE),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{REQUIRED_MESSAGE, ValidationError};
    use serde_json::json;

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginCredentials::default().validate();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message("email").as_deref(), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.message("password").as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_login_valid() {
        let creds = LoginCredentials::new("a@b.com", "hunter2");
        assert!(creds.validate().is_valid());
    }

    #[test]
    fn test_signup_mismatch_with_other_fields_empty() {
        let creds = SignupCredentials::new("", "", "one", "two");
        let errors = creds.validate();

        assert_eq!(
            errors.get("confirmPassword"),
            Some(ValidationError::Mismatch(PASSWORDS_MISMATCH_MESSAGE))
        );
        assert_eq!(errors.get("fullname"), Some(ValidationError::Required));
        assert_eq!(errors.get("email"), Some(ValidationError::Required));
    }

    #[test]
    fn test_signup_mismatch_with_other_fields_valid() {
        let creds = SignupCredentials::new("Ada Lovelace", "ada@example.com", "one", "two");
        let errors = creds.validate();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message("confirmPassword").as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_signup_empty_confirmation_is_required() {
        let creds = SignupCredentials::new("Ada", "a@b.c", "secret", "");
        let errors = creds.validate();

        assert!(!errors.is_valid());
        assert_eq!(errors.get("confirmPassword"), Some(ValidationError::Required));
    }

    #[test]
    fn test_signup_valid() {
        let creds = SignupCredentials::new("Ada Lovelace", "ada@example.com", "pw", "pw");
        assert!(creds.validate().is_valid());
    }

    #[test]
    fn test_signup_wire_format() {
        let creds = SignupCredentials::new("Ada", "ada@example.com", "pw", "pw");

        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            json!({
                "fullname": "Ada",
                "email": "ada@example.com",
                "password": "pw",
                "confirmPassword": "pw",
            })
        );
    }

    #[test]
    fn test_login_wire_format() {
        let creds = LoginCredentials::new("ada@example.com", "pw");

        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            json!({ "email": "ada@example.com", "password": "pw" })
        );
    }

    #[test]
    fn test_action_endpoints() {
        assert_eq!(LoginCredentials::ACTION.endpoint(), "/api/user/login");
        assert_eq!(SignupCredentials::ACTION.endpoint(), "/api/user/signup");
        assert_eq!(AuthAction::from_path_segment("signup"), Some(AuthAction::Signup));
        assert_eq!(AuthAction::from_path_segment("logout"), None);
    }
}
