//! Form field state and submit-time validation.
//!
//! Field values live in a [`FormState`] keyed by the input's `name`
//! attribute. Each form type reads its fields out of that state and checks
//! them before anything is sent, returning the first [`ValidationError`] it
//! finds so the view can show it inline.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::ValidationError;

/// Field name to current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an input change.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Current value of a field, empty if it was never set.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Discard every value.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(|v| v.is_empty())
    }

    fn required(&self, name: &str, label: &'static str) -> Result<String, ValidationError> {
        let value = self.get(name).trim();
        if value.is_empty() {
            return Err(ValidationError::MissingField(label));
        }
        Ok(value.to_string())
    }

    fn email(&self, name: &str) -> Result<String, ValidationError> {
        let value = self.required(name, "Email")?;
        if is_plausible_email(&value) {
            Ok(value)
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

/// A single `@` with a non-empty local part and a dotted domain.
pub fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !value.chars().any(char::is_whitespace)
}

// ============================================================================
// Login
// ============================================================================

/// Credentials entered on the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(state: &FormState) -> Result<Self, ValidationError> {
        Ok(Self {
            email: state.email("email")?,
            password: state.required("password", "Password")?,
        })
    }
}

/// Checks login credentials.
#[async_trait(?Send)]
pub trait Authenticator {
    async fn authenticate(&self, credentials: &LoginForm) -> Result<(), ValidationError>;
}

/// Accepts one fixed demo account.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    email: String,
    password: String,
}

impl DemoAuthenticator {
    pub const DEMO_EMAIL: &'static str = "user@example.com";
    pub const DEMO_PASSWORD: &'static str = "password";
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self {
            email: Self::DEMO_EMAIL.to_string(),
            password: Self::DEMO_PASSWORD.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, credentials: &LoginForm) -> Result<(), ValidationError> {
        if credentials.email == self.email && credentials.password == self.password {
            tracing::debug!("demo login accepted");
            Ok(())
        } else {
            Err(ValidationError::InvalidCredentials)
        }
    }
}

// ============================================================================
// Register
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// Validate, requiring `password` and `confirmPassword` to match.
    pub fn validate(state: &FormState) -> Result<Self, ValidationError> {
        let email = state.email("email")?;
        let password = state.required("password", "Password")?;
        if state.get("password") != state.get("confirmPassword") {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(Self { email, password })
    }
}

// ============================================================================
// Checkout
// ============================================================================

/// Shipping and contact details collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl CheckoutForm {
    /// Input names, in display order.
    pub const FIELDS: [(&'static str, &'static str); 5] = [
        ("fullName", "Full name"),
        ("email", "Email"),
        ("address", "Address"),
        ("city", "City"),
        ("postalCode", "Postal code"),
    ];

    pub fn validate(state: &FormState) -> Result<Self, ValidationError> {
        Ok(Self {
            full_name: state.required("fullName", "Full name")?,
            email: state.email("email")?,
            address: state.required("address", "Address")?,
            city: state.required("city", "City")?,
            postal_code: state.required("postalCode", "Postal code")?,
        })
    }
}

// ============================================================================
// Forgot password
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(state: &FormState) -> Result<Self, ValidationError> {
        Ok(Self {
            email: state.email("email")?,
        })
    }
}

// ============================================================================
// Newsletter
// ============================================================================

/// Address entered in the home page's newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn validate(state: &FormState) -> Result<Self, ValidationError> {
        Ok(Self {
            email: state.email("newsletterEmail")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        futures::executor::block_on(future)
    }

    // === Field State ===

    #[test]
    fn test_unset_fields_read_empty() {
        let mut state = FormState::new().with("email", "a@b.co");
        assert_eq!(state.get("email"), "a@b.co");
        assert_eq!(state.get("password"), "");

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_email_plausibility() {
        assert!(is_plausible_email("user@example.com"));
        assert!(!is_plausible_email("user.example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@localhost"));
        assert!(!is_plausible_email("us er@example.com"));
        assert!(!is_plausible_email("a@b@c.com"));
    }

    // === Login ===

    #[test]
    fn test_login_requires_fields() {
        let err = LoginForm::validate(&FormState::new()).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("Email"));

        let state = FormState::new().with("email", "user@example.com");
        let err = LoginForm::validate(&state).unwrap_err();
        assert_eq!(err.to_string(), "Password is required");
    }

    #[test]
    fn test_demo_authenticator() {
        let auth = DemoAuthenticator::default();
        let good = LoginForm {
            email: "user@example.com".into(),
            password: "password".into(),
        };
        let bad = LoginForm {
            email: "user@example.com".into(),
            password: "hunter2".into(),
        };

        assert!(block_on(auth.authenticate(&good)).is_ok());
        assert_eq!(
            block_on(auth.authenticate(&bad)),
            Err(ValidationError::InvalidCredentials)
        );
    }

    // === Register ===

    #[test]
    fn test_register_password_mismatch_blocks_submit() {
        let state = FormState::new()
            .with("email", "new@example.com")
            .with("password", "secret1")
            .with("confirmPassword", "secret2");
        let err = RegisterForm::validate(&state).unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_register_valid() {
        let state = FormState::new()
            .with("email", "new@example.com")
            .with("password", "secret1")
            .with("confirmPassword", "secret1");
        let form = RegisterForm::validate(&state).unwrap();
        assert_eq!(form.email, "new@example.com");
    }

    // === Checkout ===

    #[test]
    fn test_checkout_reports_first_missing_field() {
        let state = FormState::new()
            .with("fullName", "Ada Lovelace")
            .with("email", "ada@example.com")
            .with("address", "12 St James's Square");
        let err = CheckoutForm::validate(&state).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("City"));
    }

    #[test]
    fn test_checkout_trims_values() {
        let state = CheckoutForm::FIELDS
            .iter()
            .fold(FormState::new(), |s, (name, _)| s.with(*name, " x@y.io "));
        let form = CheckoutForm::validate(&state).unwrap();
        assert_eq!(form.postal_code, "x@y.io");
    }

    #[test]
    fn test_forgot_password_rejects_bad_email() {
        let state = FormState::new().with("email", "nope");
        assert_eq!(
            ForgotPasswordForm::validate(&state),
            Err(ValidationError::InvalidEmail)
        );
    }

    // === Newsletter ===

    #[test]
    fn test_newsletter_signup() {
        let empty = NewsletterForm::validate(&FormState::new());
        assert_eq!(empty, Err(ValidationError::MissingField("Email")));

        let state = FormState::new().with("newsletterEmail", "  fan@example.com ");
        let form = NewsletterForm::validate(&state).unwrap();
        assert_eq!(form.email, "fan@example.com");
    }
}
