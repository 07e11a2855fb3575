#![forbid(unsafe_code)]

//! Registration form state and submission payload.
//!
//! [`RegistrationForm`] accumulates user input; [`validate`] collects every
//! field error at once (the form highlights them all, not just the first)
//! and on success produces a [`RegistrationPayload`] with the essential
//! cookie consent forced on — users choose analytics and marketing consent,
//! never essential.
//!
//! [`validate`]: RegistrationForm::validate

use serde::Serialize;
use tracing::info;

use crate::validate::{Field, ValidationError, check_email, check_min_len, check_required};

/// Minimum full-name length, in characters.
pub const MIN_FULL_NAME_LEN: usize = 3;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// In-progress registration input.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    full_name: String,
    email: String,
    phone: String,
    password: String,
    cookie_analytics: bool,
    cookie_marketing: bool,
}

impl RegistrationForm {
    /// An empty form with both optional consents declined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.full_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Phone is optional; an empty value means "not provided".
    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn set_cookie_analytics(&mut self, consent: bool) {
        self.cookie_analytics = consent;
    }

    pub fn set_cookie_marketing(&mut self, consent: bool) {
        self.cookie_marketing = consent;
    }

    /// Validate every field, collecting all errors.
    ///
    /// On success, returns the payload ready for submission. The essential
    /// cookie consent is always `true` in the payload; there is no way to
    /// decline it.
    pub fn validate(&self) -> Result<RegistrationPayload, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let checks = [
            check_required(Field::FullName, &self.full_name),
            check_min_len(Field::FullName, &self.full_name, MIN_FULL_NAME_LEN),
            check_required(Field::Email, &self.email),
            check_email(Field::Email, &self.email),
            check_required(Field::Password, &self.password),
            check_min_len(Field::Password, &self.password, MIN_PASSWORD_LEN),
        ];
        errors.extend(checks.into_iter().flatten());

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegistrationPayload {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: if self.phone.trim().is_empty() {
                None
            } else {
                Some(self.phone.clone())
            },
            password: self.password.clone(),
            cookie_analytics: self.cookie_analytics,
            cookie_marketing: self.cookie_marketing,
            cookie_essential: true,
        })
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The registration request body.
///
/// Constructed only by [`RegistrationForm::validate`], which is what forces
/// `cookie_essential` on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    full_name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    password: String,
    cookie_analytics: bool,
    cookie_marketing: bool,
    cookie_essential: bool,
}

impl RegistrationPayload {
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn cookie_analytics(&self) -> bool {
        self.cookie_analytics
    }

    #[must_use]
    pub fn cookie_marketing(&self) -> bool {
        self.cookie_marketing
    }

    /// Always `true`.
    #[must_use]
    pub fn cookie_essential(&self) -> bool {
        self.cookie_essential
    }
}

// ---------------------------------------------------------------------------
// Submission seam
// ---------------------------------------------------------------------------

/// Error from the registration backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub message: String,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "registration submit failed: {}", self.message)
    }
}

impl std::error::Error for SubmitError {}

/// The external registration backend.
///
/// Hosts implement this against their HTTP client; this repository only
/// ships [`StubApi`].
pub trait RegistrationApi {
    fn submit(&mut self, payload: &RegistrationPayload) -> Result<(), SubmitError>;
}

/// Stub backend: records and logs payloads, never fails.
#[derive(Debug, Clone, Default)]
pub struct StubApi {
    submitted: Vec<RegistrationPayload>,
}

impl StubApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads received so far, in order.
    #[must_use]
    pub fn submitted(&self) -> &[RegistrationPayload] {
        &self.submitted
    }
}

impl RegistrationApi for StubApi {
    fn submit(&mut self, payload: &RegistrationPayload) -> Result<(), SubmitError> {
        info!(email = payload.email(), "registration submitted (stub)");
        self.submitted.push(payload.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ErrorKind;

    fn valid_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_full_name("Ana María");
        form.set_email("ana@example.com");
        form.set_password("hunter2hunter2");
        form
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = RegistrationForm::new().validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, [Field::FullName, Field::Email, Field::Password]);
        assert!(errors.iter().all(|e| e.kind == ErrorKind::Required));
    }

    #[test]
    fn phone_is_optional() {
        let payload = valid_form().validate().unwrap();
        assert_eq!(payload.phone(), None);

        let mut form = valid_form();
        form.set_phone("+56 9 1234 5678");
        let payload = form.validate().unwrap();
        assert_eq!(payload.phone(), Some("+56 9 1234 5678"));
    }

    #[test]
    fn short_name_and_password_are_both_reported() {
        let mut form = valid_form();
        form.set_full_name("Al");
        form.set_password("short");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ErrorKind::TooShort { min: 3, len: 2 });
        assert_eq!(errors[1].kind, ErrorKind::TooShort { min: 8, len: 5 });
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = valid_form();
        form.set_email("not-an-email");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[0].kind, ErrorKind::InvalidEmail);
    }

    #[test]
    fn essential_cookie_is_always_on() {
        let mut form = valid_form();
        form.set_cookie_analytics(false);
        form.set_cookie_marketing(false);
        let payload = form.validate().unwrap();
        assert!(payload.cookie_essential());
        assert!(!payload.cookie_analytics());
        assert!(!payload.cookie_marketing());
    }

    #[test]
    fn chosen_consents_flow_through() {
        let mut form = valid_form();
        form.set_cookie_analytics(true);
        form.set_cookie_marketing(true);
        let payload = form.validate().unwrap();
        assert!(payload.cookie_analytics());
        assert!(payload.cookie_marketing());
    }

    #[test]
    fn payload_json_shape() {
        let payload = valid_form().validate().unwrap();
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["full_name"], "Ana María");
        assert_eq!(json["cookie_essential"], true);
        assert!(
            json.get("phone").is_none(),
            "empty phone must be omitted from the wire payload"
        );
    }

    #[test]
    fn stub_api_records_submissions() {
        let payload = valid_form().validate().unwrap();
        let mut api = StubApi::new();
        api.submit(&payload).unwrap();
        api.submit(&payload).unwrap();
        assert_eq!(api.submitted().len(), 2);
        assert_eq!(api.submitted()[0], payload);
    }

    #[test]
    fn whitespace_phone_counts_as_not_provided() {
        let mut form = valid_form();
        form.set_phone("   ");
        let payload = form.validate().unwrap();
        assert_eq!(payload.phone(), None);
    }
}
