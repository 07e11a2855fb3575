#![forbid(unsafe_code)]

//! Registration form collaborator for the storefront.
//!
//! Field-level validation (required/format/length) and construction of the
//! registration payload. The actual submission is a seam
//! ([`RegistrationApi`]) stubbed in this repository: hosts plug a real
//! HTTP client behind it.

pub mod register;
pub mod validate;

pub use register::{
    RegistrationApi, RegistrationForm, RegistrationPayload, StubApi, SubmitError,
};
pub use validate::{ErrorKind, Field, ValidationError};
