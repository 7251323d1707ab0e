//! Request extractors: form fields and bearer-token authorization.

pub mod auth;
pub mod form;

pub use auth::Authorized;
pub use form::FormFields;
