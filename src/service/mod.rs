//! Composition on top of the stores.

pub mod aggregate;

pub use aggregate::{with_verbs, with_verbs_all};
