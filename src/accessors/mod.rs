//! Data access for the three tables. Each store holds the shared pool and the injected id generator.
//! Every operation is one autocommitted statement.

pub mod resource;
pub mod resource_type;
pub mod verb;

pub use resource::ResourceStore;
pub use resource_type::TypeStore;
pub use verb::{VerbLookup, VerbStore};
