//! Domain value objects and types.
//!
//! Contact fields are small value objects sharing the [`Field`] trait.
//! Validation happens once, at construction, so an invalid value can never
//! be represented in a [`Record`](crate::models::Record).

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::{join_values, Field};
pub use name::Name;
pub use phone::Phone;
