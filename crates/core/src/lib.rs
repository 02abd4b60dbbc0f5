//! `convene-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by the calendar crates. No infrastructure
//! concerns live here.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EventId, PersonId};
pub use value_object::ValueObject;
