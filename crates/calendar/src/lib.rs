//! Calendar domain module (events, participators, registration).
//!
//! This crate contains the business rules for the event calendar: organizers
//! create events (optionally capacity-limited), persons register and
//! unregister, and callers query sorted participator/event lists. All rules
//! are enforced by one coordinating component, [`EventRegistry`], implemented
//! purely as deterministic in-memory logic (no IO, no HTTP, no storage).

pub mod event;
pub mod person;
pub mod registry;


pub use event::{Capacity, Event};
pub use person::Person;
pub use registry::EventRegistry;

pub use convene_core::{DomainError, DomainResult, EventId, PersonId};
