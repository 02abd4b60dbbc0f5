use convene_core::{DomainError, DomainResult, Entity, PersonId};
use serde::{Deserialize, Serialize};

/// A person known to the calendar: invitor of some events, participator in
/// others.
///
/// Persons are immutable, caller-owned values. Equality is by identity
/// (`PersonId`), never by display name, so two persons who happen to share a
/// name stay distinct everywhere in the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
}

impl Person {
    /// Create a person with a freshly minted id.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        Self::with_id(PersonId::new(), name)
    }

    /// Create a person with an explicit id. Prefer this in tests that need
    /// deterministic identities.
    pub fn with_id(id: PersonId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("person name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// Identity equality: the display name does not participate.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> PersonId {
        self.id
    }
}
