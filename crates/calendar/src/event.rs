use chrono::{DateTime, Utc};
use convene_core::{DomainError, DomainResult, Entity, EventId, PersonId, ValueObject};
use core::num::NonZeroU32;
use serde::{Deserialize, Serialize};

use crate::person::Person;

/// Participant capacity of an event.
///
/// A limited event caps how many persons may register; an unlimited event
/// accepts everyone. The cap is a [`NonZeroU32`], so "limited to zero" is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capacity {
    Unlimited,
    Limited(NonZeroU32),
}

impl Capacity {
    /// Build a capacity from a plain participant limit, where `0` means
    /// unlimited. Bridges callers that carry the limit as a bare count.
    pub fn from_limit(max_participators: u32) -> Self {
        NonZeroU32::new(max_participators).map_or(Capacity::Unlimited, Capacity::Limited)
    }

    pub fn limit(&self) -> Option<NonZeroU32> {
        match self {
            Capacity::Unlimited => None,
            Capacity::Limited(max) => Some(*max),
        }
    }

    /// Whether one more registration fits on top of `current` participators.
    pub fn allows(&self, current: usize) -> bool {
        match self {
            Capacity::Unlimited => true,
            Capacity::Limited(max) => current < max.get() as usize,
        }
    }
}

impl ValueObject for Capacity {}

/// A scheduled gathering: a uniquely-titled appointment with an invitor, a
/// date in the future and a (possibly capped) list of participators.
///
/// Events are created and mutated exclusively through the
/// [`EventRegistry`](crate::registry::EventRegistry), which enforces the
/// registry-wide invariants (unique titles, future dates). Queries hand out
/// cloned snapshots, so holding an `Event` never aliases registry state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    title: String,
    scheduled_at: DateTime<Utc>,
    invitor: Person,
    capacity: Capacity,
    participators: Vec<Person>,
}

impl Event {
    /// Assemble a validated event. Input checks live in the registry, which
    /// is the only caller.
    pub(crate) fn new(
        id: EventId,
        invitor: Person,
        title: String,
        scheduled_at: DateTime<Utc>,
        capacity: Capacity,
    ) -> Self {
        Self {
            id,
            title,
            scheduled_at,
            invitor,
            capacity,
            participators: Vec::new(),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }

    /// The person who created the event. Invitors are not automatically
    /// registered as participators.
    pub fn invitor(&self) -> &Person {
        &self.invitor
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Participators in registration order.
    pub fn participators(&self) -> &[Person] {
        &self.participators
    }

    pub fn participator_count(&self) -> usize {
        self.participators.len()
    }

    pub fn is_limited(&self) -> bool {
        self.capacity.limit().is_some()
    }

    /// Whether the event has reached its capacity. Always `false` for
    /// unlimited events.
    pub fn is_full(&self) -> bool {
        !self.capacity.allows(self.participators.len())
    }

    pub fn has_participator(&self, person: PersonId) -> bool {
        self.participators.iter().any(|p| p.id() == person)
    }

    /// Append a participator, guarding the per-event invariants: no duplicate
    /// registrations, never beyond capacity.
    pub(crate) fn add_participator(&mut self, person: Person) -> DomainResult<()> {
        if self.has_participator(person.id()) {
            return Err(DomainError::conflict(format!(
                "'{}' is already registered for event '{}'",
                person.name(),
                self.title
            )));
        }
        if !self.capacity.allows(self.participators.len()) {
            return Err(DomainError::invariant(format!(
                "event '{}' is at capacity",
                self.title
            )));
        }
        self.participators.push(person);
        Ok(())
    }

    /// Remove a participator by identity, freeing their slot.
    pub(crate) fn remove_participator(&mut self, person: PersonId) -> DomainResult<()> {
        let Some(position) = self.participators.iter().position(|p| p.id() == person) else {
            return Err(DomainError::not_found());
        };
        self.participators.remove(position);
        Ok(())
    }
}

// Identity equality, like every entity: two snapshots of the same event
// compare equal whatever state they captured. Compare state through getters.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

impl Entity for Event {
    type Id = EventId;

    fn id(&self) -> EventId {
        self.id
    }
}
