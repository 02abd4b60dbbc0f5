//! The in-memory event registry: the single entry point for creating events
//! and managing registrations.
//!
//! All state lives behind one [`RwLock`]; operations take `&self`, so a
//! registry can be shared freely (wrap it in an `Arc` to share across
//! threads). Queries hand out cloned snapshots rather than guarded
//! references, keeping lock scopes short and callers free of lifetime ties
//! to the registry.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use convene_core::{DomainError, DomainResult, EventId, PersonId};

use crate::event::{Capacity, Event};
use crate::person::Person;

/// Registry of calendar events.
///
/// Enforced across all operations:
/// - event titles are unique (exact, case-sensitive match)
/// - events are always scheduled in the future at creation time
/// - a person registers for an event at most once
/// - a limited event never exceeds its capacity
///
/// Rejected operations leave the registry untouched and report a
/// [`DomainError`]; no operation panics on domain input.
#[derive(Debug, Default)]
pub struct EventRegistry {
    events: RwLock<Vec<Event>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an event and return its id.
    ///
    /// The title must be non-blank and unused, and `scheduled_at` must lie
    /// strictly in the future. The invitor is recorded but not registered as
    /// a participator.
    pub fn create_event(
        &self,
        invitor: &Person,
        title: &str,
        scheduled_at: DateTime<Utc>,
        capacity: Capacity,
    ) -> DomainResult<EventId> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("event title cannot be blank"));
        }
        if scheduled_at <= Utc::now() {
            return Err(DomainError::validation(
                "event must be scheduled in the future",
            ));
        }

        let mut events = self
            .events
            .write()
            .map_err(|_| DomainError::conflict("registry lock poisoned"))?;
        if events.iter().any(|event| event.title() == title) {
            return Err(DomainError::conflict(format!(
                "an event titled '{title}' already exists"
            )));
        }

        let id = EventId::new();
        events.push(Event::new(
            id,
            invitor.clone(),
            title.to_string(),
            scheduled_at,
            capacity,
        ));
        tracing::debug!("created event '{}' ({})", title, id);
        Ok(id)
    }

    /// Look up an event by its exact title. Returns a snapshot.
    pub fn get_event(&self, title: &str) -> Option<Event> {
        let events = self.events.read().ok()?;
        events.iter().find(|event| event.title() == title).cloned()
    }

    /// Register `person` as a participator of `event`.
    pub fn register_person(&self, person: &Person, event: EventId) -> DomainResult<()> {
        let mut events = self
            .events
            .write()
            .map_err(|_| DomainError::conflict("registry lock poisoned"))?;
        let target = events
            .iter_mut()
            .find(|candidate| candidate.id() == event)
            .ok_or_else(DomainError::not_found)?;

        target.add_participator(person.clone())?;
        tracing::debug!(
            "registered '{}' for event '{}'",
            person.name(),
            target.title()
        );
        Ok(())
    }

    /// Withdraw `person` from `event`, freeing their slot.
    pub fn unregister_person(&self, person: &Person, event: EventId) -> DomainResult<()> {
        let mut events = self
            .events
            .write()
            .map_err(|_| DomainError::conflict("registry lock poisoned"))?;
        let target = events
            .iter_mut()
            .find(|candidate| candidate.id() == event)
            .ok_or_else(DomainError::not_found)?;

        target.remove_participator(person.id())?;
        tracing::debug!(
            "unregistered '{}' from event '{}'",
            person.name(),
            target.title()
        );
        Ok(())
    }

    /// Participators of `event`, most active first.
    ///
    /// Ordered by total number of events each person is registered for
    /// (descending); persons with equal counts are ordered by name
    /// (ascending). Unknown events yield an empty list.
    pub fn participators_for_event(&self, event: EventId) -> Vec<Person> {
        let events = match self.events.read() {
            Ok(events) => events,
            Err(_) => return Vec::new(),
        };
        let Some(target) = events.iter().find(|candidate| candidate.id() == event) else {
            return Vec::new();
        };

        let counts: HashMap<PersonId, usize> = target
            .participators()
            .iter()
            .map(|person| (person.id(), registration_count(&events, person.id())))
            .collect();

        let mut participators = target.participators().to_vec();
        participators.sort_by(|a, b| {
            let count_a = counts.get(&a.id()).copied().unwrap_or(0);
            let count_b = counts.get(&b.id()).copied().unwrap_or(0);
            count_b
                .cmp(&count_a)
                .then_with(|| a.name().cmp(b.name()))
        });
        participators
    }

    /// Events `person` is registered for, soonest first.
    pub fn events_for_person(&self, person: &Person) -> Vec<Event> {
        let events = match self.events.read() {
            Ok(events) => events,
            Err(_) => return Vec::new(),
        };

        let mut attending: Vec<Event> = events
            .iter()
            .filter(|event| event.has_participator(person.id()))
            .cloned()
            .collect();
        attending.sort_by_key(Event::scheduled_at);
        attending
    }

    /// Number of events `person` is registered for. Always agrees with
    /// [`events_for_person`](Self::events_for_person).
    pub fn count_events_for_person(&self, person: &Person) -> usize {
        let events = match self.events.read() {
            Ok(events) => events,
            Err(_) => return 0,
        };
        registration_count(&events, person.id())
    }

    /// Total number of events in the registry.
    pub fn event_count(&self) -> usize {
        self.events.read().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.event_count() == 0
    }
}

/// Number of events `person` is registered for across the given events.
fn registration_count(events: &[Event], person: PersonId) -> usize {
    events
        .iter()
        .filter(|event| event.has_participator(person))
        .count()
}
