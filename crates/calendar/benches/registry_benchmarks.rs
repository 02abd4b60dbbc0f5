use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{DateTime, Duration, Utc};
use convene_calendar::{Capacity, EventId, EventRegistry, Person};
use std::collections::HashMap;

fn future_date(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

/// Registry with `event_count` events; person `i` attends every `i + 1`-th
/// event, so registration totals differ per person and the count-ordered
/// participator query has real work to do.
fn seeded_registry(
    event_count: usize,
    person_count: usize,
) -> (EventRegistry, Vec<Person>, Vec<EventId>) {
    let registry = EventRegistry::new();
    let host = Person::new("Host").unwrap();

    let events: Vec<EventId> = (0..event_count)
        .map(|i| {
            registry
                .create_event(
                    &host,
                    &format!("Event {i}"),
                    future_date((i % 365) as i64 + 1),
                    Capacity::Unlimited,
                )
                .unwrap()
        })
        .collect();

    let persons: Vec<Person> = (0..person_count)
        .map(|i| Person::new(format!("Person {i}")).unwrap())
        .collect();

    for (person_index, person) in persons.iter().enumerate() {
        for (event_index, &event) in events.iter().enumerate() {
            if event_index % (person_index + 1) == 0 {
                registry.register_person(person, event).unwrap();
            }
        }
    }

    (registry, persons, events)
}

fn bench_event_creation_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_creation");

    group.bench_function("create_event", |b| {
        let registry = EventRegistry::new();
        let host = Person::new("Host").unwrap();
        let mut serial = 0u64;

        b.iter(|| {
            serial += 1;
            registry
                .create_event(
                    &host,
                    &format!("Event {serial}"),
                    future_date(1),
                    black_box(Capacity::Unlimited),
                )
                .unwrap();
        });
    });

    group.finish();
}

fn bench_registration_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");

    group.bench_function("register_person", |b| {
        let registry = EventRegistry::new();
        let host = Person::new("Host").unwrap();
        let event = registry
            .create_event(&host, "Open house", future_date(1), Capacity::Unlimited)
            .unwrap();
        let mut serial = 0u64;

        b.iter(|| {
            serial += 1;
            let guest = Person::new(format!("Guest {serial}")).unwrap();
            registry.register_person(black_box(&guest), event).unwrap();
        });
    });

    group.finish();
}

fn bench_query_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_scaling");

    for registry_size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*registry_size as u64));

        group.bench_with_input(
            BenchmarkId::new("participators_for_event", registry_size),
            registry_size,
            |b, &size| {
                let (registry, _persons, events) = seeded_registry(size, 20);
                let target = events[0];

                b.iter(|| black_box(registry.participators_for_event(black_box(target))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("events_for_person", registry_size),
            registry_size,
            |b, &size| {
                let (registry, persons, _events) = seeded_registry(size, 20);
                let busiest = &persons[0];

                b.iter(|| black_box(registry.events_for_person(black_box(busiest))));
            },
        );
    }

    group.finish();
}

/// Naive baseline: raw maps, no invariants, no snapshots. What the registry's
/// validation and clone-out semantics cost compared to unchecked bookkeeping.
#[derive(Debug, Default)]
struct NaiveCalendar {
    events: HashMap<String, Vec<String>>,
}

impl NaiveCalendar {
    fn create(&mut self, title: &str) {
        self.events.insert(title.to_string(), Vec::new());
    }

    fn register(&mut self, title: &str, person: &str) {
        if let Some(participators) = self.events.get_mut(title) {
            participators.push(person.to_string());
        }
    }
}

fn bench_registry_vs_naive_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_vs_naive_maps");

    group.bench_function("registry_create_and_register", |b| {
        let registry = EventRegistry::new();
        let host = Person::new("Host").unwrap();
        let guest = Person::new("Guest").unwrap();
        let mut serial = 0u64;

        b.iter(|| {
            serial += 1;
            let title = format!("Event {serial}");
            let event = registry
                .create_event(&host, &title, future_date(1), Capacity::Unlimited)
                .unwrap();
            registry.register_person(&guest, event).unwrap();
        });
    });

    group.bench_function("naive_create_and_register", |b| {
        let mut calendar = NaiveCalendar::default();
        let mut serial = 0u64;

        b.iter(|| {
            serial += 1;
            let title = format!("Event {serial}");
            calendar.create(&title);
            calendar.register(&title, "Guest");
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_event_creation_latency,
    bench_registration_latency,
    bench_query_scaling,
    bench_registry_vs_naive_maps
);
criterion_main!(benches);
