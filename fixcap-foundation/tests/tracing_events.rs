//! Truncation and ignored contract violations become observable with tracing

#![cfg(feature = "tracing")]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use fixcap_foundation::{StaticString, StaticVec};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
};

#[derive(Clone, Default)]
struct ContainerEvents {
    truncations: Arc<AtomicUsize>,
    warnings: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for ContainerEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().fields().field("container").is_none() {
            return;
        }
        let level = *event.metadata().level();
        if level == Level::TRACE {
            self.truncations.fetch_add(1, Ordering::SeqCst);
        } else if level == Level::WARN {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn test_truncation_emits_trace_event() {
    let events = ContainerEvents::default();
    let subscriber = tracing_subscriber::registry().with(events.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut s = StaticString::<4>::from("abc");
        s += "de";
        let _: StaticVec<u8, 2> = StaticVec::from_slice(&[1, 2, 3]);
        let _ = StaticString::<8>::from("fits");
    });

    assert_eq!(events.truncations.load(Ordering::SeqCst), 2);
    assert_eq!(events.warnings.load(Ordering::SeqCst), 0);
}

#[test]
fn test_iterator_truncation_emits_trace_event() {
    let events = ContainerEvents::default();
    let subscriber = tracing_subscriber::registry().with(events.clone());

    tracing::subscriber::with_default(subscriber, || {
        let letters: StaticString<5> = (b'a'..=b'z').collect();
        assert_eq!(letters, "abcde");

        let mut full = StaticVec::<i32, 2>::from([1, 2]);
        full.append([3, 4]);
        assert_eq!(full, [1, 2]);

        let counted: StaticVec<u8, 2> = (0..10).collect();
        assert_eq!(counted, [0, 1]);

        // exactly filling the capacity drops nothing
        let exact: StaticVec<u8, 3> = (0..3).collect();
        assert!(exact.is_full());
    });

    assert_eq!(events.truncations.load(Ordering::SeqCst), 3);
    assert_eq!(events.warnings.load(Ordering::SeqCst), 0);
}

#[test]
#[cfg(not(any(debug_assertions, feature = "runtime-bounds-checking")))]
fn test_ignored_contract_emits_warning() {
    let events = ContainerEvents::default();
    let subscriber = tracing_subscriber::registry().with(events.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut vec = StaticVec::<u8, 1>::from([1]);
        vec.push_back(2);
        vec.resize(4, 0);
    });

    assert_eq!(events.warnings.load(Ordering::SeqCst), 2);
}
