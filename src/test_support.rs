/// Test helpers for asserting on `tracing` warnings.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts WARN events seen by the subscriber it is layered onto.
pub struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` under a counting subscriber and return the number of warnings.
pub fn count_warnings(f: impl FnOnce()) -> usize {
    let counter = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(counter.clone()));
    tracing::subscriber::with_default(subscriber, f);
    counter.load(Ordering::SeqCst)
}

/// Install a counting subscriber on the current thread until the guard drops.
///
/// For async tests on a current-thread runtime, where `count_warnings`
/// cannot wrap an `.await`.
pub fn capture_warnings() -> (DefaultGuard, Arc<AtomicUsize>) {
    let counter = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(counter.clone()));
    (tracing::subscriber::set_default(subscriber), counter)
}
