//! Business counters emitted through the `metrics` facade.
//!
//! The crate installs no recorder. Until the hosting process installs one
//! (for example with `metrics::set_global_recorder` and an exporter of its
//! choice), every increment below is a no-op.

pub const FORMS_CREATED: &str = "forms_created_total";
pub const FORMS_DELETED: &str = "forms_deleted_total";
pub const SUBMISSIONS_ACCEPTED: &str = "form_submissions_total";
pub const SUBMISSIONS_REJECTED: &str = "form_submissions_rejected_total";

/// Registers a description for each counter with the installed recorder.
pub fn describe() {
    metrics::describe_counter!(FORMS_CREATED, "Forms created");
    metrics::describe_counter!(FORMS_DELETED, "Forms deleted together with their submissions");
    metrics::describe_counter!(SUBMISSIONS_ACCEPTED, "Submissions recorded");
    metrics::describe_counter!(
        SUBMISSIONS_REJECTED,
        "Submissions rejected because the form was not published"
    );
}

#[cfg(test)]
pub(crate) mod testing {
    use metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    /// Recorder that keeps counter totals in memory.
    ///
    /// Install with `metrics::set_default_local_recorder`, which is scoped to
    /// the current thread.
    #[derive(Default)]
    pub struct CountingRecorder {
        counters: Mutex<HashMap<String, Arc<AtomicU64>>>,
    }

    impl CountingRecorder {
        pub fn count(&self, name: &str) -> u64 {
            self.counters
                .lock()
                .unwrap()
                .get(name)
                .map_or(0, |c| c.load(Ordering::Relaxed))
        }
    }

    impl Recorder for CountingRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            let counter = self
                .counters
                .lock()
                .unwrap()
                .entry(key.name().to_string())
                .or_default()
                .clone();
            Counter::from_arc(counter)
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }
}
