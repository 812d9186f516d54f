//! Shared test utilities used across treecut crates.

pub mod tracing {
    //! Capture of spans and events so tests can assert on instrumentation.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;

    /// Layer that records closed spans and emitted events.
    ///
    /// Clones share storage, so a test can keep one handle while the other
    /// is moved into a subscriber.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    /// A span captured when it closed.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the metadata, e.g. `core.prim_mst`.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: HashMap<String, String>,
    }

    /// An emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Structured fields, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the formatted `message` field, if any.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }
    }

    impl RecordingLayer {
        /// Returns the closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use treecut_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            lock(&self.spans).clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            lock(&self.events).clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            lock(&self.spans).iter().find(|span| span.name == name).cloned()
        }

        /// Returns every event emitted at `level`.
        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
            lock(&self.events)
                .iter()
                .filter(|event| event.level == level)
                .cloned()
                .collect()
        }
    }

    /// Runs `f` with a fresh [`RecordingLayer`] installed as the thread's
    /// default subscriber and returns both the result and the layer.
    ///
    /// # Examples
    /// ```
    /// use treecut_test_support::tracing::with_recording;
    ///
    /// let (value, layer) = with_recording(|| {
    ///     tracing::info!(answer = 42, "computed");
    ///     42
    /// });
    /// assert_eq!(value, 42);
    /// assert_eq!(layer.events()[0].fields["answer"], "42");
    /// ```
    pub fn with_recording<T>(f: impl FnOnce() -> T) -> (T, RecordingLayer) {
        let layer = RecordingLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, layer)
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    struct PendingSpan {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut pending = PendingSpan {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldRecorder(&mut pending.fields));
            span.extensions_mut().insert(pending);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            if let Some(pending) = extensions.get_mut::<PendingSpan>() {
                values.record(&mut FieldRecorder(&mut pending.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(pending) = span.extensions_mut().remove::<PendingSpan>() else {
                return;
            };
            lock(&self.spans).push(SpanRecord {
                name: pending.name,
                fields: pending.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            lock(&self.events).push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

    impl FieldRecorder<'_> {
        fn insert(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.insert(field, value.to_string());
        }
    }

}

pub mod ci;
