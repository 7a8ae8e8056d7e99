use std::sync::Arc;

use crate::{
    spec::{
        form_spec::FormSpec,
        responses::{ResponseEntry, replay},
    },
    trace::{
        logger::{TraceLogger, TraceObserver},
        trace::FormEventKind,
    },
};

pub mod cli;
pub mod form;
pub mod report;
pub mod spec;
pub mod trace;
pub mod workflow;

pub use form::engine::{DynamicFormEngine, SharedFormEngine};
pub use form::field_model::{FieldConstraints, FieldDefinition, FieldKind};
pub use form::identity::{FieldId, IdentityMode};
pub use form::response::{ResponseMap, ResponseValue};
pub use form::validation::FieldError;

/// Build an engine for `spec`, wire tracing, optionally seed checkbox
/// defaults, then replay `entries` in order.
pub fn prepare_engine(
    spec: &FormSpec,
    entries: &[ResponseEntry],
    seed_defaults: bool,
    tracer: &Arc<TraceLogger>,
) -> DynamicFormEngine {
    let mut engine = spec.build_engine();

    let seeded = if seed_defaults { engine.seed_defaults() } else { 0 };

    tracer.log(
        &tracer
            .event(FormEventKind::Configured)
            .with_form(&spec.name)
            .with_valid(engine.is_valid())
            .with_detail(format!(
                "{} fields, identity {:?}, {} seeded",
                spec.fields.len(),
                spec.identity,
                seeded
            )),
    );

    if tracer.is_enabled() {
        engine.subscribe(TraceObserver::new(Arc::clone(tracer), spec.name.clone()));
    }

    replay(&mut engine, entries);
    engine
}
