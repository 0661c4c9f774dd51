//! Observability setup for Chatterbox: log formatting, level filtering and
//! optional OpenTelemetry span export.

pub mod tracing_setup;
