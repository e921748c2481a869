/*!
 * Monitoring Module
 * Tracing subscriber configuration
 */

pub mod tracer;

pub use tracer::{init_tracing, TRACE_JSON_ENV};
