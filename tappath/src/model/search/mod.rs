mod engine;
mod search_config;
mod search_error;
mod trace;

pub use engine::PathSearchEngine;
pub use search_config::{SearchConfig, TraceConfig};
pub use search_error::SearchError;
pub use trace::ZonePairTracer;
