//! Logging infrastructure: the mutation audit trail.
//!
//! Provides [`JsonlMutationLogger`], a JSONL file writer that implements
//! the [`MutationLogger`](roster_application::MutationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlMutationLogger;
