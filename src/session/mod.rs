//! Append-only session event persistence.
//!
//! Every hook invocation appends its envelope to a per-session JSONL file
//! before any decision is computed. The core only ever writes; reading the
//! log back is the operator's business. A failed append is logged and
//! ignored so persistence can never block a decision.

mod log;

pub use log::{JsonlSessionLog, SessionEventRecord, SessionLog, default_data_dir};
