//! Run reporting
//!
//! Structured logging around the migration run. The `Updated:` and
//! `Error processing` console lines are emitted by the migration driver
//! itself and are independent of the log level.

pub mod logging;
