//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the life of the process.
//!
//! # Tasks
//! - Cache cleanup: purges expired entries from every icon cache at a fixed interval

mod cleanup;

pub use cleanup::{run_cleanup, spawn_cleanup_task, CleanupSummary};
