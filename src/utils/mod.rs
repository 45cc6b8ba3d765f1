//! Cross-cutting helpers.
//!
//! - [`call_monitor`] - Invocation counting and timing for repository calls

pub mod call_monitor;
