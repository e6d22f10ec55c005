//! CLI library components for stringmop.

pub mod input;
pub mod logging;
pub mod output;
