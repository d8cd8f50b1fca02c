//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and step result lines.

mod report;
mod spinner;

pub use report::{report_failure, report_success};
pub use spinner::{create_spinner, finish_spinner};
