//! Internal library crate for filet.
//!
//! The shipped application is the `filet` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and
//! to keep modules organized. It is not a library for external use.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod ui;
pub mod utils;
