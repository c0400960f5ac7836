//! UI rendering for filet.

pub mod render;
