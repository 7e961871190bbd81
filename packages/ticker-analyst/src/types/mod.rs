//! Data types for the ticker analysis library.

pub mod analysis;
pub mod config;
pub mod page;
