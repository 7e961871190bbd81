//! Core trait abstractions for the ticker analysis library.
//!
//! These traits define the two external collaborators the pipeline
//! depends on: fetching a page and completing a prompt.

pub mod completion;
pub mod fetcher;
