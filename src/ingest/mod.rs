//! File ingestion module
//!
//! Turns paths from the host (window drops, picker dialogs) into staged-file
//! candidates and preview thumbnails, all off the UI thread:
//! - Candidate loading and folder expansion (loader.rs)
//! - Thumbnail decoding and slot bookkeeping (thumbnail.rs)

pub mod loader;
pub mod thumbnail;
