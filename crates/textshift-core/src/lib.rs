//! Textshift Core — shared error types.
//!
//! This crate has no internal textshift dependencies (dependency level 0).
//! Every other crate in the workspace reports failures through [`Error`].
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias

pub mod error;

pub use error::{Error, Result};
