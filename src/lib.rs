//! Library crate for usertable.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - Fetch collaborator for the REST directory (`api`)
//! - Error and result types (`error`)
//! - Record types (`model`)
//! - Search/sort/pagination controller (`table`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `usertable` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod app;
pub mod error;
pub mod model;
pub mod table;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
