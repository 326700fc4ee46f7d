//! Device list loading for the standalone badge registry.
//!
//! The device list is a plain text file with one badge per line:
//!
//! ```text
//! # mac              badge_id project_id name
//! e0:5b:1c:73:9b:01  1        7          lobby
//! e0:5b:1c:73:9b:02  2        7
//! ```
//!
//! This crate turns that file into [`DeviceRecord`] values. It does not build
//! badges or order them; that is the registry's job.
//!
//! # Error Handling
//!
//! All operations return [`Result<T>`][error::Result] with a
//! [`DeviceFileError`]. A missing device list is reported as
//! [`DeviceFileError::NotFound`] so the caller can treat it as a startup
//! configuration failure. Malformed lines are never skipped or partially
//! parsed.

pub mod error;
pub mod loader;
pub mod parser;
pub mod record;

pub use error::{DeviceFileError, Result};
pub use loader::DeviceFileLoader;
pub use parser::DeviceListParser;
pub use record::DeviceRecord;
