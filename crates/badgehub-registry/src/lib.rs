//! Standalone badge registry.
//!
//! This crate keeps an in-memory registry of badges (wearable sensor tags)
//! loaded from a local device list. It is the offline stand-in for the
//! server-synchronized badge manager: the badge list comes from a file and
//! server-facing operations report [`SyncOutcome`]s without any network
//! traffic.
//!
//! # Architecture
//!
//! ```text
//! ManagerConfig ──► StandaloneBadgeManager
//!                        │
//!                        ├─ ReferenceTimestamp   (picked once at construction)
//!                        └─ BadgeRegistry        (Uninitialized | Populated)
//!                              │
//!                              ├─ DeviceFileLoader   (badgehub-devices)
//!                              └─ BadgeCollection    (MAC → Badge, badge id order)
//! ```
//!
//! # Reference Timestamp
//!
//! Every badge in a registry is initialized with the same audio and
//! proximity starting point. With an explicit timestamp that instant is used
//! directly; otherwise it is placed 24 hours before the manager was created
//! so a later sync can backfill a day of data.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`][error::Result] with a
//! [`RegistryError`]. Reading the badge list before it was pulled yields
//! [`RegistryError::NotInitialized`], which is distinct from an empty list.
//!
//! # Concurrency
//!
//! Population takes `&mut self`, so a registry cannot be populated from two
//! places at once. Callers that share a manager across threads wrap it in a
//! mutex of their choice.

pub mod badge;
pub mod collection;
pub mod config;
pub mod error;
pub mod manager;
pub mod reference;
pub mod registry;

pub use badge::{Badge, InitTimestamps};
pub use collection::BadgeCollection;
pub use config::ManagerConfig;
pub use error::{RegistryError, Result};
pub use manager::{BadgeManager, StandaloneBadgeManager, SyncOutcome};
pub use reference::{ReferenceSource, ReferenceTimestamp};
pub use registry::BadgeRegistry;
