//! Platform abstraction layer for native/web compatibility.
//!
//! This module provides the pieces that differ between platforms:
//! - [`Storage`]: persistence for favorites, progress and the onboarding flag
//! - `share_text`: handing content to the outside world (clipboard on web,
//!   the log on native)

mod storage;

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "web")]
pub mod web;

pub use storage::{MemoryStorage, Storage, StorageError, keys, load_or, save};

// Re-export platform-specific implementations
#[cfg(feature = "native")]
pub use native::{NativeStorage, share_text};

#[cfg(feature = "web")]
pub use web::{WebStorage, share_text};
