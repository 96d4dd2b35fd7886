//! Native platform implementations.

mod storage;

pub use storage::NativeStorage;

use crate::platform::StorageError;

/// "Share" on native: terminals have no portable clipboard, so the text is
/// written to the log where the user can copy it from.
pub fn share_text(text: &str) -> Result<(), StorageError> {
    tracing::info!("Shared content:\n{text}");
    Ok(())
}
