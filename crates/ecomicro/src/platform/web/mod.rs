//! Web platform implementations.

mod storage;

pub use storage::WebStorage;

use crate::platform::StorageError;

/// Copy text to the system clipboard via the browser Clipboard API.
///
/// Fire-and-forget: the returned promise is not awaited, so a rejected
/// write is not observed here. A missing window is the only hard failure.
pub fn share_text(text: &str) -> Result<(), StorageError> {
    let window = web_sys::window()
        .ok_or_else(|| StorageError::NotAvailable("no browser window".to_string()))?;
    let _ = window.navigator().clipboard().write_text(text);
    Ok(())
}
