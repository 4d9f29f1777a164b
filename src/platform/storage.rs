//! localStorage access.

use web_sys::Storage;

use super::window::browser_window;
use crate::error::PlatformError;

fn local_storage() -> Result<Storage, PlatformError> {
    browser_window()?
        .local_storage()?
        .ok_or(PlatformError::Unavailable("localStorage"))
}

pub fn read_item(key: &str) -> Result<Option<String>, PlatformError> {
    Ok(local_storage()?.get_item(key)?)
}

pub fn write_item(key: &str, value: &str) -> Result<(), PlatformError> {
    local_storage()?.set_item(key, value)?;
    Ok(())
}
