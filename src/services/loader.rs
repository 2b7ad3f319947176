use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::Contact;

/// Errors that can occur while loading a contact file
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to read contact file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse contact file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load contacts from a JSON array file.
///
/// Document order is preserved: pair enumeration downstream depends on it.
/// Field values are passed through untouched; an empty string and an absent
/// field are different inputs and neither is normalized here.
pub fn load_contacts<P: AsRef<Path>>(path: P) -> Result<Vec<Contact>, LoaderError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let contacts: Vec<Contact> = serde_json::from_str(&raw)?;

    debug!(
        "Loaded {} contacts from {}",
        contacts.len(),
        path.as_ref().display()
    );

    Ok(contacts)
}
