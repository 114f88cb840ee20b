//! Menu draft editor.
//!
//! Staff can stage new menu items in the browser; the draft is a separate
//! catalog persisted under [`MENU_DRAFT_KEY`] and is never merged into the
//! live menu. The preview tells them to copy it into `menu.json`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tiffin_core::{Catalog, MenuItem};

use crate::storage::{KeyValueStore, MENU_DRAFT_KEY, StorageError};

/// Read the current draft, empty if none was saved.
///
/// # Errors
///
/// Returns an error if the store fails or the saved draft is not valid JSON.
pub fn load_draft(store: &impl KeyValueStore) -> Result<Catalog, StorageError> {
    store.get(MENU_DRAFT_KEY)?.map_or_else(
        || Ok(Catalog::new()),
        |raw| {
            serde_json::from_str(&raw)
                .map_err(|e| StorageError::Corrupt(format!("menu draft: {e}")))
        },
    )
}

/// Append an item to the draft under `category` and persist it.
///
/// Returns the preview line shown under the editor form.
///
/// # Errors
///
/// Returns an error if the draft cannot be read, encoded or written.
pub fn append_draft_item(
    store: &mut impl KeyValueStore,
    category: &str,
    item: MenuItem,
) -> Result<String, StorageError> {
    let mut draft = load_draft(store)?;
    let preview = format!("Added {} to {category}. Copy to menu.json!", item.name);
    draft.push(category, item);

    let json = serde_json::to_string(&draft).map_err(|e| StorageError::Io(e.to_string()))?;
    store.set(MENU_DRAFT_KEY, &json)?;
    tracing::info!(category, items = draft.len(), "Menu draft updated");
    Ok(preview)
}

/// Encode an uploaded image as a `data:` URI for the item's `image` field.
#[must_use]
pub fn image_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
