// Theme preference persisted in localStorage.
use thiserror::Error;
use web_sys::Storage;

use crate::model::Theme;

pub const THEME_KEY: &str = "dw_theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no browser window")]
    NoWindow,
    #[error("local storage unavailable")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("malformed stored value: {0}")]
    Decode(#[from] serde_json::Error),
}

fn local_storage() -> Result<Storage, StorageError> {
    let win = web_sys::window().ok_or(StorageError::NoWindow)?;
    win.local_storage()
        .map_err(|e| StorageError::Js(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

pub fn encode_theme(theme: Theme) -> Result<String, StorageError> {
    Ok(serde_json::to_string(&theme)?)
}

pub fn decode_theme(raw: &str) -> Result<Theme, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn load_theme() -> Result<Option<Theme>, StorageError> {
    let store = local_storage()?;
    let raw = store
        .get_item(THEME_KEY)
        .map_err(|e| StorageError::Js(format!("{e:?}")))?;
    raw.as_deref().map(decode_theme).transpose()
}

pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    let store = local_storage()?;
    store
        .set_item(THEME_KEY, &encode_theme(theme)?)
        .map_err(|e| StorageError::Js(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_encoding() {
        assert_eq!(encode_theme(Theme::Light).unwrap(), "\"Light\"");
        assert_eq!(decode_theme("\"Dark\"").unwrap(), Theme::Dark);
    }

    #[test]
    fn malformed_theme_is_a_decode_error() {
        let err = decode_theme("purple").unwrap_err();
        assert!(matches!(err, StorageError::Decode(_)));
        assert!(err.to_string().starts_with("malformed stored value"));
    }
}
