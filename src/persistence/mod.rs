use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    board::DEFAULT_CARDS,
    CardBoardError,
    CardId,
};

const APP_NAME: &str = "cardboard";
pub const SETTINGS_FILE: &str = "settings.json";

/// Start-up preferences. Read once, never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub dark_mode: bool,
    pub zoom_delta: f32,
    pub initial_cards: Vec<CardId>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self { dark_mode: false, zoom_delta: 0.0, initial_cards: DEFAULT_CARDS.to_vec() }
    }
}

pub fn get_app_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => data_dir.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

/// Reads `path` as JSON. A missing file gives `T::default()`.
pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    path: &Path,
) -> Result<T, CardBoardError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    log::info!("Settings loaded from: {}", path.display());
    Ok(data)
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    filename: &str,
) -> Result<T, CardBoardError> {
    load_json_from(&get_data_file_path(filename))
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
