pub mod card;
pub mod chart;
pub mod config;
pub mod favorites;
pub mod instrument;
pub mod link;
pub mod log;
pub mod util;

pub use config::ScaleFactor;
pub use config::state::State;
pub use config::theme::Theme;
pub use instrument::{Instrument, InstrumentKind, ViewToggle};

use std::fs;
use std::path::PathBuf;

const SAVED_STATE_FILE: &str = "saved-state.json";

/// Resolve a path under the platform data directory, e.g.
/// `~/.local/share/hotboard/<file>` on Linux.
pub fn data_path(path_name: Option<&str>) -> PathBuf {
    let base_path = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let data_path = base_path.join("hotboard");

    match path_name {
        Some(file) => data_path.join(file),
        None => data_path,
    }
}

/// Load the saved application state, falling back to defaults when the file
/// is missing or unreadable.
pub fn load_saved_state() -> State {
    match read_saved_state() {
        Ok(state) => state,
        Err(config::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            State::default()
        }
        Err(err) => {
            ::log::error!("Failed to load saved state, using defaults: {err}");
            State::default()
        }
    }
}

fn read_saved_state() -> Result<State, config::Error> {
    let content = fs::read_to_string(data_path(Some(SAVED_STATE_FILE)))?;
    Ok(serde_json::from_str(&content)?)
}

/// Persist the application state, creating the data directory if needed.
pub fn write_saved_state(state: &State) -> Result<(), config::Error> {
    let path = data_path(Some(SAVED_STATE_FILE));

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(state)?;
    fs::write(path, content)?;

    Ok(())
}
