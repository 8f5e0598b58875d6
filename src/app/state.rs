//! Application State: zentrale Datenhaltung.

mod app_state;
mod playback;

pub use app_state::AppState;
pub use playback::PlaybackState;
