// State management module
// Handles the in-memory activity roster

pub mod app_state;

pub use app_state::{Activity, ActivityName, AppState};
