// State management module
// Handles application state and the people store

pub mod app_state;

pub use app_state::{AppState, Person, PersonId};
