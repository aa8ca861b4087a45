//! Headless editor core (state/action/effect).

pub mod action;
pub mod config;
pub mod diff;
pub mod effect;
pub mod history;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use config::EditorLimits;
pub use diff::{extract_changes, DocumentPatch};
pub use effect::Effect;
pub use history::History;
pub use state::{CellPatch, EditorState};
pub use store::{DispatchResult, Store};
