//! Actions: user intents and lookup results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Pending city text changed
    SearchInputChange(String),

    /// Look up the pending city (triggers async task)
    SearchSubmit,

    // ===== Weather category =====
    /// Result: lookup succeeded, tagged with its request token
    WeatherDidLoad {
        request: u64,
        snapshot: WeatherSnapshot,
    },

    /// Result: lookup failed with a user-facing message
    WeatherDidError { request: u64, message: String },

    // ===== UI category =====
    /// Switch between Fahrenheit and Celsius
    UiToggleUnits,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
