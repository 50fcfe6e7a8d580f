//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Measurement system requested from OpenWeather
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Fahrenheit
    #[default]
    Imperial,
    /// Celsius
    Metric,
}

impl Unit {
    pub fn toggle(&self) -> Self {
        match self {
            Unit::Imperial => Unit::Metric,
            Unit::Metric => Unit::Imperial,
        }
    }

    /// Value of the `units` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            Unit::Imperial => "imperial",
            Unit::Metric => "metric",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Imperial => "°F",
            Unit::Metric => "°C",
        }
    }
}

/// A single lookup request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Query {
    pub city_name: String,
    pub unit: Unit,
}

/// Result of one successful lookup. Replaced wholesale, never merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub city_name: String,
    pub temperature: f64,
    /// Unit the temperature was fetched in
    pub unit: Unit,
    /// Title-cased condition text
    pub description: String,
    /// OpenWeather icon code, e.g. `10d`
    pub icon_code: String,
    pub icon_url: String,
}

/// Where the lookup state machine currently sits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Spinner frame interval while a lookup is in flight.
pub const SPINNER_TICK_MS: u64 = 80;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Search ---
    /// Pending city name typed by the user
    #[debug(section = "Search", label = "Input", debug_fmt)]
    pub city_input: String,

    /// Unit used for the next request
    #[debug(section = "Search", label = "Unit", debug_fmt)]
    pub unit: Unit,

    // --- Weather ---
    /// Most recently applied successful result
    #[debug(section = "Weather", label = "Snapshot", debug_fmt)]
    pub snapshot: Option<WeatherSnapshot>,

    /// User-facing message of the last failure
    #[debug(section = "Weather", label = "Error", debug_fmt)]
    pub error: Option<String>,

    #[debug(section = "Weather", label = "Loading")]
    pub is_loading: bool,

    /// Token of the latest issued request; older results are dropped
    #[debug(section = "Weather", label = "Request", debug_fmt)]
    pub request_seq: u64,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(unit: Unit) -> Self {
        Self {
            city_input: String::new(),
            unit,
            snapshot: None,
            error: None,
            is_loading: false,
            request_seq: 0,
            tick_count: 0,
        }
    }

    /// State with the search field already filled in
    pub fn with_city(unit: Unit, city: impl Into<String>) -> Self {
        Self {
            city_input: city.into(),
            ..Self::new(unit)
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.snapshot.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// Issue a fresh request token, invalidating any in-flight one.
    pub fn next_request(&mut self) -> u64 {
        self.request_seq = self.request_seq.wrapping_add(1);
        self.request_seq
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Unit::default())
    }
}
