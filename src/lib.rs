//! Weather lookup TUI
//!
//! Type a city, get its current OpenWeather conditions, flip between
//! Fahrenheit and Celsius. The library exposes the modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod format;
pub mod logging;
pub mod reducer;
pub mod state;
