//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::error::LookupError;
use crate::state::{AppState, Query};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchInputChange(text) => {
            if state.city_input == text {
                return DispatchResult::unchanged();
            }
            state.city_input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            if state.city_input.is_empty() {
                // Settles immediately; also retires any lookup still in flight.
                state.next_request();
                state.error = Some(LookupError::EmptyInput.to_string());
                state.is_loading = false;
                return DispatchResult::changed();
            }
            let city_name = state.city_input.clone();
            begin_fetch(state, city_name)
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad { request, snapshot } => {
            if request != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.snapshot = Some(snapshot);
            state.error = None;
            state.is_loading = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, message } => {
            if request != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.error = Some(message);
            state.is_loading = false;
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            match state.snapshot.as_ref().map(|s| s.city_name.clone()) {
                Some(city_name) => begin_fetch(state, city_name),
                None => DispatchResult::changed(),
            }
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Enter Loading for `city_name` at the current unit.
/// The previous snapshot stays visible until the result replaces it.
fn begin_fetch(state: &mut AppState, city_name: String) -> DispatchResult<Effect> {
    let request = state.next_request();
    state.is_loading = true;
    state.error = None;
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchWeather {
        request,
        query: Query {
            city_name,
            unit: state.unit,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Phase, Unit, WeatherSnapshot};

    fn paris(unit: Unit, temperature: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            city_name: "Paris".into(),
            temperature,
            unit,
            description: "Light Rain".into(),
            icon_code: "10d".into(),
            icon_url: "https://openweathermap.org/img/wn/10d@4x.png".into(),
        }
    }

    #[test]
    fn test_input_change_has_no_effect() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchInputChange("Lon".into()));

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.city_input, "Lon");
        assert!(!state.is_loading);
    }

    #[test]
    fn test_empty_submit_settles_without_loading() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchSubmit);

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Type in a city first."));
    }

    #[test]
    fn test_submit_sets_loading_and_clears_error() {
        let mut state = AppState::with_city(Unit::Imperial, "Paris");
        state.error = Some("old".into());
        state.tick_count = 9;

        let result = reducer(&mut state, Action::SearchSubmit);

        assert!(result.changed);
        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.tick_count, 0);
        assert_eq!(result.effects.len(), 1);
        match &result.effects[0] {
            Effect::FetchWeather { request, query } => {
                assert_eq!(*request, state.request_seq);
                assert_eq!(query.city_name, "Paris");
                assert_eq!(query.unit, Unit::Imperial);
            }
        }
    }

    #[test]
    fn test_submit_keeps_previous_snapshot_while_loading() {
        let mut state = AppState::with_city(Unit::Metric, "Oslo");
        state.snapshot = Some(paris(Unit::Metric, 18.0));

        reducer(&mut state, Action::SearchSubmit);

        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.snapshot, Some(paris(Unit::Metric, 18.0)));
    }

    #[test]
    fn test_load_replaces_snapshot() {
        let mut state = AppState::with_city(Unit::Metric, "Paris");
        reducer(&mut state, Action::SearchSubmit);
        let request = state.request_seq;

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request,
                snapshot: paris(Unit::Metric, 18.0),
            },
        );

        assert!(result.changed);
        assert_eq!(state.phase(), Phase::Success);
        assert_eq!(state.snapshot, Some(paris(Unit::Metric, 18.0)));
    }

    #[test]
    fn test_error_keeps_snapshot() {
        let mut state = AppState::with_city(Unit::Metric, "Atlantis");
        state.snapshot = Some(paris(Unit::Metric, 18.0));
        reducer(&mut state, Action::SearchSubmit);
        let request = state.request_seq;

        reducer(
            &mut state,
            Action::WeatherDidError {
                request,
                message: "That city doesn't exist. Try again.".into(),
            },
        );

        assert!(!state.is_loading);
        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(state.snapshot, Some(paris(Unit::Metric, 18.0)));
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut state = AppState::with_city(Unit::Metric, "Paris");
        reducer(&mut state, Action::SearchSubmit);
        let stale = state.request_seq;
        reducer(&mut state, Action::SearchInputChange("Oslo".into()));
        reducer(&mut state, Action::SearchSubmit);

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: stale,
                snapshot: paris(Unit::Metric, 18.0),
            },
        );
        assert!(!result.changed);
        assert!(state.is_loading);
        assert!(state.snapshot.is_none());

        let result = reducer(
            &mut state,
            Action::WeatherDidError {
                request: stale,
                message: "late".into(),
            },
        );
        assert!(!result.changed);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_empty_submit_retires_in_flight_lookup() {
        let mut state = AppState::with_city(Unit::Metric, "Paris");
        reducer(&mut state, Action::SearchSubmit);
        let in_flight = state.request_seq;
        reducer(&mut state, Action::SearchInputChange(String::new()));
        reducer(&mut state, Action::SearchSubmit);

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: in_flight,
                snapshot: paris(Unit::Metric, 18.0),
            },
        );

        assert!(!result.changed);
        assert_eq!(state.error.as_deref(), Some("Type in a city first."));
    }

    #[test]
    fn test_toggle_without_snapshot_only_flips_unit() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::UiToggleUnits);

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.unit, Unit::Metric);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_toggle_with_snapshot_refetches_same_city() {
        let mut state = AppState::default();
        state.snapshot = Some(paris(Unit::Imperial, 64.4));
        state.city_input = "something else".into();

        let result = reducer(&mut state, Action::UiToggleUnits);

        assert!(state.is_loading);
        assert_eq!(result.effects.len(), 1);
        match &result.effects[0] {
            Effect::FetchWeather { query, .. } => {
                assert_eq!(query.city_name, "Paris");
                assert_eq!(query.unit, Unit::Metric);
            }
        }
    }

    #[test]
    fn test_tick_only_rerenders_while_loading() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);

        state.is_loading = true;
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.tick_count, 1);
    }
}
