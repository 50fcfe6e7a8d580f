//! Effects - side effects declared by the reducer

use std::time::Duration;

use crate::action::Action;
use crate::api::OpenWeatherClient;
use crate::state::Query;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Look up current weather; the result carries `request` back
    FetchWeather { request: u64, query: Query },
}

/// Body of the fetch task.
///
/// The reveal delay starts once the outcome is known and applies to every
/// outcome alike; it never holds back the request itself.
pub async fn fetch_weather(
    client: &OpenWeatherClient,
    request: u64,
    query: Query,
    reveal_delay: Duration,
) -> Action {
    let outcome = client.current_weather(&query).await;

    if !reveal_delay.is_zero() {
        tokio::time::sleep(reveal_delay).await;
    }

    match outcome {
        Ok(snapshot) => {
            tracing::info!(request, city = %snapshot.city_name, "weather loaded");
            Action::WeatherDidLoad { request, snapshot }
        }
        Err(err) => {
            tracing::warn!(
                request,
                city = %query.city_name,
                detail = err.detail().unwrap_or_default(),
                "weather lookup failed: {err}"
            );
            Action::WeatherDidError {
                request,
                message: err.to_string(),
            }
        }
    }
}
