//! OpenWeather current-weather client

use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::LookupError;
use crate::format::{icon_url, title_case};
use crate::state::{Query, WeatherSnapshot};

/// `cod` value OpenWeather sends on success. Failures send it as a string.
const SUCCESS_CODE: f64 = 200.0;

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    name: String,
    main: MainReadings,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn request_url(&self, query: &Query) -> String {
        format!(
            "{}?q={}&appid={}&units={}",
            self.endpoint,
            urlencoding::encode(&query.city_name),
            urlencoding::encode(&self.api_key),
            query.unit.as_param()
        )
    }

    /// Fetch current conditions for `query`.
    ///
    /// The HTTP status is not inspected: any JSON body is accepted and the
    /// `cod` field decides between success and [`LookupError::CityNotFound`].
    pub async fn current_weather(&self, query: &Query) -> Result<WeatherSnapshot, LookupError> {
        tracing::debug!(
            city = %query.city_name,
            units = query.unit.as_param(),
            "requesting current weather"
        );

        let response = self.http.get(self.request_url(query)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "weather response received");

        snapshot_from_body(&body, query)
    }
}

/// Decode a response body into a snapshot.
pub fn snapshot_from_body(body: &str, query: &Query) -> Result<WeatherSnapshot, LookupError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| LookupError::Network(format!("unparsable response body: {e}")))?;

    let Some(fields) = value.as_object() else {
        return Err(LookupError::Network(
            "response body is not a JSON object".into(),
        ));
    };

    // Numeric comparison, so `200` and `200.0` both count
    if fields.get("cod").and_then(Value::as_f64) != Some(SUCCESS_CODE) {
        return Err(LookupError::CityNotFound);
    }

    let parsed: CurrentWeather = serde_json::from_value(value)
        .map_err(|e| LookupError::Network(format!("malformed weather payload: {e}")))?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Network("response contained no weather conditions".into()))?;

    Ok(WeatherSnapshot {
        city_name: parsed.name,
        temperature: parsed.main.temp,
        unit: query.unit,
        description: title_case(&condition.description),
        icon_url: icon_url(&condition.icon),
        icon_code: condition.icon,
    })
}
