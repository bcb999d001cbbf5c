//! Weather stack: coordinates (config override or IP lookup), open-meteo
//! current conditions, nominatim reverse geocoding, and a 30-minute cache
//! in the key-value store.

use crate::storage::Storage;
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const KV_KEY: &str = "weather_cache";
pub const CACHE_SECS: i64 = 30 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp_c: i32,
    pub condition: Condition,
    pub location: String,
    pub is_day: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    Clouds,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl Condition {
    /// WMO weather code buckets as reported by open-meteo.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Condition::Clear,
            1..=3 => Condition::Clouds,
            4..=49 => Condition::Fog,
            50..=69 => Condition::Rain,
            70..=79 => Condition::Snow,
            80..=99 => Condition::Thunderstorm,
            _ => Condition::Clear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Fog => "Fog",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Thunderstorm => "Thunderstorm",
        }
    }

    pub fn glyph(self, is_day: bool) -> &'static str {
        match (self, is_day) {
            (Condition::Clear, true) => "☀",
            (Condition::Clear, false) => "☾",
            (Condition::Clouds, true) => "⛅",
            (Condition::Clouds, false) => "☁",
            (Condition::Fog, _) => "🌫",
            (Condition::Rain, _) => "🌧",
            (Condition::Snow, _) => "❄",
            (Condition::Thunderstorm, _) => "⛈",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedWeather {
    weather: WeatherReport,
    timestamp: i64,
}

/// Return the cached report when it is still inside the freshness window.
pub fn cached(storage: &Storage, now_unix: i64) -> anyhow::Result<Option<WeatherReport>> {
    let Some(json) = storage.get_kv(KV_KEY)? else {
        return Ok(None);
    };
    let Ok(entry) = serde_json::from_str::<CachedWeather>(&json) else {
        return Ok(None);
    };
    if now_unix - entry.timestamp < CACHE_SECS {
        Ok(Some(entry.weather))
    } else {
        Ok(None)
    }
}

pub fn cache(storage: &Storage, report: &WeatherReport, now_unix: i64) -> anyhow::Result<()> {
    let entry = CachedWeather {
        weather: report.clone(),
        timestamp: now_unix,
    };
    let json = serde_json::to_string(&entry).context("serialize weather cache")?;
    storage.put_kv(KV_KEY, &json, now_unix)
}

#[derive(Debug, Deserialize)]
struct ForecastBody {
    current: ForecastCurrent,
}

#[derive(Debug, Deserialize)]
struct ForecastCurrent {
    temperature_2m: f64,
    weathercode: u32,
    is_day: u8,
}

#[derive(Debug, Deserialize)]
struct GeocodeBody {
    #[serde(default)]
    address: GeocodeAddress,
}

#[derive(Debug, Default, Deserialize)]
struct GeocodeAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpLocateBody {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
}

impl WeatherClient {
    pub fn new() -> Self {
        Self {
            client: super::http_client(),
        }
    }

    /// Coordinates from the IP geolocation service. The terminal has no
    /// permission prompt to ask; this is the nearest collaborator.
    pub async fn locate(&self) -> anyhow::Result<(f64, f64)> {
        let body: IpLocateBody = self
            .client
            .get("http://ip-api.com/json")
            .send()
            .await
            .context("ip lookup request")?
            .error_for_status()
            .context("ip lookup status")?
            .json()
            .await
            .context("ip lookup body")?;
        Ok((body.lat, body.lon))
    }

    pub async fn fetch(&self, latitude: f64, longitude: f64) -> anyhow::Result<WeatherReport> {
        let url = format!(
            "https://api.open-meteo.com/v1/forecast?latitude={latitude}&longitude={longitude}&current=temperature_2m,weathercode,is_day&timezone=auto"
        );
        let body: ForecastBody = self
            .client
            .get(&url)
            .send()
            .await
            .context("forecast request")?
            .error_for_status()
            .context("forecast status")?
            .json()
            .await
            .context("forecast body")?;

        // Reverse geocoding is cosmetic; its failure doesn't sink the report.
        let location = self
            .reverse_geocode(latitude, longitude)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("reverse geocode failed: {e}");
                "Unknown".to_string()
            });

        Ok(WeatherReport {
            temp_c: body.current.temperature_2m.round() as i32,
            condition: Condition::from_code(body.current.weathercode),
            location,
            is_day: body.current.is_day == 1,
        })
    }

    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> anyhow::Result<String> {
        let url = format!(
            "https://nominatim.openstreetmap.org/reverse?lat={latitude}&lon={longitude}&format=json"
        );
        let body: GeocodeBody = self
            .client
            .get(&url)
            .send()
            .await
            .context("geocode request")?
            .error_for_status()
            .context("geocode status")?
            .json()
            .await
            .context("geocode body")?;

        Ok(body
            .address
            .city
            .or(body.address.town)
            .or(body.address.village)
            .unwrap_or_else(|| "Unknown".to_string()))
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> WeatherReport {
        WeatherReport {
            temp_c: 21,
            condition: Condition::Clouds,
            location: "Lisbon".to_string(),
            is_day: true,
        }
    }

    #[test]
    fn condition_code_buckets() {
        assert_eq!(Condition::from_code(0), Condition::Clear);
        assert_eq!(Condition::from_code(2), Condition::Clouds);
        assert_eq!(Condition::from_code(45), Condition::Fog);
        assert_eq!(Condition::from_code(61), Condition::Rain);
        assert_eq!(Condition::from_code(73), Condition::Snow);
        assert_eq!(Condition::from_code(95), Condition::Thunderstorm);
        assert_eq!(Condition::from_code(200), Condition::Clear);
    }

    #[test]
    fn cache_valid_strictly_inside_window() {
        let storage = Storage::open_in_memory().unwrap();
        let stored = report();
        cache(&storage, &stored, 1_000).unwrap();

        assert_eq!(cached(&storage, 1_000).unwrap(), Some(stored.clone()));
        assert_eq!(
            cached(&storage, 1_000 + CACHE_SECS - 1).unwrap(),
            Some(stored)
        );
        // At exactly 30 minutes the cache is stale.
        assert_eq!(cached(&storage, 1_000 + CACHE_SECS).unwrap(), None);
    }

    #[test]
    fn corrupt_cache_reads_as_miss() {
        let storage = Storage::open_in_memory().unwrap();
        storage.put_kv(KV_KEY, "{nope", 0).unwrap();
        assert_eq!(cached(&storage, 1).unwrap(), None);
    }
}
