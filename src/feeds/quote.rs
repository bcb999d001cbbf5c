//! Quote of the day via the advice API, with built-in fallbacks.

use rand::Rng;
use serde::Deserialize;

const ADVICE_URL: &str = "https://api.adviceslip.com/advice";

pub const FALLBACK_QUOTES: [&str; 8] = [
    "The journey of a thousand miles begins with one step.",
    "Dream big and dare to fail.",
    "Stay focused and never give up.",
    "Simplicity is the ultimate sophistication.",
    "Believe you can and you're halfway there.",
    "The only way to do great work is to love what you do.",
    "Success is not final, failure is not fatal.",
    "Every moment is a fresh beginning.",
];

#[derive(Debug, Deserialize)]
struct AdviceSlip {
    slip: Slip,
}

#[derive(Debug, Deserialize)]
struct Slip {
    advice: String,
}

pub fn fallback_quote<R: Rng>(rng: &mut R) -> String {
    FALLBACK_QUOTES[rng.random_range(0..FALLBACK_QUOTES.len())].to_string()
}

#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: reqwest::Client,
}

impl QuoteClient {
    pub fn new() -> Self {
        Self {
            client: super::http_client(),
        }
    }

    /// One attempt against the API; any failure silently falls back to a
    /// built-in quote.
    pub async fn fetch(&self) -> String {
        let result = async {
            let response = self.client.get(ADVICE_URL).send().await?;
            response.error_for_status()?.json::<AdviceSlip>().await
        }
        .await;

        match result {
            Ok(body) => body.slip.advice,
            Err(e) => {
                tracing::warn!("quote api unavailable: {e}");
                fallback_quote(&mut rand::rng())
            }
        }
    }
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_comes_from_builtin_set() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let q = fallback_quote(&mut rng);
            assert!(FALLBACK_QUOTES.contains(&q.as_str()));
        }
    }
}
