//! Wallpaper list for the image background, with a built-in picsum
//! fallback so the dashboard never renders without one.

use crate::config::{BackgroundConfig, ImageSource};
use rand::Rng;

const FEED_URL: &str = "https://raw.githubusercontent.com/atrium-sh/feeds/main/wallpapers.json";

fn picsum(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/1920/1080")
}

pub fn fallback_wallpapers() -> Vec<String> {
    ["city", "night", "nature", "sky", "ocean", "mountain"]
        .into_iter()
        .map(picsum)
        .collect()
}

#[derive(Debug, Clone)]
pub struct WallpaperClient {
    client: reqwest::Client,
    feed_url: String,
}

impl WallpaperClient {
    pub fn new() -> Self {
        Self {
            client: super::http_client(),
            feed_url: FEED_URL.to_string(),
        }
    }

    /// Fetch the curated list; any failure silently degrades to the
    /// built-in fallback set.
    pub async fn fetch(&self) -> Vec<String> {
        let result = async {
            let response = self.client.get(&self.feed_url).send().await?;
            response.error_for_status()?.json::<Vec<String>>().await
        }
        .await;

        match result {
            Ok(urls) if !urls.is_empty() => urls,
            Ok(_) => fallback_wallpapers(),
            Err(e) => {
                tracing::warn!("wallpaper feed unavailable: {e}");
                fallback_wallpapers()
            }
        }
    }
}

impl Default for WallpaperClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotation state over the active wallpaper list.
#[derive(Debug, Clone)]
pub struct WallpaperRotation {
    wallpapers: Vec<String>,
    current: usize,
}

impl WallpaperRotation {
    pub fn new(wallpapers: Vec<String>) -> Self {
        let wallpapers = if wallpapers.is_empty() {
            fallback_wallpapers()
        } else {
            wallpapers
        };
        Self {
            wallpapers,
            current: 0,
        }
    }

    pub fn random_url<R: Rng>(&mut self, bg: &BackgroundConfig, rng: &mut R) -> String {
        match bg.image_source {
            ImageSource::Custom if !bg.custom_url.is_empty() => bg.custom_url.clone(),
            ImageSource::Picsum => picsum(&format!("r{}", rng.random_range(0..9999))),
            _ => {
                self.current = rng.random_range(0..self.wallpapers.len());
                self.wallpapers[self.current].clone()
            }
        }
    }

    pub fn next_url<R: Rng>(&mut self, bg: &BackgroundConfig, rng: &mut R) -> String {
        match bg.image_source {
            ImageSource::Custom if !bg.custom_url.is_empty() => bg.custom_url.clone(),
            ImageSource::Picsum => picsum(&format!("n{}", rng.random_range(0..99999))),
            _ => {
                self.current = (self.current + 1) % self.wallpapers.len();
                self.wallpapers[self.current].clone()
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_rotation_cycles_in_order() {
        let mut rot = WallpaperRotation::new(vec!["a".into(), "b".into(), "c".into()]);
        let bg = BackgroundConfig::default();
        let mut rng = rand::rng();

        rot.random_url(&bg, &mut rng);
        let start = rot.current;
        assert_eq!(rot.next_url(&bg, &mut rng), rot.wallpapers[(start + 1) % 3]);
        assert_eq!(rot.next_url(&bg, &mut rng), rot.wallpapers[(start + 2) % 3]);
    }

    #[test]
    fn custom_source_always_returns_configured_url() {
        let mut rot = WallpaperRotation::new(vec!["a".into()]);
        let bg = BackgroundConfig {
            image_source: ImageSource::Custom,
            custom_url: "https://example.com/bg.jpg".into(),
            ..Default::default()
        };
        let mut rng = rand::rng();
        assert_eq!(rot.random_url(&bg, &mut rng), "https://example.com/bg.jpg");
        assert_eq!(rot.next_url(&bg, &mut rng), "https://example.com/bg.jpg");
    }

    #[test]
    fn empty_list_falls_back() {
        let rot = WallpaperRotation::new(vec![]);
        assert_eq!(rot.wallpapers.len(), fallback_wallpapers().len());
    }
}
