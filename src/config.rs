use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::kv::{loader, thumbnail};

pub const DEFAULT_URL: &str = "https://www.lge.co.kr/tvs/oled48b4nna-stand";
const DEFAULT_LATENCY_SECS: f64 = 7.0;
const DEFAULT_TALL_DISPLAY_WIDTH: u32 = 520;
const IMAGE_DIR_NAME: &str = "image";

/// Runtime settings, read once at start-up
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Folder holding KV1..KV6
    pub image_dir: PathBuf,
    /// Larger-side ceiling applied when decoding
    pub max_decode_px: u32,
    /// Grid thumbnail box (width, height)
    pub thumbnail_box: (u32, u32),
    /// Pretend processing time for analysis and edit
    pub latency: Duration,
    /// Display width for tall visuals in zoom/result views
    pub tall_display_width: u32,
    /// Initial value of the URL field
    pub default_url: String,
}

impl Config {
    /// Load from the process environment (after `.env`, if present)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let image_dir = lookup("KV_IMAGE_DIR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_image_dir);

        let max_decode_px = parse_or(&lookup, "KV_MAX_DECODE_PX", loader::DEFAULT_MAX_DIMENSION, |v| {
            v.parse::<u32>().ok().filter(|px| *px > 0)
        });

        let thumbnail_box = parse_or(&lookup, "KV_THUMBNAIL_BOX", thumbnail::DEFAULT_BOX, parse_box);

        let latency_secs = parse_or(&lookup, "KV_SIMULATED_LATENCY_SECS", DEFAULT_LATENCY_SECS, |v| {
            v.parse::<f64>().ok().filter(|secs| secs.is_finite() && *secs >= 0.0)
        });

        let tall_display_width = parse_or(&lookup, "KV_TALL_DISPLAY_WIDTH", DEFAULT_TALL_DISPLAY_WIDTH, |v| {
            v.parse::<u32>().ok().filter(|px| *px > 0)
        });

        Config {
            image_dir,
            max_decode_px,
            thumbnail_box,
            latency: Duration::from_secs_f64(latency_secs),
            tall_display_width,
            default_url: lookup("KV_DEFAULT_URL").unwrap_or_else(|| DEFAULT_URL.to_string()),
        }
    }
}

/// Parse a variable, warning and falling back to `default` on bad input
fn parse_or<T, F, P>(lookup: &F, name: &str, default: T, parse: P) -> T
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let Some(raw) = lookup(name) else {
        return default;
    };

    match parse(raw.trim()) {
        Some(value) => value,
        None => {
            warn!("Invalid {} value '{}'; using the default.", name, raw);
            default
        }
    }
}

/// "640x480", "640X480" or "640" (square)
fn parse_box(value: &str) -> Option<(u32, u32)> {
    let (width, height) = match value.split_once(|c| c == 'x' || c == 'X') {
        Some((w, h)) => (w.trim().parse().ok()?, h.trim().parse().ok()?),
        None => {
            let side = value.parse().ok()?;
            (side, side)
        }
    };

    (width > 0 && height > 0).then_some((width, height))
}

/// `image/` next to the executable when it exists, else `./image`
fn default_image_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(IMAGE_DIR_NAME)))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from(IMAGE_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.max_decode_px, 2400);
        assert_eq!(config.thumbnail_box, (640, 640));
        assert_eq!(config.latency, Duration::from_secs(7));
        assert_eq!(config.tall_display_width, 520);
        assert_eq!(config.default_url, DEFAULT_URL);
        assert!(config.image_dir.ends_with("image"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("KV_IMAGE_DIR", " /data/kv "),
            ("KV_MAX_DECODE_PX", "1200"),
            ("KV_THUMBNAIL_BOX", "320x240"),
            ("KV_SIMULATED_LATENCY_SECS", "0.5"),
            ("KV_TALL_DISPLAY_WIDTH", "400"),
            ("KV_DEFAULT_URL", "https://shop.example/p/1"),
        ]);
        assert_eq!(config.image_dir, PathBuf::from("/data/kv"));
        assert_eq!(config.max_decode_px, 1200);
        assert_eq!(config.thumbnail_box, (320, 240));
        assert_eq!(config.latency, Duration::from_millis(500));
        assert_eq!(config.tall_display_width, 400);
        assert_eq!(config.default_url, "https://shop.example/p/1");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("KV_MAX_DECODE_PX", "0"),
            ("KV_THUMBNAIL_BOX", "wide"),
            ("KV_SIMULATED_LATENCY_SECS", "-3"),
            ("KV_TALL_DISPLAY_WIDTH", "abc"),
            ("KV_IMAGE_DIR", "   "),
        ]);
        assert_eq!(config.max_decode_px, 2400);
        assert_eq!(config.thumbnail_box, (640, 640));
        assert_eq!(config.latency, Duration::from_secs(7));
        assert_eq!(config.tall_display_width, 520);
        assert!(config.image_dir.ends_with("image"));
    }

    #[test]
    fn test_parse_box_forms() {
        assert_eq!(parse_box("512"), Some((512, 512)));
        assert_eq!(parse_box("800X600"), Some((800, 600)));
        assert_eq!(parse_box("800 x 600"), Some((800, 600)));
        assert_eq!(parse_box("0x600"), None);
        assert_eq!(parse_box("x"), None);
    }
}
