use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Crates pulled in by the GUI stack that are chatty at info level
const NOISY_TARGETS: [&str; 6] = ["wgpu_core", "wgpu_hal", "naga", "iced_wgpu", "cosmic_text", "winit"];

/// Level used when RUST_LOG is not set
const LEVEL_VAR: &str = "KV_LOG_LEVEL";

/// Install the global stdout subscriber
///
/// `RUST_LOG` wins when set; otherwise `KV_LOG_LEVEL` (default `info`)
/// applies and the GUI stack is capped at `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var(LEVEL_VAR).unwrap_or_default();
        default_filter(&level)
    });

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {err}");
    }
}

fn default_filter(level: &str) -> EnvFilter {
    let level = normalize_level(level);
    let directives = std::iter::once(level.to_string())
        .chain(NOISY_TARGETS.iter().map(|target| format!("{target}=warn")))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

fn normalize_level(value: &str) -> &'static str {
    match value.trim().to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" => "error",
        "off" => "off",
        _ => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("DEBUG"), "debug");
        assert_eq!(normalize_level(" warning "), "warn");
        assert_eq!(normalize_level("verbose"), "info");
        assert_eq!(normalize_level(""), "info");
    }

    #[test]
    fn test_default_filter_caps_gui_stack() {
        let rendered = default_filter("debug").to_string();
        assert!(rendered.contains("debug"));
        assert!(rendered.contains("wgpu_core=warn"));
    }
}
