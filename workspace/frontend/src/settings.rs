use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "nextbanking_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Delay between expanding a card and scrolling it into view, in milliseconds
    pub scroll_delay_ms: u32,

    /// URL of the 3D card model rendered in the wallet
    pub card_model_url: String,

    /// URL of the Plotly bundle, loaded the first time a chart is shown
    pub plotly_script_url: String,

    /// Organization named in the footer
    pub organization: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            scroll_delay_ms: 100,
            card_model_url: "/static/card.glb".to_string(),
            plotly_script_url: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
            organization: "SecureBank".to_string(),
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| storage.get_item(&format!("{}{}", STORAGE_PREFIX, key)).ok().flatten();

            if let Some(log_level) = read("log_level") {
                settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
            }

            if let Some(delay) = read("scroll_delay_ms") {
                if let Ok(delay) = delay.parse::<u32>() {
                    settings.scroll_delay_ms = delay;
                }
            }

            if let Some(url) = read("card_model_url") {
                settings.card_model_url = url;
            }

            if let Some(url) = read("plotly_script_url") {
                settings.plotly_script_url = url;
            }
        }

        settings
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
