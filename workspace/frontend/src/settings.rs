use log::Level;
use web_sys::window;

/// How notices reach the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    /// Blocking `window.alert` dialog
    Alert,
    /// Non-blocking toast in the page corner
    Toast,
}

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Full URL of the prediction endpoint
    pub predict_endpoint: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Alert dialogs or toasts
    pub notice_style: NoticeStyle,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            predict_endpoint: common::DEFAULT_ENDPOINT.to_string(),
            log_level: Level::Info,
            debug_mode: false,
            notice_style: NoticeStyle::Alert,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Custom settings from localStorage
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(endpoint)) = storage.get_item("stockcast_predict_endpoint") {
                    settings.predict_endpoint = endpoint;
                }

                if let Ok(Some(log_level)) = storage.get_item("stockcast_log_level") {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }

                if let Ok(Some(style)) = storage.get_item("stockcast_notice_style") {
                    settings.notice_style = match style.to_lowercase().as_str() {
                        "toast" => NoticeStyle::Toast,
                        "alert" => NoticeStyle::Alert,
                        _ => settings.notice_style,
                    };
                }

                if let Ok(Some(duration)) = storage.get_item("stockcast_toast_duration_ms") {
                    if let Ok(duration_val) = duration.parse::<u32>() {
                        settings.toast_duration_ms = duration_val;
                    }
                }
            }
        }

        settings
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
