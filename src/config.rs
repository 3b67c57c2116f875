use std::time::Duration;

#[cfg(debug_assertions)]
pub fn get_callback_endpoint() -> &'static str {
    match option_env!("CALLBACK_ENDPOINT") {
        Some(url) => url,
        None => "http://localhost:3001/f/callback", // Local form sink when developing
    }
}

#[cfg(not(debug_assertions))]
pub fn get_callback_endpoint() -> &'static str {
    match option_env!("CALLBACK_ENDPOINT") {
        Some(url) => url,
        None => "https://usebasin.com/f/6eb15177c7ef",
    }
}

pub const WHATSAPP_NUMBER: &str = "919560997631";
pub const WHATSAPP_GREETING: &str =
    "Hi, I would like to know more about Early's Metabolic Reset Program!";

/// Layouts narrower than this get the mobile bottom navigation.
pub const NARROW_LAYOUT_MAX_WIDTH: f64 = 1024.0;

/// Knobs for the floating callback widget.
#[derive(Clone, Debug, PartialEq)]
pub struct CallbackConfig {
    /// Percent of the page that must be scrolled before the widget shows.
    pub reveal_threshold_percent: f64,
    pub error_revert_delay: Duration,
    pub success_dismiss_delay: Duration,
    pub viewport_settle_delay: Duration,
    pub autofocus_delay: Duration,
    /// Keyboard heights at or below these floors count as no keyboard.
    pub visual_viewport_noise_px: f64,
    pub fallback_noise_px: f64,
    /// Resting distance from the bottom edge on narrow layouts.
    pub narrow_resting_offset_px: f64,
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            reveal_threshold_percent: 60.0,
            error_revert_delay: Duration::from_secs(3),
            success_dismiss_delay: Duration::from_secs(5),
            viewport_settle_delay: Duration::from_millis(300),
            autofocus_delay: Duration::from_millis(300),
            visual_viewport_noise_px: 50.0,
            fallback_noise_px: 100.0,
            narrow_resting_offset_px: 80.0,
        }
    }
}
