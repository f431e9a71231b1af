use log::Level;

/// External scheduling page the lead form hands off to.
pub const SCHEDULING_URL: &str = "https://calendly.com/stratai-growth/operations-assessment";

/// Simulated processing time between submit and success.
pub const PROCESSING_DELAY_MS: u32 = 1_500;
/// Time the success panel stays up before the redirect.
pub const HANDOFF_DELAY_MS: u32 = 1_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub scheduling_url: String,
    pub processing_delay_ms: u32,
    pub handoff_delay_ms: u32,
    pub reveal_threshold: f64,
    pub nav_scroll_threshold_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scheduling_url: SCHEDULING_URL.to_string(),
            processing_delay_ms: PROCESSING_DELAY_MS,
            handoff_delay_ms: HANDOFF_DELAY_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            nav_scroll_threshold_px: NAV_SCROLL_THRESHOLD_PX,
        }
    }
}
