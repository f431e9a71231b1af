//! Reveal-on-scroll bookkeeping for a single page region.
//!
//! The browser side (`IntersectionObserver`) lives in
//! `components::scroll_reveal`; this module only decides what a crossing
//! report means for the region.

use crate::config::{SiteConfig, REVEAL_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Detached,
    Observing,
    Released,
}

/// What the caller should do after feeding an observation in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Region just became visible. Stop observing it.
    Shown,
    Unchanged,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealController {
    threshold: f64,
    visible: bool,
    phase: Phase,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealController {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
            phase: Phase::Detached,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn attach(&mut self) {
        if self.phase == Phase::Detached {
            self.phase = Phase::Observing;
        }
    }

    /// Feed one intersection report. Only the first crossing while observing
    /// has any effect.
    ///
    /// The observer is registered with `threshold`, so the browser has
    /// already decided the crossing; the reported ratio can land a hair under
    /// the threshold from pixel rounding and is not checked again.
    pub fn observe(&mut self, is_intersecting: bool) -> Reveal {
        if self.phase != Phase::Observing || !is_intersecting {
            return Reveal::Unchanged;
        }
        self.visible = true;
        self.phase = Phase::Released;
        Reveal::Shown
    }

    pub fn detach(&mut self) {
        self.phase = Phase::Released;
    }

    /// No viewport detector available: show the region right away.
    pub fn fail_open(&mut self) {
        self.visible = true;
        self.phase = Phase::Released;
    }
}

/// Threshold a region should observe with: its own if it asks for one,
/// otherwise the site-wide value. Regions keyed on this rebuild their
/// observer when it changes.
pub fn effective_threshold(requested: Option<f64>, config: &SiteConfig) -> f64 {
    requested.unwrap_or(config.reveal_threshold).clamp(0.0, 1.0)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub class: &'static str,
    pub style: String,
}

pub fn presentation(visible: bool, delay_ms: u32) -> Presentation {
    Presentation {
        class: if visible { "reveal reveal--shown" } else { "reveal" },
        style: format!("transition-delay: {}ms;", delay_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observing() -> RevealController {
        let mut controller = RevealController::default();
        controller.attach();
        controller
    }

    #[test]
    fn starts_hidden_and_detached() {
        let controller = RevealController::default();
        assert!(!controller.visible());
        assert_eq!(controller.phase(), Phase::Detached);
    }

    #[test]
    fn stays_hidden_without_a_crossing() {
        let mut controller = observing();
        for _ in 0..10 {
            assert_eq!(controller.observe(false), Reveal::Unchanged);
        }
        assert!(!controller.visible());
        assert_eq!(controller.phase(), Phase::Observing);
    }

    #[test]
    fn intersecting_report_reveals_whatever_the_threshold() {
        // The browser may report a ratio rounded under the registered
        // threshold; the intersecting flag alone decides.
        for threshold in [0.1, 0.5, 1.0] {
            let mut controller = RevealController::new(threshold);
            controller.attach();
            assert_eq!(controller.observe(true), Reveal::Shown, "threshold {}", threshold);
            assert!(controller.visible());
        }
    }

    #[test]
    fn first_crossing_reveals_and_releases() {
        let mut controller = observing();
        assert_eq!(controller.observe(true), Reveal::Shown);
        assert!(controller.visible());
        assert_eq!(controller.phase(), Phase::Released);
    }

    #[test]
    fn later_crossings_are_ignored() {
        let mut controller = observing();
        controller.observe(true);
        assert_eq!(controller.observe(false), Reveal::Unchanged);
        assert_eq!(controller.observe(true), Reveal::Unchanged);
        assert!(controller.visible());
    }

    #[test]
    fn detach_before_crossing_blocks_later_reports() {
        let mut controller = observing();
        controller.detach();
        assert_eq!(controller.observe(true), Reveal::Unchanged);
        assert!(!controller.visible());
    }

    #[test]
    fn reports_before_attach_are_ignored() {
        let mut controller = RevealController::default();
        assert_eq!(controller.observe(true), Reveal::Unchanged);
        assert!(!controller.visible());
    }

    #[test]
    fn attach_after_release_does_not_resume() {
        let mut controller = observing();
        controller.detach();
        controller.attach();
        assert_eq!(controller.phase(), Phase::Released);
    }

    #[test]
    fn fail_open_shows_region() {
        let mut controller = RevealController::default();
        controller.fail_open();
        assert!(controller.visible());
        assert_eq!(controller.observe(true), Reveal::Unchanged);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealController::new(4.0).threshold(), 1.0);
        assert_eq!(RevealController::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn region_threshold_overrides_site_default() {
        let config = SiteConfig {
            reveal_threshold: 0.25,
            ..SiteConfig::default()
        };
        assert_eq!(effective_threshold(None, &config), 0.25);
        assert_eq!(effective_threshold(Some(0.6), &config), 0.6);
        assert_eq!(effective_threshold(Some(3.0), &config), 1.0);
    }

    #[test]
    fn threshold_change_is_visible_to_the_observer_key() {
        let config = SiteConfig::default();
        let before = effective_threshold(Some(0.1), &config);
        let after = effective_threshold(Some(0.5), &config);
        assert_ne!(before, after);
        assert_eq!(RevealController::new(after).threshold(), 0.5);
        // Out-of-range requests collapse to the same key and do not rebuild.
        assert_eq!(effective_threshold(Some(2.0), &config), effective_threshold(Some(5.0), &config));
    }

    #[test]
    fn presentation_depends_only_on_inputs() {
        assert_eq!(presentation(false, 0), presentation(false, 0));
        let hidden = presentation(false, 150);
        let shown = presentation(true, 150);
        assert_eq!(hidden.class, "reveal");
        assert_eq!(shown.class, "reveal reveal--shown");
        assert_eq!(shown.style, "transition-delay: 150ms;");
        assert_eq!(hidden.style, shown.style);
    }
}
