use super::session::SubmissionSession;

/// Raw scroll metrics as reported by the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    pub offset_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollPosition {
    /// Percent of the scrollable range covered, 0 to 100. A page that
    /// cannot scroll reports 0.
    pub fn percent(&self) -> f64 {
        let range = self.scroll_height - self.viewport_height;
        if range <= 0.0 || !range.is_finite() {
            return 0.0;
        }
        (self.offset_y / range * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug)]
pub struct VisibilityTrigger {
    threshold: f64,
    reached: bool,
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            reached: false,
        }
    }

    /// Records a scroll reading. Returns whether the derived state changed.
    /// Readings are ignored once the session has a delivered callback.
    pub fn observe(&mut self, percent: f64, session: &SubmissionSession) -> bool {
        if session.has_submitted() {
            return false;
        }
        let reached = percent >= self.threshold;
        let changed = reached != self.reached;
        self.reached = reached;
        changed
    }

    pub fn threshold_reached(&self) -> bool {
        self.reached
    }

    pub fn suppress(&mut self) {
        self.reached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset_y: f64) -> ScrollPosition {
        ScrollPosition {
            offset_y,
            scroll_height: 3000.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn percent_covers_scrollable_range() {
        assert_eq!(at(0.0).percent(), 0.0);
        assert_eq!(at(1200.0).percent(), 60.0);
        assert_eq!(at(2000.0).percent(), 100.0);
        // overscroll bounce
        assert_eq!(at(2100.0).percent(), 100.0);
        assert_eq!(at(-40.0).percent(), 0.0);
    }

    #[test]
    fn unscrollable_page_reports_zero() {
        let short = ScrollPosition {
            offset_y: 0.0,
            scroll_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(short.percent(), 0.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let session = SubmissionSession::default();
        let mut trigger = VisibilityTrigger::new(60.0);
        for percent in [0.0, 10.0, 59.0, 59.999] {
            trigger.observe(percent, &session);
            assert!(!trigger.threshold_reached(), "{percent}");
        }
        for percent in [60.0, 75.5, 100.0] {
            trigger.observe(percent, &session);
            assert!(trigger.threshold_reached(), "{percent}");
        }
    }

    #[test]
    fn repeated_readings_report_no_change() {
        let session = SubmissionSession::default();
        let mut trigger = VisibilityTrigger::new(60.0);
        assert!(trigger.observe(70.0, &session));
        assert!(!trigger.observe(70.0, &session));
        assert!(!trigger.observe(80.0, &session));
        assert!(trigger.observe(20.0, &session));
    }

    #[test]
    fn prior_submission_suppresses_reveal() {
        let session = SubmissionSession::new(true);
        let mut trigger = VisibilityTrigger::new(60.0);
        assert!(!trigger.observe(95.0, &session));
        assert!(!trigger.threshold_reached());
    }
}
