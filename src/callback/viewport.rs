/// A single measurement of how much of the layout viewport is visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportSample {
    /// Measured through the visual viewport API.
    Visual { layout_height: f64, visual_height: f64 },
    /// No visual viewport; estimated from screen versus window height.
    /// Noisier, so it gets a higher floor.
    Fallback { screen_height: f64, window_height: f64 },
}

impl ViewportSample {
    pub fn intrusion(&self) -> f64 {
        let raw = match *self {
            ViewportSample::Visual {
                layout_height,
                visual_height,
            } => layout_height - visual_height,
            ViewportSample::Fallback {
                screen_height,
                window_height,
            } => screen_height - window_height,
        };
        if raw.is_finite() {
            raw.max(0.0)
        } else {
            0.0
        }
    }
}

/// Reads the current viewport on demand.
pub trait ViewportProbe {
    fn sample(&self) -> ViewportSample;
    fn is_narrow(&self) -> bool;
}

pub struct ViewportTracker {
    visual_noise: f64,
    fallback_noise: f64,
    keyboard_height: f64,
}

impl ViewportTracker {
    pub fn new(visual_noise: f64, fallback_noise: f64) -> Self {
        Self {
            visual_noise,
            fallback_noise,
            keyboard_height: 0.0,
        }
    }

    /// Returns whether the keyboard height changed.
    pub fn observe(&mut self, sample: ViewportSample) -> bool {
        let floor = match sample {
            ViewportSample::Visual { .. } => self.visual_noise,
            ViewportSample::Fallback { .. } => self.fallback_noise,
        };
        let intrusion = sample.intrusion();
        let height = if intrusion > floor { intrusion } else { 0.0 };
        let changed = height != self.keyboard_height;
        self.keyboard_height = height;
        changed
    }

    #[cfg(test)]
    pub fn keyboard_height(&self) -> f64 {
        self.keyboard_height
    }

    /// Distance from the bottom edge. Only the open form rides above the keyboard.
    pub fn bottom_offset(&self, form_open: bool, narrow: bool, narrow_resting: f64) -> f64 {
        if form_open && self.keyboard_height > 0.0 {
            self.keyboard_height
        } else if narrow {
            narrow_resting
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visual(visible: f64) -> ViewportSample {
        ViewportSample::Visual {
            layout_height: 800.0,
            visual_height: visible,
        }
    }

    fn fallback(window: f64) -> ViewportSample {
        ViewportSample::Fallback {
            screen_height: 900.0,
            window_height: window,
        }
    }

    #[test]
    fn visual_viewport_ignores_small_intrusions() {
        let mut tracker = ViewportTracker::new(50.0, 100.0);
        assert!(!tracker.observe(visual(760.0)));
        assert_eq!(tracker.keyboard_height(), 0.0);
        assert!(!tracker.observe(visual(750.0)));
        assert_eq!(tracker.keyboard_height(), 0.0);
        assert!(tracker.observe(visual(500.0)));
        assert_eq!(tracker.keyboard_height(), 300.0);
        assert!(tracker.observe(visual(790.0)));
        assert_eq!(tracker.keyboard_height(), 0.0);
    }

    #[test]
    fn fallback_uses_a_higher_floor() {
        let mut tracker = ViewportTracker::new(50.0, 100.0);
        tracker.observe(fallback(820.0));
        assert_eq!(tracker.keyboard_height(), 0.0);
        tracker.observe(fallback(800.0));
        assert_eq!(tracker.keyboard_height(), 0.0);
        tracker.observe(fallback(560.0));
        assert_eq!(tracker.keyboard_height(), 340.0);
    }

    #[test]
    fn negative_differences_count_as_none() {
        let mut tracker = ViewportTracker::new(50.0, 100.0);
        tracker.observe(fallback(1200.0));
        assert_eq!(tracker.keyboard_height(), 0.0);
        tracker.observe(ViewportSample::Visual {
            layout_height: f64::NAN,
            visual_height: 300.0,
        });
        assert_eq!(tracker.keyboard_height(), 0.0);
    }

    #[test]
    fn offset_applies_only_while_form_is_open() {
        let mut tracker = ViewportTracker::new(50.0, 100.0);
        tracker.observe(visual(500.0));
        assert_eq!(tracker.bottom_offset(true, true, 80.0), 300.0);
        assert_eq!(tracker.bottom_offset(false, true, 80.0), 80.0);
        assert_eq!(tracker.bottom_offset(false, false, 80.0), 0.0);

        tracker.observe(visual(800.0));
        assert_eq!(tracker.bottom_offset(true, false, 80.0), 0.0);
        assert_eq!(tracker.bottom_offset(true, true, 80.0), 80.0);
    }
}
