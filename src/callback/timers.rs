use std::time::Duration;

/// One-shot timers a widget can have pending. At most one of each kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    ErrorRevert,
    SuccessDismiss,
    ViewportSettle,
    FocusName,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::ErrorRevert,
        TimerKind::SuccessDismiss,
        TimerKind::ViewportSettle,
        TimerKind::FocusName,
    ];
}

/// Host-provided timer facility. Scheduling a kind that is already
/// pending replaces it. The host reports expiry back through
/// `CallbackWidget::on_timer`.
pub trait Scheduler {
    fn schedule(&mut self, kind: TimerKind, delay: Duration);
    fn cancel(&mut self, kind: TimerKind);

    fn cancel_all(&mut self) {
        for kind in TimerKind::ALL {
            self.cancel(kind);
        }
    }
}

#[cfg(test)]
pub mod manual {
    use super::*;

    /// Virtual-time scheduler for driving widgets in tests.
    #[derive(Debug, Default)]
    pub struct ManualScheduler {
        now: Duration,
        pending: Vec<(TimerKind, Duration)>,
    }

    impl ManualScheduler {
        pub fn is_pending(&self, kind: TimerKind) -> bool {
            self.pending.iter().any(|(k, _)| *k == kind)
        }

        pub fn pending_count(&self) -> usize {
            self.pending.len()
        }

        /// Moves time forward and returns the timers that expired, earliest first.
        pub fn advance(&mut self, by: Duration) -> Vec<TimerKind> {
            self.now += by;
            let now = self.now;
            let mut due: Vec<(TimerKind, Duration)> =
                self.pending.iter().copied().filter(|(_, at)| *at <= now).collect();
            due.sort_by_key(|(_, at)| *at);
            self.pending.retain(|(_, at)| *at > now);
            due.into_iter().map(|(kind, _)| kind).collect()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&mut self, kind: TimerKind, delay: Duration) {
            self.cancel(kind);
            self.pending.push((kind, self.now + delay));
        }

        fn cancel(&mut self, kind: TimerKind) {
            self.pending.retain(|(k, _)| *k != kind);
        }
    }
}
