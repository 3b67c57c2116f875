use log::debug;

use crate::config::CallbackConfig;

use super::error::DeliveryError;
use super::flow::{FlowState, SubmissionFlow, SubmitOutcome, Ticket};
use super::request::{CallbackRequest, TimeSlot};
use super::session::SubmissionSession;
use super::signals::{FocusTarget, HostSignal};
use super::timers::{Scheduler, TimerKind};
use super::viewport::{ViewportProbe, ViewportTracker};
use super::visibility::VisibilityTrigger;

/// Result of a fired timer, for the host to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    Unchanged,
    Changed,
    /// The host should move focus to the name input.
    FocusNameInput,
}

/// Everything the view needs to render the widget.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetView {
    pub visible: bool,
    pub state: FlowState,
    pub submitting: bool,
    pub bottom_offset_px: f64,
    pub request: CallbackRequest,
}

/// The floating "get a callback" widget: scroll reveal, keyboard
/// avoidance and the submission flow, driven entirely by the host.
pub struct CallbackWidget<S, P> {
    config: CallbackConfig,
    session: SubmissionSession,
    visibility: VisibilityTrigger,
    viewport: ViewportTracker,
    flow: SubmissionFlow,
    scheduler: S,
    probe: P,
    torn_down: bool,
}

impl<S: Scheduler, P: ViewportProbe> CallbackWidget<S, P> {
    pub fn new(config: CallbackConfig, session: SubmissionSession, scheduler: S, probe: P) -> Self {
        Self {
            visibility: VisibilityTrigger::new(config.reveal_threshold_percent),
            viewport: ViewportTracker::new(
                config.visual_viewport_noise_px,
                config.fallback_noise_px,
            ),
            flow: SubmissionFlow::new(config.error_revert_delay, config.success_dismiss_delay),
            config,
            session,
            scheduler,
            probe,
            torn_down: false,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &SubmissionSession {
        &self.session
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[cfg(test)]
    pub fn state(&self) -> FlowState {
        self.flow.state()
    }

    pub fn is_visible(&self) -> bool {
        if self.torn_down || self.session.has_submitted() {
            return false;
        }
        // pinned until the success message dismisses itself
        self.flow.state() == FlowState::Success || self.visibility.threshold_reached()
    }

    pub fn bottom_offset(&self) -> f64 {
        self.viewport.bottom_offset(
            self.flow.state() == FlowState::Form,
            self.probe.is_narrow(),
            self.config.narrow_resting_offset_px,
        )
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            visible: self.is_visible(),
            state: self.flow.state(),
            submitting: self.flow.is_submitting(),
            bottom_offset_px: self.bottom_offset(),
            request: self.flow.request().clone(),
        }
    }

    /// Feeds an environment notification. Returns whether a re-render is needed.
    pub fn handle_signal(&mut self, signal: HostSignal) -> bool {
        if self.torn_down {
            return false;
        }
        match signal {
            HostSignal::Scroll(position) => {
                let before = self.is_visible();
                self.visibility.observe(position.percent(), &self.session);
                before != self.is_visible()
            }
            HostSignal::ViewportResized(sample) => {
                let before = self.bottom_offset();
                self.viewport.observe(sample);
                before != self.bottom_offset()
            }
            HostSignal::FocusIn(FocusTarget::Field) | HostSignal::FocusOut => {
                self.scheduler
                    .schedule(TimerKind::ViewportSettle, self.config.viewport_settle_delay);
                false
            }
            HostSignal::FocusIn(FocusTarget::Other) => false,
        }
    }

    pub fn open(&mut self) -> bool {
        if self.torn_down || !self.flow.open() {
            return false;
        }
        if self.probe.is_narrow() {
            self.scheduler
                .schedule(TimerKind::FocusName, self.config.autofocus_delay);
        }
        true
    }

    pub fn close(&mut self) -> bool {
        if self.torn_down || !self.flow.close() {
            return false;
        }
        self.scheduler.cancel(TimerKind::FocusName);
        true
    }

    pub fn set_name(&mut self, name: String) -> bool {
        !self.torn_down && self.flow.set_name(name)
    }

    pub fn set_mobile(&mut self, mobile: String) -> bool {
        !self.torn_down && self.flow.set_mobile(mobile)
    }

    pub fn set_time_slot(&mut self, slot: Option<TimeSlot>) -> bool {
        !self.torn_down && self.flow.set_time_slot(slot)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.torn_down {
            return SubmitOutcome::Ignored;
        }
        self.flow.submit(&mut self.scheduler)
    }

    pub fn on_delivery(&mut self, ticket: Ticket, result: Result<(), DeliveryError>) -> bool {
        if self.torn_down {
            debug!("Delivery result arrived after teardown, dropping");
            return false;
        }
        self.flow.on_delivery(ticket, result, &mut self.scheduler)
    }

    pub fn on_timer(&mut self, kind: TimerKind) -> TimerOutcome {
        if self.torn_down {
            return TimerOutcome::Unchanged;
        }
        let changed = match kind {
            TimerKind::ViewportSettle => {
                let before = self.bottom_offset();
                self.viewport.observe(self.probe.sample());
                before != self.bottom_offset()
            }
            TimerKind::FocusName => {
                if self.flow.state() == FlowState::Form {
                    return TimerOutcome::FocusNameInput;
                }
                false
            }
            TimerKind::ErrorRevert => self.flow.on_timer(kind, &self.session),
            TimerKind::SuccessDismiss => {
                let dismissed = self.flow.on_timer(kind, &self.session);
                if dismissed {
                    self.visibility.suppress();
                }
                dismissed
            }
        };
        if changed {
            TimerOutcome::Changed
        } else {
            TimerOutcome::Unchanged
        }
    }

    /// Cancels every pending timer and drops any in-flight result.
    /// Nothing mutates the widget afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.scheduler.cancel_all();
        self.flow.abandon();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::callback::timers::manual::ManualScheduler;
    use crate::callback::viewport::ViewportSample;
    use crate::callback::visibility::ScrollPosition;

    #[derive(Clone, Default)]
    struct FakeViewport {
        visible_height: Rc<Cell<f64>>,
        narrow: bool,
    }

    impl ViewportProbe for FakeViewport {
        fn sample(&self) -> ViewportSample {
            ViewportSample::Visual {
                layout_height: 800.0,
                visual_height: self.visible_height.get(),
            }
        }

        fn is_narrow(&self) -> bool {
            self.narrow
        }
    }

    type TestWidget = CallbackWidget<ManualScheduler, FakeViewport>;

    fn widget_with(session: SubmissionSession, probe: FakeViewport) -> TestWidget {
        probe.visible_height.set(800.0);
        CallbackWidget::new(
            CallbackConfig::default(),
            session,
            ManualScheduler::default(),
            probe,
        )
    }

    fn new_widget() -> TestWidget {
        widget_with(SubmissionSession::default(), FakeViewport::default())
    }

    fn scroll_to(widget: &mut TestWidget, percent: f64) -> bool {
        widget.handle_signal(HostSignal::Scroll(ScrollPosition {
            offset_y: percent * 10.0,
            scroll_height: 2000.0,
            viewport_height: 1000.0,
        }))
    }

    /// Advances virtual time and fires whatever expired.
    fn run_for(widget: &mut TestWidget, by: Duration) -> Vec<TimerOutcome> {
        let due = widget.scheduler_mut().advance(by);
        due.into_iter().map(|kind| widget.on_timer(kind)).collect()
    }

    fn fill_valid(widget: &mut TestWidget) {
        widget.set_name("Ravi Kumar".to_string());
        widget.set_mobile("9123456780".to_string());
        widget.set_time_slot(Some(TimeSlot::Morning));
    }

    fn dispatch(widget: &mut TestWidget) -> Ticket {
        match widget.submit() {
            SubmitOutcome::Dispatch(delivery) => delivery.ticket,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn visibility_follows_scroll_threshold() {
        let mut widget = new_widget();
        for percent in [0.0, 30.0, 59.0] {
            scroll_to(&mut widget, percent);
            assert!(!widget.is_visible(), "{percent}");
        }
        for percent in [60.0, 61.0, 100.0] {
            scroll_to(&mut widget, percent);
            assert!(widget.is_visible(), "{percent}");
        }
        scroll_to(&mut widget, 10.0);
        assert!(!widget.is_visible());
    }

    #[test]
    fn prior_submission_keeps_widget_hidden() {
        let mut widget = widget_with(SubmissionSession::new(true), FakeViewport::default());
        for percent in [0.0, 60.0, 100.0] {
            assert!(!scroll_to(&mut widget, percent));
            assert!(!widget.is_visible());
        }
    }

    #[test]
    fn identical_scroll_readings_do_not_rerender() {
        let mut widget = new_widget();
        assert!(scroll_to(&mut widget, 80.0));
        assert!(!scroll_to(&mut widget, 80.0));
    }

    #[test]
    fn open_form_hides_when_scrolling_back() {
        let mut widget = new_widget();
        scroll_to(&mut widget, 70.0);
        widget.open();
        assert!(widget.is_visible());
        assert!(scroll_to(&mut widget, 5.0));
        assert!(!widget.is_visible());
        assert_eq!(widget.state(), FlowState::Form);

        assert!(scroll_to(&mut widget, 65.0));
        assert!(widget.is_visible());
    }

    #[test]
    fn error_state_follows_scroll_threshold() {
        let mut widget = new_widget();
        scroll_to(&mut widget, 70.0);
        widget.open();
        fill_valid(&mut widget);
        let ticket = dispatch(&mut widget);
        widget.on_delivery(ticket, Err(DeliveryError::Rejected { status: 502 }));
        assert_eq!(widget.state(), FlowState::Error);

        scroll_to(&mut widget, 20.0);
        assert!(!widget.is_visible());
    }

    #[test]
    fn success_message_stays_up_below_threshold() {
        let mut widget = new_widget();
        scroll_to(&mut widget, 70.0);
        widget.open();
        fill_valid(&mut widget);
        let ticket = dispatch(&mut widget);
        widget.on_delivery(ticket, Ok(()));

        scroll_to(&mut widget, 10.0);
        assert!(widget.is_visible());
    }

    #[test]
    fn successful_submission_dismisses_after_five_seconds() {
        let session = SubmissionSession::default();
        let mut widget = widget_with(session.clone(), FakeViewport::default());
        scroll_to(&mut widget, 75.0);
        assert!(widget.open());
        fill_valid(&mut widget);

        let ticket = dispatch(&mut widget);
        assert!(widget.view().submitting);
        assert!(widget.on_delivery(ticket, Ok(())));
        assert_eq!(widget.state(), FlowState::Success);
        assert!(widget.is_visible());

        run_for(&mut widget, Duration::from_millis(4_999));
        assert_eq!(widget.state(), FlowState::Success);
        assert!(!session.has_submitted());

        assert_eq!(run_for(&mut widget, Duration::from_millis(1)), vec![TimerOutcome::Changed]);
        assert_eq!(widget.state(), FlowState::Compact);
        assert_eq!(widget.view().request, CallbackRequest::default());
        assert!(session.has_submitted());
        assert!(!widget.is_visible());

        scroll_to(&mut widget, 100.0);
        assert!(!widget.is_visible());
    }

    #[test]
    fn failed_delivery_returns_to_form_with_fields_intact() {
        let mut widget = new_widget();
        scroll_to(&mut widget, 75.0);
        widget.open();
        fill_valid(&mut widget);
        let before = widget.view().request;

        let ticket = dispatch(&mut widget);
        assert!(widget.on_delivery(ticket, Err(DeliveryError::Rejected { status: 500 })));
        assert_eq!(widget.state(), FlowState::Error);
        assert!(!widget.view().submitting);

        run_for(&mut widget, Duration::from_millis(2_999));
        assert_eq!(widget.state(), FlowState::Error);
        run_for(&mut widget, Duration::from_millis(1));
        assert_eq!(widget.state(), FlowState::Form);
        assert_eq!(widget.view().request, before);
        assert!(!widget.session().has_submitted());
    }

    #[test]
    fn invalid_mobile_shows_error_then_form() {
        let mut widget = new_widget();
        widget.open();
        fill_valid(&mut widget);
        widget.set_mobile("12345678901".to_string());

        assert!(matches!(widget.submit(), SubmitOutcome::Rejected(_)));
        assert_eq!(widget.state(), FlowState::Error);
        run_for(&mut widget, Duration::from_secs(3));
        assert_eq!(widget.state(), FlowState::Form);
        assert_eq!(widget.view().request.mobile, "12345678901");
    }

    #[test]
    fn rapid_double_submit_sends_once() {
        let mut widget = new_widget();
        widget.open();
        fill_valid(&mut widget);

        let outcomes = [widget.submit(), widget.submit()];
        let dispatched = outcomes
            .iter()
            .filter(|o| matches!(o, SubmitOutcome::Dispatch(_)))
            .count();
        assert_eq!(dispatched, 1);
        assert_eq!(outcomes[1], SubmitOutcome::Ignored);
    }

    #[test]
    fn teardown_during_success_window_blocks_dismiss() {
        let session = SubmissionSession::default();
        let mut widget = widget_with(session.clone(), FakeViewport::default());
        widget.open();
        fill_valid(&mut widget);
        let ticket = dispatch(&mut widget);
        widget.on_delivery(ticket, Ok(()));

        widget.teardown();
        assert_eq!(widget.scheduler_mut().pending_count(), 0);
        assert_eq!(widget.on_timer(TimerKind::SuccessDismiss), TimerOutcome::Unchanged);
        assert_eq!(widget.state(), FlowState::Success);
        assert!(!session.has_submitted());
    }

    #[test]
    fn result_arriving_after_teardown_is_ignored() {
        let mut widget = new_widget();
        widget.open();
        fill_valid(&mut widget);
        let ticket = dispatch(&mut widget);

        widget.teardown();
        assert!(!widget.on_delivery(ticket, Ok(())));
        assert_eq!(widget.state(), FlowState::Form);
        assert_eq!(widget.scheduler_mut().pending_count(), 0);
    }

    #[test]
    fn focus_resamples_viewport_after_settling() {
        let probe = FakeViewport {
            narrow: true,
            ..FakeViewport::default()
        };
        let mut widget = widget_with(SubmissionSession::default(), probe.clone());
        widget.open();
        assert_eq!(widget.bottom_offset(), 80.0);

        probe.visible_height.set(480.0);
        widget.handle_signal(HostSignal::FocusIn(FocusTarget::Field));
        assert_eq!(widget.bottom_offset(), 80.0);

        let outcomes = run_for(&mut widget, Duration::from_millis(300));
        assert!(outcomes.contains(&TimerOutcome::Changed));
        assert_eq!(widget.bottom_offset(), 320.0);

        probe.visible_height.set(790.0);
        widget.handle_signal(HostSignal::FocusOut);
        run_for(&mut widget, Duration::from_millis(300));
        assert_eq!(widget.bottom_offset(), 80.0);
    }

    #[test]
    fn repeated_focus_changes_keep_one_pending_resample() {
        let probe = FakeViewport {
            narrow: true,
            ..FakeViewport::default()
        };
        let mut widget = widget_with(SubmissionSession::default(), probe.clone());
        widget.open();
        run_for(&mut widget, Duration::from_millis(300));

        probe.visible_height.set(480.0);
        widget.handle_signal(HostSignal::FocusIn(FocusTarget::Field));
        run_for(&mut widget, Duration::from_millis(200));
        widget.handle_signal(HostSignal::FocusOut);
        widget.handle_signal(HostSignal::FocusIn(FocusTarget::Field));
        assert_eq!(widget.scheduler_mut().pending_count(), 1);

        // the first resample would have fired here
        assert!(run_for(&mut widget, Duration::from_millis(200)).is_empty());
        assert_eq!(widget.bottom_offset(), 80.0);

        assert_eq!(
            run_for(&mut widget, Duration::from_millis(100)),
            vec![TimerOutcome::Changed]
        );
        assert_eq!(widget.bottom_offset(), 320.0);
    }

    #[test]
    fn focus_on_non_field_is_ignored() {
        let mut widget = new_widget();
        widget.handle_signal(HostSignal::FocusIn(FocusTarget::Other));
        assert!(!widget.scheduler_mut().is_pending(TimerKind::ViewportSettle));
    }

    #[test]
    fn keyboard_offset_only_applies_to_open_form() {
        let mut widget = new_widget();
        let keyboard = HostSignal::ViewportResized(ViewportSample::Visual {
            layout_height: 800.0,
            visual_height: 500.0,
        });
        assert!(!widget.handle_signal(keyboard));
        assert_eq!(widget.bottom_offset(), 0.0);
        widget.open();
        assert_eq!(widget.bottom_offset(), 300.0);
    }

    #[test]
    fn narrow_layout_autofocuses_name_input() {
        let probe = FakeViewport {
            narrow: true,
            ..FakeViewport::default()
        };
        let mut widget = widget_with(SubmissionSession::default(), probe);
        widget.open();
        assert_eq!(
            run_for(&mut widget, Duration::from_millis(300)),
            vec![TimerOutcome::FocusNameInput]
        );

        let mut wide = new_widget();
        wide.open();
        assert!(!wide.scheduler_mut().is_pending(TimerKind::FocusName));
    }

    #[test]
    fn closing_cancels_pending_autofocus() {
        let probe = FakeViewport {
            narrow: true,
            ..FakeViewport::default()
        };
        let mut widget = widget_with(SubmissionSession::default(), probe);
        widget.open();
        widget.close();
        assert!(run_for(&mut widget, Duration::from_secs(1)).is_empty());
    }
}
