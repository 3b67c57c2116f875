use std::time::Duration;

use log::{debug, error, warn};

use super::error::{DeliveryError, ValidationError};
use super::request::{CallbackRequest, LeadPayload, TimeSlot};
use super::session::SubmissionSession;
use super::timers::{Scheduler, TimerKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Compact,
    Form,
    Success,
    Error,
}

/// Identifies one outbound request. Results for any other ticket are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A request the host must send, then report back with `on_delivery`.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub ticket: Ticket,
    pub payload: LeadPayload,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Dispatch(Delivery),
    Rejected(ValidationError),
    /// Not in the form, or a request is already in flight.
    Ignored,
}

pub struct SubmissionFlow {
    state: FlowState,
    request: CallbackRequest,
    in_flight: Option<Ticket>,
    next_ticket: u64,
    error_delay: Duration,
    success_delay: Duration,
}

impl SubmissionFlow {
    pub fn new(error_delay: Duration, success_delay: Duration) -> Self {
        Self {
            state: FlowState::Compact,
            request: CallbackRequest::default(),
            in_flight: None,
            next_ticket: 0,
            error_delay,
            success_delay,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn request(&self) -> &CallbackRequest {
        &self.request
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn open(&mut self) -> bool {
        if self.state != FlowState::Compact {
            return false;
        }
        self.state = FlowState::Form;
        true
    }

    pub fn close(&mut self) -> bool {
        if self.state != FlowState::Form {
            return false;
        }
        self.state = FlowState::Compact;
        true
    }

    pub fn set_name(&mut self, name: String) -> bool {
        self.edit(|request| request.name = name)
    }

    pub fn set_mobile(&mut self, mobile: String) -> bool {
        self.edit(|request| request.mobile = mobile)
    }

    pub fn set_time_slot(&mut self, slot: Option<TimeSlot>) -> bool {
        self.edit(|request| request.time_slot = slot)
    }

    fn edit(&mut self, apply: impl FnOnce(&mut CallbackRequest)) -> bool {
        if self.state != FlowState::Form {
            return false;
        }
        apply(&mut self.request);
        true
    }

    pub fn submit(&mut self, timers: &mut dyn Scheduler) -> SubmitOutcome {
        if self.state != FlowState::Form || self.in_flight.is_some() {
            return SubmitOutcome::Ignored;
        }
        match self.request.validate() {
            Ok(payload) => {
                let ticket = Ticket(self.next_ticket);
                self.next_ticket += 1;
                self.in_flight = Some(ticket);
                debug!("Dispatching callback request {:?}", ticket);
                SubmitOutcome::Dispatch(Delivery { ticket, payload })
            }
            Err(reason) => {
                warn!("Callback request rejected: {}", reason);
                self.fail(timers);
                SubmitOutcome::Rejected(reason)
            }
        }
    }

    /// Applies the result of a dispatched request. Returns whether anything changed.
    pub fn on_delivery(
        &mut self,
        ticket: Ticket,
        result: Result<(), DeliveryError>,
        timers: &mut dyn Scheduler,
    ) -> bool {
        if self.in_flight != Some(ticket) {
            debug!("Ignoring stale delivery result for {:?}", ticket);
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(()) => {
                self.state = FlowState::Success;
                timers.schedule(TimerKind::SuccessDismiss, self.success_delay);
                true
            }
            Err(e) => {
                error!("Form submission error: {}", e);
                if self.state != FlowState::Form {
                    // closed while sending; stay out of the way
                    return true;
                }
                self.fail(timers);
                true
            }
        }
    }

    fn fail(&mut self, timers: &mut dyn Scheduler) {
        self.state = FlowState::Error;
        timers.schedule(TimerKind::ErrorRevert, self.error_delay);
    }

    /// Handles the flow's own timers. Returns whether the state changed.
    pub fn on_timer(&mut self, kind: TimerKind, session: &SubmissionSession) -> bool {
        match (kind, self.state) {
            (TimerKind::ErrorRevert, FlowState::Error) => {
                self.state = FlowState::Form;
                true
            }
            (TimerKind::SuccessDismiss, FlowState::Success) => {
                self.state = FlowState::Compact;
                self.request.clear();
                session.mark_submitted();
                true
            }
            _ => false,
        }
    }

    /// Forgets any in-flight request so its result is dropped.
    pub fn abandon(&mut self) {
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::timers::manual::ManualScheduler;

    fn flow() -> SubmissionFlow {
        SubmissionFlow::new(Duration::from_secs(3), Duration::from_secs(5))
    }

    fn open_filled(flow: &mut SubmissionFlow) {
        assert!(flow.open());
        flow.set_name("Asha".to_string());
        flow.set_mobile("9876543210".to_string());
        flow.set_time_slot(Some(TimeSlot::Evening));
    }

    fn dispatch(flow: &mut SubmissionFlow, timers: &mut ManualScheduler) -> Delivery {
        match flow.submit(timers) {
            SubmitOutcome::Dispatch(delivery) => delivery,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    #[test]
    fn open_and_close_toggle_between_compact_and_form() {
        let mut flow = flow();
        assert_eq!(flow.state(), FlowState::Compact);
        assert!(!flow.close());
        assert!(flow.open());
        assert!(!flow.open());
        assert_eq!(flow.state(), FlowState::Form);
        assert!(flow.close());
        assert_eq!(flow.state(), FlowState::Compact);
    }

    #[test]
    fn edits_outside_the_form_are_ignored() {
        let mut flow = flow();
        assert!(!flow.set_name("x".to_string()));
        assert_eq!(flow.request(), &CallbackRequest::default());
    }

    #[test]
    fn invalid_mobile_never_dispatches() {
        let mut flow = flow();
        let mut timers = ManualScheduler::default();
        open_filled(&mut flow);
        flow.set_mobile("98765".to_string());

        assert_eq!(
            flow.submit(&mut timers),
            SubmitOutcome::Rejected(ValidationError::InvalidMobile)
        );
        assert_eq!(flow.state(), FlowState::Error);
        assert!(!flow.is_submitting());
        assert!(timers.is_pending(TimerKind::ErrorRevert));
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut flow = flow();
        let mut timers = ManualScheduler::default();
        open_filled(&mut flow);

        let first = dispatch(&mut flow, &mut timers);
        assert!(flow.is_submitting());
        assert_eq!(flow.submit(&mut timers), SubmitOutcome::Ignored);
        assert_eq!(first.payload.mobile, "9876543210");
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut flow = flow();
        let mut timers = ManualScheduler::default();
        open_filled(&mut flow);
        let delivery = dispatch(&mut flow, &mut timers);
        flow.abandon();

        assert!(!flow.on_delivery(delivery.ticket, Ok(()), &mut timers));
        assert_eq!(flow.state(), FlowState::Form);
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn failure_after_close_stays_compact() {
        let mut flow = flow();
        let mut timers = ManualScheduler::default();
        open_filled(&mut flow);
        let delivery = dispatch(&mut flow, &mut timers);
        assert!(flow.close());

        flow.on_delivery(
            delivery.ticket,
            Err(DeliveryError::Transport("offline".to_string())),
            &mut timers,
        );
        assert_eq!(flow.state(), FlowState::Compact);
        assert!(!flow.is_submitting());
        assert!(!timers.is_pending(TimerKind::ErrorRevert));
    }

    #[test]
    fn success_after_close_still_confirms() {
        let mut flow = flow();
        let mut timers = ManualScheduler::default();
        open_filled(&mut flow);
        let delivery = dispatch(&mut flow, &mut timers);
        flow.close();

        assert!(flow.on_delivery(delivery.ticket, Ok(()), &mut timers));
        assert_eq!(flow.state(), FlowState::Success);
        assert!(timers.is_pending(TimerKind::SuccessDismiss));
    }

    #[test]
    fn timers_only_act_in_their_own_state() {
        let mut flow = flow();
        let session = SubmissionSession::default();
        assert!(!flow.on_timer(TimerKind::SuccessDismiss, &session));
        assert!(!flow.on_timer(TimerKind::ErrorRevert, &session));
        flow.open();
        assert!(!flow.on_timer(TimerKind::SuccessDismiss, &session));
        assert!(!session.has_submitted());
    }
}
