use std::collections::HashMap;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, FocusEvent, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::callback::delivery::deliver;
use crate::callback::error::DeliveryError;
use crate::callback::flow::{FlowState, SubmitOutcome, Ticket};
use crate::callback::request::TimeSlot;
use crate::callback::session::SubmissionSession;
use crate::callback::signals::{FocusTarget, HostSignal};
use crate::callback::timers::{Scheduler, TimerKind};
use crate::callback::viewport::{ViewportProbe, ViewportSample};
use crate::callback::visibility::ScrollPosition;
use crate::callback::widget::{CallbackWidget, TimerOutcome, WidgetView};
use crate::config::{self, CallbackConfig};

/// `Scheduler` backed by gloo timeouts. Dropping a handle cancels it.
pub struct TimeoutScheduler {
    on_fire: Callback<TimerKind>,
    pending: HashMap<TimerKind, Timeout>,
}

impl TimeoutScheduler {
    pub fn new(on_fire: Callback<TimerKind>) -> Self {
        Self {
            on_fire,
            pending: HashMap::new(),
        }
    }

    /// Forgets the handle of a timeout that already ran.
    pub fn fired(&mut self, kind: TimerKind) {
        self.pending.remove(&kind);
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, kind: TimerKind, delay: Duration) {
        let on_fire = self.on_fire.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let handle = Timeout::new(millis, move || on_fire.emit(kind));
        self.pending.insert(kind, handle);
    }

    fn cancel(&mut self, kind: TimerKind) {
        // dropping the handle clears the timeout
        self.pending.remove(&kind);
    }
}

/// Reads viewport metrics straight from the browser window.
#[derive(Clone, Copy, Default)]
pub struct WindowViewport;

impl ViewportProbe for WindowViewport {
    fn sample(&self) -> ViewportSample {
        let window = match web_sys::window() {
            Some(window) => window,
            None => {
                return ViewportSample::Visual {
                    layout_height: 0.0,
                    visual_height: 0.0,
                }
            }
        };
        let inner_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        match window.visual_viewport() {
            Some(visual) => ViewportSample::Visual {
                layout_height: inner_height,
                visual_height: visual.height(),
            },
            None => {
                let screen_height = window
                    .screen()
                    .ok()
                    .and_then(|screen| screen.height().ok())
                    .map(f64::from)
                    .unwrap_or(inner_height);
                ViewportSample::Fallback {
                    screen_height,
                    window_height: inner_height,
                }
            }
        }
    }

    fn is_narrow(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map_or(false, |width| width < config::NARROW_LAYOUT_MAX_WIDTH)
    }
}

pub fn current_scroll_position() -> Option<ScrollPosition> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    Some(ScrollPosition {
        offset_y: window.scroll_y().ok()?,
        scroll_height: f64::from(root.scroll_height()),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

/// Scroll, focus and resize listeners. Removed again on drop.
pub struct DomSignals {
    window: web_sys::Window,
    document: web_sys::Document,
    resize_target: EventTarget,
    scroll: Closure<dyn FnMut()>,
    focus_in: Closure<dyn FnMut(FocusEvent)>,
    focus_out: Closure<dyn FnMut()>,
    resize: Closure<dyn FnMut()>,
}

impl DomSignals {
    pub fn attach(on_signal: Callback<HostSignal>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let scroll = {
            let on_signal = on_signal.clone();
            Closure::wrap(Box::new(move || {
                if let Some(position) = current_scroll_position() {
                    on_signal.emit(HostSignal::Scroll(position));
                }
            }) as Box<dyn FnMut()>)
        };

        let focus_in = {
            let on_signal = on_signal.clone();
            Closure::wrap(Box::new(move |e: FocusEvent| {
                let target = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .map(|el| FocusTarget::from_tag_name(&el.tag_name()))
                    .unwrap_or(FocusTarget::Other);
                if target == FocusTarget::Field {
                    debug!("GetCallback - Focus detected on input");
                }
                on_signal.emit(HostSignal::FocusIn(target));
            }) as Box<dyn FnMut(FocusEvent)>)
        };

        let focus_out = {
            let on_signal = on_signal.clone();
            Closure::wrap(Box::new(move || {
                on_signal.emit(HostSignal::FocusOut);
            }) as Box<dyn FnMut()>)
        };

        let resize = Closure::wrap(Box::new(move || {
            let sample = WindowViewport.sample();
            debug!("GetCallback - Keyboard height: {}", sample.intrusion());
            on_signal.emit(HostSignal::ViewportResized(sample));
        }) as Box<dyn FnMut()>);

        // Prefer the visual viewport; plain window resizes are the fallback.
        let resize_target: EventTarget = match window.visual_viewport() {
            Some(visual) => visual.into(),
            None => window.clone().into(),
        };

        let _ = window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());
        let _ = document
            .add_event_listener_with_callback("focusin", focus_in.as_ref().unchecked_ref());
        let _ = document
            .add_event_listener_with_callback("focusout", focus_out.as_ref().unchecked_ref());
        let _ = resize_target
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

        Some(Self {
            window,
            document,
            resize_target,
            scroll,
            focus_in,
            focus_out,
            resize,
        })
    }
}

impl Drop for DomSignals {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        let _ = self.document.remove_event_listener_with_callback(
            "focusin",
            self.focus_in.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "focusout",
            self.focus_out.as_ref().unchecked_ref(),
        );
        let _ = self
            .resize_target
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
    }
}

pub enum GetCallbackMsg {
    Signal(HostSignal),
    Open,
    Close,
    SetName(String),
    SetMobile(String),
    SetTimeSlot(String),
    Submit(SubmitEvent),
    Delivered(Ticket, Result<(), DeliveryError>),
    TimerFired(TimerKind),
}

pub struct GetCallback {
    widget: CallbackWidget<TimeoutScheduler, WindowViewport>,
    signals: Option<DomSignals>,
    name_input: NodeRef,
}

/// Inline placement. Nothing in `WIDGET_CSS` may override `bottom`.
fn position_style(bottom_offset_px: f64) -> String {
    format!("bottom: {}px; transition: bottom 0.3s ease;", bottom_offset_px)
}

const WIDGET_CSS: &str = r#"
                .callback-widget {
                    position: fixed;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    font-family: 'Satoshi', sans-serif;
                    color: #393f2d;
                }
                .callback-compact {
                    background: #dbdfd2;
                    padding: 0.75rem 1.5rem;
                    box-shadow: 0 -10px 30px rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                }
                .callback-row {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .callback-compact h3 {
                    font-weight: 700;
                    font-size: 1rem;
                    margin: 0;
                }
                .callback-compact p {
                    font-size: 0.875rem;
                    margin: 0;
                }
                .callback-compact button {
                    background: #ffffff;
                    color: #393f2d;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem 1.5rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .callback-form {
                    position: relative;
                    background: #ffffff;
                    padding: 1.5rem;
                    box-shadow: 0 -10px 30px rgba(0, 0, 0, 0.2);
                }
                .callback-form form {
                    max-width: 42rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .callback-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .callback-form input,
                .callback-form select {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                }
                .callback-form input:focus,
                .callback-form select:focus {
                    outline: none;
                    border-color: #393f2d;
                }
                .callback-phone {
                    display: flex;
                }
                .callback-phone span {
                    display: inline-flex;
                    align-items: center;
                    padding: 0 0.75rem;
                    border: 1px solid #d1d5db;
                    border-right: none;
                    border-radius: 0.5rem 0 0 0.5rem;
                    background: #f3f4f6;
                    font-size: 0.875rem;
                }
                .callback-phone input {
                    border-radius: 0 0.5rem 0.5rem 0;
                }
                .callback-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #393f2d;
                    cursor: pointer;
                }
                .callback-submit {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #393f2d;
                    color: #ffffff;
                    font-weight: 500;
                    cursor: pointer;
                }
                .callback-submit:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .callback-result {
                    padding: 1rem 1.5rem;
                    box-shadow: 0 -10px 30px rgba(0, 0, 0, 0.2);
                }
                .callback-result.success {
                    background: #d4f57f;
                }
                .callback-result.error {
                    background: #ffebee;
                    color: #d32f2f;
                }
                .callback-result .callback-row {
                    justify-content: flex-start;
                }
                .callback-badge {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    margin-right: 1rem;
                    color: #ffffff;
                    font-size: 1.5rem;
                }
                .callback-result h3 {
                    font-weight: 700;
                    font-size: 1.125rem;
                    margin: 0;
                }
                .callback-result p {
                    margin: 0;
                }
                "#;

impl Component for GetCallback {
    type Message = GetCallbackMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let session = ctx
            .link()
            .context::<SubmissionSession>(Callback::noop())
            .map(|(session, _)| session)
            .unwrap_or_default();
        let scheduler = TimeoutScheduler::new(ctx.link().callback(GetCallbackMsg::TimerFired));
        let signals = DomSignals::attach(ctx.link().callback(GetCallbackMsg::Signal));

        // Initial check so a restored scroll position counts.
        if let Some(position) = current_scroll_position() {
            ctx.link()
                .send_message(GetCallbackMsg::Signal(HostSignal::Scroll(position)));
        }

        Self {
            widget: CallbackWidget::new(
                CallbackConfig::default(),
                session,
                scheduler,
                WindowViewport,
            ),
            signals,
            name_input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            GetCallbackMsg::Signal(signal) => self.widget.handle_signal(signal),
            GetCallbackMsg::Open => self.widget.open(),
            GetCallbackMsg::Close => self.widget.close(),
            GetCallbackMsg::SetName(name) => self.widget.set_name(name),
            GetCallbackMsg::SetMobile(mobile) => self.widget.set_mobile(mobile),
            GetCallbackMsg::SetTimeSlot(value) => {
                self.widget.set_time_slot(TimeSlot::from_value(&value))
            }
            GetCallbackMsg::Submit(e) => {
                e.prevent_default();
                match self.widget.submit() {
                    SubmitOutcome::Dispatch(delivery) => {
                        let endpoint = config::get_callback_endpoint();
                        ctx.link().send_future(async move {
                            let result = deliver(endpoint, &delivery.payload).await;
                            GetCallbackMsg::Delivered(delivery.ticket, result)
                        });
                        true
                    }
                    SubmitOutcome::Rejected(_) => true,
                    SubmitOutcome::Ignored => false,
                }
            }
            GetCallbackMsg::Delivered(ticket, result) => {
                if result.is_ok() {
                    info!("Callback request accepted");
                }
                self.widget.on_delivery(ticket, result)
            }
            GetCallbackMsg::TimerFired(kind) => {
                self.widget.scheduler_mut().fired(kind);
                match self.widget.on_timer(kind) {
                    TimerOutcome::Changed => true,
                    TimerOutcome::Unchanged => false,
                    TimerOutcome::FocusNameInput => {
                        if let Some(input) = self.name_input.cast::<HtmlInputElement>() {
                            debug!("GetCallback - Focusing name input");
                            let _ = input.focus();
                        }
                        false
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.widget.view();
        if !view.visible {
            return html! {};
        }

        html! {
            <div
                class="callback-widget"
                style={position_style(view.bottom_offset_px)}
            >
                {
                    match view.state {
                        FlowState::Compact => self.render_compact(ctx),
                        FlowState::Form => self.render_form(ctx, &view),
                        FlowState::Success => render_success(),
                        FlowState::Error => render_error(),
                    }
                }
                <style>{WIDGET_CSS}</style>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.widget.teardown();
        self.signals = None;
    }
}

impl GetCallback {
    fn render_compact(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="callback-compact" onclick={ctx.link().callback(|_| GetCallbackMsg::Open)}>
                <div class="callback-row">
                    <div>
                        <h3>{"Still have questions?"}</h3>
                        <p>{"Connect with an expert to get them answered."}</p>
                    </div>
                    <button>{"Get a Callback"}</button>
                </div>
            </div>
        }
    }

    fn render_form(&self, ctx: &Context<Self>, view: &WidgetView) -> Html {
        let request = &view.request;
        let slot_value = request.time_slot.map(|s| s.as_str()).unwrap_or("");

        html! {
            <div class="callback-form">
                <button class="callback-close" onclick={ctx.link().callback(|_| GetCallbackMsg::Close)}>
                    {"✕"}
                </button>
                <form onsubmit={ctx.link().callback(GetCallbackMsg::Submit)}>
                    <div>
                        <label>{"Your Name"}</label>
                        <input
                            ref={self.name_input.clone()}
                            type="text"
                            name="name"
                            value={request.name.clone()}
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                GetCallbackMsg::SetName(input.value())
                            })}
                            required=true
                        />
                    </div>
                    <div>
                        <label>{"Your Mobile Number"}</label>
                        <div class="callback-phone">
                            <span>{"+91"}</span>
                            <input
                                type="tel"
                                name="mobile"
                                value={request.mobile.clone()}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    GetCallbackMsg::SetMobile(input.value())
                                })}
                                placeholder="Enter 10 digit number"
                                maxlength="10"
                                required=true
                            />
                        </div>
                    </div>
                    <div>
                        <label>{"Preferred Callback Time"}</label>
                        <select
                            name="timeSlot"
                            onchange={ctx.link().callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                GetCallbackMsg::SetTimeSlot(select.value())
                            })}
                            required=true
                        >
                            <option value="" selected={slot_value.is_empty()}>{"Select a time slot"}</option>
                            { for TimeSlot::ALL.iter().map(|slot| html! {
                                <option value={slot.as_str()} selected={slot_value == slot.as_str()}>
                                    {slot.as_str()}
                                </option>
                            }) }
                        </select>
                    </div>
                    <button type="submit" class="callback-submit" disabled={view.submitting}>
                        { if view.submitting { "Submitting..." } else { "Request My Callback" } }
                    </button>
                </form>
            </div>
        }
    }
}

fn render_success() -> Html {
    html! {
        <div class="callback-result success">
            <div class="callback-row">
                <div class="callback-badge" style="background: #5CB85C;">{"✓"}</div>
                <div>
                    <h3>{"Thank you!"}</h3>
                    <p>{"One of our Nutrition Expert will call you in your preferred slot."}</p>
                </div>
            </div>
        </div>
    }
}

fn render_error() -> Html {
    html! {
        <div class="callback-result error">
            <div class="callback-row">
                <div class="callback-badge" style="background: #f44336;">{"✕"}</div>
                <div>
                    <h3>{"Failed to capture your data"}</h3>
                    <p>{"Please try again or check your internet connection."}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_offset_reaches_inline_style() {
        assert_eq!(position_style(300.0), "bottom: 300px; transition: bottom 0.3s ease;");
        assert_eq!(position_style(0.0), "bottom: 0px; transition: bottom 0.3s ease;");
    }

    #[test]
    fn stylesheet_never_pins_bottom_edge() {
        assert!(!WIDGET_CSS.contains("!important"));
        assert!(!WIDGET_CSS.lines().any(|line| line.trim_start().starts_with("bottom:")));
    }
}
