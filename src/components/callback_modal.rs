use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::callback::delivery::deliver;
use crate::callback::request::{CallbackRequest, TimeSlot, MOBILE_DIGITS};
use crate::config;

const RESET_AFTER_MS: u32 = 3_000;

/// Digits only, with an optional +91 country prefix removed.
fn normalize_mobile(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.strip_prefix("91") {
        Some(local) if digits.len() == MOBILE_DIGITS + 2 => local.to_string(),
        _ => digits,
    }
}

/// Stores a freshly armed timer unless the modal has already unmounted.
fn arm_if_mounted<T>(mounted: &RefCell<bool>, slot: &RefCell<Option<T>>, arm: impl FnOnce() -> T) -> bool {
    if !*mounted.borrow() {
        return false;
    }
    *slot.borrow_mut() = Some(arm());
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct CallbackModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(CallbackModal)]
pub fn callback_modal(props: &CallbackModalProps) -> Html {
    let request = use_state(CallbackRequest::default);
    let phase = use_state(|| Phase::Editing);
    let message = use_state(|| None::<String>);
    let reset_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let mounted = use_mut_ref(|| true);

    {
        let reset_timer = reset_timer.clone();
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *mounted.borrow_mut() = false;
                    // Dropping the handle clears the pending reset.
                    reset_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        let message = message.clone();
        Callback::from(move |_: MouseEvent| {
            message.set(None);
            on_close.emit(());
        })
    };

    let onsubmit = {
        let request = request.clone();
        let phase = phase.clone();
        let message = message.clone();
        let reset_timer = reset_timer.clone();
        let mounted = mounted.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *phase != Phase::Editing {
                return;
            }
            let payload = match request.validate() {
                Ok(payload) => payload,
                Err(reason) => {
                    warn!("Callback modal rejected input: {}", reason);
                    message.set(Some(format!("Please check your details: {}.", reason)));
                    return;
                }
            };
            message.set(None);
            phase.set(Phase::Submitting);

            let request = request.clone();
            let phase = phase.clone();
            let message = message.clone();
            let reset_timer = reset_timer.clone();
            let mounted = mounted.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                match deliver(config::get_callback_endpoint(), &payload).await {
                    Ok(()) => {
                        phase.set(Phase::Success);
                        let armed = arm_if_mounted(&mounted, &reset_timer, || {
                            Timeout::new(RESET_AFTER_MS, move || {
                                request.set(CallbackRequest::default());
                                phase.set(Phase::Editing);
                                on_close.emit(());
                            })
                        });
                        if !armed {
                            debug!("Callback modal unmounted before delivery finished");
                        }
                    }
                    Err(err) => {
                        error!("Callback modal delivery failed: {}", err);
                        phase.set(Phase::Editing);
                        message.set(Some("Something went wrong. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let on_name = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.name = input.value();
            request.set(next);
        })
    };
    let on_mobile = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.mobile = normalize_mobile(&input.value());
            request.set(next);
        })
    };
    let on_slot = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*request).clone();
            next.time_slot = TimeSlot::from_value(&select.value());
            request.set(next);
        })
    };

    if !props.open {
        return html! {};
    }

    let submitting = *phase == Phase::Submitting;
    let slot_value = request.time_slot.map(|s| s.as_str()).unwrap_or("");

    html! {
        <div class="callback-modal-backdrop" onclick={close.clone()}>
            <div class="callback-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="callback-modal-header">
                    <h2>{"📞 Request a Callback"}</h2>
                    <button class="callback-modal-x" onclick={close.clone()}>{"×"}</button>
                </div>
                if *phase == Phase::Success {
                    <div class="callback-modal-success">
                        <div class="callback-modal-check">{"✓"}</div>
                        <h3>{"Request Submitted Successfully!"}</h3>
                        <p>{"Our team will call you back within 24 hours during your preferred time slot."}</p>
                    </div>
                } else {
                    <form {onsubmit}>
                        <label for="modal-name">{"Full Name"}</label>
                        <input
                            id="modal-name"
                            type="text"
                            value={request.name.clone()}
                            oninput={on_name}
                            placeholder="Enter your full name"
                            required=true
                        />
                        <label for="modal-phone">{"Phone Number"}</label>
                        <input
                            id="modal-phone"
                            type="tel"
                            value={request.mobile.clone()}
                            oninput={on_mobile}
                            placeholder="+91 99999 99999"
                            required=true
                        />
                        <label for="modal-time">{"Preferred Time"}</label>
                        <select id="modal-time" onchange={on_slot} required=true>
                            <option value="" selected={slot_value.is_empty()}>{"Select preferred time"}</option>
                            { for TimeSlot::ALL.iter().map(|slot| html! {
                                <option value={slot.as_str()} selected={slot_value == slot.as_str()}>
                                    {slot.as_str()}
                                </option>
                            }) }
                        </select>
                        if let Some(text) = (*message).clone() {
                            <p class="callback-modal-message">{text}</p>
                        }
                        <div class="callback-modal-actions">
                            <button type="button" class="callback-modal-cancel" onclick={close}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="callback-modal-submit" disabled={submitting}>
                                { if submitting { "Submitting..." } else { "Request Callback" } }
                            </button>
                        </div>
                    </form>
                }
            </div>
            <style>
                {r#"
                .callback-modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    background: rgba(0, 0, 0, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .callback-modal {
                    width: 90%;
                    max-width: 28rem;
                    background: #ffffff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
                }
                .callback-modal-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .callback-modal-header h2 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #2e3523;
                    margin: 0;
                }
                .callback-modal-x {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: #6b6f66;
                    cursor: pointer;
                }
                .callback-modal form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .callback-modal label {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #2e3523;
                    margin-top: 0.5rem;
                }
                .callback-modal input,
                .callback-modal select {
                    padding: 0.5rem 0.75rem;
                    border: 1px solid #e4e7df;
                    border-radius: 0.375rem;
                    font-size: 1rem;
                }
                .callback-modal-message {
                    color: #f44336;
                    font-size: 0.875rem;
                    margin: 0.5rem 0 0 0;
                }
                .callback-modal-actions {
                    display: flex;
                    gap: 0.75rem;
                    padding-top: 1rem;
                }
                .callback-modal-actions button {
                    flex: 1;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .callback-modal-cancel {
                    background: #e4e7df;
                    color: #2e3523;
                    border: none;
                }
                .callback-modal-submit {
                    background: #4caf50;
                    color: #ffffff;
                    border: none;
                }
                .callback-modal-submit:disabled {
                    opacity: 0.7;
                    cursor: default;
                }
                .callback-modal-success {
                    text-align: center;
                    padding: 2rem 0;
                }
                .callback-modal-check {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem auto;
                    border-radius: 9999px;
                    background: #5cb85c;
                    color: #ffffff;
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_not_armed_after_unmount() {
        let mounted = RefCell::new(false);
        let slot: RefCell<Option<u32>> = RefCell::new(None);
        let mut armed = false;
        assert!(!arm_if_mounted(&mounted, &slot, || {
            armed = true;
            7
        }));
        assert!(!armed);
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn reset_is_stored_while_mounted() {
        let mounted = RefCell::new(true);
        let slot = RefCell::new(None);
        assert!(arm_if_mounted(&mounted, &slot, || 7));
        assert_eq!(*slot.borrow(), Some(7));
    }

    #[test]
    fn mobile_keeps_digits_only() {
        assert_eq!(normalize_mobile("99999 99999"), "9999999999");
        assert_eq!(normalize_mobile("98-765-43210"), "9876543210");
    }

    #[test]
    fn country_prefix_is_dropped() {
        assert_eq!(normalize_mobile("+91 98765 43210"), "9876543210");
    }

    #[test]
    fn short_numbers_starting_with_91_stay_intact() {
        assert_eq!(normalize_mobile("9123456789"), "9123456789");
    }
}
