use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::callback_modal::CallbackModal;
use crate::data::profile::DoctorProfile;

const SHOW_AFTER_PX: f64 = 400.0;

#[derive(Properties, PartialEq)]
pub struct StickyHeaderProps {
    pub doctor: Rc<DoctorProfile>,
}

#[function_component(StickyHeader)]
pub fn sticky_header(props: &StickyHeaderProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            modal_open.set(true);
        })
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <>
            <header class={classes!("sticky-header", (scroll_y > SHOW_AFTER_PX).then(|| "visible"))}>
                <div class="sticky-header-inner">
                    <div>
                        <h1>{&props.doctor.name}</h1>
                        <p>{&props.doctor.title}</p>
                    </div>
                    <button class="sticky-header-callback" onclick={open_modal}>
                        {"Get a Callback"}
                    </button>
                </div>
            </header>
            <CallbackModal open={*modal_open} on_close={close_modal} />
            <style>
                {r#"
                .sticky-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid #e4e7df;
                    transform: translateY(-100%);
                    transition: transform 0.3s ease;
                }
                .sticky-header.visible {
                    transform: translateY(0);
                }
                .sticky-header-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                }
                .sticky-header h1 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #2e3523;
                    margin: 0;
                }
                .sticky-header p {
                    font-size: 0.875rem;
                    color: #6b6f66;
                    margin: 0;
                }
                .sticky-header-callback {
                    background: #4caf50;
                    color: #ffffff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .sticky-header-callback:hover {
                    background: #45a049;
                }
                "#}
            </style>
        </>
    }
}
