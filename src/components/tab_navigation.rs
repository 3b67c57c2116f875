use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const ABOUT_ID: &str = "about";
pub const VIDEOS_ID: &str = "videos";
pub const RESEARCH_ID: &str = "research-recognitions";
pub const FIND_DOCTOR_ID: &str = "find-doctor";
pub const FAQ_ID: &str = "faq";

const TABS: [(&str, &str); 5] = [
    (ABOUT_ID, "About"),
    (VIDEOS_ID, "Videos"),
    (RESEARCH_ID, "Research & Recognitions"),
    (FIND_DOCTOR_ID, "Find a Doctor"),
    (FAQ_ID, "FAQ"),
];

const STICKY_AFTER_PX: f64 = 120.0;
const ACTIVE_LINE_PX: f64 = 200.0;

fn is_sticky(scroll_y: f64) -> bool {
    scroll_y > STICKY_AFTER_PX
}

fn header_offset(sticky: bool) -> i32 {
    if sticky {
        140
    } else {
        80
    }
}

/// The last section whose top has crossed the activation line.
fn active_section<'a>(tops: &[(&'a str, f64)]) -> Option<&'a str> {
    tops.iter()
        .rev()
        .find(|(_, top)| *top <= ACTIVE_LINE_PX)
        .map(|(id, _)| *id)
}

fn section(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn section_tops() -> Vec<(&'static str, f64)> {
    TABS.iter()
        .filter_map(|(id, _)| section(id).map(|el| (*id, el.get_bounding_client_rect().top())))
        .collect()
}

#[function_component(TabNavigation)]
pub fn tab_navigation() -> Html {
    let active = use_state(|| ABOUT_ID);
    let (_, scroll_y) = use_window_scroll();
    let sticky = is_sticky(scroll_y);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(id) = active_section(&section_tops()) {
                    if *active != id {
                        active.set(id);
                    }
                }
                || ()
            },
            scroll_y as i64,
        );
    }

    html! {
        <nav class={classes!("tab-nav", sticky.then(|| "sticky"))}>
            <div class="tab-nav-inner">
                { for TABS.iter().map(|(id, label)| {
                    let onclick = {
                        let active = active.clone();
                        let id: &'static str = *id;
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            if let (Some(w), Some(target)) = (window(), section(id)) {
                                let top = target.offset_top() - header_offset(sticky);
                                debug!("Scrolling to section {}", id);
                                w.scroll_to_with_x_and_y(0.0, f64::from(top));
                            }
                            active.set(id);
                        })
                    };
                    html! {
                        <button
                            key={*id}
                            class={classes!("tab-button", (*active == *id).then(|| "active"))}
                            {onclick}
                        >
                            {*label}
                        </button>
                    }
                }) }
            </div>
            <style>
                {r#"
                .tab-nav {
                    position: relative;
                    z-index: 40;
                    background: #ffffff;
                    border-bottom: 1px solid #e4e7df;
                    transition: all 0.3s ease;
                }
                .tab-nav.sticky {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .tab-nav-inner {
                    display: flex;
                    overflow-x: auto;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    scrollbar-width: none;
                }
                .tab-button {
                    flex-shrink: 0;
                    padding: 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    white-space: nowrap;
                    background: none;
                    border: none;
                    border-bottom: 2px solid transparent;
                    color: #6b6f66;
                    cursor: pointer;
                    transition: color 0.2s ease, border-color 0.2s ease;
                }
                .tab-button:hover {
                    color: #2e3523;
                    border-bottom-color: #e4e7df;
                }
                .tab-button.active {
                    color: #4caf50;
                    border-bottom-color: #4caf50;
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn becomes_sticky_only_past_threshold() {
        assert!(!is_sticky(0.0));
        assert!(!is_sticky(120.0));
        assert!(is_sticky(121.0));
    }

    #[test]
    fn sticky_header_needs_a_larger_offset() {
        assert_eq!(header_offset(true), 140);
        assert_eq!(header_offset(false), 80);
    }

    #[test]
    fn active_section_is_last_one_past_the_line() {
        let tops = [(ABOUT_ID, -900.0), (VIDEOS_ID, -100.0), (RESEARCH_ID, 200.0), (FAQ_ID, 640.0)];
        assert_eq!(active_section(&tops), Some(RESEARCH_ID));
    }

    #[test]
    fn no_active_section_before_the_first_reaches_the_line() {
        let tops = [(ABOUT_ID, 450.0), (VIDEOS_ID, 1200.0)];
        assert_eq!(active_section(&tops), None);
    }
}
