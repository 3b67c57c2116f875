use std::rc::Rc;

use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config::{WHATSAPP_GREETING, WHATSAPP_NUMBER};
use crate::data::profile::FaqEntry;

fn toggle_open(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.entry.paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
                if !props.entry.bullets.is_empty() {
                    <ul>
                        { for props.entry.bullets.iter().map(|b| html! { <li>{b}</li> }) }
                    </ul>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub id: AttrValue,
    pub entries: Rc<Vec<FaqEntry>>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section id={props.id.clone()} class="faq-section">
            <div class="faq-inner">
                <div class="faq-header">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p>{"Find answers to common questions about our services and care approach"}</p>
                </div>

                { for props.entries.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let open_index = open_index.clone();
                        Callback::from(move |_| open_index.set(toggle_open(*open_index, index)))
                    };
                    html! {
                        <FaqItem
                            key={index}
                            entry={entry.clone()}
                            is_open={*open_index == Some(index)}
                            {on_toggle}
                        />
                    }
                }) }

                <div class="faq-contact">
                    <h3>{"Still have questions?"}</h3>
                    <p>{"Our care coordinators are here to help you with any questions about our services."}</p>
                    <a class="faq-whatsapp" href={whatsapp_link()} target="_blank" rel="noopener noreferrer">
                        {"Chat on WhatsApp"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .faq-section {
                    width: 100%;
                    background: #ffffff;
                    padding: 4rem 0;
                }
                .faq-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .faq-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-header h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #2e3523;
                    margin-bottom: 1rem;
                }
                .faq-header p {
                    font-size: 1.125rem;
                    color: #6b6f66;
                }
                .faq-item {
                    border: 1px solid #e4e7df;
                    border-radius: 0.75rem;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: box-shadow 0.3s ease;
                }
                .faq-item.open {
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem;
                    background: #ffffff;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #2e3523;
                }
                .faq-question:hover {
                    background: #f7f8f5;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #4caf50;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    color: #4a4f46;
                    line-height: 1.7;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 60rem;
                    padding: 0 1.5rem 1.5rem 1.5rem;
                }
                .faq-contact {
                    margin-top: 3rem;
                    text-align: center;
                    background: #f7f8f5;
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .faq-contact h3 {
                    font-size: 1.5rem;
                    color: #2e3523;
                    margin-bottom: 0.5rem;
                }
                .faq-whatsapp {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.75rem 2rem;
                    background: #25d366;
                    color: #ffffff;
                    border-radius: 9999px;
                    font-weight: 600;
                    text-decoration: none;
                }
                .faq-whatsapp:hover {
                    background: #1ebe5b;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_answer_closes_the_other() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle_open(open, 0), Some(0));
        assert_eq!(toggle_open(Some(0), 0), None);
    }

    #[test]
    fn whatsapp_link_encodes_greeting() {
        let link = whatsapp_link();
        assert!(link.starts_with(&format!("https://wa.me/{}?text=", WHATSAPP_NUMBER)));
        assert!(!link.contains(' '));
        assert!(link.ends_with(&urlencoding::encode(WHATSAPP_GREETING).into_owned()));
    }
}
