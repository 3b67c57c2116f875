use std::collections::HashSet;
use std::rc::Rc;

use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::data::profile::Specialist;

/// One card plus the gap.
const CARD_STEP_PX: f64 = 300.0;

#[derive(Properties, PartialEq)]
struct SpecialistCardProps {
    specialist: Specialist,
    loading: bool,
    on_settled: Callback<String>,
}

#[function_component(SpecialistCard)]
fn specialist_card(props: &SpecialistCardProps) -> Html {
    let specialist = &props.specialist;
    // Both outcomes end the skeleton; a broken portrait just shows the alt text.
    let settled = {
        let on_settled = props.on_settled.clone();
        let id = specialist.id.clone();
        Callback::from(move |_: Event| on_settled.emit(id.clone()))
    };

    html! {
        <div class="specialist-slot">
            <div class="specialist-card">
                <div class="specialist-photo">
                    if let Some(department) = &specialist.department {
                        <span class="specialist-department">{department}</span>
                    }
                    if props.loading {
                        <div class="specialist-skeleton">
                            <div class="specialist-skeleton-dot"></div>
                        </div>
                    }
                    <img
                        src={specialist.photo.clone()}
                        alt={format!("{} portrait", specialist.name)}
                        loading="lazy"
                        onload={settled.clone()}
                        onerror={settled}
                    />
                </div>
                <div class="specialist-body">
                    <h3>{&specialist.name}</h3>
                    <p>{&specialist.designation}</p>
                </div>
                <a
                    class="specialist-link"
                    href={specialist.profile_url.clone()}
                    aria-label={format!("Open profile: {}, {}", specialist.name, specialist.designation)}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FindDoctorProps {
    pub id: AttrValue,
    pub specialists: Rc<Vec<Specialist>>,
}

#[function_component(FindDoctor)]
pub fn find_doctor(props: &FindDoctorProps) -> Html {
    let settled = use_state(HashSet::<String>::new);
    let carousel_ref = use_node_ref();

    let on_settled = {
        let settled = settled.clone();
        Callback::from(move |id: String| {
            if !settled.contains(&id) {
                let mut next = (*settled).clone();
                next.insert(id);
                settled.set(next);
            }
        })
    };
    let scroll = |direction: f64| {
        let carousel_ref = carousel_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(carousel) = carousel_ref.cast::<HtmlElement>() {
                carousel.scroll_by_with_x_and_y(CARD_STEP_PX * direction, 0.0);
            }
        })
    };

    html! {
        <section id={props.id.clone()} class="find-doctor-section">
            <div class="find-doctor-inner">
                <div class="find-doctor-header">
                    <h2>{"🩺 Meet Our Specialists"}</h2>
                    <p>{"Browse our specialists and view their profiles."}</p>
                </div>

                if props.specialists.is_empty() {
                    <div class="find-doctor-empty">
                        <h3>{"No doctors found"}</h3>
                        <p>{"We're working on adding more specialists to our team."}</p>
                        <a href="/doctors">{"Browse all specialists"}</a>
                    </div>
                } else {
                    <div class="find-doctor-carousel-wrap">
                        <button class="find-doctor-arrow left" aria-label="Scroll left" onclick={scroll(-1.0)}>{"‹"}</button>
                        <button class="find-doctor-arrow right" aria-label="Scroll right" onclick={scroll(1.0)}>{"›"}</button>
                        <div class="find-doctor-carousel" ref={carousel_ref.clone()}>
                            { for props.specialists.iter().map(|specialist| html! {
                                <SpecialistCard
                                    key={specialist.id.clone()}
                                    specialist={specialist.clone()}
                                    loading={!settled.contains(&specialist.id)}
                                    on_settled={on_settled.clone()}
                                />
                            }) }
                        </div>
                    </div>
                }
            </div>
            <style>
                {r#"
                .find-doctor-section {
                    width: 100%;
                    background: #798660;
                    padding: 3rem 0;
                }
                .find-doctor-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .find-doctor-header {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .find-doctor-header h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 1rem;
                }
                .find-doctor-header p {
                    color: #dbdfd2;
                    font-weight: 500;
                }
                .find-doctor-carousel-wrap {
                    position: relative;
                }
                .find-doctor-carousel {
                    display: flex;
                    gap: 1rem;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    scroll-behavior: smooth;
                    padding: 0 2rem;
                    scrollbar-width: none;
                }
                .find-doctor-carousel::-webkit-scrollbar {
                    display: none;
                }
                .find-doctor-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 10;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    border: 1px solid #e4e7df;
                    background: #ffffff;
                    color: #434a35;
                    font-size: 1.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                }
                .find-doctor-arrow.left {
                    left: -1rem;
                }
                .find-doctor-arrow.right {
                    right: -1rem;
                }
                .specialist-slot {
                    flex-shrink: 0;
                    width: 280px;
                    scroll-snap-align: start;
                }
                .specialist-card {
                    position: relative;
                    background: #ffffff;
                    border: 1px solid #e4e7df;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .specialist-card:hover {
                    transform: scale(1.05);
                    border-color: #939f79;
                }
                .specialist-photo {
                    position: relative;
                    height: 16rem;
                    background: #f3f4f6;
                    overflow: hidden;
                }
                .specialist-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .specialist-department {
                    position: absolute;
                    top: 0.75rem;
                    left: 0.75rem;
                    z-index: 2;
                    background: #dbdfd2;
                    color: #939f79;
                    font-size: 0.75rem;
                    font-weight: 600;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                }
                .specialist-skeleton {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: #e5e7eb;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: specialist-pulse 1.5s ease-in-out infinite;
                }
                .specialist-skeleton-dot {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    background: #d1d5db;
                }
                @keyframes specialist-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .specialist-body {
                    padding: 1rem;
                    height: 5rem;
                }
                .specialist-body h3 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #2e3523;
                    margin: 0 0 0.25rem 0;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                }
                .specialist-body p {
                    font-size: 0.875rem;
                    color: #6b6f66;
                    margin: 0;
                }
                .specialist-link {
                    position: absolute;
                    inset: 0;
                    z-index: 3;
                }
                .find-doctor-empty {
                    max-width: 28rem;
                    margin: 0 auto;
                    text-align: center;
                    background: #f9fafb;
                    border: 1px solid #e4e7df;
                    border-radius: 1rem;
                    padding: 2rem;
                }
                .find-doctor-empty a {
                    color: #4caf50;
                    font-weight: 500;
                }
                "#}
            </style>
        </section>
    }
}
