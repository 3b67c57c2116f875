use std::rc::Rc;

use yew::prelude::*;

use crate::data::profile::{Affiliation, DoctorProfile};

#[derive(Properties, PartialEq)]
struct AffiliationCardProps {
    affiliation: Affiliation,
}

#[function_component(AffiliationCard)]
fn affiliation_card(props: &AffiliationCardProps) -> Html {
    let affiliation = &props.affiliation;
    html! {
        <div class="affiliation-card">
            <div class="affiliation-logo">
                <img src={affiliation.logo.clone()} alt={format!("{} logo", affiliation.hospital)} />
            </div>
            <h4>{&affiliation.hospital}</h4>
            <p>{&affiliation.role}</p>
            if affiliation.current {
                <span class="affiliation-current">{"Current"}</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub doctor: Rc<DoctorProfile>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let doctor = &props.doctor;

    html! {
        <section class="hero-section">
            <div class="hero-banner">
                <div class="hero-background"></div>
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <div class="hero-text">
                        <h1>{doctor.name.to_uppercase()}</h1>
                        <p>{doctor.title.to_uppercase()}</p>
                    </div>
                    <div class="hero-photo">
                        <img src={doctor.portrait.clone()} alt={format!("{} - Profile Photo", doctor.name)} />
                    </div>
                </div>
            </div>

            <div class="hero-affiliations">
                <h3>{"Hospital Affiliations"}</h3>
                <div class="affiliation-grid">
                    { for doctor.affiliations.iter().map(|affiliation| html! {
                        <AffiliationCard key={affiliation.hospital.clone()} affiliation={affiliation.clone()} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .hero-section {
                    position: relative;
                    overflow: hidden;
                    width: 100%;
                }
                .hero-banner {
                    position: relative;
                    min-height: 375px;
                    background: linear-gradient(135deg, #1e293b, #334155, #0f172a);
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-image: url('/assets/background_image.png');
                    background-size: cover;
                    background-position: center;
                    filter: blur(4px);
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(15, 23, 42, 0.5);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    align-items: end;
                    gap: 3rem;
                    min-height: 375px;
                    padding: 0 2rem;
                }
                .hero-text {
                    align-self: center;
                }
                .hero-text h1 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #fff4e2;
                    margin-bottom: 1rem;
                }
                .hero-text p {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #efd7b5;
                }
                .hero-photo {
                    display: flex;
                    justify-content: center;
                }
                .hero-photo img {
                    width: 356px;
                    height: 356px;
                    object-fit: cover;
                }
                .hero-affiliations {
                    background: #ffffff;
                    padding: 1rem 1.5rem;
                }
                .hero-affiliations h3 {
                    text-align: center;
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .affiliation-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .affiliation-card {
                    text-align: center;
                    background: #ffffff;
                    border: 1px solid #f3f4f6;
                    border-radius: 0.375rem;
                    padding: 0.75rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.2s ease;
                }
                .affiliation-card:hover {
                    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
                }
                .affiliation-logo {
                    width: 2.5rem;
                    height: 2.5rem;
                    margin: 0 auto 0.5rem auto;
                    border-radius: 0.375rem;
                    overflow: hidden;
                    padding: 0.25rem;
                }
                .affiliation-logo img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .affiliation-card h4 {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #111827;
                    margin: 0 0 0.25rem 0;
                }
                .affiliation-card p {
                    font-size: 0.75rem;
                    color: #4b5563;
                    margin: 0;
                }
                .affiliation-current {
                    display: inline-block;
                    margin-top: 0.25rem;
                    padding: 0.125rem 0.375rem;
                    font-size: 0.75rem;
                    background: #dcfce7;
                    color: #15803d;
                    border-radius: 9999px;
                }
                @media (max-width: 1023px) {
                    .hero-banner {
                        min-height: 40vh;
                    }
                    .hero-background {
                        background-image: url('/assets/potrait_hero.png');
                        filter: none;
                    }
                    .hero-overlay {
                        background: rgba(0, 0, 0, 0.6);
                    }
                    .hero-content {
                        min-height: 40vh;
                        gap: 1rem;
                        padding: 0 1.5rem;
                    }
                    .hero-text h1 {
                        color: #ffffff;
                    }
                    .hero-text p {
                        font-size: 1.125rem;
                        color: #ffffff;
                        opacity: 0.9;
                    }
                    .hero-photo img {
                        width: 13rem;
                        height: 13rem;
                        border-radius: 0.5rem;
                    }
                    .affiliation-grid {
                        gap: 0.5rem;
                    }
                    .affiliation-card {
                        padding: 0.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
