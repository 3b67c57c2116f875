use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::{
    about::About,
    callback_widget::GetCallback,
    faq::Faq,
    find_doctor::FindDoctor,
    footer::Footer,
    hero::Hero,
    research::ResearchRecognitions,
    sticky_header::StickyHeader,
    tab_navigation::{TabNavigation, ABOUT_ID, FAQ_ID, FIND_DOCTOR_ID, RESEARCH_ID, VIDEOS_ID},
    videos::Videos,
};
use crate::data::profile::doctor_profile;

#[function_component(DoctorProfilePage)]
pub fn doctor_profile_page() -> Html {
    let doctor = use_memo(|_| doctor_profile(), ());
    let faq = use_memo(|doctor| doctor.faq.clone(), doctor.clone());
    let specialists = use_memo(|doctor| doctor.specialists.clone(), doctor.clone());

    {
        let name = doctor.name.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&format!("{} | Early.fit", name));
                }
                info!("Profile page mounted for {}", name);
                || ()
            },
            (),
        );
    }

    html! {
        <div class="profile-page">
            <StickyHeader doctor={Rc::clone(&doctor)} />
            <main>
                <Hero doctor={Rc::clone(&doctor)} />
                <TabNavigation />
                <div class="profile-container">
                    <About id={ABOUT_ID} doctor={Rc::clone(&doctor)} />
                </div>
                <div class="profile-container">
                    <Videos id={VIDEOS_ID} doctor={Rc::clone(&doctor)} />
                </div>
                <ResearchRecognitions id={RESEARCH_ID} doctor={Rc::clone(&doctor)} />
                <FindDoctor id={FIND_DOCTOR_ID} {specialists} />
                <div class="profile-container">
                    <Faq id={FAQ_ID} entries={faq} />
                </div>
            </main>
            <Footer />
            <GetCallback />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    background: #ffffff;
                    color: #2e3523;
                }
                .profile-page {
                    min-height: 100vh;
                }
                .profile-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                }
                "#}
            </style>
        </div>
    }
}
