use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod callback {
    pub mod error;
    pub mod request;
    pub mod timers;
    pub mod session;
    pub mod signals;
    pub mod visibility;
    pub mod viewport;
    pub mod flow;
    pub mod widget;
    pub mod delivery;
}
mod data {
    pub mod profile;
}
mod components {
    pub mod about;
    pub mod callback_modal;
    pub mod callback_widget;
    pub mod faq;
    pub mod find_doctor;
    pub mod footer;
    pub mod hero;
    pub mod research;
    pub mod sticky_header;
    pub mod tab_navigation;
    pub mod videos;
}
mod pages {
    pub mod doctor_profile;
    pub mod not_found;
}

use callback::session::SubmissionSession;
use pages::{
    doctor_profile::DoctorProfilePage,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering profile page");
            html! { <DoctorProfilePage /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // One session per page view; clones share the submitted flag.
    let session = use_memo(|_| SubmissionSession::default(), ());

    html! {
        <ContextProvider<SubmissionSession> context={(*session).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SubmissionSession>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
