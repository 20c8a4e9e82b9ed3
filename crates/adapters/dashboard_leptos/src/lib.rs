use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;

use api::GlooGreetingClient;
use components::Nav;
use pages::{Home, NotFound};

/// Root application component.
///
/// `client` is made available to every page through context.
#[component]
pub fn App(client: GlooGreetingClient) -> impl IntoView {
    provide_context(client);

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                </Routes>
            </main>
        </Router>
    }
}
