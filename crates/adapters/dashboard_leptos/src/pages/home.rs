use greeter_app::home::{HomeController, MountHandle};
use greeter_domain::home::{HomeState, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GlooGreetingClient;

/// Landing page showing the greeting fetched from the API.
///
/// The fetch runs once when the page mounts. A result arriving after the
/// page has been torn down is dropped instead of written to a dead signal.
#[component]
pub fn Home() -> impl IntoView {
    let client = use_context::<GlooGreetingClient>().unwrap_or_default();
    let controller = HomeController::new(client);
    let mount = MountHandle::new();
    let (state, set_state) = signal(HomeState::Loading);

    on_cleanup({
        let mount = mount.clone();
        move || mount.unmount()
    });

    spawn_local(async move {
        if let Some(settled) = controller.load(&mount).await {
            set_state.set(settled);
        }
    });

    view! {
        <div class="home">
            <h1>"Home Page"</h1>
            {move || {
                let ViewState { message, error } = state.with(HomeState::view_state);
                match error {
                    None => view! { <p>{message}</p> }.into_any(),
                    Some(error) => view! { <p class="error">{error}</p> }.into_any(),
                }
            }}
        </div>
    }
}
