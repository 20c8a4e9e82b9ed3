use greeter_app::routes::Route;
use leptos::prelude::*;

/// Fallback page for locations outside the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at this address."</p>
            <a href={Route::Home.path()}>"Back to the home page"</a>
        </div>
    }
}
