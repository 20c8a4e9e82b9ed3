use greeter_app::routes::NAV_LINKS;
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <li><a href={link.href()}>{link.label}</a></li> })
                    .collect_view()}
            </ul>
        </nav>
    }
}
