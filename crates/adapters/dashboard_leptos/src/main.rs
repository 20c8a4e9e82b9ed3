use greeter_dashboard_leptos::App;
use greeter_dashboard_leptos::api::GlooGreetingClient;
use greeter_domain::endpoint::ApiBase;
use leptos::prelude::*;

fn main() {
    let client = GlooGreetingClient::new(ApiBase::default());
    leptos::mount::mount_to_body(move || view! { <App client={client.clone()}/> });
}
