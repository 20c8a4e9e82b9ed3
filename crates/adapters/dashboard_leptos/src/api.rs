//! Browser HTTP client wrapping `gloo-net` for the greeting endpoint.

use std::future::Future;

use gloo_net::http::Request;
use greeter_app::ports::GreetingClient;
use greeter_domain::endpoint::ApiBase;
use greeter_domain::error::FetchFailure;
use greeter_domain::greeting::GreetingResponse;

/// Greeting client running on the browser's `fetch`.
#[derive(Debug, Clone, Default)]
pub struct GlooGreetingClient {
    base: ApiBase,
}

impl GlooGreetingClient {
    #[must_use]
    pub fn new(base: ApiBase) -> Self {
        Self { base }
    }

    #[must_use]
    pub fn base(&self) -> &ApiBase {
        &self.base
    }
}

impl GreetingClient for GlooGreetingClient {
    fn fetch_greeting(&self) -> impl Future<Output = Result<GreetingResponse, FetchFailure>> {
        let url = self.base.greeting_url();
        async move {
            let resp = Request::get(&url)
                .send()
                .await
                .map_err(|err| FetchFailure::Network(err.to_string()))?;
            if !resp.ok() {
                return Err(FetchFailure::Status(resp.status()));
            }
            let body = resp
                .text()
                .await
                .map_err(|err| FetchFailure::Network(err.to_string()))?;
            GreetingResponse::from_json(&body)
        }
    }
}
