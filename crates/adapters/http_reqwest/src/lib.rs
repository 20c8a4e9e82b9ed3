//! # greeter-adapter-http-reqwest
//!
//! Native implementation of the [`GreetingClient`] port built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Issue one `GET {base}/api/` per call, with client-default headers only
//! - Map transport errors, non-2xx statuses and malformed bodies onto
//!   [`FetchFailure`]
//! - Hand the raw body to the domain decode step; no shape is assumed here
//!
//! ## Dependency rule
//! Depends on `greeter-app` (for the port trait) and `greeter-domain`.
//! Never leaks reqwest types past the port.

use std::future::Future;

use greeter_app::ports::GreetingClient;
use greeter_domain::endpoint::ApiBase;
use greeter_domain::error::FetchFailure;
use greeter_domain::greeting::GreetingResponse;

/// Greeting client for native shells.
#[derive(Debug, Clone)]
pub struct ReqwestGreetingClient {
    http: reqwest::Client,
    base: ApiBase,
}

impl ReqwestGreetingClient {
    /// Create a client with reqwest's default settings (no timeout).
    #[must_use]
    pub fn new(base: ApiBase) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    #[must_use]
    pub fn base(&self) -> &ApiBase {
        &self.base
    }
}

impl GreetingClient for ReqwestGreetingClient {
    fn fetch_greeting(&self) -> impl Future<Output = Result<GreetingResponse, FetchFailure>> {
        let url = self.base.greeting_url();
        let request = self.http.get(&url);
        async move {
            tracing::debug!(%url, "requesting greeting");
            let resp = request
                .send()
                .await
                .map_err(|err| FetchFailure::Network(err.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                tracing::warn!(%url, %status, "greeting endpoint returned an error status");
                return Err(FetchFailure::Status(status.as_u16()));
            }

            let body = resp
                .text()
                .await
                .map_err(|err| FetchFailure::Network(err.to_string()))?;
            GreetingResponse::from_json(&body)
        }
    }
}
