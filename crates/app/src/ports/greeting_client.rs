//! Greeting client port — the single outbound call of the application.

use std::future::Future;

use greeter_domain::error::FetchFailure;
use greeter_domain::greeting::GreetingResponse;

/// Fetches the greeting from the remote API.
///
/// The returned future is not required to be `Send`: the browser adapter
/// drives it on the single-threaded event loop.
pub trait GreetingClient {
    /// Issue exactly one `GET {base}/api/` and decode the body.
    ///
    /// No retry and no timeout are applied.
    fn fetch_greeting(&self) -> impl Future<Output = Result<GreetingResponse, FetchFailure>>;
}
