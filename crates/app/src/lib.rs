//! # greeter-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that HTTP adapters implement:
//!   - `GreetingClient` — fetch the greeting from the remote endpoint
//! - Drive the **home view lifecycle** (`HomeController`): one fetch per
//!   mount, results abandoned once the view has unmounted
//! - Hold the static **route table** the shells render navigation from
//!
//! ## Dependency rule
//! Depends on `greeter-domain` only. Never imports adapter crates or an
//! async runtime, so it compiles unchanged for `wasm32` and native shells.

pub mod home;
pub mod ports;
pub mod routes;
