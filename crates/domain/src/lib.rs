//! # greeter-domain
//!
//! Pure domain model for the greeter web client.
//!
//! ## Responsibilities
//! - Define the **greeting payload** received from the remote endpoint and
//!   its explicit decode step
//! - Define the **home view state machine** (`Loading` → `Loaded` | `Failed`)
//!   and its presentational projection
//! - Define **endpoint addressing** (base URL + relative API path)
//! - Define the single fetch **error type**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or HTTP crates.
//! The client boundary is expressed as a trait in the `app` crate (port).

pub mod endpoint;
pub mod error;
pub mod greeting;
pub mod home;
