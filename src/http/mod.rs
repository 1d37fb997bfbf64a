//! HTTP transport and authentication for the Replicon services.
//!
//! The transport is built once per client and reused for every call.

mod auth;
mod client;

pub use auth::TenantBasicAuth;
pub use client::Transport;
