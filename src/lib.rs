//! Client for the Replicon timesheet and project management web services.
//!
//! The crate is organized into:
//!
//! - `config`: tenant, credentials and transport settings
//! - `error`: the error type shared by all operations
//! - `http`: transport construction, authentication and the shared call path
//! - `model`: domain records and the date/time shapes Replicon expects
//! - `operations`: request and response bodies of the individual operations
//!
//! The entry point is [`RepliconClient`], which exposes one async method per
//! remote operation.
//!
//! ```no_run
//! # async fn run() -> replicon::Result<()> {
//! use replicon::{RepliconClient, RepliconConfig};
//!
//! let client = RepliconClient::new(&RepliconConfig::new("acme", "jdoe", "secret"))?;
//! for user in client.get_users().await? {
//!     println!("{:?}", user.login_name);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod operations;
mod services;

pub use client::RepliconClient;
pub use config::RepliconConfig;
pub use error::{RepliconError, Result};
