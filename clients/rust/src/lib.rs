//! An asynchronous client for the Security and Compliance Center v3 API.
//!
//! Every operation lives in the module of its resource and takes anything
//! that implements [`client::RequestRunner`], usually a [`Client`]. Every
//! paginated list has a matching [`Pager`] that follows the `next.start`
//! cursor for you.

mod api;
pub mod client;
mod constants;
mod error;
pub mod pager;

pub mod attachments;
pub mod control_libraries;
pub mod profiles;
pub mod provider_types;
pub mod reports;
pub mod rules;
pub mod scans;
pub mod scopes;
pub mod settings;

pub use scc_api_model::*;

pub use self::api::{ApiError, ApiErrorItem, Response};
pub use self::client::{Client, ClientBuilder};
pub use self::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
pub use self::error::{Error, Result};
pub use self::pager::{ListRequest, Pager};
