//! # SCA Site
//!
//! Localized marketing site for SCA - Saddle Company Argentina.
//!
//! Requests for `/` and other unprefixed paths are redirected under the
//! visitor's preferred locale; everything under `/{en,es,de}` is rendered
//! from the shared translation catalog.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod handler;
pub mod render;
pub mod routes;
pub mod server;

pub use error::{SiteError, SiteResult};
pub use handler::{SiteHandler, SiteRequest, SiteResponse};
pub use routes::{Page, Route};
pub use server::{bind, serve, serve_with_shutdown};
