#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::struct_excessive_bools)]
//! # dotbooru
//!
//! dotbooru is a convenient wrapper library around the Derpibooru JSON API.
//!
//! This library can fetch and search:
//! - [`Image`]s, [`Comment`]s, [`Tag`]s and [`Gallery`] listings
//! - [`Filter`]s (system filters and the authenticated user's own)
//! - [`Forum`]s with their [`Topic`]s and [`Post`]s
//! - [`User`] profiles and `oEmbed` data for a CDN link
//!
//! All requests go through a [`Client`], which holds the base URL and an
//! optional authentication key. The key, once set, is sent as the `key`
//! query parameter on every endpoint that supports it.
//!
//! ## Example: printing the tags of an image.
//!
//! ```no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use dotbooru::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new();
//!
//!     let image = client.image(1, None).await?;
//!     println!("uploaded as: {}", image.name());
//!     for tag in image.tags() {
//!         println!("tagged: {tag}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Image`]:   crate::image::Image
//! [`Comment`]: crate::comment::Comment
//! [`Tag`]:     crate::tag::Tag
//! [`Gallery`]: crate::gallery::Gallery
//! [`Filter`]:  crate::filter::Filter
//! [`Forum`]:   crate::forum::Forum
//! [`Topic`]:   crate::forum::Topic
//! [`Post`]:    crate::forum::Post
//! [`User`]:    crate::user::User

/// Endpoint functions, one per API route.
///
/// Prefer the methods on [`Client`], which fill in the stored
/// authentication key for you.
pub mod api;

/// Client module contains [`Client`] for dispatching requests.
pub mod client;

/// Contains [`Error`]s that can be thrown by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub(crate) mod models;

pub(crate) mod result;

/// The declarative [`Route`] registry every endpoint dispatches through.
///
/// [`Route`]: crate::routes::Route
pub mod routes;

pub use client::Client;
pub use models::*;
pub use result::Result;
