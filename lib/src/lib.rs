//! Library for the subset of the [Dropbox API v2](https://www.dropbox.com/developers/documentation/http/documentation)
//! needed to browse and manage files: listing folders, uploading, downloading,
//! deleting and reading metadata.
//!
//! ```no_run
//! use valboks::builder::ClientBuilder;
//! use valboks::credentials::Credentials;
//!
//! # tokio_test::block_on(async {
//! let client = ClientBuilder::default()
//!     .with_credentials(Credentials::access_token("my-token"))
//!     .build()
//!     .expect("unable to build client");
//! for entry in client.list_folder("/").await.unwrap() {
//!     println!("{}", entry.name());
//! }
//! # })
//! ```

use std::borrow::Cow;

pub mod builder;
pub mod credentials;
pub mod entry;
pub mod error;
pub mod files;
mod http;
pub mod path;

pub use crate::credentials::Credentials;
pub use crate::error::Error;

/// Base url for the RPC endpoints
pub const API_URL: &str = "https://api.dropboxapi.com/2";
/// Base url for the content endpoints (upload and download)
pub const CONTENT_URL: &str = "https://content.dropboxapi.com/2";

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the Dropbox HTTP API
///
/// Built with a [`ClientBuilder`](crate::builder::ClientBuilder).
#[derive(Clone, Debug)]
pub struct Client {
    api_url: Cow<'static, str>,
    content_url: Cow<'static, str>,
    credentials: Credentials,
    inner: reqwest::Client,
}
