//! Command line client for Dropbox, built on top of the [`valboks`] library.

pub mod app;
pub mod cmd;
pub mod config;
pub mod error;
pub mod prompt;
pub mod remote;


pub use error::Error;
