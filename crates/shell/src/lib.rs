//! `storefront-shell`
//!
//! **Responsibility:** the application shell around the catalog, cart and view
//! engines.
//!
//! This crate provides:
//! - Environment configuration
//! - The HTTP catalog fetch (the only asynchronous boundary)
//! - A synchronous `Session` that applies UI events to engine state
//! - A line-oriented terminal front end (`storefront` binary)

pub mod client;
pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use client::{CatalogClient, FetchError};
pub use command::{Command, CommandError};
pub use config::{ConfigError, ShellConfig};
pub use session::{Applied, Session, UiEvent};
