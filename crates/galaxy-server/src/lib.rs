//! Development server with live reload for the Galaxy site.
//!
//! Renders pages on request from the current content, validates contact form posts,
//! and reloads connected browsers when content or public files change.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};
