//! # client
//!
//! Leptos + WASM frontend for the people directory. The server renders
//! the home page markup and embeds bootstrap state in the document; this
//! crate reads that state in the browser, mounts over the server markup,
//! and takes over rendering through a single reducer-backed store.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
