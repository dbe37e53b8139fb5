//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls behind store action creators. There is
//! no push channel; everything arrives over plain HTTP.

pub mod api;
