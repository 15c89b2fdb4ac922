//! parmon library.
//!
//! Interactive monitor/controller for a PC parallel port's 25 signal
//! pins.  The pure-logic modules (pin table, sampler, renderer, cursor,
//! scope) are exposed for integration testing; everything that touches a
//! real register, terminal or speaker lives behind the port traits in
//! [`app::ports`] with concrete implementations under [`adapters`].

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod cursor;
pub mod error;
pub mod pins;
pub mod render;
pub mod sampler;
pub mod scope;

pub mod adapters;
