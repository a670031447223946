//! egui front-end of sneat: a login page and a user management page.
//!
//! All behavior lives in `sneat-business`; widgets here read its computes
//! and write its inputs.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod pages;
pub mod sink;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::SneatApp;
