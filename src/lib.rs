#![allow(clippy::implicit_hasher)]

pub mod components;
pub mod constants;
pub mod data;
pub mod engine;
pub mod logging;
pub mod models;
pub mod render;
pub mod viewport;

pub use components::app::App;
