#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod controls_hint;
pub mod legend;
pub mod map_canvas;
pub mod map_view;
