pub mod painter;
pub mod surface;
