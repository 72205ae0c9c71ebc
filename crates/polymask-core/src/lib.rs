pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod io;
pub mod mask;
pub mod render;
pub mod session;
pub mod vertices;
