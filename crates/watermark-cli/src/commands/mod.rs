pub mod apply;
pub mod config;
pub mod palette;
