pub mod config;
pub mod consts;
pub mod dialog;
pub mod error;
pub mod io;
pub mod palette;
pub mod render;
pub mod session;
pub mod watermark;
