pub mod canvas;
pub mod editing;
pub mod helpers;
pub mod landing;
pub mod status;
pub mod text_settings;
