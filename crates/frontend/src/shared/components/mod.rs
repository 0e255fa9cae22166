pub mod image_uploader;
pub mod ui;
