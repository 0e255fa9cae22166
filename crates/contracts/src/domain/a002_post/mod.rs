pub mod aggregate;

pub use aggregate::{CreatePostRequest, CreatePostResponse, ImageUpload, ImageUploadData};
