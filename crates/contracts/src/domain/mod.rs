pub mod a001_tag;
pub mod a002_post;
