pub mod post_input;
