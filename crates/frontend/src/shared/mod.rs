pub mod api_utils;
pub mod cache;
pub mod components;
pub mod icons;
pub mod modal;
pub mod navigation;
