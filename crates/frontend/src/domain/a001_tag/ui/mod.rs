pub mod show_tag;
pub mod tag_list_item;

pub use show_tag::ShowTag;
pub use tag_list_item::TagListItem;
