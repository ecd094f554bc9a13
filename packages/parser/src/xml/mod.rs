//! XML tree navigation helpers.

mod utils;

pub use utils::{
    find_descendant, find_descendants, get_attribute, get_tag_name, has_tag, text_content,
};
