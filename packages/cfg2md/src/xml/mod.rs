//! XML helpers: DOM navigation and the fallback token scan.

mod scan;
mod utils;

pub use scan::{scan_content_tokens, scan_type_tokens};
pub use utils::{
    child_text, child_text_ns, element_children, find_child, find_child_ns, find_children,
    find_children_ns, get_tag_name, get_text, has_tag, has_tag_ns, read_source,
};
