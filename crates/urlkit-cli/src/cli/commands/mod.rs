//! CLI command handlers, one per file.

mod mime_list;
mod parse;
mod url_type;

pub use mime_list::run_mime_list;
pub use parse::run_parse;
pub use url_type::run_type;
