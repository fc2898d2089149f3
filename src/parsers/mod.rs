pub mod common;
pub mod treesitter;

pub use common::{detect_language, is_python_file};
