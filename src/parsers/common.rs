use std::path::Path;

pub fn detect_language(file_path: &Path) -> Option<String> {
    if let Some(ext) = file_path.extension().and_then(|e| e.to_str()) {
        return crate::parsers::treesitter::languages::detect_language_from_extension(ext);
    }
    None
}

pub fn get_supported_extensions() -> Vec<&'static str> {
    crate::parsers::treesitter::languages::get_supported_extensions()
}

pub fn is_python_file(file_path: &Path) -> bool {
    detect_language(file_path).as_deref() == Some("python")
}
