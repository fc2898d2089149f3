pub fn detect_language_from_extension(extension: &str) -> Option<String> {
    match extension {
        "py" | "pyw" | "pyi" => Some("python".to_string()),
        _ => None,
    }
}

pub fn get_supported_extensions() -> Vec<&'static str> {
    vec!["py", "pyw", "pyi"]
}
