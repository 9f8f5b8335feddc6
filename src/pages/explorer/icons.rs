/// Theme icon name for a file, chosen by extension.
pub fn file_icon(path: &str) -> &'static str {
    match get_extension(path).as_deref() {
        Some("js" | "ts" | "jsx" | "tsx") => "symbol-method",
        Some("html" | "htm") => "symbol-property",
        Some("css" | "scss" | "less") => "symbol-color",
        Some("json") => "bracket",
        Some("md") => "markdown",
        Some("py") => "symbol-namespace",
        Some("c" | "cpp" | "h" | "hpp") => "symbol-class",
        Some("java") => "symbol-package",
        Some("pdf") => "output",
        Some("jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg") => "symbol-enum",
        _ => "file",
    }
}

pub fn get_extension(path: &str) -> Option<String> {
    std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
}
