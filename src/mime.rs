//! MIME type and file extension lookup
//!
//! A fixed, bidirectional table between content types and canonical
//! filename extensions. Unknown input is never an error: it yields `None`
//! or [`OCTET_STREAM`].

/// Fallback type for paths without a recognised extension
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Canonical extension (without the dot) for a content type
///
/// Parameters such as `; charset=utf-8` are ignored and matching is
/// case-insensitive.
pub fn extension_for(mime: &str) -> Option<&'static str> {
    let essence = essence(mime);
    let ext = match essence.as_str() {
        "text/html" | "application/xhtml+xml" => "html",
        "text/css" => "css",
        "text/javascript" | "application/javascript" => "js",
        "application/json" => "json",
        "text/plain" => "txt",
        "text/x-yaml" | "application/x-yaml" => "yml",
        "text/xml" | "application/xml" => "xml",
        "application/rss+xml" => "rss",
        "application/atom+xml" => "atom",
        "application/pdf" => "pdf",
        "application/zip" | "application/x-zip-compressed" => "zip",
        "image/png" => "png",
        "image/tiff" => "tiff",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/jp2" => "jp2",
        "image/svg+xml" => "svg",
        "image/vnd.microsoft.icon" | "image/x-icon" => "ico",
        "video/webm" => "webm",
        "audio/mpeg" | "audio/mpeg3" => "mp3",
        "audio/m4a" | "audio/mp4" => "m4a",
        _ => return None,
    };
    Some(ext)
}

/// Content type for a file name or path, judged by its extension only
///
/// Extensions are compared case-insensitively, so `LOGO.PNG` and `logo.png`
/// agree. Paths without an extension, and dotfiles such as `.profile`, map
/// to [`OCTET_STREAM`].
pub fn from_path(path: &str) -> &'static str {
    let name = path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path);
    let ext = match name.rfind('.') {
        Some(0) | None => return OCTET_STREAM,
        Some(idx) => name[idx + 1..].to_ascii_lowercase(),
    };

    match ext.as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "md" | "markdown" | "txt" => "text/plain",
        "yml" | "yaml" => "text/x-yaml",
        "xml" => "text/xml",
        "rss" => "application/rss+xml",
        "atom" => "application/atom+xml",
        "pdf" => "application/pdf",
        "zip" => "application/x-zip-compressed",
        "png" => "image/png",
        "tif" | "tiff" => "image/tiff",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "jp2" => "image/jp2",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "m4a" | "mp4" => "audio/mp4",
        _ => OCTET_STREAM,
    }
}

/// Strip parameters from a `Content-Type` value and normalise it
///
/// `"text/html; charset=UTF-8"` becomes `"text/html"`.
pub fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Whether a content type denotes an HTML document
pub fn is_html(mime: &str) -> bool {
    matches!(essence(mime).as_str(), "text/html" | "application/xhtml+xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for_known_types() {
        assert_eq!(extension_for("application/x-zip-compressed"), Some("zip"));
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("image/jpg"), Some("jpg"));
        assert_eq!(extension_for("image/vnd.microsoft.icon"), Some("ico"));
        assert_eq!(extension_for("image/x-icon"), Some("ico"));
        assert_eq!(extension_for("audio/mpeg3"), Some("mp3"));
        assert_eq!(extension_for("audio/mp4"), Some("m4a"));
        assert_eq!(extension_for("text/xml"), Some("xml"));
        assert_eq!(extension_for("application/rss+xml"), Some("rss"));
        assert_eq!(extension_for("text/x-yaml"), Some("yml"));
    }

    #[test]
    fn test_extension_for_ignores_parameters_and_case() {
        assert_eq!(extension_for("Text/HTML; charset=utf-8"), Some("html"));
    }

    #[test]
    fn test_extension_for_unknown() {
        assert_eq!(extension_for("asdfadsf"), None);
        assert_eq!(extension_for(""), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(from_path("archive.zip"), "application/x-zip-compressed");
        assert_eq!(from_path("audio.mp4"), "audio/mp4");
        assert_eq!(from_path("text.markdown"), "text/plain");
        assert_eq!(from_path("page.htm"), "text/html");
        assert_eq!(from_path("image.tif"), "image/tiff");
        assert_eq!(from_path("/var/www/assets/feed.atom"), "application/atom+xml");
        assert_eq!(from_path("unknown"), OCTET_STREAM);
    }

    #[test]
    fn test_from_path_is_case_insensitive() {
        assert_eq!(from_path("LOGO.PNG"), "image/png");
        assert_eq!(from_path("Report.Pdf"), "application/pdf");
    }

    #[test]
    fn test_from_path_edge_cases() {
        assert_eq!(from_path(""), OCTET_STREAM);
        assert_eq!(from_path(".profile"), OCTET_STREAM);
        assert_eq!(from_path("trailing."), OCTET_STREAM);
        assert_eq!(from_path("dir.d/README"), OCTET_STREAM);
    }

    #[test]
    fn test_is_html() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html;charset=ISO-8859-1"));
        assert!(is_html("application/xhtml+xml"));
        assert!(!is_html("image/png"));
        assert!(!is_html(""));
    }
}
