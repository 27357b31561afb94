//! Media reference resolution

/// Resolve a backend media reference to an absolute URL.
///
/// References that already carry an http scheme pass through unchanged;
/// empty or absent references resolve to `None`; everything else is served
/// from the file endpoint under `files_base`. The `starts_with("http")`
/// check is the literal backend contract; protocol-relative URLs are not
/// special-cased.
pub fn resolve_media_url(files_base: &str, url: Option<&str>) -> Option<String> {
    let url = url?;
    if url.is_empty() {
        return None;
    }
    if url.starts_with("http") {
        return Some(url.to_string());
    }
    Some(format!("{}/{}", files_base.trim_end_matches('/'), url))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILES_BASE: &str = "http://localhost:9090/api/v1/files";

    #[test]
    fn absent_and_empty_input_resolve_to_none() {
        assert_eq!(resolve_media_url(FILES_BASE, None), None);
        assert_eq!(resolve_media_url(FILES_BASE, Some("")), None);
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_media_url(FILES_BASE, Some("https://cdn.example.com/a.png")),
            Some("https://cdn.example.com/a.png".to_string())
        );
        assert_eq!(
            resolve_media_url(FILES_BASE, Some("http://other/b.mp4")),
            Some("http://other/b.mp4".to_string())
        );
    }

    #[test]
    fn relative_references_are_prefixed_with_files_base() {
        assert_eq!(
            resolve_media_url(FILES_BASE, Some("uploads/a.png")),
            Some("http://localhost:9090/api/v1/files/uploads/a.png".to_string())
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let once = resolve_media_url(FILES_BASE, Some("a.png")).unwrap();
        let twice = resolve_media_url(FILES_BASE, Some(&once)).unwrap();
        assert_eq!(once, twice);
    }
}
