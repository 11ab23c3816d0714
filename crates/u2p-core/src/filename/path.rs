//! Path-segment extraction from URLs.

/// Returns the last `/`-delimited segment of the URL path after trimming
/// leading and trailing slashes. Empty when the path is empty or root, or
/// when the URL does not parse at all.
pub fn url_path_stem(url: &str) -> String {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => return String::new(),
    };
    path.trim_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
        .to_string()
}
