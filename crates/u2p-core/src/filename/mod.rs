//! Deterministic PDF filename derivation.
//!
//! A derived name is the sanitized last URL path segment plus a 128-bit
//! hash of the full URL. The segment is cosmetic (readability in directory
//! listings); the hash is the actual collision-avoidance mechanism and also
//! what makes the mapping stable across runs.

mod path;
mod sanitize;

pub use path::url_path_stem;
pub use sanitize::sanitize_stem;

const PDF_EXT: &str = ".pdf";

/// Derives the output filename for `url`:
/// `<sanitized-last-path-segment>_<md5-hex-of-url>.pdf`.
///
/// Pure and stable: the same URL yields the same name in every run, which
/// is what lets the ledger skip re-derivation. Length is unbounded, so an
/// extremely long path segment can exceed filesystem name limits.
///
/// # Examples
///
/// - `http://example.com/path/file` → `file_<32 hex chars>.pdf`
/// - `http://example.com/` → `_<32 hex chars>.pdf`
pub fn derive_pdf_filename(url: &str) -> String {
    let stem = sanitize_stem(&url_path_stem(url));
    let digest = md5::compute(url.as_bytes());
    let mut name = String::with_capacity(stem.len() + 1 + 32 + PDF_EXT.len());
    name.push_str(&stem);
    name.push('_');
    name.push_str(&hex::encode(digest.0));
    name.push_str(PDF_EXT);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_derivations() {
        assert_eq!(
            derive_pdf_filename("http://example.com/path/file"),
            "file_535ed04bc35e4b9915a1e25dbd8b7390.pdf"
        );
        assert_eq!(
            derive_pdf_filename("http://host.test/docs/Page_1"),
            "Page_1_8dba1b20d13d1d1b1ed3a2862e6a0584.pdf"
        );
        assert_eq!(
            derive_pdf_filename("http://host.test/file.zip"),
            "file_zip_89d1ab50b11afe093a35fcf6ea411bb7.pdf"
        );
    }

    #[test]
    fn empty_path_yields_bare_hash() {
        assert_eq!(
            derive_pdf_filename("http://example.com"),
            "_a9b9f04336ce0181a08e774e01113b31.pdf"
        );
        assert_eq!(
            derive_pdf_filename("https://example.com/"),
            "_182ccedb33a9e03fbf1079b209da1a31.pdf"
        );
    }

    #[test]
    fn percent_encoding_is_sanitized_not_decoded() {
        assert_eq!(
            derive_pdf_filename("http://example.com/some%20page"),
            "some_20page_9b7fb1fc4c53a76d75e05b85821f6040.pdf"
        );
    }

    #[test]
    fn deterministic_across_calls() {
        let url = "https://example.com/a/b/c.html";
        assert_eq!(derive_pdf_filename(url), derive_pdf_filename(url));
    }

    #[test]
    fn distinct_urls_distinct_names() {
        // Same last segment, different URLs: the hash keeps them apart.
        let a = derive_pdf_filename("http://one.test/dir/index");
        let b = derive_pdf_filename("http://two.test/other/index");
        assert_ne!(a, b);
        assert!(a.starts_with("index_"));
        assert!(b.starts_with("index_"));
    }
}
