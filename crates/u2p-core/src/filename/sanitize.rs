//! Stem sanitization for derived filenames.

/// Replaces every character that is not an ASCII letter or digit with `_`.
///
/// Runs of `_` are not collapsed and nothing is trimmed: derived names must
/// stay byte-identical from run to run or existing ledger entries would
/// stop matching their files on disk.
pub fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
