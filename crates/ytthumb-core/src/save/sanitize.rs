//! Filename sanitization for saved thumbnails.

/// Longest stem we keep; leaves room for the extension within NAME_MAX (255).
const STEM_MAX: usize = 250;

/// Sanitizes a candidate file stem for safe use on Linux.
///
/// Characters valid in a video id (`[a-zA-Z0-9_-]`) are never altered, so
/// an id maps to exactly one stem.
///
/// - Trims surrounding whitespace, then leading/trailing dots
/// - Replaces NUL, `/`, `\`, whitespace and control characters with `_`
/// - Limits length to [`STEM_MAX`] bytes
pub fn sanitize_stem(name: &str) -> String {
    let out: String = name
        .trim()
        .trim_matches('.')
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let mut take = out.len().min(STEM_MAX);
    while !out.is_char_boundary(take) {
        take -= 1;
    }
    out[..take].to_string()
}
