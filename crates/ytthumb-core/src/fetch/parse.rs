//! Parse HTTP response header lines into ImageHead.

use super::ImageHead;

/// Parse collected header lines into ImageHead.
///
/// With redirects followed, curl reports every hop's headers; a status line
/// starts a new response, so only the last response's values are kept.
pub(crate) fn parse_headers(lines: &[String]) -> ImageHead {
    let mut head = ImageHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head = ImageHead::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    head.content_length = Some(n);
                }
            }
            if name.eq_ignore_ascii_case("content-type") {
                head.content_type = Some(value.to_string());
            }
        }
    }

    head
}
