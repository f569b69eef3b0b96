//! Location text parsing: postal code detection and city label extraction.

use std::sync::OnceLock;

use regex::Regex;

fn postal_code_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(r"(?-u:\b)[0-9]{5,6}(?-u:\b)") {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("Failed to compile postal code regex: {}", e);
            None
        }
    })
    .as_ref()
}

/// Extract the first standalone 5–6 digit run, if any.
///
/// Word boundaries are ASCII: a non-ASCII letter next to the digits does
/// not count as part of the word.
pub fn extract_postal_code(text: &str) -> Option<String> {
    postal_code_regex()?
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Best-effort city label: the text before the first comma once postal
/// codes are removed, or `default_city` when that leaves nothing.
pub fn parse_city_label(text: &str, default_city: &str) -> String {
    let without_pin = match postal_code_regex() {
        Some(re) => re.replace_all(text, ""),
        None => text.into(),
    };

    let first_chunk = without_pin
        .trim()
        .split(',')
        .next()
        .unwrap_or_default()
        .trim();

    if first_chunk.is_empty() {
        default_city.to_string()
    } else {
        first_chunk.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_six_digit_pin() {
        assert_eq!(extract_postal_code("Kulgam 192231"), Some("192231".to_string()));
    }

    #[test]
    fn test_extract_five_digit_code() {
        assert_eq!(extract_postal_code("Springfield, 62704"), Some("62704".to_string()));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            extract_postal_code("12345 then 192231"),
            Some("12345".to_string())
        );
    }

    #[test]
    fn test_no_pin() {
        assert_eq!(extract_postal_code("Srinagar, Jammu and Kashmir"), None);
        assert_eq!(extract_postal_code(""), None);
    }

    #[test]
    fn test_runs_of_other_lengths_are_ignored() {
        assert_eq!(extract_postal_code("call 1234"), None);
        assert_eq!(extract_postal_code("id 1234567"), None);
    }

    #[test]
    fn test_digits_glued_to_letters_are_ignored() {
        assert_eq!(extract_postal_code("abc192231"), None);
        assert_eq!(extract_postal_code("192231x"), None);
    }

    #[test]
    fn test_non_ascii_letters_do_not_join_the_run() {
        assert_eq!(extract_postal_code("é192231"), Some("192231".to_string()));
        assert_eq!(extract_postal_code("Kulgām192231ü"), Some("192231".to_string()));
    }

    #[test]
    fn test_city_label_strips_pin() {
        assert_eq!(parse_city_label("Kulgam 192231", "Kulgam"), "Kulgam");
        assert_eq!(parse_city_label("192231 Anantnag", "Kulgam"), "Anantnag");
    }

    #[test]
    fn test_city_label_takes_first_comma_chunk() {
        assert_eq!(
            parse_city_label("Srinagar, Jammu and Kashmir, India", "Kulgam"),
            "Srinagar"
        );
    }

    #[test]
    fn test_city_label_falls_back_to_default() {
        assert_eq!(parse_city_label("", "Kulgam"), "Kulgam");
        assert_eq!(parse_city_label("   192231  ", "Kulgam"), "Kulgam");
        assert_eq!(parse_city_label(", India", "Kulgam"), "Kulgam");
    }
}
