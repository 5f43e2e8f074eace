//! Escaping utilities for safe report generation.
//!
//! Concept identifiers, labels and ontology IRIs come from external
//! documents and must be escaped before they are embedded in XML or in
//! tab-separated output.

/// Escape a string for XML text content and attribute values.
///
/// # Examples
///
/// ```
/// use onto_matchers::reports::escape::escape_xml;
///
/// assert_eq!(escape_xml("a < b & 'c'"), "a &lt; b &amp; &apos;c&apos;");
/// ```
#[must_use]
pub fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            c if c.is_control() && c != '\n' && c != '\t' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Make a value safe for one TSV field: tabs and line breaks become spaces.
///
/// # Examples
///
/// ```
/// use onto_matchers::reports::escape::escape_tsv;
///
/// assert_eq!(escape_tsv("two\twords\n"), "two words ");
/// ```
#[must_use]
pub fn escape_tsv(s: &str) -> String {
    s.chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml_basic() {
        assert_eq!(escape_xml("<Cell>"), "&lt;Cell&gt;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_escape_xml_drops_control_characters() {
        assert_eq!(escape_xml("a\u{0007}b"), "ab");
        assert_eq!(escape_xml("a\nb"), "a\nb");
    }

    #[test]
    fn test_escape_tsv() {
        assert_eq!(escape_tsv("a\tb\r\nc"), "a b  c");
    }

    #[test]
    fn test_unicode_preservation() {
        assert_eq!(escape_xml("Fahrzeug für Güter"), "Fahrzeug für Güter");
    }
}
