#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz format detection followed by parsing.
///
/// Any input must either parse or return an error, never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = onto_matchers::parsers::FormatDetector::new().detect(s, None);
        let _ = onto_matchers::parse_ontology_str(s, "fuzz");
    }
});
