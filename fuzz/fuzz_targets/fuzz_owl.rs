#![no_main]
use libfuzzer_sys::fuzz_target;
use onto_matchers::parsers::{OntologyParser, OwlParser};

/// Fuzz the OWL RDF/XML parser directly, bypassing detection.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = OwlParser::new().parse_str(s, "fuzz");
    }
});
