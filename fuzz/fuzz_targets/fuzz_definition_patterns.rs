#![no_main]
use libfuzzer_sys::fuzz_target;
use onto_matchers::matching::SubsumptionPatternExtractor;
use onto_matchers::Concept;

/// Fuzz candidate extraction over arbitrary definition text.
///
/// Lower-casing can change byte offsets, so slicing must stay on the
/// lower-cased copy.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let concept = Concept::new("Fuzz").with_definition(s);
        let _ = SubsumptionPatternExtractor::default().extract(&concept);
    }
});
