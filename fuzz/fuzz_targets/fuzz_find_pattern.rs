#![no_main]

use kairos_core::Lexicon;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(expression) = std::str::from_utf8(data) {
        let lexicon = Lexicon::default();
        let pattern = lexicon.find_pattern(expression);

        // An inferred pattern must at least be usable as a pattern
        let _ = lexicon.parse(expression, Some(&pattern));
    }
});
