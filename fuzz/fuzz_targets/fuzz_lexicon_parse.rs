#![no_main]

use kairos_core::Lexicon;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First line is the pattern, the rest the expression
    if let Ok(input) = std::str::from_utf8(data) {
        let (pattern, expression) = input.split_once('\n').unwrap_or((input, ""));
        let lexicon = Lexicon::default();

        // Errors are fine, panics are not
        let _ = lexicon.validate(expression, Some(pattern));
        let _ = lexicon.parse(expression, Some(pattern));
    }
});
