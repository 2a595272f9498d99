#![no_main]

use kairos_core::{Duration, Lexicon};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let (head, tail) = data.split_at(8);
    let Ok(millis) = <[u8; 8]>::try_from(head) else {
        return;
    };
    let duration = Duration::from_millis(i64::from_le_bytes(millis));

    if let Ok(pattern) = std::str::from_utf8(&tail[1..]) {
        let lexicon = Lexicon::default();
        let allow_overflow = tail[0] & 1 == 1;
        let _ = lexicon.format(&duration, Some(pattern), allow_overflow);
    }
});
