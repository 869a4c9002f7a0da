#![no_main]

//! Fuzz target for the whole-document repair pass.
//!
//! Feeds arbitrary text through `process` and checks the invariants the
//! rest of the workspace relies on: output is free of the garbage control
//! character, a second pass changes nothing, and the line structure
//! survives the rewrite.

use libfuzzer_sys::fuzz_target;
use sepfix_domain::{GARBAGE_CHAR, process, rewrite, scrub};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let first = process(text);
    assert!(scrub::is_clean(&first.text));
    if first.changed() {
        assert_ne!(first.text, text);
    } else {
        assert_eq!(first.text, text);
    }

    // One pass converges.
    let second = process(&first.text);
    assert!(!second.changed());
    assert_eq!(second.text, first.text);

    // Every input line maps to one output line, except an unterminated
    // final line made of nothing but garbage characters, which scrubs
    // away entirely.
    let vanishing_tail = rewrite::text_units(text)
        .last()
        .is_some_and(|unit| {
            unit.terminator.is_empty()
                && !unit.content.is_empty()
                && unit.content.chars().all(|c| c == GARBAGE_CHAR)
        });
    let lines_before = rewrite::text_units(text).count();
    let lines_after = rewrite::text_units(&first.text).count();
    assert_eq!(lines_after, lines_before - usize::from(vanishing_tail));
});
