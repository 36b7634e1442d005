//! Fuzz target: `Grammar::parse` + `Grammar::interpret`
//!
//! Drives arbitrary bytes through the grammar asset parser and, when a
//! grammar compiles, through phrase interpretation.  Asserts that neither
//! ever panics and that compiled grammars stay internally consistent.
//!
//! cargo fuzz run fuzz_grammar_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use voxhome::grammar::Grammar;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    // Arbitrary asset text: parse must reject garbage without panicking.
    if let Ok(grammar) = Grammar::parse(text) {
        assert!(grammar.entry_count() > 0, "compiled grammar cannot be empty");
        // A compiled grammar must interpret its own input space totally.
        let _ = grammar.interpret(text);
    }

    // Arbitrary transcript against the fixed vocabulary.
    let builtin = Grammar::builtin();
    let _ = builtin.interpret(text);
});
