//! Fuzz the port-selector parser: arbitrary input must either parse to a
//! selector that resolves to a non-zero base, or error — never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use parmon::adapters::resolver::{self, PortSelector};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(selector) = s.parse::<PortSelector>() {
            if let Ok(base) = resolver::resolve(selector) {
                assert_ne!(base, 0);
            }
        }
    }
});
