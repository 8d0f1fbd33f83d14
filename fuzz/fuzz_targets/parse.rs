#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic, and must be deterministic.
        let first = parse_iso8601::parse(input);
        let second = parse_iso8601::parse(input);
        assert_eq!(first, second);

        if let Err(e) = first {
            assert_eq!(e.input(), input);
        }
    }
});
