#![no_main]
use anydiff::EditScript;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(script) = text.parse::<EditScript>() {
        assert_eq!(script.to_string(), text);
        assert_eq!(script.source_len(), script.keeps() + script.deletions());
        assert_eq!(script.target_len(), script.keeps() + script.additions());
    }
});
