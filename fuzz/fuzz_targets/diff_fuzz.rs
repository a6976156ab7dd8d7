#![no_main]
use anydiff::{diff, equal};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split point and the predicate.
    let flags = data[0];
    let payload = &data[1..];
    let split = payload.len() * usize::from(flags & 0x7f) / 127;
    let (a, b) = payload.split_at(split.min(payload.len()));

    let script = if flags & 0x80 != 0 {
        // Compare by low nibble only.
        let eq = |x: &u8, y: &u8| x & 0x0f == y & 0x0f;
        let s = diff(a, b, eq);
        s.validate(a, b, eq).unwrap();
        s
    } else {
        let s = diff(a, b, equal);
        s.validate(a, b, equal).unwrap();
        s
    };

    assert!(script.distance() <= a.len() + b.len());
    assert!(script.distance() >= a.len().abs_diff(b.len()));
    assert_eq!(script.distance(), script.len() - script.keeps());
});
