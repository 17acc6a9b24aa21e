#![no_main]
use libfuzzer_sys::fuzz_target;
use streamcore::{ValueKind, check_value_type, text};

fn fields(data: &[u8]) {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    for field in text::split(line, ',') {
        assert!(!field.starts_with(' ') && !field.ends_with(' '));
        for kind in ValueKind::ALL {
            assert_eq!(kind.accepts(field), check_value_type(field, kind.as_str()));
        }
        // Anything that fits a narrower integer fits the wider ones.
        if ValueKind::Int8.accepts(field) {
            assert!(ValueKind::Int64.accepts(field));
        }
        if ValueKind::UInt32.accepts(field) {
            assert!(ValueKind::UInt64.accepts(field) && ValueKind::Int64.accepts(field));
        }
        if text::is_digits(field) && field.len() < 19 {
            assert!(ValueKind::Int64.accepts(field));
        }
    }
    let _ = text::format_fixed(f64::from(data.len() as u32), data.first().copied().unwrap_or(0) % 20);
}

fuzz_target!(|data: &[u8]| fields(data));
