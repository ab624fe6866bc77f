#![no_main]

use libfuzzer_sys::fuzz_target;
use waymark_core::Rgba;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 64 {
        return;
    }

    // Parsing must never panic, and whatever parses must print back to
    // something that parses to the same color.
    if let Ok(color) = Rgba::from_hex(text) {
        let printed = color.to_string();
        assert_eq!(Rgba::from_hex(&printed), Ok(color), "round trip via {printed}");
    }
});
