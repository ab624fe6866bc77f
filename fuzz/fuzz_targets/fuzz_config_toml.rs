#![no_main]

use libfuzzer_sys::fuzz_target;
use waymark::GuideConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    // Loading and validating must never panic.
    if let Ok(config) = GuideConfig::from_toml_str(text) {
        let _problems = config.validate();
        let _ = config.resolved_max_width(390.0);
    }
    let _ = GuideConfig::from_json_str(text);
});
