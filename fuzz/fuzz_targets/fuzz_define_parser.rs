#![no_main]
use leet2yeet_config::parse_defines;
use leet2yeet_core::{SourceParameters, convert, render};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary header text must either scan or be rejected, never panic.
    let Ok(defines) = parse_defines(data) else {
        return;
    };
    for (name, value) in defines.iter() {
        assert!(value.is_finite(), "{name} scanned to {value}");
        assert!(value >= 0.0, "{name} scanned to {value}");
    }
    // Complete sets go through the whole production path.
    if let Ok(src) = SourceParameters::try_from(&defines)
        && let Ok(tgt) = convert(&src)
    {
        let _ = render(&tgt);
    }
});
