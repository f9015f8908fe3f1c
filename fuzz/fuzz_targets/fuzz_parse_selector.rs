#![no_main]

use libfuzzer_sys::fuzz_target;
use trend_model::{FitFamily, Mode};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic, and anything accepted must round-trip
    // through its canonical display form.
    if let Ok(fit) = text.parse::<FitFamily>() {
        let shown = fit.to_string();
        assert_eq!(shown.parse::<FitFamily>().unwrap(), fit);
    }

    if let Ok(mode) = text.parse::<Mode>() {
        let shown = mode.to_string();
        assert_eq!(shown.parse::<Mode>().unwrap(), mode);
    }
});
