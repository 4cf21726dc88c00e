#![no_main]

use jass::{Config, analyze_source};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let doc = analyze_source(s, &Config::default());
        let _ = doc.diagnostics();
    }
});
