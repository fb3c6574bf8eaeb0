#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and deriving build options must never panic
        if let Ok(config) = toml::from_str::<pyseal::Config>(content) {
            let options = config.to_build_options("/fuzz");
            let _ = options.directives.pairs();
        }
    }
});
