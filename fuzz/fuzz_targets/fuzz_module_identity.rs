#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Any relative path either names a module or is rejected, never panics
        if let Ok(name) = pyseal::ModuleIdentity::from_relative(Path::new(text)) {
            let toolchain = pyseal::PythonToolchain {
                include_dir: "/usr/include/python3".into(),
                ext_suffix: ".so".to_string(),
            };
            let _ = pyseal::CythonCompiler::artifact_path(&name, &toolchain);
        }
        let _ = pyseal::ReleaseMode::split_args(text.split_whitespace());
    }
});
