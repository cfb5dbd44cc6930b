#![no_main]

use libfuzzer_sys::fuzz_target;
use mtail_unparse::{parse_tree_json, unparse};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Any dump that decodes must render without panicking
        if let Ok(tree) = parse_tree_json(s) {
            let _ = unparse(&tree);
        }
    }
});
