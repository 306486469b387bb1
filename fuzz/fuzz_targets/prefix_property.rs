#![no_main]

use huffcode::build_tree;
use huffcode::count;
use huffcode::derive_codes;
use huffcode::encode::assert_prefix_free;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    if let Some(tree) = build_tree(&count(&text)) {
        assert_prefix_free(&derive_codes(&tree));
    }
});
