#![no_main]

use huffcode::compress;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let compressed = compress(&text).unwrap();
    assert_eq!(
        compressed.result.bits.len(),
        compressed.codes.compressed_bits(&compressed.counts)
    );
    assert_eq!(compressed.decode().unwrap(), text);
});
