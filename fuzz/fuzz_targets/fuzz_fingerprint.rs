//! Fuzz target for fingerprint combination.
//!
//! Any set of file contents must produce a well-formed fingerprint that does not
//! depend on the order the files were listed in.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_fingerprint
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pkghash_domain::{combine_digests, digest_bytes};

#[derive(Arbitrary, Debug)]
struct Input {
    files: Vec<Vec<u8>>,
}

fuzz_target!(|input: Input| {
    let digests: Vec<String> = input.files.iter().map(|f| digest_bytes(f)).collect();
    let forward = combine_digests(digests.iter());
    let backward = combine_digests(digests.iter().rev());

    assert!(forward.is_well_formed());
    assert_eq!(forward, backward);
});
