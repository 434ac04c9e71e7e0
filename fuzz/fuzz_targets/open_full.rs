#![no_main]

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;

use redoubt_seal::{Redoubt, SymmetricKey};

static KEY: Lazy<SymmetricKey> = Lazy::new(SymmetricKey::generate);

fuzz_target!(|data: &[u8]| {
    let key = &*KEY;
    let redoubt = Redoubt::new();

    // Arbitrary bytes must never panic: they either parse and fail
    // authentication, or get rejected as malformed.
    let _ = redoubt.open(key, data);
});
