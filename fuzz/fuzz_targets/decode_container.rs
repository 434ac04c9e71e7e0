#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = redoubt_seal::container::unframe(data);
    let _ = redoubt_seal::inspect(data);
});
