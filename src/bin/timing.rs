use std::hint::black_box;
use std::time::Instant;

use redoubt_seal::Redoubt;

fn time_it<F: FnMut()>(label: &str, iters: usize, mut f: F) {
    for _ in 0..(iters / 10).max(10) {
        f();
    }

    let start = Instant::now();
    for _ in 0..iters {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / (iters as u32);

    println!("{:<16} total={:?}  per_iter={:?}", label, elapsed, per_iter);
}

fn main() {
    let redoubt = Redoubt::new();
    let key = redoubt.generate_key();
    let wrong_key = redoubt.generate_key();

    let plaintext = vec![0x42u8; 1024];

    let ct = match redoubt.seal(&key, &plaintext) {
        Ok(ct) => ct,
        Err(e) => {
            eprintln!("timing setup failed: seal error: {e}");
            return;
        }
    };

    let mut ct_tampered = ct.clone();
    if !ct_tampered.is_empty() {
        let last = ct_tampered.len() - 1;
        ct_tampered[last] ^= 0x01;
    }

    let ct_truncated = &ct[..ct.len() - 1];

    let iters = 5_000;

    time_it("valid", iters, || {
        let r = redoubt.open(&key, black_box(&ct));
        black_box(r.ok());
    });

    time_it("wrong_key", iters, || {
        let r = redoubt.open(&wrong_key, black_box(&ct));
        black_box(r.err());
    });

    time_it("tampered", iters, || {
        let r = redoubt.open(&key, black_box(&ct_tampered));
        black_box(r.err());
    });

    time_it("truncated", iters, || {
        let r = redoubt.open(&key, black_box(ct_truncated));
        black_box(r.err());
    });

    time_it("short", iters, || {
        let r = redoubt.open(&key, black_box(b"short"));
        black_box(r.err());
    });

    println!("\nDone.");
}
