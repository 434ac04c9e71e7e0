//! Redoubt CLI — authenticated file encryption
//!
//! Usage:
//!   redoubt keygen  [--output <FILE>]
//!   redoubt encrypt <INPUT> <OUTPUT> [--key <HEX>]
//!   redoubt decrypt <INPUT> <OUTPUT> --key <HEX>
//!   redoubt inspect <FILE>

use std::fs;
use std::path::PathBuf;
use std::process;

use redoubt_seal::{inspect, KeyInput, OpenError, Redoubt};

fn usage() -> ! {
    eprintln!(
        "Redoubt — authenticated file encryption (AES-256-GCM)\n\
         \n\
         Commands:\n\
         \n\
         Generate a key:\n\
         \n\
         redoubt keygen [--output <FILE>]\n\
         Prints 64 hex chars to stdout, or writes them to <FILE> (mode 600)\n\
         \n\
         Encrypt a file:\n\
         \n\
         redoubt encrypt <INPUT> <OUTPUT> [--key <HEX>]\n\
         Without --key, a fresh key is minted and printed to stdout\n\
         \n\
         Decrypt a file:\n\
         \n\
         redoubt decrypt <INPUT> <OUTPUT> --key <HEX>\n\
         Fails unless the container is intact and the key matches\n\
         \n\
         Inspect a container:\n\
         \n\
         redoubt inspect <FILE>\n\
         Prints sizes and nonce without decrypting\n"
    );
    process::exit(1);
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn parse_args() -> (String, Vec<String>, Vec<(String, String)>) {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let command = args[1].clone();
    let mut positionals: Vec<String> = Vec::new();
    let mut flags: Vec<(String, String)> = Vec::new();

    let mut i = 2;
    while i < args.len() {
        if args[i].starts_with("--") {
            if i + 1 < args.len() {
                flags.push((args[i].clone(), args[i + 1].clone()));
                i += 2;
            } else {
                die(&format!("missing value for flag: {}", args[i]));
            }
        } else {
            positionals.push(args[i].clone());
            i += 1;
        }
    }

    (command, positionals, flags)
}

fn get_flag(flags: &[(String, String)], name: &str) -> Option<String> {
    flags.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
}

fn positional(positionals: &[String], idx: usize, name: &str) -> String {
    positionals
        .get(idx)
        .cloned()
        .unwrap_or_else(|| die(&format!("missing input: <{}>", name)))
}

fn reject_extra(positionals: &[String], expected: usize) {
    if positionals.len() > expected {
        die(&format!("unexpected argument: {}", positionals[expected]));
    }
}

fn cmd_keygen(positionals: &[String], flags: &[(String, String)]) {
    reject_extra(positionals, 0);

    let redoubt = Redoubt::new();
    let key = redoubt.generate_key();
    let key_hex = key.to_hex();

    match get_flag(flags, "--output") {
        Some(path) => {
            fs::write(&path, format!("{}\n", key_hex))
                .unwrap_or_else(|e| die(&format!("write {}: {}", path, e)));

            // Restrict key file permissions (Unix only)
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let mut perms = fs::metadata(&path)
                    .unwrap_or_else(|e| die(&format!("stat {}: {}", path, e)))
                    .permissions();
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)
                    .unwrap_or_else(|e| die(&format!("chmod {}: {}", path, e)));
            }

            eprintln!("key written to {} (mode 600)", path);
            eprintln!("anyone holding this key can decrypt; keep it safe.");
        }
        None => {
            println!("{}", key_hex);
            eprintln!("save this key; it is the only way to decrypt.");
        }
    }
}

fn cmd_encrypt(positionals: &[String], flags: &[(String, String)]) {
    let in_file = positional(positionals, 0, "INPUT");
    let out_file = positional(positionals, 1, "OUTPUT");
    reject_extra(positionals, 2);

    // Don't overwrite the input
    if PathBuf::from(&out_file) == PathBuf::from(&in_file) {
        die("output path would overwrite input");
    }

    let key_input = match get_flag(flags, "--key") {
        Some(hex) => KeyInput::Import(hex),
        None => KeyInput::Generate,
    };

    let (key, minted) = key_input
        .resolve()
        .unwrap_or_else(|e| die(&e.to_string()));

    // Load plaintext
    let plaintext =
        fs::read(&in_file).unwrap_or_else(|e| die(&format!("read {}: {}", in_file, e)));

    // Encrypt
    let redoubt = Redoubt::new();
    let container = redoubt
        .seal(&key, &plaintext)
        .unwrap_or_else(|e| die(&e.to_string()));

    // Write container
    fs::write(&out_file, &container)
        .unwrap_or_else(|e| die(&format!("write {}: {}", out_file, e)));

    if let Some(key_hex) = minted {
        eprintln!("no --key supplied; minted a fresh one (save it to decrypt later):");
        println!("{}", key_hex);
    }

    eprintln!(
        "sealed {} -> {} ({} bytes plaintext -> {} bytes container)",
        in_file,
        out_file,
        plaintext.len(),
        container.len()
    );
}

fn cmd_decrypt(positionals: &[String], flags: &[(String, String)]) {
    let in_file = positional(positionals, 0, "INPUT");
    let out_file = positional(positionals, 1, "OUTPUT");
    reject_extra(positionals, 2);

    let key_hex = get_flag(flags, "--key").unwrap_or_else(|| die("missing input: --key"));

    // Don't overwrite the input
    if PathBuf::from(&out_file) == PathBuf::from(&in_file) {
        die("output path would overwrite input");
    }

    let (key, _) = KeyInput::Import(key_hex)
        .resolve()
        .unwrap_or_else(|e| die(&e.to_string()));

    // Load container
    let container =
        fs::read(&in_file).unwrap_or_else(|e| die(&format!("read {}: {}", in_file, e)));

    // Decrypt
    let redoubt = Redoubt::new();
    let plaintext = redoubt.open(&key, &container).unwrap_or_else(|e| match e {
        OpenError::Malformed(_) => die(&format!("{} (too short to hold a nonce)", e)),
        OpenError::Authentication(_) => die(&format!("{} (wrong key or corrupted container)", e)),
    });

    // Write plaintext
    fs::write(&out_file, &plaintext)
        .unwrap_or_else(|e| die(&format!("write {}: {}", out_file, e)));

    eprintln!(
        "opened {} -> {} ({} bytes container -> {} bytes plaintext)",
        in_file,
        out_file,
        container.len(),
        plaintext.len()
    );
}

fn cmd_inspect(positionals: &[String]) {
    let in_file = positional(positionals, 0, "FILE");
    reject_extra(positionals, 1);

    let container =
        fs::read(&in_file).unwrap_or_else(|e| die(&format!("read {}: {}", in_file, e)));

    let info = inspect(&container).unwrap_or_else(|e| die(&e.to_string()));
    println!("{}", info);
}

fn main() {
    let (command, positionals, flags) = parse_args();

    match command.as_str() {
        "keygen" => cmd_keygen(&positionals, &flags),
        "encrypt" => cmd_encrypt(&positionals, &flags),
        "decrypt" => cmd_decrypt(&positionals, &flags),
        "inspect" => cmd_inspect(&positionals),
        _ => {
            eprintln!("unknown command: {}", command);
            usage();
        }
    }
}
