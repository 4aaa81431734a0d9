//! Command-line driver: hash a file with SHA-1, or HMAC-SHA-1 when a key
//! is supplied.
//!
//! ```text
//! hash [-hmac <key>] <filename>
//! ```
//!
//! The digest is printed to stdout as uppercase hex pairs.

use std::env;
use std::process::ExitCode;

use sha1mac::{HmacSha1, read_file, sha1_buffer};

fn usage() -> ExitCode {
    eprintln!("usage: hash [-hmac <key>] <filename>");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let (key, path) = match args.as_slice() {
        [_, path] => (None, path),
        [_, flag, key, path] if flag == "-hmac" => (Some(key), path),
        _ => return usage(),
    };

    let buffer = match read_file(path) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let digest = match key {
        Some(key) => HmacSha1::compute(key.as_bytes(), buffer.as_slice()),
        None => sha1_buffer(buffer),
    };

    println!("{digest}");
    ExitCode::SUCCESS
}
