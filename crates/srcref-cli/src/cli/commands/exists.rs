//! `srcref exists` – best-effort local existence check.

use srcref_core::file_exists_locally;

pub fn run_exists(url: &str) {
    println!("{}", file_exists_locally(url));
}
