//! `srcref scrub` – redact values from a text dump.

use srcref_core::scrub::scrub_config;

pub fn run_scrub(text: &str, values: &[String]) {
    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    println!("{}", scrub_config(text, &values));
}
