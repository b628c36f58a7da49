//! `srcref schemes` – list registered schemes.

use srcref_core::SchemeRegistry;

pub fn run_schemes(registry: &SchemeRegistry) {
    if registry.is_empty() {
        println!("No schemes registered.");
        return;
    }
    for scheme in registry.iter() {
        println!("{scheme}");
    }
}
