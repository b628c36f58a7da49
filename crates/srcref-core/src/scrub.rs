//! Printing configuration without leaking secrets.

use std::fmt::Debug;

const FILTERED: &str = "<Filtered>";

/// Debug-formats `target` as `Config: {target:?}` with every non-empty entry
/// of `values` replaced by `<Filtered>`.
pub fn scrub_config<T: Debug + ?Sized>(target: &T, values: &[&str]) -> String {
    let mut conf = format!("Config: {target:?}");
    for value in values.iter().filter(|v| !v.is_empty()) {
        conf = conf.replace(value, FILTERED);
    }
    conf
}
