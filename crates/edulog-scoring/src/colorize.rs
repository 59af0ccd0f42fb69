//! Pass/fail coloring of the results grid.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Cell color for an item the child passed.
pub const PASS_COLOR: &str = "#4caf50";

/// Cell color for an item the child failed.
pub const FAIL_COLOR: &str = "#f44336";

/// Color for a single flag: `true` → pass, `false` → fail, anything else
/// (null, missing, non-boolean) → no color.
pub fn cell_color(flag: Option<&Value>) -> &'static str {
    match flag {
        Some(Value::Bool(true)) => PASS_COLOR,
        Some(Value::Bool(false)) => FAIL_COLOR,
        _ => "",
    }
}

/// Map every entry of `flags` to its cell color.
pub fn colorize(flags: &Map<String, Value>) -> BTreeMap<String, String> {
    flags
        .iter()
        .map(|(name, flag)| (name.clone(), cell_color(Some(flag)).to_string()))
        .collect()
}

/// Color the fixed flag set of a category.
///
/// Every name in `names` appears in the output; flags missing from `item`
/// (or a missing item altogether) get no color.
pub fn colorize_flags(names: &[&str], item: Option<&Map<String, Value>>) -> BTreeMap<String, String> {
    names
        .iter()
        .map(|name| {
            let flag = item.and_then(|item| item.get(*name));
            (name.to_string(), cell_color(flag).to_string())
        })
        .collect()
}
