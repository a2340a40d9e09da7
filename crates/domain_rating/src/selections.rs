//! Caller-supplied coverage selections
//!
//! Quote requests arrive from the web layer as a loosely-typed JSON object
//! whose keys have drifted over the years: `termYears`, `term_years`,
//! `TermYears`, and the bare shorthand `term` all appear in historical
//! traffic. Instead of enumerating every alias per field, both selection
//! keys and catalog option names are reduced to a canonical
//! lowercase-no-separator form and matched once. A small residual alias
//! table covers the few shorthands normalization alone cannot reconcile.
//!
//! Keys that match no declared coverage option are ignored.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Canonicalizes a selection key or option name for matching
///
/// Lowercases and strips spaces, underscores, and hyphens, so
/// "Deductible Coverage", `deductible_coverage`, and `deductibleCoverage`
/// all reduce to `deductiblecoverage`.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Legacy shorthand keys still seen in reseller traffic, mapped to the
/// normalized option name they stand for. Consulted only after an exact
/// normalized match fails.
const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("term", "termyears"),
    ("deductible", "deductiblecoverage"),
    ("scope", "vehiclescope"),
];

/// A key -> value map of coverage choices supplied by the caller
///
/// Values are kept as raw JSON so numeric input like `{"termYears": 2}`
/// matches the declared option string `"2"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CoverageSelections(HashMap<String, Value>);

impl CoverageSelections {
    /// Creates an empty selection set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw selection value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Number of supplied selections (including unrecognized extras)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves the value supplied for a coverage option, if any
    ///
    /// `option_name` is the catalog's display name ("Term Years"); the
    /// lookup normalizes both sides and falls back to the legacy alias
    /// table, so `termYears`, `term_years`, and `term` all resolve here.
    pub fn resolve(&self, option_name: &str) -> Option<String> {
        let target = normalize_key(option_name);

        if let Some(value) = self.lookup_normalized(&target) {
            return Some(value);
        }

        LEGACY_ALIASES
            .iter()
            .filter(|(_, canonical)| *canonical == target)
            .find_map(|(alias, _)| self.lookup_normalized(alias))
    }

    fn lookup_normalized(&self, target: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(key, _)| normalize_key(key) == target)
            .and_then(|(_, value)| coerce_to_string(value))
    }
}

impl From<HashMap<String, Value>> for CoverageSelections {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

/// Renders a JSON scalar the way the catalog declares its options
fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
