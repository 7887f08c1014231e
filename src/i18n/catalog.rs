//! Translation catalog and key lookup
//!
//! A catalog maps namespaces to flat `key → string` tables for one locale.
//! It is built once per request and never mutated afterwards; lookups
//! always succeed, echoing the key when no translation exists.

use std::collections::BTreeMap;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::errors::{I18nError, Result};

/// Separator between the namespace and the key in a lookup key
pub const KEY_SEPARATOR: char = '.';

/// Flat table of translations for one (locale, namespace) pair
pub type TranslationTable = BTreeMap<String, String>;

/// All loaded namespace tables for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    namespaces: BTreeMap<String, TranslationTable>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a namespace table, replacing any previous table for it
    pub fn insert(&mut self, namespace: impl Into<String>, table: TranslationTable) {
        self.namespaces.insert(namespace.into(), table);
    }

    /// Resolve `namespace.key`, if present
    ///
    /// Tables are flat, so keys with more than one separator never resolve.
    pub fn get(&self, key: &str) -> Option<&str> {
        let (namespace, entry) = key.split_once(KEY_SEPARATOR)?;
        if entry.contains(KEY_SEPARATOR) {
            return None;
        }
        self.namespaces
            .get(namespace)?
            .get(entry)
            .map(String::as_str)
    }

    /// Translate `key`, returning the key itself when it does not resolve
    pub fn t(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    /// Loaded namespaces in sorted order
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Number of loaded namespaces
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Total number of keys over all namespaces
    pub fn key_count(&self) -> usize {
        self.namespaces.values().map(BTreeMap::len).sum()
    }
}

impl<N: Into<String>> FromIterator<(N, TranslationTable)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (N, TranslationTable)>>(iter: I) -> Self {
        Self {
            namespaces: iter.into_iter().map(|(ns, table)| (ns.into(), table)).collect(),
        }
    }
}

/// Decode and validate a namespace payload
///
/// The payload must be a JSON object whose values are all strings and whose
/// keys do not contain the lookup separator. Anything else is rejected as a
/// whole; values are never coerced.
pub fn parse_table(namespace: &str, bytes: &[u8]) -> Result<TranslationTable> {
    let value: Value = serde_json::from_slice(bytes)?;

    let Value::Object(map) = value else {
        return Err(I18nError::InvalidTable {
            namespace: namespace.to_string(),
            reason: "top-level value is not an object".to_string(),
        });
    };

    let mut table = TranslationTable::new();
    for (key, value) in map {
        if key.contains(KEY_SEPARATOR) {
            return Err(I18nError::InvalidTable {
                namespace: namespace.to_string(),
                reason: format!("key '{}' contains '{}'", key, KEY_SEPARATOR),
            });
        }
        match value {
            Value::String(text) => {
                table.insert(key, text);
            }
            other => {
                return Err(I18nError::InvalidTable {
                    namespace: namespace.to_string(),
                    reason: format!("value for '{}' is {}, not a string", key, json_type_name(&other)),
                });
            }
        }
    }

    Ok(table)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Cheaply clonable read-only handle over a published catalog
#[derive(Debug, Clone, Default)]
pub struct Translator {
    catalog: Arc<Catalog>,
}

impl Translator {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }

    /// Translate `key`, falling back to the key itself
    pub fn t(&self, key: &str) -> String {
        self.catalog.t(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.catalog.get(key)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl From<Catalog> for Translator {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
