//! RolesSchema - Role whitelist, damage-type whitelist and per-role overrides

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Role tokens used when the schema lists none
pub const BUILTIN_ROLE_KEYS: &[&str] = &["tank", "fighter", "assassin", "marksman", "caster", "specialist"];

/// Damage-type tokens used when the schema lists none
pub const BUILTIN_DAMAGE_TYPES: &[&str] = &["attack", "magic", "hybrid"];

/// How override discrepancies are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OverrideMode {
    /// Discrepancies are logged and construction continues
    #[default]
    Lenient,
    /// Any discrepancy fails construction
    Strict,
}

/// Normalized (trimmed, lower-case) token set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary(HashSet<String>);

impl Vocabulary {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Vocabulary(tokens.into_iter().map(|t| t.as_ref().trim().to_lowercase()).collect())
    }

    /// Expects an already normalized token
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Externally supplied role configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolesSchema {
    /// Role key → untyped override document
    #[serde(default)]
    pub stats_per_roles: Map<String, Value>,
    #[serde(default, rename = "role_type")]
    pub role_types: Vec<String>,
    #[serde(default, rename = "damage_type")]
    pub damage_types: Vec<String>,
    /// Runtime-only, never persisted
    #[serde(skip)]
    pub mode: OverrideMode,
}

impl RolesSchema {
    /// Switch to strict mode
    pub fn strict(self) -> Self {
        self.with_mode(OverrideMode::Strict)
    }

    pub fn with_mode(mut self, mode: OverrideMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.mode == OverrideMode::Strict
    }

    /// Allowed role tokens, falling back to [`BUILTIN_ROLE_KEYS`]
    pub fn valid_role_keys(&self) -> Vocabulary {
        if self.role_types.is_empty() {
            Vocabulary::from_tokens(BUILTIN_ROLE_KEYS)
        } else {
            Vocabulary::from_tokens(&self.role_types)
        }
    }

    /// Allowed damage-type tokens, falling back to [`BUILTIN_DAMAGE_TYPES`]
    pub fn damage_type_tokens(&self) -> Vocabulary {
        if self.damage_types.is_empty() {
            Vocabulary::from_tokens(BUILTIN_DAMAGE_TYPES)
        } else {
            Vocabulary::from_tokens(&self.damage_types)
        }
    }

    /// Override document for a role: exact key first, then any key equal to it
    /// ignoring case (in key order)
    ///
    /// Entries that are not objects count as missing.
    pub fn override_for(&self, role_key: &str) -> Option<&Map<String, Value>> {
        if let Some(doc) = self.stats_per_roles.get(role_key).and_then(Value::as_object) {
            return Some(doc);
        }
        let wanted = role_key.to_lowercase();
        self.stats_per_roles
            .iter()
            .filter(|(key, _)| key.to_lowercase() == wanted)
            .find_map(|(_, entry)| entry.as_object())
    }
}
