//! Configuration loading - Roles schema from JSON or TOML files

use crate::roles::{validate_roles_schema, RolesSchema, SchemaError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Configuration validation error: {0}")]
    ValidationError(#[from] SchemaError),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a roles schema, picking the parser from the file extension
///
/// The returned schema is always lenient; strict mode is opted into by the caller.
pub fn load_roles(path: &Path) -> Result<RolesSchema, ConfigError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "json" => parse_roles_json(&fs::read_to_string(path)?),
        "toml" => load_toml(path),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Parse a roles schema from a JSON string
pub fn parse_roles_json(content: &str) -> Result<RolesSchema, ConfigError> {
    let schema: RolesSchema = serde_json::from_str(content)?;
    Ok(schema)
}

/// Parse a roles schema from a TOML string
pub fn parse_roles_toml(content: &str) -> Result<RolesSchema, ConfigError> {
    parse_toml(content)
}

/// Load a roles schema and reject it if any override entry has issues
pub fn load_checked_roles(path: &Path) -> Result<RolesSchema, ConfigError> {
    let schema = load_roles(path)?;
    validate_roles_schema(&schema)?;
    Ok(schema)
}

/// Roles schema shipped with the crate
pub fn default_roles() -> RolesSchema {
    let json = include_str!("../../config/roles.json");
    parse_roles_json(json).unwrap_or_else(|e| {
        log::error!("embedded roles config failed to parse: {}", e);
        RolesSchema::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::OverrideMode;

    #[test]
    fn test_parse_roles_json() {
        let json = r#"{
            "role_type": ["Tank", "Fighter"],
            "damage_type": ["Attack"],
            "stats_per_roles": {
                "tank": {"defense": {"durability": 0.1}}
            }
        }"#;
        let schema = parse_roles_json(json).unwrap();
        assert_eq!(schema.role_types.len(), 2);
        assert!(schema.override_for("tank").is_some());
        assert_eq!(schema.mode, OverrideMode::Lenient);
    }

    #[test]
    fn test_parse_roles_toml() {
        let toml = r#"
role_type = ["Tank", "Caster"]
damage_type = ["Magic"]

[stats_per_roles.tank.defense]
durability = 0.1
armor = 20

[stats_per_roles.caster.resource]
mana_regen = 2
"#;
        let schema = parse_roles_toml(toml).unwrap();
        assert!(schema.valid_role_keys().contains("caster"));
        let caster = schema.override_for("caster").unwrap();
        assert_eq!(caster["resource"]["mana_regen"].as_f64(), Some(2.0));
        assert!(validate_roles_schema(&schema).is_ok());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(parse_roles_json("{"), Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_roles(Path::new("roles.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_roles(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_default_roles_is_valid() {
        let schema = default_roles();
        assert_eq!(schema.role_types.len(), 6);
        assert_eq!(schema.stats_per_roles.len(), 6);
        assert!(validate_roles_schema(&schema).is_ok());
    }
}
