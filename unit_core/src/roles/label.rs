//! Role label parsing ("Attack Tank" → role `tank`, damage type `attack`)

use super::Vocabulary;
use thiserror::Error;

/// Canonical role key plus optional damage-type token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedRole {
    pub role: String,
    pub damage_type: Option<String>,
}

/// Why a label did not resolve
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("label is empty")]
    Empty,
    /// Two damage-type tokens in one label
    #[error("multiple damage types: {first:?} and {second:?}")]
    AmbiguousDamageType { first: String, second: String },
    /// Token in neither vocabulary, found before the role token
    #[error("unrecognized token {0:?} before role")]
    UnexpectedToken(String),
    #[error("no role token found")]
    MissingRole,
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '-' | '_' | '/')
}

/// Parse a free-form label against the given vocabularies
///
/// Tokens are scanned in order: a damage-type token sets the damage type, the
/// first role token ends parsing (anything after it is ignored), and any other
/// token before the role is rejected.
pub fn parse_role_label(raw: &str, roles: &Vocabulary, damage_types: &Vocabulary) -> Result<ResolvedRole, LabelError> {
    let label = raw.trim().to_lowercase();
    if label.is_empty() {
        return Err(LabelError::Empty);
    }

    let mut damage_type: Option<String> = None;
    for token in label.split(is_delimiter).filter(|t| !t.is_empty()) {
        if damage_types.contains(token) {
            if let Some(first) = damage_type {
                return Err(LabelError::AmbiguousDamageType {
                    first,
                    second: token.to_string(),
                });
            }
            damage_type = Some(token.to_string());
            continue;
        }
        if roles.contains(token) {
            return Ok(ResolvedRole {
                role: token.to_string(),
                damage_type,
            });
        }
        return Err(LabelError::UnexpectedToken(token.to_string()));
    }
    Err(LabelError::MissingRole)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabularies() -> (Vocabulary, Vocabulary) {
        (
            Vocabulary::from_tokens(["tank", "assassin", "fighter"]),
            Vocabulary::from_tokens(["attack", "magic", "hybrid"]),
        )
    }

    fn parse(raw: &str) -> Result<ResolvedRole, LabelError> {
        let (roles, damage) = vocabularies();
        parse_role_label(raw, &roles, &damage)
    }

    fn resolved(role: &str, damage_type: Option<&str>) -> ResolvedRole {
        ResolvedRole {
            role: role.to_string(),
            damage_type: damage_type.map(str::to_string),
        }
    }

    #[test]
    fn test_attack_tank() {
        assert_eq!(parse("Attack Tank"), Ok(resolved("tank", Some("attack"))));
    }

    #[test]
    fn test_delimiters_and_case() {
        assert_eq!(parse(" MAGIC_assassin "), Ok(resolved("assassin", Some("magic"))));
        assert_eq!(parse("hybrid--fighter"), Ok(resolved("fighter", Some("hybrid"))));
        assert_eq!(parse("attack/tank"), Ok(resolved("tank", Some("attack"))));
        assert_eq!(parse("attack\ttank"), Ok(resolved("tank", Some("attack"))));
    }

    #[test]
    fn test_damage_type_optional() {
        assert_eq!(parse("tank"), Ok(resolved("tank", None)));
    }

    #[test]
    fn test_two_damage_types_rejected() {
        assert_eq!(
            parse("attack magic tank"),
            Err(LabelError::AmbiguousDamageType {
                first: "attack".to_string(),
                second: "magic".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_token_before_role() {
        assert_eq!(parse("unknown tank"), Err(LabelError::UnexpectedToken("unknown".to_string())));
    }

    #[test]
    fn test_role_terminates_scan() {
        assert_eq!(parse("tank whatever magic attack"), Ok(resolved("tank", None)));
    }

    #[test]
    fn test_missing_role() {
        assert_eq!(parse("attack"), Err(LabelError::MissingRole));
        assert_eq!(parse("   "), Err(LabelError::Empty));
        assert_eq!(parse("--"), Err(LabelError::MissingRole));
    }

    #[test]
    fn test_error_messages() {
        let err = parse("attack magic tank").unwrap_err();
        assert_eq!(err.to_string(), "multiple damage types: \"attack\" and \"magic\"");
        assert_eq!(
            LabelError::UnexpectedToken("bogus".to_string()).to_string(),
            "unrecognized token \"bogus\" before role"
        );
        assert_eq!(LabelError::Empty.to_string(), "label is empty");

        let boxed: Box<dyn std::error::Error> = Box::new(LabelError::MissingRole);
        assert_eq!(boxed.to_string(), "no role token found");
    }
}
