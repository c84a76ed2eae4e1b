//! Unit - A named, priced unit with its finalized stats

use crate::error::StatsError;
use crate::roles::{stats_for_role, RolesSchema};
use crate::stats::{StatOption, Stats};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    /// Random (version 4 layout) identifier drawn from `rng`
    pub fn random(rng: &mut impl Rng) -> Self {
        UnitId(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Everything needed to assemble a unit besides the schema and stat options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRequest {
    pub name: String,
    pub cost: u32,
    pub traits: Vec<String>,
    /// First entry is the primary role and selects the stat overrides
    pub roles: Vec<String>,
}

impl UnitRequest {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        UnitRequest {
            name: name.into(),
            cost,
            traits: Vec::new(),
            roles: Vec::new(),
        }
    }

    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = traits.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

/// Assembled unit; never mutated after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub cost: u32,
    pub traits: Vec<String>,
    pub roles: Vec<String>,
    pub stats: Stats,
}

impl Unit {
    /// Primary role label
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}

/// Assemble a unit, using the primary role to pick stat overrides
pub fn build_unit(request: UnitRequest, schema: &RolesSchema, options: &[StatOption]) -> Result<Unit, StatsError> {
    let mut rng = rand::thread_rng();
    build_unit_with_rng(request, schema, options, &mut rng)
}

/// [`build_unit`] with the identifier drawn from `rng`
pub fn build_unit_with_rng(
    request: UnitRequest,
    schema: &RolesSchema,
    options: &[StatOption],
    rng: &mut impl Rng,
) -> Result<Unit, StatsError> {
    let Some(primary) = request.roles.first() else {
        return Err(StatsError::MissingRole { name: request.name });
    };
    let stats = stats_for_role(primary, schema, options)?;

    Ok(Unit {
        id: UnitId::random(rng),
        name: request.name,
        cost: request.cost,
        traits: request.traits,
        roles: request.roles,
        stats,
    })
}
