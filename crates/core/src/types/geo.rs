//! Geography: countries, states and the zones that group them.

use serde::{Deserialize, Serialize};

use super::id::{CountryId, StateId, ZoneId};

/// A country that can appear in address and checkout dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    /// ISO 3166-1 alpha-2 code (e.g., "US").
    pub iso: String,
    pub name: String,
}

impl Country {
    /// Create a new country.
    #[must_use]
    pub fn new(id: CountryId, iso: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            iso: iso.into(),
            name: name.into(),
        }
    }
}

/// A state or province. Always belongs to exactly one country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub country_id: CountryId,
    pub abbr: String,
    pub name: String,
}

impl State {
    /// Create a new state belonging to `country_id`.
    #[must_use]
    pub fn new(
        id: StateId,
        country_id: CountryId,
        abbr: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            country_id,
            abbr: abbr.into(),
            name: name.into(),
        }
    }
}

/// Error returned when parsing a [`ZoneKind`] from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid zone kind: {0}")]
pub struct InvalidZoneKind(pub String);

/// Which kind of geographic entity a zone is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    #[default]
    Country,
    State,
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Country => write!(f, "country"),
            Self::State => write!(f, "state"),
        }
    }
}

impl std::str::FromStr for ZoneKind {
    type Err = InvalidZoneKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "country" => Ok(Self::Country),
            "state" => Ok(Self::State),
            _ => Err(InvalidZoneKind(s.to_string())),
        }
    }
}

/// A single entry of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneMember {
    Country(CountryId),
    State(StateId),
}

/// A named grouping of countries or states used to restrict checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    #[serde(default)]
    pub kind: ZoneKind,
    #[serde(default)]
    pub members: Vec<ZoneMember>,
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new(id: ZoneId, name: impl Into<String>, kind: ZoneKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            members: Vec::new(),
        }
    }

    /// Add a member and return the zone (builder style).
    #[must_use]
    pub fn with_member(mut self, member: ZoneMember) -> Self {
        self.members.push(member);
        self
    }
}

/// Snapshot of every known country, state and zone.
///
/// Supplied by the persistence layer; helpers only read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoCatalog {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub states: Vec<State>,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl GeoCatalog {
    /// Look up a country by ID.
    #[must_use]
    pub fn country(&self, id: CountryId) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }

    /// Look up a state by ID.
    #[must_use]
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Look up a zone by its (unique) name.
    #[must_use]
    pub fn zone_named(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }
}

/// The configured checkout zone, by name. `None` means checkout is unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutZoneConfig(Option<String>);

impl CheckoutZoneConfig {
    /// No checkout restriction.
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Restrict checkout to the zone called `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// Returns the configured zone name, if any. Blank names count as unset.
    #[must_use]
    pub fn zone_name(&self) -> Option<&str> {
        self.0.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

impl From<Option<String>> for CheckoutZoneConfig {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}
