//! Option catalog
//!
//! The catalog drives the cascading selectors of a condition row:
//! - the event chosen at the top of the form decides which attributes a row
//!   may pick
//! - once a row has an attribute, the fixed operation list becomes available
//!
//! | event   | attributes         |
//! |---------|--------------------|
//! | Route A | maxDist, minDist   |
//! | Route B | maxDist            |
//! | Route C | minDist            |
//!
//! Lookups never fail: an unknown or missing key yields an empty slice.

use super::operator::Operation;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event a form can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    #[serde(rename = "Route A")]
    RouteA,
    #[serde(rename = "Route B")]
    RouteB,
    #[serde(rename = "Route C")]
    RouteC,
}

impl Event {
    /// Every event, in selector order
    pub const ALL: [Event; 3] = [Event::RouteA, Event::RouteB, Event::RouteC];

    /// Value stored in the form
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::RouteA => "Route A",
            Event::RouteB => "Route B",
            Event::RouteC => "Route C",
        }
    }

    /// Text shown in the event selector
    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    /// Attributes a row may pick once this event is selected
    pub fn attributes(&self) -> &'static [Attribute] {
        CATALOG.attributes_for(*self)
    }
}

impl FromStr for Event {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::ALL
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| CoreError::InvalidValue(format!("unknown event '{}'", s)))
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute a condition row compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "maxDist")]
    MaxDist,
    #[serde(rename = "minDist")]
    MinDist,
}

impl Attribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::MaxDist => "maxDist",
            Attribute::MinDist => "minDist",
        }
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maxDist" => Ok(Attribute::MaxDist),
            "minDist" => Ok(Attribute::MinDist),
            other => Err(CoreError::InvalidValue(format!(
                "unknown attribute '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only option table keyed by event
#[derive(Debug)]
pub struct Catalog {
    entries: &'static [(Event, &'static [Attribute])],
    operations: &'static [Operation],
}

/// The process-wide catalog
pub static CATALOG: Catalog = Catalog {
    entries: &[
        (Event::RouteA, &[Attribute::MaxDist, Attribute::MinDist]),
        (Event::RouteB, &[Attribute::MaxDist]),
        (Event::RouteC, &[Attribute::MinDist]),
    ],
    operations: &Operation::ALL,
};

impl Catalog {
    /// Events known to the catalog, in selector order
    pub fn events(&self) -> impl Iterator<Item = Event> + '_ {
        self.entries.iter().map(|(event, _)| *event)
    }

    /// Attributes offered for a known event
    pub fn attributes_for(&self, event: Event) -> &'static [Attribute] {
        self.entries
            .iter()
            .find(|(key, _)| *key == event)
            .map(|(_, attributes)| *attributes)
            .unwrap_or(&[])
    }

    /// Attributes offered for the event stored in the form
    ///
    /// Missing or unknown events yield an empty slice.
    pub fn options_for(&self, event: Option<&str>) -> &'static [Attribute] {
        match event.map(str::parse::<Event>) {
            Some(Ok(event)) => self.attributes_for(event),
            Some(Err(_)) => {
                log::trace!("No catalog entry for event {:?}", event);
                &[]
            }
            None => &[],
        }
    }

    /// Operations offered once a row has an attribute
    ///
    /// Any non-empty attribute unlocks the full list.
    pub fn operations_for(&self, attribute: Option<&str>) -> &'static [Operation] {
        match attribute {
            Some(attribute) if !attribute.is_empty() => self.operations,
            _ => &[],
        }
    }
}

/// Attributes offered for `event`, using the process-wide catalog
pub fn options_for(event: Option<&str>) -> &'static [Attribute] {
    CATALOG.options_for(event)
}

/// Operations offered for `attribute`, using the process-wide catalog
pub fn operations_for(attribute: Option<&str>) -> &'static [Operation] {
    CATALOG.operations_for(attribute)
}
