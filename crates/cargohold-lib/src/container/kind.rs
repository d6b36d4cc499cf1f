//! Container variant tags and per-variant attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Plain tag identifying a container variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerType {
    Basic,
    Liquid,
    Gas,
    Refrigerated,
}

impl ContainerType {
    pub const ALL: [ContainerType; 4] = [
        ContainerType::Basic,
        ContainerType::Liquid,
        ContainerType::Gas,
        ContainerType::Refrigerated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerType::Basic => "basic",
            ContainerType::Liquid => "liquid",
            ContainerType::Gas => "gas",
            ContainerType::Refrigerated => "refrigerated",
        }
    }

    /// Whether containers of this type are built with a pressure rating.
    pub fn is_pressurized(self) -> bool {
        matches!(self, ContainerType::Liquid | ContainerType::Gas)
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        ContainerType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or(Error::UnknownContainerType {
                tag: s.trim().to_string(),
            })
    }
}

/// Pressurised liquid tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidTank {
    pressure: f64,
}

impl LiquidTank {
    pub(crate) fn new(pressure: f64) -> Self {
        Self { pressure }
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }
}

/// Pressurised gas tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasTank {
    pressure: f64,
}

impl GasTank {
    pub(crate) fn new(pressure: f64) -> Self {
        Self { pressure }
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }
}

/// Closed set of container variants; loading rules are matched over this tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerKind {
    Basic,
    Liquid(LiquidTank),
    Gas(GasTank),
    Refrigerated,
}

impl ContainerKind {
    pub fn container_type(&self) -> ContainerType {
        match self {
            ContainerKind::Basic => ContainerType::Basic,
            ContainerKind::Liquid(_) => ContainerType::Liquid,
            ContainerKind::Gas(_) => ContainerType::Gas,
            ContainerKind::Refrigerated => ContainerType::Refrigerated,
        }
    }

    pub fn pressure(&self) -> Option<f64> {
        match self {
            ContainerKind::Liquid(tank) => Some(tank.pressure()),
            ContainerKind::Gas(tank) => Some(tank.pressure()),
            ContainerKind::Basic | ContainerKind::Refrigerated => None,
        }
    }
}
