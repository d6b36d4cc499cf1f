//! Cargo values loaded into containers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cargo kind that triggers the stricter liquid fill limit.
pub const HAZARDOUS_KIND: &str = "hazardous";

/// An immutable piece of cargo: a kind tag and a mass.
///
/// Deserialized cargo goes through the same validation as [`Cargo::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCargo")]
pub struct Cargo {
    kind: String,
    mass: f64,
}

#[derive(Deserialize)]
struct RawCargo {
    kind: String,
    mass: f64,
}

impl TryFrom<RawCargo> for Cargo {
    type Error = Error;

    fn try_from(raw: RawCargo) -> Result<Self> {
        Cargo::new(raw.kind, raw.mass)
    }
}

impl Cargo {
    /// Create cargo, validating that the kind is present and the mass positive.
    pub fn new(kind: impl Into<String>, mass: f64) -> Result<Self> {
        let kind = kind.into();
        if kind.trim().is_empty() {
            return Err(Error::InvalidCargo {
                message: "cargo kind must not be empty".to_string(),
            });
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidCargo {
                message: "mass must be a finite positive number".to_string(),
            });
        }

        Ok(Self { kind, mass })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Whether the cargo is tagged as hazardous.
    pub fn is_hazardous(&self) -> bool {
        self.kind == HAZARDOUS_KIND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_mass() {
        for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Cargo::new("fish", mass).expect_err("mass should be rejected");
            assert!(matches!(err, Error::InvalidCargo { .. }), "mass {mass}");
        }
    }

    #[test]
    fn rejects_blank_kind() {
        let err = Cargo::new("  ", 10.0).expect_err("blank kind should be rejected");
        match err {
            Error::InvalidCargo { message } => assert!(message.contains("kind")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn deserialization_validates_fields() {
        let err = serde_json::from_str::<Cargo>(r#"{"kind":"","mass":-50.0}"#)
            .expect_err("blank kind and negative mass should be rejected");
        assert!(err.to_string().contains("invalid cargo"), "{err}");

        let err = serde_json::from_str::<Cargo>(r#"{"kind":"fish","mass":-50.0}"#)
            .expect_err("negative mass should be rejected");
        assert!(err.to_string().contains("mass"), "{err}");

        let cargo: Cargo = serde_json::from_str(r#"{"kind":"fish","mass":12.5}"#).unwrap();
        assert_eq!(cargo, Cargo::new("fish", 12.5).unwrap());
    }

    #[test]
    fn hazardous_match_is_exact() {
        assert!(Cargo::new("hazardous", 1.0).unwrap().is_hazardous());
        assert!(!Cargo::new("Hazardous", 1.0).unwrap().is_hazardous());
        assert!(!Cargo::new("non-hazardous", 1.0).unwrap().is_hazardous());
    }
}
