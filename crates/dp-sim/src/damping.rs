//! Damping-law catalog for the active shock absorber.
//!
//! Each law maps the instantaneous state `(y, v)` to a damping coefficient.
//! Laws are total over all real inputs and carry no internal state, so
//! identical inputs always yield identical coefficients.

use dp_core::Real;

use crate::error::{SimError, SimResult};

/// A family of damping coefficients as a function of instantaneous state.
///
/// Implementations must be pure; the solver re-evaluates the coefficient at
/// every integrator stage. The coefficient may be negative (energy
/// injection) and is never clamped.
pub trait Damping {
    /// Damping coefficient `gamma(y, v)` multiplying the velocity term.
    fn coefficient(&self, position: Real, velocity: Real) -> Real;
}

/// Closed catalog of damping laws.
///
/// Selection is by enum variant, never by runtime name resolution. String
/// identifiers exist only at parsing boundaries and unknown ones are
/// rejected there (see [`DampingLaw::from_id`]); nothing falls back to a
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DampingLaw {
    /// `gamma = 1 - exp(-10 y^2)`: grows with displacement magnitude,
    /// saturating near 1.
    ExpPosition,
    /// `gamma = 1 - exp(-10 v^2)`: grows with speed magnitude, saturating
    /// near 1.
    ExpVelocity,
    /// `gamma = 0.5 (y^2 - 1)`: Van der Pol style, negative
    /// (energy-injecting) for |y| < 1 and positive outside.
    VanDerPol,
    /// `gamma = 0.2`: plain linear damping, the baseline case.
    Constant,
}

impl DampingLaw {
    /// Evaluate the law at the given state.
    pub fn coefficient(self, y: Real, v: Real) -> Real {
        match self {
            DampingLaw::ExpPosition => 1.0 - (-10.0 * y * y).exp(),
            DampingLaw::ExpVelocity => 1.0 - (-10.0 * v * v).exp(),
            DampingLaw::VanDerPol => 0.5 * (y * y - 1.0),
            DampingLaw::Constant => 0.2,
        }
    }

    /// Canonical identifier used in scenario files and on the command line.
    pub fn canonical_id(self) -> &'static str {
        self.entry().canonical_id
    }

    /// Catalog metadata for this law.
    pub fn entry(self) -> &'static DampingCatalogEntry {
        DAMPING_CATALOG
            .iter()
            .find(|e| e.law == self)
            .expect("every law has a catalog entry")
    }

    /// Look up a law by canonical identifier.
    ///
    /// Unknown identifiers are a configuration error; there is no default
    /// law.
    pub fn from_id(id: &str) -> SimResult<DampingLaw> {
        DAMPING_CATALOG
            .iter()
            .find(|e| e.canonical_id == id)
            .map(|e| e.law)
            .ok_or_else(|| SimError::UnknownDampingLaw { id: id.to_string() })
    }
}

impl Damping for DampingLaw {
    fn coefficient(&self, position: Real, velocity: Real) -> Real {
        DampingLaw::coefficient(*self, position, velocity)
    }
}

/// Catalog metadata for one damping law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DampingCatalogEntry {
    pub law: DampingLaw,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub formula: &'static str,
}

/// The full closed catalog, in display order.
pub const DAMPING_CATALOG: [DampingCatalogEntry; 4] = [
    DampingCatalogEntry {
        law: DampingLaw::ExpPosition,
        canonical_id: "exp_y",
        display_name: "Displacement-activated",
        formula: "1 - exp(-10 y^2)",
    },
    DampingCatalogEntry {
        law: DampingLaw::ExpVelocity,
        canonical_id: "exp_v",
        display_name: "Velocity-activated",
        formula: "1 - exp(-10 v^2)",
    },
    DampingCatalogEntry {
        law: DampingLaw::VanDerPol,
        canonical_id: "vdp",
        display_name: "Van der Pol",
        formula: "0.5 (y^2 - 1)",
    },
    DampingCatalogEntry {
        law: DampingLaw::Constant,
        canonical_id: "constant",
        display_name: "Constant",
        formula: "0.2",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Real = 1e-12;

    #[test]
    fn exp_position_values() {
        let law = DampingLaw::ExpPosition;
        assert!((law.coefficient(0.0, 5.0)).abs() < TOL);
        // 1 - exp(-10 * 0.25)
        let expected = 1.0 - (-2.5_f64).exp();
        assert!((law.coefficient(0.5, 0.0) - expected).abs() < TOL);
        // Saturates toward 1 for large displacement, regardless of velocity.
        assert!(law.coefficient(10.0, -3.0) > 0.999_999);
        assert!(law.coefficient(-10.0, 3.0) > 0.999_999);
    }

    #[test]
    fn exp_velocity_values() {
        let law = DampingLaw::ExpVelocity;
        assert!((law.coefficient(5.0, 0.0)).abs() < TOL);
        let expected = 1.0 - (-2.5_f64).exp();
        assert!((law.coefficient(0.0, 0.5) - expected).abs() < TOL);
        assert!(law.coefficient(0.0, 10.0) > 0.999_999);
    }

    #[test]
    fn van_der_pol_injects_energy_near_origin() {
        let law = DampingLaw::VanDerPol;
        // Negative inside |y| < 1 (energy injection), positive outside.
        assert!(law.coefficient(0.5, 0.0) < 0.0);
        assert!(law.coefficient(-0.5, 0.0) < 0.0);
        assert!((law.coefficient(0.0, 0.0) + 0.5).abs() < TOL);
        assert!((law.coefficient(1.0, 0.0)).abs() < TOL);
        assert!(law.coefficient(2.0, 0.0) > 0.0);
        assert!((law.coefficient(2.0, 7.0) - 1.5).abs() < TOL);
    }

    #[test]
    fn constant_ignores_state() {
        let law = DampingLaw::Constant;
        assert_eq!(law.coefficient(0.0, 0.0), 0.2);
        assert_eq!(law.coefficient(-3.0, 17.0), 0.2);
        assert_eq!(law.coefficient(f64::NAN, f64::NAN), 0.2);
    }

    #[test]
    fn catalog_ids_round_trip() {
        for entry in &DAMPING_CATALOG {
            let law = DampingLaw::from_id(entry.canonical_id).unwrap();
            assert_eq!(law, entry.law);
            assert_eq!(law.canonical_id(), entry.canonical_id);
        }
    }

    #[test]
    fn catalog_covers_every_law_once() {
        for law in [
            DampingLaw::ExpPosition,
            DampingLaw::ExpVelocity,
            DampingLaw::VanDerPol,
            DampingLaw::Constant,
        ] {
            let count = DAMPING_CATALOG.iter().filter(|e| e.law == law).count();
            assert_eq!(count, 1, "{law:?}");
        }
    }

    #[test]
    fn unknown_id_is_rejected_not_defaulted() {
        let err = DampingLaw::from_id("quadratic").unwrap_err();
        match err {
            SimError::UnknownDampingLaw { id } => assert_eq!(id, "quadratic"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn laws_are_total_over_non_finite_input() {
        // No law panics or errors for any real input; non-finite inputs
        // simply produce non-finite (or constant) coefficients.
        for entry in &DAMPING_CATALOG {
            let _ = entry.law.coefficient(f64::INFINITY, f64::NEG_INFINITY);
            let _ = entry.law.coefficient(f64::NAN, 0.0);
        }
    }
}
