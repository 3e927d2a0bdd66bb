//! # Constants
//!
//! Atomic radii used by the surface calculation.
//!
//! ## Van der Waals radii
//! Values follow the ProtOr-style table used by common Shrake-Rupley
//! implementations. Elements without an entry fall back to [`DEFAULT_VDW_RADIUS`].
//!
use pdbtbx::Element;

/// Radius used for any element missing from [`vdw_radius`].
pub const DEFAULT_VDW_RADIUS: f64 = 1.8;

/// Default solvent probe radius in Å (water).
pub const DEFAULT_PROBE_RADIUS: f64 = 1.4;

/// Default number of sample points placed on each atom sphere.
pub const DEFAULT_SPHERE_POINTS: usize = 100;

#[rustfmt::skip]
pub fn vdw_radius(element: &Element) -> f64 {
    match element {
        Element::H  => 1.20,
        Element::He => 1.40,
        Element::C  => 1.70,
        Element::N  => 1.55,
        Element::O  => 1.52,
        Element::F  => 1.47,
        Element::Na => 2.27,
        Element::Mg => 1.73,
        Element::P  => 1.80,
        Element::S  => 1.80,
        Element::Cl => 1.75,
        Element::K  => 2.75,
        Element::Ca => 2.31,
        Element::Ni => 1.63,
        Element::Cu => 1.40,
        Element::Zn => 1.39,
        Element::Se => 1.90,
        Element::Br => 1.85,
        Element::Cd => 1.58,
        Element::I  => 1.98,
        Element::Hg => 1.55,
        _ => DEFAULT_VDW_RADIUS,
    }
}
