//! # ferritin-core
//!
//! A library for working with biomolecular structure files and deriving
//! per-residue descriptors from them.
//!
//! __ferritin-core__ provides functionality for:
//! * Reading PDB and mmCIF files through `pdbtbx`
//! * Iterating atoms residue by residue, separating standard residues from ligands and waters
//! * Computing solvent accessible surface areas
//! * Extracting residue-indexed descriptor maps (area, confidence, secondary structure)
//!
//! The main entry point is the [`AtomCollection`] struct which represents a biomolecular structure.
//! Descriptors are obtained through the [`ResidueDescriptors`] trait.
//!
mod atomcollection;
mod conversions;
mod error;
mod featurize;
mod info;
mod residue;
mod surface;
#[cfg(test)]
mod test_utilities;

pub use self::atomcollection::AtomCollection;
pub use self::error::StructureError;
pub use self::featurize::{FeatureMap, ResidueDescriptors, ResidueFeatures, SecondaryStructure};
pub use self::info::constants::{DEFAULT_PROBE_RADIUS, DEFAULT_SPHERE_POINTS};
pub use self::residue::{ResidueAtoms, ResidueIter};
pub use self::surface::{SurfaceAreaCalculator, SurfaceComputer};
