//! Per-residue structural descriptors.
use super::FeatureMap;
use crate::surface::SurfaceAreaCalculator;
use crate::{AtomCollection, StructureError};

/// Secondary-structure class of a residue.
///
/// Assignment is not implemented: every standard residue is reported as
/// [`SecondaryStructure::Coil`]. `Unknown` marks residues absent from the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum SecondaryStructure {
    #[strum(serialize = "C")]
    Coil,
    Unknown,
}

/// The three residue-indexed descriptor maps extracted from one structure.
#[derive(Debug, Clone)]
pub struct ResidueFeatures {
    /// Solvent accessible surface area (Å²), default 0.
    pub sasa: FeatureMap<f64>,
    /// Mean per-atom confidence, default 0.
    pub plddt: FeatureMap<f64>,
    /// Secondary-structure class, default [`SecondaryStructure::Unknown`].
    pub secondary_structure: FeatureMap<SecondaryStructure>,
}

impl Default for ResidueFeatures {
    fn default() -> Self {
        ResidueFeatures {
            sasa: FeatureMap::new(0.0),
            plddt: FeatureMap::new(0.0),
            secondary_structure: FeatureMap::new(SecondaryStructure::Unknown),
        }
    }
}

impl ResidueFeatures {
    /// Number of residues described.
    pub fn residue_count(&self) -> usize {
        self.plddt.len()
    }
}

/// Residue-level descriptors over the standard residues of a structure.
///
/// Ligands, ions and waters never get an entry.
pub trait ResidueDescriptors {
    /// Per-residue accessible area; all atoms occlude, only standard residues are reported.
    fn sasa_values<S: SurfaceAreaCalculator>(
        &self,
        surface: &S,
    ) -> Result<FeatureMap<f64>, StructureError>;

    /// Per-residue mean of the atomic B-factor column.
    fn plddt_values(&self) -> FeatureMap<f64>;

    /// Placeholder secondary structure; see [`SecondaryStructure`].
    fn secondary_structure_values(&self) -> FeatureMap<SecondaryStructure>;

    /// All three descriptor maps.
    fn residue_features<S: SurfaceAreaCalculator>(
        &self,
        surface: &S,
    ) -> Result<ResidueFeatures, StructureError> {
        Ok(ResidueFeatures {
            sasa: self.sasa_values(surface)?,
            plddt: self.plddt_values(),
            secondary_structure: self.secondary_structure_values(),
        })
    }
}

impl ResidueDescriptors for AtomCollection {
    fn sasa_values<S: SurfaceAreaCalculator>(
        &self,
        surface: &S,
    ) -> Result<FeatureMap<f64>, StructureError> {
        let atom_areas = surface.atom_areas(self)?;
        if atom_areas.len() != self.get_size() {
            return Err(StructureError::SurfaceSizeMismatch {
                areas: atom_areas.len(),
                atoms: self.get_size(),
            });
        }
        let mut sasa = FeatureMap::new(0.0);
        for residue in self.iter_residues_standard() {
            let area: f64 = atom_areas[residue.start_idx..residue.end_idx].iter().sum();
            sasa.insert(residue.res_id, area);
        }
        Ok(sasa)
    }

    fn plddt_values(&self) -> FeatureMap<f64> {
        let mut plddt = FeatureMap::new(0.0);
        for residue in self.iter_residues_standard() {
            if let Some(mean) = residue.mean_b_factor() {
                if plddt.insert(residue.res_id, mean).is_some() {
                    log::debug!(
                        "{} {}{} (chain {}) replaces an earlier residue numbered {}",
                        residue.res_name,
                        residue.res_id,
                        residue.ins_code,
                        residue.chain_id,
                        residue.res_id
                    );
                }
            }
        }
        plddt
    }

    fn secondary_structure_values(&self) -> FeatureMap<SecondaryStructure> {
        let mut ss = FeatureMap::new(SecondaryStructure::Unknown);
        for residue in self.iter_residues_standard() {
            ss.insert(residue.res_id, SecondaryStructure::Coil);
        }
        ss
    }
}
