//! A single residue as a contiguous slice of an [`AtomCollection`].
use crate::AtomCollection;

pub struct ResidueAtoms<'a> {
    pub start_idx: usize,
    pub end_idx: usize,
    pub res_id: i64,
    pub ins_code: String,
    pub res_name: String,
    pub chain_id: String,
    pub parent: &'a AtomCollection,
}

impl<'a> ResidueAtoms<'a> {
    // Get number of atoms in this residue
    pub fn atom_count(&self) -> usize {
        self.end_idx - self.start_idx
    }

    /// A residue is standard when none of its atoms came from a `HETATM` record.
    pub fn is_standard(&self) -> bool {
        (self.start_idx..self.end_idx).all(|i| !self.parent.get_is_hetero(i))
    }

    /// Arithmetic mean of the per-atom B-factors, `None` for an empty residue.
    pub fn mean_b_factor(&self) -> Option<f64> {
        let count = self.atom_count();
        if count == 0 {
            return None;
        }
        let total: f64 = (self.start_idx..self.end_idx)
            .map(|i| self.parent.get_b_factor(i))
            .sum();
        Some(total / count as f64)
    }
}
