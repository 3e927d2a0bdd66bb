use crate::residue::{ResidueAtoms, ResidueIter};
use itertools::{izip, Itertools};
use pdbtbx::Element;

/// Flattened, index-addressable view of a single structure model.
///
/// Every per-atom property lives in its own vector; atom `i` is described by
/// the `i`-th entry of each of them.
#[derive(Debug, Clone)]
pub struct AtomCollection {
    size: usize,
    coords: Vec<[f32; 3]>,
    res_ids: Vec<i64>,
    /// Residue insertion codes, empty when absent.
    ins_codes: Vec<String>,
    res_names: Vec<String>,
    is_hetero: Vec<bool>,
    elements: Vec<Element>,
    chain_ids: Vec<String>,
    b_factors: Vec<f64>,
}

impl AtomCollection {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        size: usize,
        coords: Vec<[f32; 3]>,
        res_ids: Vec<i64>,
        ins_codes: Vec<String>,
        res_names: Vec<String>,
        is_hetero: Vec<bool>,
        elements: Vec<Element>,
        chain_ids: Vec<String>,
        b_factors: Vec<f64>,
    ) -> Self {
        AtomCollection {
            size,
            coords,
            res_ids,
            ins_codes,
            res_names,
            is_hetero,
            elements,
            chain_ids,
            b_factors,
        }
    }
    pub fn get_size(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    /// B-factor column. Predicted models store per-atom confidence (pLDDT) here.
    pub fn get_b_factor(&self, idx: usize) -> f64 {
        self.b_factors[idx]
    }
    pub fn get_chain_id(&self, idx: usize) -> &String {
        &self.chain_ids[idx]
    }
    pub fn get_ins_code(&self, idx: usize) -> &String {
        &self.ins_codes[idx]
    }
    pub fn get_is_hetero(&self, idx: usize) -> bool {
        self.is_hetero[idx]
    }
    pub fn get_res_id(&self, idx: usize) -> i64 {
        self.res_ids[idx]
    }
    pub fn get_res_name(&self, idx: usize) -> &String {
        &self.res_names[idx]
    }
    /// A new residue starts when the chain ID, residue ID, insertion code or
    /// residue name changes from one atom to the next. The returned boundaries
    /// are closed with the atom count so consecutive pairs delimit every residue.
    pub(crate) fn get_residue_starts(&self) -> Vec<usize> {
        if self.size == 0 {
            return Vec::new();
        }
        let mut starts = vec![0];

        starts.extend(
            izip!(
                &self.res_ids,
                &self.ins_codes,
                &self.res_names,
                &self.chain_ids
            )
            .tuple_windows()
            .enumerate()
            .filter_map(|(i, (first, second))| if first != second { Some(i + 1) } else { None }),
        );
        starts.push(self.size);
        starts
    }
    pub fn iter_coords_and_elements(&self) -> impl Iterator<Item = (&[f32; 3], &Element)> {
        izip!(&self.coords, &self.elements)
    }
    /// Iterate through the AtomCollection one residue at a time.
    ///
    /// This is the base for any other residue filtration code.
    pub fn iter_residues_all(&self) -> ResidueIter<'_> {
        ResidueIter::new(self, self.get_residue_starts())
    }
    /// Residues built only from `ATOM` records, i.e. no ligands, ions or waters.
    pub fn iter_residues_standard(&self) -> impl Iterator<Item = ResidueAtoms<'_>> + '_ {
        self.iter_residues_all()
            .filter(|residue| residue.is_standard())
    }
}
