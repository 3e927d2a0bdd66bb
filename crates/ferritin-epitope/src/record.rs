use ferritin_core::SecondaryStructure;

pub const DEFAULT_RESIDUE_NAME: &str = "UNK";

/// One annotated label row.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub residue_index: i64,
    pub residue_name: String,
    /// 1 for epitope residues, 0 otherwise.
    pub is_epitope: u8,
    pub sasa: f64,
    pub plddt: f64,
    pub secondary_structure: SecondaryStructure,
    pub original_sasa_complex: f64,
    pub original_sasa_monomer: f64,
}

impl MergedRecord {
    pub fn is_epitope(&self) -> bool {
        self.is_epitope == 1
    }
}
