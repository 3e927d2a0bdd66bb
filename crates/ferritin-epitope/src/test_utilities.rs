use ferritin_core::{FeatureMap, ResidueFeatures, SecondaryStructure};
use ferritin_io::{Cell, RecordSource};

/// In-memory label table; every value is raw text, like a parsed CSV.
pub struct MemoryTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MemoryTable {
    pub fn new(columns: &[&str], rows: &[&[&str]]) -> Self {
        MemoryTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }
}

impl RecordSource for MemoryTable {
    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }
    fn num_records(&self) -> usize {
        self.rows.len()
    }
    fn cell(&self, record: usize, column: &str) -> Option<Cell> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows
            .get(record)
            .and_then(|row| row.get(idx))
            .map(|value| Cell::from_text(value))
    }
}

/// Residues 1, 2, 3 with confidence 80 / 90 / 70 and area 10 / 20 / 30.
pub fn features_fixture() -> ResidueFeatures {
    let mut sasa = FeatureMap::new(0.0);
    let mut plddt = FeatureMap::new(0.0);
    let mut secondary_structure = FeatureMap::new(SecondaryStructure::Unknown);
    for (res_id, confidence, area) in [(1, 80.0, 10.0), (2, 90.0, 20.0), (3, 70.0, 30.0)] {
        sasa.insert(res_id, area);
        plddt.insert(res_id, confidence);
        secondary_structure.insert(res_id, SecondaryStructure::Coil);
    }
    ResidueFeatures {
        sasa,
        plddt,
        secondary_structure,
    }
}
