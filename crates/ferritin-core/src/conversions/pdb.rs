use crate::{AtomCollection, StructureError};
use itertools::Itertools;
use pdbtbx::{Element, StrictnessLevel, PDB};
use std::path::Path;

impl From<&PDB> for AtomCollection {
    // the PDB API requires us to iterate:
    // PDB --> Chain --> Residue --> Atom if we want data from all.
    // Here we collect all the data in one go and return an AtomCollection.
    // `PDB::chains` only walks the first model.
    fn from(pdb_data: &PDB) -> Self {
        let (coords, is_hetero, res_ids, ins_codes, res_names, elements, chain_ids, b_factors): (
            Vec<[f32; 3]>,
            Vec<bool>,
            Vec<i64>,
            Vec<String>,
            Vec<String>,
            Vec<Element>,
            Vec<String>,
            Vec<f64>,
        ) = pdb_data
            .chains()
            .flat_map(|chain| {
                let chain_id = chain.id().to_string();
                chain.residues().flat_map(move |residue| {
                    let (res_number, insertion_code) = residue.id();
                    let res_id = res_number as i64;
                    let ins_code = insertion_code.unwrap_or_default().to_string();
                    let res_name = residue.name().unwrap_or_default().to_string();
                    let chain_id = chain_id.clone();
                    residue.atoms().filter_map(move |atom| {
                        atom.element().map(|element| {
                            let (x, y, z) = atom.pos();
                            (
                                [x as f32, y as f32, z as f32],
                                atom.hetero(),
                                res_id,
                                ins_code.clone(),
                                res_name.clone(),
                                element.clone(),
                                chain_id.clone(),
                                atom.b_factor(),
                            )
                        })
                    })
                })
            })
            .multiunzip();

        AtomCollection::new(
            coords.len(),
            coords,
            res_ids,
            ins_codes,
            res_names,
            is_hetero,
            elements,
            chain_ids,
            b_factors,
        )
    }
}

/// Extensions `pdbtbx::open` dispatches on by itself.
const KNOWN_EXTENSIONS: [&str; 3] = ["pdb", "cif", "mmcif"];

impl AtomCollection {
    /// Open a PDB or mmCIF file with `pdbtbx` and flatten its first model.
    ///
    /// Files without a `.pdb`, `.cif` or `.mmcif` extension (`.ent`, none at all)
    /// are read as PDB. Parser errors are fatal; parser warnings are logged and
    /// otherwise ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StructureError> {
        let path = path.as_ref();
        let known = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| KNOWN_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        let path = path.to_string_lossy().into_owned();

        let parsed = if known {
            pdbtbx::open(&path)
        } else {
            log::debug!("{}: unrecognised extension, reading as PDB", path);
            pdbtbx::open_pdb(&path, StrictnessLevel::Medium)
        };
        let (pdb, warnings) = parsed.map_err(|errors| StructureError::Parse {
            path: path.clone(),
            messages: errors.iter().map(|e| e.to_string()).join("; "),
        })?;
        for warning in &warnings {
            log::debug!("{}: {}", path, warning);
        }
        let ac = AtomCollection::from(&pdb);
        if ac.is_empty() {
            log::warn!("No atoms with a recognised element in {}", path);
        }
        Ok(ac)
    }
}
