use crate::surface::SurfaceAreaCalculator;
use crate::{AtomCollection, StructureError};
use pdbtbx::Element;

/// Build a collection from `(res_id, ins_code, res_name, hetero, b_factors)` rows.
///
/// Standard residues get N / CA / C atoms, hetero residues a single O, laid
/// out along the x axis.
fn build_container(residues: &[(i64, &str, &str, bool, Vec<f64>)]) -> AtomCollection {
    let mut coords = Vec::new();
    let mut res_ids = Vec::new();
    let mut ins_codes = Vec::new();
    let mut res_names = Vec::new();
    let mut is_hetero = Vec::new();
    let mut elements = Vec::new();
    let mut chain_ids = Vec::new();
    let mut b_factors = Vec::new();

    for (res_idx, (res_id, ins_code, res_name, hetero, b)) in residues.iter().enumerate() {
        let atoms: &[Element] = if *hetero {
            &[Element::O]
        } else {
            &[Element::N, Element::C, Element::C]
        };
        for (atom_idx, (element, b_factor)) in atoms.iter().zip(b.iter()).enumerate() {
            let x = res_idx as f32 * 3.8 + atom_idx as f32 * 1.4;
            coords.push([x, 0.0, 0.0]);
            res_ids.push(*res_id);
            ins_codes.push(ins_code.to_string());
            res_names.push(res_name.to_string());
            is_hetero.push(*hetero);
            elements.push(element.clone());
            chain_ids.push("A".to_string());
            b_factors.push(*b_factor);
        }
    }

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

/// MET 1, LYS 2, GLY 3 (three backbone atoms each) followed by one water.
///
/// Per-residue confidence means are 80, 90 and 70.
pub fn get_atom_container() -> AtomCollection {
    build_container(&[
        (1, "", "MET", false, vec![80.0, 80.0, 80.0]),
        (2, "", "LYS", false, vec![85.0, 95.0, 90.0]),
        (3, "", "GLY", false, vec![70.0, 70.0, 70.0]),
        (101, "", "HOH", true, vec![30.0]),
    ])
}

/// GLY 52, GLY 52A and ALA 53 with two atoms each; confidence 60, 90 and 50.
pub fn insertion_code_container() -> AtomCollection {
    build_container(&[
        (52, "", "GLY", false, vec![60.0, 60.0]),
        (52, "A", "GLY", false, vec![90.0, 90.0]),
        (53, "", "ALA", false, vec![50.0, 50.0]),
    ])
}

/// One single-atom residue per entry, numbered from 1.
pub fn collection_from_atoms(atoms: &[([f32; 3], Element)]) -> AtomCollection {
    let n = atoms.len();
    AtomCollection::new(
        n,
        atoms.iter().map(|(coord, _)| *coord).collect(),
        (1..=n as i64).collect(),
        vec![String::new(); n],
        vec!["ALA".to_string(); n],
        vec![false; n],
        atoms.iter().map(|(_, element)| element.clone()).collect(),
        vec!["A".to_string(); n],
        vec![50.0; n],
    )
}

/// Surface calculator returning canned per-atom areas.
pub struct FixedAreas(pub Vec<f64>);

impl SurfaceAreaCalculator for FixedAreas {
    fn atom_areas(&self, _atoms: &AtomCollection) -> Result<Vec<f64>, StructureError> {
        Ok(self.0.clone())
    }
}
