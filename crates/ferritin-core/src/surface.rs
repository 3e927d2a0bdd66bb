//! Solvent accessible surface area.
//!
//! [`SurfaceComputer`] is a Shrake-Rupley sampler: every atom is inflated by its
//! van der Waals radius plus a solvent probe, a fixed set of points is spread over
//! that sphere, and the exposed fraction of points scales the sphere's area.
use crate::info::constants::{vdw_radius, DEFAULT_PROBE_RADIUS, DEFAULT_SPHERE_POINTS};
use crate::{AtomCollection, StructureError};
use std::f64::consts::PI;

/// Anything able to assign a solvent accessible area to every atom of a structure.
pub trait SurfaceAreaCalculator {
    /// Accessible area in Å² for each atom, in [`AtomCollection`] order.
    fn atom_areas(&self, atoms: &AtomCollection) -> Result<Vec<f64>, StructureError>;
}

#[derive(Debug, Clone)]
pub struct SurfaceComputer {
    /// Probe radius in Å (default: 1.4 Å)
    pub probe_radius: f64,
    /// Number of sample points on each atom sphere
    pub n_points: usize,
}

impl Default for SurfaceComputer {
    fn default() -> Self {
        Self {
            probe_radius: DEFAULT_PROBE_RADIUS,
            n_points: DEFAULT_SPHERE_POINTS,
        }
    }
}

impl SurfaceComputer {
    fn validate(&self) -> Result<(), StructureError> {
        if self.n_points == 0 {
            return Err(StructureError::InvalidSurfaceParameters(
                "at least one sphere point is required".to_string(),
            ));
        }
        if !self.probe_radius.is_finite() || self.probe_radius < 0.0 {
            return Err(StructureError::InvalidSurfaceParameters(format!(
                "probe radius must be a non-negative number, got {}",
                self.probe_radius
            )));
        }
        Ok(())
    }
}

impl SurfaceAreaCalculator for SurfaceComputer {
    fn atom_areas(&self, atoms: &AtomCollection) -> Result<Vec<f64>, StructureError> {
        self.validate()?;
        if atoms.is_empty() {
            return Ok(Vec::new());
        }

        let sphere = golden_spiral(self.n_points);
        let (coords, radii): (Vec<[f64; 3]>, Vec<f64>) = atoms
            .iter_coords_and_elements()
            .map(|(coord, element)| {
                (
                    [coord[0] as f64, coord[1] as f64, coord[2] as f64],
                    vdw_radius(element) + self.probe_radius,
                )
            })
            .unzip();

        // two inflated spheres can only occlude each other if they overlap
        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); coords.len()];
        for i in 0..coords.len() {
            for j in (i + 1)..coords.len() {
                let cutoff = radii[i] + radii[j];
                if distance_squared(&coords[i], &coords[j]) < cutoff * cutoff {
                    neighbors[i].push(j);
                    neighbors[j].push(i);
                }
            }
        }

        let areas = coords
            .iter()
            .zip(radii.iter())
            .zip(neighbors.iter())
            .map(|((center, &radius), neighbors)| {
                let exposed = sphere
                    .iter()
                    .filter(|p| {
                        let sample = [
                            center[0] + p[0] * radius,
                            center[1] + p[1] * radius,
                            center[2] + p[2] * radius,
                        ];
                        !neighbors.iter().any(|&n| {
                            distance_squared(&sample, &coords[n]) < radii[n] * radii[n]
                        })
                    })
                    .count();
                4.0 * PI * radius * radius * exposed as f64 / sphere.len() as f64
            })
            .collect();

        Ok(areas)
    }
}

fn distance_squared(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Unit-sphere points spread along a golden-angle spiral.
fn golden_spiral(n: usize) -> Vec<[f64; 3]> {
    let increment = PI * (3.0 - 5.0_f64.sqrt());
    let offset = 2.0 / n as f64;
    (0..n)
        .map(|i| {
            let y = (i as f64 * offset - 1.0) + offset / 2.0;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let phi = i as f64 * increment;
            [phi.cos() * r, y, phi.sin() * r]
        })
        .collect()
}
