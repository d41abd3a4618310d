//! Force contributors for the cloth
//!
//! A [`ForceSet`] is a list of [`ForceTerm`]s whose contributions are summed
//! into one force per vertex. The cloth uses two terms: an evenly shared
//! gravity and the structural/shear/bending spring network.

use rayon::prelude::*;

use super::grid::GridView;
use super::params::Parameters;
use super::springs::{neighbor_force, spring_links};
use super::states::{grid_coord, NVec3};

/// Collection of force terms (gravity, springs, ...)
/// Each term implements [`ForceTerm`] and their contributions are summed
/// into a single force vector per vertex
pub struct ForceSet {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
    parallel: bool, // handed to every term on each pass
}

impl ForceSet {
    /// Create an empty, serial force set
    pub fn new() -> Self {
        Self { terms: Vec::new(), parallel: false }
    }

    /// Add a force term
    pub fn with(mut self, term: impl ForceTerm + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Gravity plus the three spring families, as configured in `params`
    pub fn cloth(params: &Parameters) -> Self {
        Self::new()
            .with(UniformGravity { g: params.gravity })
            .with(SpringNetwork {
                k_structural: params.k_structural,
                k_shear: params.k_shear,
                k_bending: params.k_bending,
            })
    }

    /// Split per-vertex work over rayon workers; the terms themselves are kept
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Compute total forces for every vertex of `grid`
    /// - `out[i]` is overwritten with the sum of contributions from all terms
    pub fn accumulate_forces(&self, grid: &GridView<'_>, out: &mut [NVec3]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec3::zeros();
        }
        for term in &self.terms {
            term.apply(grid, out, self.parallel);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on a frozen grid view.
/// Implementations add their contribution into `out[i]` for each vertex.
/// `parallel` is a hint; serial and parallel passes must give the same sums
pub trait ForceTerm {
    fn apply(&self, grid: &GridView<'_>, out: &mut [NVec3], parallel: bool);
}

/// Gravity `g` split evenly over all vertices, so the total weight of the
/// cloth does not depend on the grid resolution
pub struct UniformGravity {
    pub g: NVec3,
}

impl UniformGravity {
    pub fn per_vertex(&self, n_total: usize) -> NVec3 {
        self.g / n_total as f64
    }
}

impl ForceTerm for UniformGravity {
    fn apply(&self, _grid: &GridView<'_>, out: &mut [NVec3], _parallel: bool) {
        if out.is_empty() {
            return;
        }
        let share = self.per_vertex(out.len());
        for f in out.iter_mut() {
            *f += share;
        }
    }
}

/// Structural, shear and bending springs to the twelve grid neighbors
pub struct SpringNetwork {
    pub k_structural: f64,
    pub k_shear: f64,
    pub k_bending: f64,
}

impl ForceTerm for SpringNetwork {
    fn apply(&self, grid: &GridView<'_>, out: &mut [NVec3], parallel: bool) {
        let size_u = grid.size_u();
        let links = spring_links(size_u, grid.size_v(), self.k_structural, self.k_shear, self.k_bending);

        // Each vertex only reads positions and writes its own slot
        let per_vertex = |(offset, f): (usize, &mut NVec3)| {
            let (ku, kv) = grid_coord(offset, size_u);
            for link in &links {
                *f += neighbor_force(grid, link.spring, ku, kv, link.du, link.dv);
            }
        };

        if parallel {
            out.par_iter_mut().enumerate().for_each(per_vertex);
        } else {
            out.iter_mut().enumerate().for_each(per_vertex);
        }
    }
}
