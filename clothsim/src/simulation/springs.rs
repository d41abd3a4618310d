//! Spring force model for the mass-spring cloth
//!
//! Each vertex is tied to twelve neighbors through three families of springs:
//! - structural: (0,±1), (±1,0)
//! - shear:      (±1,±1)
//! - bending:    (0,±2), (±2,0)
//!
//! Rest lengths follow the unit spacing of the grid, `Lu = 1/(Nu-1)` and
//! `Lv = 1/(Nv-1)`.

use super::grid::GridView;
use super::states::NVec3;

/// Hookean spring: stiffness `k`, rest length `rest_length`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub k: f64,
    pub rest_length: f64,
}

/// One neighbor link: offset from the vertex and the spring attached to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringLink {
    pub du: isize,
    pub dv: isize,
    pub spring: Spring,
}

/// Force exerted on `(ku, kv)` by its neighbor at `(ku + du, kv + dv)`.
///
/// Out-of-grid neighbors contribute exactly zero. Coincident vertices
/// (separation 0) are not guarded and give a non-finite result.
#[inline]
pub fn neighbor_force(grid: &GridView<'_>, spring: Spring, ku: usize, kv: usize, du: isize, dv: isize) -> NVec3 {
    let Some(neighbor) = grid.neighbor(ku, kv, du, dv) else {
        return NVec3::zeros();
    };

    // d points from the neighbor to the vertex
    let d = grid.at(ku, kv) - neighbor;
    let len = d.norm();

    spring.k * (spring.rest_length - len) * (d / len)
}

/// The twelve links of an `size_u x size_v` grid
pub fn spring_links(size_u: usize, size_v: usize, k_structural: f64, k_shear: f64, k_bending: f64) -> [SpringLink; 12] {
    let lu = 1.0 / (size_u as f64 - 1.0);
    let lv = 1.0 / (size_v as f64 - 1.0);
    let l_shear = (lu * lu + lv * lv).sqrt();

    let structural_u = Spring { k: k_structural, rest_length: lu };
    let structural_v = Spring { k: k_structural, rest_length: lv };
    let shear = Spring { k: k_shear, rest_length: l_shear };
    let bending_u = Spring { k: k_bending, rest_length: 2.0 * lu };
    let bending_v = Spring { k: k_bending, rest_length: 2.0 * lv };

    let link = |du, dv, spring| SpringLink { du, dv, spring };

    [
        // structural
        link(0, 1, structural_v),
        link(1, 0, structural_u),
        link(0, -1, structural_v),
        link(-1, 0, structural_u),
        // shear
        link(1, 1, shear),
        link(1, -1, shear),
        link(-1, 1, shear),
        link(-1, -1, shear),
        // bending
        link(0, 2, bending_v),
        link(2, 0, bending_u),
        link(0, -2, bending_v),
        link(-2, 0, bending_u),
    ]
}
