//! Grid topology consumed by the simulation kernel
//!
//! The kernel only needs three things from the surrounding mesh: the grid
//! dimensions, a position slice in `ku + size_u * kv` order, and bounds-checked
//! coordinate access. [`GridTopology`] is that seam. [`ParametricGrid`] is the
//! default implementation and lays out the flat unit cloth.

use crate::simulation::error::ClothError;
use crate::simulation::states::{flat_index, NVec3};

/// Bounds check shared by every coordinate accessor (positions, speed, force)
pub fn checked_offset(ku: usize, kv: usize, size_u: usize, size_v: usize) -> Result<usize, ClothError> {
    if ku >= size_u || kv >= size_v {
        return Err(ClothError::IndexOutOfRange { ku, kv, size_u, size_v });
    }
    Ok(flat_index(ku, kv, size_u))
}

/// An Nu x Nv array of 3D positions.
///
/// Implementors must keep `positions().len() == size_u() * size_v()`.
pub trait GridTopology {
    fn size_u(&self) -> usize;
    fn size_v(&self) -> usize;
    fn positions(&self) -> &[NVec3];
    fn positions_mut(&mut self) -> &mut [NVec3];

    fn size_vertex(&self) -> usize {
        self.size_u() * self.size_v()
    }

    fn vertex(&self, ku: usize, kv: usize) -> Result<&NVec3, ClothError> {
        let (size_u, size_v) = (self.size_u(), self.size_v());
        let offset = checked_offset(ku, kv, size_u, size_v)?;
        self.positions()
            .get(offset)
            .ok_or(ClothError::IndexOutOfRange { ku, kv, size_u, size_v })
    }

    fn vertex_mut(&mut self, ku: usize, kv: usize) -> Result<&mut NVec3, ClothError> {
        let (size_u, size_v) = (self.size_u(), self.size_v());
        let offset = checked_offset(ku, kv, size_u, size_v)?;
        self.positions_mut()
            .get_mut(offset)
            .ok_or(ClothError::IndexOutOfRange { ku, kv, size_u, size_v })
    }

    /// Read-only snapshot used by the force pass
    fn view(&self) -> GridView<'_> {
        GridView::new(self.positions(), self.size_u(), self.size_v())
    }
}

/// Frozen, shareable view over the positions of a grid.
///
/// `Copy` and `Sync`, so the spring pass can hand it to rayon workers.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    positions: &'a [NVec3],
    size_u: usize,
    size_v: usize,
}

impl<'a> GridView<'a> {
    pub fn new(positions: &'a [NVec3], size_u: usize, size_v: usize) -> Self {
        debug_assert_eq!(positions.len(), size_u * size_v);
        Self { positions, size_u, size_v }
    }

    pub fn size_u(&self) -> usize {
        self.size_u
    }

    pub fn size_v(&self) -> usize {
        self.size_v
    }

    /// Position at an in-range coordinate
    #[inline]
    pub fn at(&self, ku: usize, kv: usize) -> &'a NVec3 {
        &self.positions[flat_index(ku, kv, self.size_u)]
    }

    /// Position of the neighbor at `(ku + du, kv + dv)`, or `None` past the edge.
    /// No wrap-around: the border is a free edge.
    #[inline]
    pub fn neighbor(&self, ku: usize, kv: usize, du: isize, dv: isize) -> Option<&'a NVec3> {
        let nu = ku.checked_add_signed(du).filter(|&u| u < self.size_u)?;
        let nv = kv.checked_add_signed(dv).filter(|&v| v < self.size_v)?;
        self.positions.get(flat_index(nu, nv, self.size_u))
    }
}

/// Rectangular parametric surface stored as a flat position array
#[derive(Debug, Clone, Default)]
pub struct ParametricGrid {
    size_u: usize,
    size_v: usize,
    positions: Vec<NVec3>,
}

impl ParametricGrid {
    /// Flat unit square in the z = 0 plane, `(ku, kv) -> (ku/(Nu-1), kv/(Nv-1), 0)`
    pub fn plane_xy_unit(size_u: usize, size_v: usize) -> Result<Self, ClothError> {
        let mut grid = Self::default();
        grid.set_plane_xy_unit(size_u, size_v)?;
        Ok(grid)
    }

    /// Re-lay the grid as a flat unit square, possibly changing its size
    pub fn set_plane_xy_unit(&mut self, size_u: usize, size_v: usize) -> Result<(), ClothError> {
        if size_u < 2 || size_v < 2 {
            return Err(ClothError::InvalidGridSize { size_u, size_v });
        }

        let du = 1.0 / (size_u - 1) as f64;
        let dv = 1.0 / (size_v - 1) as f64;

        self.positions.clear();
        self.positions.reserve(size_u * size_v);
        for kv in 0..size_v {
            for ku in 0..size_u {
                self.positions.push(NVec3::new(ku as f64 * du, kv as f64 * dv, 0.0));
            }
        }
        self.size_u = size_u;
        self.size_v = size_v;
        Ok(())
    }

    /// Build a grid from explicit positions in `ku + size_u * kv` order
    pub fn from_positions(size_u: usize, size_v: usize, positions: Vec<NVec3>) -> Result<Self, ClothError> {
        if size_u == 0 || size_v == 0 {
            return Err(ClothError::InvalidGridSize { size_u, size_v });
        }
        let expected = size_u * size_v;
        if positions.len() != expected {
            return Err(ClothError::SizeMismatch {
                storage: "position",
                expected,
                found: positions.len(),
            });
        }
        Ok(Self { size_u, size_v, positions })
    }
}

impl GridTopology for ParametricGrid {
    fn size_u(&self) -> usize {
        self.size_u
    }

    fn size_v(&self) -> usize {
        self.size_v
    }

    fn positions(&self) -> &[NVec3] {
        &self.positions
    }

    fn positions_mut(&mut self) -> &mut [NVec3] {
        &mut self.positions
    }
}
