//! Coordinate storage
//!
//! Coordinates are stored flat (`x, y, z` per atom) in model atom order.

use lin_alg::f32::Vec3;

use crate::index::AtomIndex;

/// Cartesian coordinates for every atom of a model
#[derive(Debug, Clone, Default)]
pub struct CoordSet {
    coords: Vec<f32>,
}

impl CoordSet {
    pub fn new() -> Self {
        CoordSet::default()
    }

    /// Create a coordinate set from a slice of points
    pub fn from_vec3(points: &[Vec3]) -> Self {
        let mut coords = Vec::with_capacity(points.len() * 3);
        for p in points {
            coords.extend_from_slice(&[p.x, p.y, p.z]);
        }
        CoordSet { coords }
    }

    pub fn push(&mut self, p: Vec3) {
        self.coords.extend_from_slice(&[p.x, p.y, p.z]);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Get the coordinate of an atom
    pub fn get(&self, atom: AtomIndex) -> Option<Vec3> {
        let i = atom.as_usize() * 3;
        let xyz = self.coords.get(i..i + 3)?;
        Some(Vec3::new(xyz[0], xyz[1], xyz[2]))
    }

    /// Iterate over all points
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.coords
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get() {
        let cs = CoordSet::from_vec3(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(cs.len(), 2);
        let p = cs.get(AtomIndex(1)).unwrap();
        assert_eq!((p.x, p.y, p.z), (1.0, 2.0, 3.0));
        assert!(cs.get(AtomIndex(2)).is_none());
        assert_eq!(cs.iter().count(), 2);
    }
}
