//! Uniform hash grid for neighbour queries in the network backdrop.
//!
//! With the cell size equal to the query radius, every point closer than the
//! radius to `p` lives in `p`'s cell or one of its eight neighbours.

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

type Bucket = SmallVec<[usize; 8]>;

pub struct SpatialGrid {
    cell_size: f32,
    buckets: FnvHashMap<(i32, i32), Bucket>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(f32::EPSILON),
            buckets: FnvHashMap::default(),
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn cell_of(&self, p: Vec2) -> (i32, i32) {
        (
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }

    /// Replace the contents with `points`, indexed by iteration order.
    pub fn rebuild(&mut self, points: impl IntoIterator<Item = Vec2>) {
        // Keep allocated buckets around between frames.
        for bucket in self.buckets.values_mut() {
            bucket.clear();
        }
        for (i, p) in points.into_iter().enumerate() {
            let key = self.cell_of(p);
            self.buckets.entry(key).or_default().push(i);
        }
    }

    /// Indices in the 3x3 block of cells around `p`.
    pub fn neighbours(&self, p: Vec2) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy) = self.cell_of(p);
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| (cx + dx, cy + dy)))
            .filter_map(|key| self.buckets.get(&key))
            .flat_map(|bucket| bucket.iter().copied())
    }

    pub fn occupied_cells(&self) -> usize {
        self.buckets.values().filter(|b| !b.is_empty()).count()
    }
}
