/// Nearest-neighbor analysis over projected mesh edge points.
///
/// Local grid resolution is estimated as the distance from each edge
/// midpoint to its nearest distinct neighbor. The relation is not
/// symmetric: A's nearest neighbor being B does not imply B's is A.
///
/// Self-exclusion is explicit (by point index, not by nonzero
/// distance). Coincident duplicate points therefore still report a
/// nearest-other distance of 0; the analyzer counts how many points did
/// so and surfaces the count so the driver can warn about them.

use rstar::RTree;
use rstar::primitives::GeomWithData;

/// One point's nearest-distinct-neighbor result.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestNeighbor {
    /// Index of the query point in the input slice.
    pub index: usize,
    /// Index of its nearest distinct neighbor.
    pub neighbor: usize,
    /// Euclidean distance between the two, in input units (meters for
    /// UTM-projected coordinates).
    pub distance: f64,
}

/// Nearest-neighbor results for a full point set.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestNeighborSet {
    /// One entry per input point, in input order.
    pub pairs: Vec<NearestNeighbor>,
    /// Number of points whose nearest distinct neighbor sits at
    /// distance exactly 0 (coincident duplicates in the mesh).
    pub coincident_count: usize,
}

impl NearestNeighborSet {
    /// Distances in input order, ready for statistics and plotting.
    pub fn distances(&self) -> Vec<f64> {
        self.pairs.iter().map(|p| p.distance).collect()
    }
}

/// Compute each point's nearest distinct neighbor over a planar point
/// set.
///
/// Builds an R-tree over all points (O(N log N)) and runs one
/// ascending-distance query per point, skipping the point itself by
/// index. Deterministic given fixed input ordering. Returns an empty
/// set for fewer than two points, since "nearest other point" is
/// undefined there.
pub fn nearest_neighbors(points: &[[f64; 2]]) -> NearestNeighborSet {
    if points.len() < 2 {
        return NearestNeighborSet {
            pairs: Vec::new(),
            coincident_count: 0,
        };
    }

    let entries: Vec<GeomWithData<[f64; 2], usize>> = points
        .iter()
        .enumerate()
        .map(|(i, p)| GeomWithData::new(*p, i))
        .collect();
    let tree = RTree::bulk_load(entries);

    let mut pairs = Vec::with_capacity(points.len());
    let mut coincident_count = 0;

    for (i, point) in points.iter().enumerate() {
        for (candidate, distance_sq) in tree.nearest_neighbor_iter_with_distance_2(point) {
            if candidate.data == i {
                continue;
            }
            let distance = distance_sq.sqrt();
            if distance == 0.0 {
                coincident_count += 1;
            }
            pairs.push(NearestNeighbor {
                index: i,
                neighbor: candidate.data,
                distance,
            });
            break;
        }
    }

    NearestNeighborSet {
        pairs,
        coincident_count,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
