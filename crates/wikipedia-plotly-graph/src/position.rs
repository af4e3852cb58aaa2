use std::collections::HashMap;

use fastrand::Rng;
use wikipedia_graph::LinkGraph;

/// Coordinates are picked on a grid of this many steps per axis
const POSITION_RESOLUTION: u32 = 10_000;

/// Where each node sits on the unit square
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionMap {
    positions: HashMap<String, (f64, f64)>,
}

impl PositionMap {
    /// An independent uniform position for every node, each axis in `[0, 1)`
    pub fn random(graph: &LinkGraph, rng: &mut Rng) -> Self {
        graph
            .nodes()
            .map(|node| (node.to_string(), (random_axis(rng), random_axis(rng))))
            .collect()
    }

    pub fn get(&self, identifier: &str) -> Option<(f64, f64)> {
        self.positions.get(identifier).copied()
    }

    pub fn insert(&mut self, identifier: impl Into<String>, position: (f64, f64)) {
        self.positions.insert(identifier.into(), position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<(String, (f64, f64))> for PositionMap {
    fn from_iter<T: IntoIterator<Item = (String, (f64, f64))>>(iter: T) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

fn random_axis(rng: &mut Rng) -> f64 {
    f64::from(rng.u32(0..POSITION_RESOLUTION)) / f64::from(POSITION_RESOLUTION)
}
