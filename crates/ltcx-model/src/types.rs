// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for lattice graph representation
//!
//! Nodes, beams and faces are plain value types. Optional data (radius,
//! orientation, fourth face vertex) is carried as `Option` rather than
//! through `-1` sentinels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index of a node within its owning graph
pub type NodeIndex = u32;

/// Start and end point of an oriented (rib) node
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Orientation {
    /// Start point (xs, ys, zs)
    pub start: [f64; 3],
    /// End point (xe, ye, ze)
    pub end: [f64; 3],
}

impl Orientation {
    /// Create a new orientation
    pub fn new(start: [f64; 3], end: [f64; 3]) -> Self {
        Self { start, end }
    }

    /// True when start and end differ in any component
    pub fn is_directed(&self) -> bool {
        self.start != self.end
    }
}

/// Lattice node
///
/// Coordinates are in millimeters once the node is stored in a graph.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Node radius, `None` when unspecified
    pub radius: Option<f64>,
    /// Orientation data, `None` for round nodes
    pub orientation: Option<Orientation>,
}

impl Node {
    /// Create a node without radius or orientation
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            radius: None,
            orientation: None,
        }
    }

    /// Set the radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Set the orientation
    pub fn with_orientation(mut self, start: [f64; 3], end: [f64; 3]) -> Self {
        self.orientation = Some(Orientation::new(start, end));
        self
    }

    /// Position as an array
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Radius if one is set and strictly positive
    pub fn effective_radius(&self) -> Option<f64> {
        self.radius.filter(|r| *r > 0.0)
    }

    /// A node is oriented iff its start and end points differ
    pub fn is_oriented(&self) -> bool {
        self.orientation.is_some_and(|o| o.is_directed())
    }
}

/// Beam connecting two nodes by index
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Beam {
    pub n1: NodeIndex,
    pub n2: NodeIndex,
}

impl Beam {
    /// Create a new beam
    pub fn new(n1: NodeIndex, n2: NodeIndex) -> Self {
        Self { n1, n2 }
    }
}

/// Triangle or quad face between nodes
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Face {
    /// First three vertices
    pub vertices: [NodeIndex; 3],
    /// Fourth vertex, present only for quads
    pub fourth: Option<NodeIndex>,
}

impl Face {
    /// Create a triangle
    pub fn triangle(v0: NodeIndex, v1: NodeIndex, v2: NodeIndex) -> Self {
        Self {
            vertices: [v0, v1, v2],
            fourth: None,
        }
    }

    /// Create a quad
    pub fn quad(v0: NodeIndex, v1: NodeIndex, v2: NodeIndex, v3: NodeIndex) -> Self {
        Self {
            vertices: [v0, v1, v2],
            fourth: Some(v3),
        }
    }

    /// Check if this face has four vertices
    pub fn is_quad(&self) -> bool {
        self.fourth.is_some()
    }

    /// Number of vertices (3 or 4)
    pub fn vertex_count(&self) -> usize {
        if self.is_quad() {
            4
        } else {
            3
        }
    }

    /// Iterate over all vertex indices in order
    pub fn indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.vertices.iter().copied().chain(self.fourth)
    }
}

/// Graph classification derived from node orientation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum GraphType {
    /// Type attribute absent or unrecognized
    #[default]
    Undefined,
    /// No node is oriented
    Round,
    /// At least one node is oriented
    Rib,
}

impl GraphType {
    /// Parse the `type` attribute, falling back to `Undefined`
    pub fn parse(s: &str) -> Self {
        match s {
            "rnd" => GraphType::Round,
            "rib" => GraphType::Rib,
            _ => GraphType::Undefined,
        }
    }

    /// Attribute string used in `.ltcx` files
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::Undefined => "",
            GraphType::Round => "rnd",
            GraphType::Rib => "rib",
        }
    }

    /// Legacy numeric value (0 undefined, 1 round, 2 rib)
    pub fn code(&self) -> u32 {
        match self {
            GraphType::Undefined => 0,
            GraphType::Round => 1,
            GraphType::Rib => 2,
        }
    }
}

impl FromStr for GraphType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GraphType::parse(s))
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_classification() {
        let round = Node::new(0.0, 0.0, 0.0);
        assert!(!round.is_oriented());

        let degenerate = Node::new(0.0, 0.0, 0.0).with_orientation([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]);
        assert!(degenerate.orientation.is_some());
        assert!(!degenerate.is_oriented());

        let rib = Node::new(0.0, 0.0, 0.0).with_orientation([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        assert!(rib.is_oriented());
    }

    #[test]
    fn test_effective_radius() {
        assert_eq!(Node::new(0.0, 0.0, 0.0).effective_radius(), None);
        assert_eq!(Node::new(0.0, 0.0, 0.0).with_radius(-1.0).effective_radius(), None);
        assert_eq!(Node::new(0.0, 0.0, 0.0).with_radius(0.0).effective_radius(), None);
        assert_eq!(Node::new(0.0, 0.0, 0.0).with_radius(0.5).effective_radius(), Some(0.5));
    }

    #[test]
    fn test_face_shapes() {
        let tri = Face::triangle(0, 1, 2);
        assert!(!tri.is_quad());
        assert_eq!(tri.vertex_count(), 3);
        assert_eq!(tri.indices().collect::<Vec<_>>(), vec![0, 1, 2]);

        let quad = Face::quad(0, 1, 2, 3);
        assert!(quad.is_quad());
        assert_eq!(quad.indices().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_graph_type_strings() {
        assert_eq!(GraphType::parse("rnd"), GraphType::Round);
        assert_eq!(GraphType::parse("rib"), GraphType::Rib);
        assert_eq!(GraphType::parse("RIB"), GraphType::Undefined);
        assert_eq!(GraphType::Rib.to_string(), "rib");
        assert_eq!(GraphType::Round.code(), 1);
    }
}
