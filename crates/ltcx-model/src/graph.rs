// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A single lattice graph
//!
//! Nodes added through [`Graph::add_node`] and [`Graph::add_oriented_node`]
//! are converted from the graph's units to millimeters. The bulk setters
//! store their input verbatim.

use crate::units::{to_millimeters, Units};
use crate::{Beam, Face, GraphType, Node, NodeIndex, Orientation};
use serde::{Deserialize, Serialize};

/// Lattice graph: nodes plus beam and face connectivity
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    id: i32,
    name: String,
    units: Units,
    nodes: Vec<Node>,
    beams: Vec<Beam>,
    faces: Vec<Face>,
}

impl Graph {
    /// Create an empty graph
    pub fn new(name: impl Into<String>, id: i32, units: Units) -> Self {
        Self {
            id,
            name: name.into(),
            units,
            ..Default::default()
        }
    }

    /// Create an unnamed millimeter graph
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add a node given in graph units
    pub fn add_node(&mut self, x: f64, y: f64, z: f64, radius: Option<f64>) {
        let units = self.units;
        let mm = move |v: f64| to_millimeters(v, units);
        self.nodes.push(Node {
            x: mm(x),
            y: mm(y),
            z: mm(z),
            radius: radius.map(mm),
            orientation: None,
        });
    }

    /// Add a node carrying orientation data, all values in graph units
    pub fn add_oriented_node(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        radius: Option<f64>,
        start: [f64; 3],
        end: [f64; 3],
    ) {
        let units = self.units;
        let mm = move |v: f64| to_millimeters(v, units);
        self.nodes.push(Node {
            x: mm(x),
            y: mm(y),
            z: mm(z),
            radius: radius.map(mm),
            orientation: Some(Orientation::new(start.map(mm), end.map(mm))),
        });
    }

    /// Add a beam (indices are not bounds-checked)
    pub fn add_beam(&mut self, n1: NodeIndex, n2: NodeIndex) {
        self.beams.push(Beam::new(n1, n2));
    }

    /// Add a triangle, or a quad when `n3` is given (indices are not bounds-checked)
    pub fn add_face(&mut self, n0: NodeIndex, n1: NodeIndex, n2: NodeIndex, n3: Option<NodeIndex>) {
        self.faces.push(Face {
            vertices: [n0, n1, n2],
            fourth: n3,
        });
    }

    /// Replace all nodes; values must already be in millimeters
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
    }

    pub fn set_beams(&mut self, beams: Vec<Beam>) {
        self.beams = beams;
    }

    pub fn set_faces(&mut self, faces: Vec<Face>) {
        self.faces = faces;
    }

    /// `Rib` if any node is oriented, `Round` otherwise
    pub fn graph_type(&self) -> GraphType {
        if self.nodes.iter().any(Node::is_oriented) {
            GraphType::Rib
        } else {
            GraphType::Round
        }
    }

    /// Check if the graph has any beam or face
    pub fn is_connected(&self) -> bool {
        !self.beams.is_empty() || !self.faces.is_empty()
    }

    /// Check if the graph has no nodes, beams or faces
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && !self.is_connected()
    }
}
