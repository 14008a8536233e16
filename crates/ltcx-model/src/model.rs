// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LatticeModel - ordered collection of graphs
//!
//! The model is the unit of reading and writing. Graphs are owned by value
//! and keep their insertion order; they never reference each other.

use crate::{Beam, Face, Graph, GraphType, Node};
use serde::{Deserialize, Serialize};

/// Collection of lattice graphs in document order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LatticeModel {
    graphs: Vec<Graph>,
}

impl LatticeModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a graph built from millimeter nodes and beams
    ///
    /// The graph id is the current graph count. Returns that id.
    pub fn add_geometry(&mut self, nodes: Vec<Node>, beams: Vec<Beam>, name: &str) -> i32 {
        self.add_geometry_with_faces(nodes, beams, Vec::new(), name)
    }

    /// Add a graph built from millimeter nodes, beams and faces
    pub fn add_geometry_with_faces(
        &mut self,
        nodes: Vec<Node>,
        beams: Vec<Beam>,
        faces: Vec<Face>,
        name: &str,
    ) -> i32 {
        let id = next_id(self.graphs.len());
        let mut graph = Graph::with_id(id);
        graph.set_nodes(nodes);
        graph.set_beams(beams);
        graph.set_faces(faces);
        graph.set_name(name);
        self.graphs.push(graph);
        id
    }

    /// Append an already constructed graph
    pub fn add_graph(&mut self, graph: Graph) {
        self.graphs.push(graph);
    }

    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn into_graphs(self) -> Vec<Graph> {
        self.graphs
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Derived type of every graph, in order
    pub fn graph_types(&self) -> Vec<GraphType> {
        self.graphs.iter().map(Graph::graph_type).collect()
    }
}

/// Id for a graph appended after `count` graphs, saturating at `i32::MAX`
fn next_id(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

impl<'a> IntoIterator for &'a LatticeModel {
    type Item = &'a Graph;
    type IntoIter = std::slice::Iter<'a, Graph>;

    fn into_iter(self) -> Self::IntoIter {
        self.graphs.iter()
    }
}

impl From<Vec<Graph>> for LatticeModel {
    fn from(graphs: Vec<Graph>) -> Self {
        Self { graphs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Units;

    #[test]
    fn test_add_geometry_assigns_sequential_ids() {
        let mut model = LatticeModel::new();
        let nodes = vec![Node::new(0.0, 0.0, 0.0), Node::new(1.0, 0.0, 0.0)];
        let beams = vec![Beam::new(0, 1)];

        assert_eq!(model.add_geometry(nodes.clone(), beams.clone(), "first"), 0);
        assert_eq!(
            model.add_geometry_with_faces(nodes, beams, vec![Face::triangle(0, 1, 0)], "second"),
            1
        );

        let graphs = model.graphs();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].name(), "first");
        assert_eq!(graphs[1].id(), 1);
        assert_eq!(graphs[1].faces().len(), 1);
        assert_eq!(graphs[0].units(), Units::Mm);
    }

    #[test]
    fn test_next_id_saturates() {
        assert_eq!(next_id(0), 0);
        assert_eq!(next_id(41), 41);
        assert_eq!(next_id(i32::MAX as usize), i32::MAX);
        assert_eq!(next_id(i32::MAX as usize + 1), i32::MAX);
        assert_eq!(next_id(usize::MAX), i32::MAX);
    }

    #[test]
    fn test_add_geometry_keeps_values_verbatim() {
        let mut model = LatticeModel::new();
        model.add_geometry(vec![Node::new(1.5, 2.5, 3.5).with_radius(0.2)], vec![], "raw");
        let node = model.graphs()[0].nodes()[0];
        assert_eq!(node.position(), [1.5, 2.5, 3.5]);
        assert_eq!(node.radius, Some(0.2));
    }

    #[test]
    fn test_ids_are_not_deduplicated() {
        let mut model = LatticeModel::new();
        model.add_graph(Graph::new("a", 0, Units::Mm));
        model.add_geometry(vec![], vec![], "b");
        model.add_graph(Graph::new("c", 0, Units::In));

        let mut ids = Vec::new();
        for graph in &model {
            ids.push(graph.id());
        }
        assert_eq!(ids, vec![0, 1, 0]);
    }

    #[test]
    fn test_graph_types() {
        let mut rib = Graph::with_id(0);
        rib.add_oriented_node(0.0, 0.0, 0.0, None, [0.0; 3], [1.0, 0.0, 0.0]);
        let model = LatticeModel::from(vec![rib, Graph::with_id(1)]);
        assert_eq!(model.graph_types(), vec![GraphType::Rib, GraphType::Round]);
    }

    #[test]
    fn test_serde_json_dump() {
        let mut model = LatticeModel::new();
        model.add_geometry(vec![Node::new(0.0, 0.0, 0.0)], vec![Beam::new(0, 0)], "json");

        let json = serde_json::to_string(&model).unwrap();
        let back: LatticeModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
