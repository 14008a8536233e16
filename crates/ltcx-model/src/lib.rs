// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LTCX Model - In-memory lattice graph model
//!
//! This crate provides the data model shared by the `.ltcx` reader and
//! writer: lattice graphs made of nodes, beams and faces, the collection
//! that groups them, length units, and the common error type.
//!
//! # Architecture
//!
//! - [`Node`], [`Beam`], [`Face`] - plain value types
//! - [`Graph`] - one named lattice; normalizes added nodes to millimeters
//! - [`LatticeModel`] - ordered collection of graphs, the unit of I/O
//! - [`Units`] / [`to_millimeters`] - unit conversion
//! - [`LatticeError`] - errors reported by readers and writers
//!
//! # Example
//!
//! ```
//! use ltcx_model::{Graph, GraphType, LatticeModel, Units};
//!
//! let mut graph = Graph::new("strut", 1, Units::In);
//! graph.add_node(0.0, 0.0, 0.0, None);
//! graph.add_node(1.0, 0.0, 0.0, Some(0.1));
//! graph.add_beam(0, 1);
//!
//! assert_eq!(graph.nodes()[1].x, 25.4);
//! assert_eq!(graph.graph_type(), GraphType::Round);
//!
//! let mut model = LatticeModel::new();
//! model.add_graph(graph);
//! assert_eq!(model.len(), 1);
//! ```

pub mod error;
pub mod graph;
pub mod model;
pub mod types;
pub mod units;

// Re-export all public types
pub use error::*;
pub use graph::*;
pub use model::*;
pub use types::*;
pub use units::*;
