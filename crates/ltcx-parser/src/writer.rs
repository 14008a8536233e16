// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LtcxWriter - serializes a [`LatticeModel`] into an `.ltcx` document
//!
//! Node data is stored in millimeters. Every length is converted back into
//! the unit named by the written `units` attribute, so reading the output
//! reproduces the stored positions.

use crate::schema::*;
use crate::xml::{XmlDocument, XmlElement};
use log::debug;
use ltcx_model::{from_millimeters, Graph, LatticeModel, Node, Result, Units};
use std::path::Path;

/// Writer for `.ltcx` documents
#[derive(Clone, Debug)]
pub struct LtcxWriter {
    /// Comment emitted after the XML declaration (skipped when empty)
    pub comment: Option<String>,
    /// Write centimeter graphs with `units="mm"`, as existing producers do
    pub legacy_units: bool,
    /// Spaces per nesting level, 0 for single-line output
    pub indent: usize,
}

impl Default for LtcxWriter {
    fn default() -> Self {
        Self {
            comment: None,
            legacy_units: true,
            indent: 2,
        }
    }
}

impl LtcxWriter {
    /// Create a writer with legacy-compatible defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set whether `Units::Cm` is written as `"mm"`
    pub fn with_legacy_units(mut self, enabled: bool) -> Self {
        self.legacy_units = enabled;
        self
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Append the model to an existing document
    ///
    /// Adds a declaration if the document has none, then the comment, then
    /// one `<graph>` element per graph.
    pub fn write_document(&self, model: &LatticeModel, doc: &mut XmlDocument) {
        if doc.declaration().is_none() {
            doc.set_declaration("1.0");
        }
        if let Some(comment) = self.comment.as_deref().filter(|c| !c.is_empty()) {
            doc.push_comment(comment);
        }
        for graph in model {
            doc.push_element(self.graph_element(graph));
        }
    }

    /// Build a new document for the model
    pub fn to_document(&self, model: &LatticeModel) -> XmlDocument {
        let mut doc = XmlDocument::new();
        self.write_document(model, &mut doc);
        doc
    }

    /// Serialize the model to a string
    pub fn write_string(&self, model: &LatticeModel) -> Result<String> {
        self.to_document(model).to_xml_string(self.indent)
    }

    /// Serialize the model to a file
    pub fn write_file(&self, model: &LatticeModel, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Writing {} lattice graphs to {}", model.len(), path.display());
        self.to_document(model).save_file(path, self.indent)
    }

    /// Unit named in the `units` attribute for a graph authored in `units`
    fn written_units(&self, units: Units) -> Units {
        match units {
            Units::Cm if self.legacy_units => Units::Mm,
            other => other,
        }
    }

    fn graph_element(&self, graph: &Graph) -> XmlElement {
        let units = self.written_units(graph.units());
        let mut element = XmlElement::new(GRAPH)
            .with_attribute(ID, graph.id())
            .with_attribute(NAME, graph.name())
            .with_attribute(UNITS, units)
            .with_attribute(TYPE, graph.graph_type());

        let mut nodegroup = XmlElement::new(NODEGROUP);
        for (id, node) in graph.nodes().iter().enumerate() {
            nodegroup.push_child(node_element(id, node, units));
        }
        element.push_child(nodegroup);

        if !graph.beams().is_empty() {
            let mut beamgroup = XmlElement::new(BEAMGROUP);
            for (id, beam) in graph.beams().iter().enumerate() {
                let [n1, n2] = BEAM_ENDS;
                beamgroup.push_child(
                    XmlElement::new(BEAM)
                        .with_attribute(ID, id)
                        .with_attribute(n1, beam.n1)
                        .with_attribute(n2, beam.n2),
                );
            }
            element.push_child(beamgroup);
        }

        if !graph.faces().is_empty() {
            let mut facegroup = XmlElement::new(FACEGROUP);
            for (id, face) in graph.faces().iter().enumerate() {
                let mut face_element = XmlElement::new(FACE).with_attribute(ID, id);
                for (attr, index) in FACE_VERTICES.iter().zip(face.indices()) {
                    face_element.set_attribute(attr, index);
                }
                facegroup.push_child(face_element);
            }
            element.push_child(facegroup);
        }

        element
    }
}

fn node_element(id: usize, node: &Node, units: Units) -> XmlElement {
    let length = |value: f64| from_millimeters(value, units);
    let mut element = XmlElement::new(NODE)
        .with_attribute(ID, id)
        .with_attribute("x", length(node.x))
        .with_attribute("y", length(node.y))
        .with_attribute("z", length(node.z));

    if let Some(radius) = node.effective_radius() {
        element.set_attribute(RADIUS, length(radius));
    }

    if let Some(orientation) = node.orientation.filter(|o| o.is_directed()) {
        let values = orientation.start.iter().chain(orientation.end.iter());
        for (attr, value) in ORIENTATION.iter().zip(values) {
            element.set_attribute(attr, length(*value));
        }
    }

    element
}
