// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LtcxReader - builds a [`LatticeModel`] from an `.ltcx` document
//!
//! Structural problems (missing `<graph>`, empty node or beam groups, a bad
//! graph id) abort the whole read. Numeric node, beam and face attributes are
//! lenient: a missing or unparsable value falls back to a default and is
//! reported through `log`.

use crate::schema::*;
use crate::xml::{XmlDocument, XmlElement};
use lexical_core::FromLexical;
use log::{debug, warn};
use ltcx_model::{Graph, LatticeError, LatticeModel, NodeIndex, Result, Units};
use std::path::Path;

/// Orientation component value meaning "not given"
const UNSET: f64 = -1.0;

/// Reader for `.ltcx` documents
#[derive(Clone, Debug)]
pub struct LtcxReader {
    /// Keep graphs that have nodes but neither beams nor faces
    pub keep_unconnected: bool,
    /// Name for graphs without a `name` attribute
    pub default_name: String,
}

impl Default for LtcxReader {
    fn default() -> Self {
        Self {
            keep_unconnected: false,
            default_name: DEFAULT_GRAPH_NAME.to_string(),
        }
    }
}

impl LtcxReader {
    /// Create a reader with the standard discard policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether graphs without connectivity are kept
    pub fn with_unconnected(mut self, keep: bool) -> Self {
        self.keep_unconnected = keep;
        self
    }

    /// Set the fallback graph name
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Read a file from disk
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<LatticeModel> {
        let path = path.as_ref();
        debug!("Reading lattice file {}", path.display());
        self.read_document(&XmlDocument::load_file(path)?)
    }

    /// Read from document text
    pub fn read_str(&self, text: &str) -> Result<LatticeModel> {
        self.read_document(&XmlDocument::parse(text)?)
    }

    /// Read from raw UTF-8 bytes
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<LatticeModel> {
        self.read_document(&XmlDocument::parse_bytes(bytes)?)
    }

    /// Read from an already parsed document
    pub fn read_document(&self, doc: &XmlDocument) -> Result<LatticeModel> {
        let mut graphs = doc.elements_named(GRAPH).peekable();
        if graphs.peek().is_none() {
            return Err(LatticeError::NoLattice);
        }

        let mut model = LatticeModel::new();
        for element in graphs {
            let graph = self.read_graph(element)?;
            if graph.is_connected() || self.keep_unconnected {
                model.add_graph(graph);
            } else {
                debug!(
                    "Dropping graph {} ('{}'): {} nodes but no beams or faces",
                    graph.id(),
                    graph.name(),
                    graph.nodes().len()
                );
            }
        }

        debug!("Read {} lattice graphs", model.len());
        Ok(model)
    }

    fn read_graph(&self, element: &XmlElement) -> Result<Graph> {
        let id = required_int(element, GRAPH, ID)?;
        let name = element.attribute(NAME).unwrap_or(self.default_name.as_str());
        let units = match element.attribute(UNITS) {
            Some(value) => value.parse().unwrap_or_else(|_| {
                debug!("Graph {}: unknown units '{}', using mm", id, value);
                Units::Mm
            }),
            None => Units::Mm,
        };

        let mut graph = Graph::new(name, id, units);

        let children = element.children();
        let position = children
            .iter()
            .position(|child| child.name() == NODEGROUP)
            .ok_or(LatticeError::NoNodes { graph: id })?;
        let nodegroup = &children[position];
        // Beam and face groups are only looked up after the node group
        let following = &children[position + 1..];
        let group = |name: &str| following.iter().find(|child| child.name() == name);
        let mut nodes = nodegroup.children_named(NODE).peekable();
        if nodes.peek().is_none() {
            return Err(LatticeError::NoNodes { graph: id });
        }
        for node in nodes {
            read_node(&mut graph, node);
        }

        if let Some(beamgroup) = group(BEAMGROUP) {
            let mut beams = beamgroup.children_named(BEAM).peekable();
            if beams.peek().is_none() {
                return Err(LatticeError::NoBeams { graph: id });
            }
            for beam in beams {
                let [n1, n2] = BEAM_ENDS.map(|attr| index_or_zero(beam, BEAM, attr));
                graph.add_beam(n1, n2);
            }
        }

        if let Some(facegroup) = group(FACEGROUP) {
            for face in facegroup.children_named(FACE) {
                let [n1, n2, n3, n4] = FACE_VERTICES;
                graph.add_face(
                    index_or_zero(face, FACE, n1),
                    index_or_zero(face, FACE, n2),
                    index_or_zero(face, FACE, n3),
                    optional_index(face, FACE, n4),
                );
            }
        }

        Ok(graph)
    }
}

fn read_node(graph: &mut Graph, node: &XmlElement) {
    let x = float_or(node, NODE, "x", 0.0);
    let y = float_or(node, NODE, "y", 0.0);
    let z = float_or(node, NODE, "z", 0.0);
    let radius = optional_float(node, NODE, RADIUS)
        .or_else(|| optional_float(node, NODE, LEGACY_RADIUS))
        .filter(|r| *r > 0.0);

    let [xs, ys, zs, xe, ye, ze] = ORIENTATION.map(|attr| float_or(node, NODE, attr, UNSET));
    let (start, end) = ([xs, ys, zs], [xe, ye, ze]);

    if start != end {
        graph.add_oriented_node(x, y, z, radius, start, end);
    } else {
        graph.add_node(x, y, z, radius);
    }
}

fn parse_number<T: FromLexical>(value: &str) -> Option<T> {
    lexical_core::parse(value.trim().as_bytes()).ok()
}

/// Leading integer of `value`, decimal or `0x` hexadecimal
///
/// Trailing text is ignored, so `"1.0"` reads as 1. Hexadecimal values are
/// taken as 32-bit patterns.
fn leading_int(value: &str) -> Option<i32> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        let end = hex
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(hex.len());
        return u32::from_str_radix(&hex[..end], 16).ok().map(|bits| bits as i32);
    }
    lexical_core::parse_partial::<i32>(value.as_bytes())
        .ok()
        .map(|(number, _)| number)
}

fn required_int(element: &XmlElement, name: &'static str, attr: &'static str) -> Result<i32> {
    let value = element.attribute(attr).ok_or(LatticeError::MissingAttribute {
        element: name,
        attribute: attr,
    })?;
    leading_int(value).ok_or_else(|| LatticeError::wrong_type(name, attr, value))
}

fn optional_float(element: &XmlElement, name: &str, attr: &str) -> Option<f64> {
    let value = element.attribute(attr)?;
    let parsed = parse_number(value);
    if parsed.is_none() {
        warn!("Ignoring unparsable <{} {}=\"{}\">", name, attr, value);
    }
    parsed
}

fn float_or(element: &XmlElement, name: &str, attr: &str, default: f64) -> f64 {
    optional_float(element, name, attr).unwrap_or(default)
}

fn optional_index(element: &XmlElement, name: &str, attr: &str) -> Option<NodeIndex> {
    let value = element.attribute(attr)?;
    match parse_number::<i64>(value) {
        Some(index) if index < 0 => None,
        Some(index) => match NodeIndex::try_from(index) {
            Ok(index) => Some(index),
            Err(_) => {
                warn!("Ignoring out of range <{} {}=\"{}\">", name, attr, value);
                None
            }
        },
        None => {
            warn!("Ignoring unparsable <{} {}=\"{}\">", name, attr, value);
            None
        }
    }
}

fn index_or_zero(element: &XmlElement, name: &str, attr: &str) -> NodeIndex {
    if element.attribute(attr).is_none() {
        warn!("Missing <{} {}>, using 0", name, attr);
    }
    optional_index(element, name, attr).unwrap_or(0)
}
