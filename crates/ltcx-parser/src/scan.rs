// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fast graph type scan
//!
//! Reports the `type` attribute of each top-level `<graph>` without building
//! the element tree: the content of every top-level element is skipped.

use crate::schema::{GRAPH, TYPE};
use ltcx_model::{GraphType, LatticeError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Scan a file for graph types
pub fn graph_types(path: impl AsRef<Path>) -> Result<Vec<GraphType>> {
    let text = std::fs::read_to_string(path)?;
    graph_types_str(&text)
}

/// Scan document text for graph types
pub fn graph_types_str(text: &str) -> Result<Vec<GraphType>> {
    let mut reader = Reader::from_str(text);
    let mut types = Vec::new();

    loop {
        match reader.read_event().map_err(|e| LatticeError::xml(e.to_string()))? {
            Event::Start(start) => {
                if start.name().as_ref() == GRAPH.as_bytes() {
                    types.push(type_of(&start)?);
                }
                reader
                    .read_to_end(start.name())
                    .map_err(|e| LatticeError::xml(e.to_string()))?;
            }
            Event::Empty(start) if start.name().as_ref() == GRAPH.as_bytes() => {
                types.push(type_of(&start)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if types.is_empty() {
        return Err(LatticeError::NoLattice);
    }
    Ok(types)
}

fn type_of(start: &BytesStart<'_>) -> Result<GraphType> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| LatticeError::xml(e.to_string()))?;
        if attr.key.as_ref() == TYPE.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|e| LatticeError::xml(e.to_string()))?;
            return Ok(GraphType::parse(&value));
        }
    }
    Ok(GraphType::Undefined)
}
