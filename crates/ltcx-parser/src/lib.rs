// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LTCX Parser - reader and writer for XML lattice graph files
//!
//! This crate converts between `.ltcx` documents and the
//! [`LatticeModel`](ltcx_model::LatticeModel) defined in `ltcx-model`.
//!
//! # Features
//!
//! - **Streaming tokenization** using `quick-xml`
//! - **Fast number parsing** using `lexical-core`
//! - **Strict structure, lenient values** - a missing `<graph>`, node group or
//!   graph id fails the read, bad coordinates fall back to defaults
//! - **Type scan** - list graph types without decoding node data
//!
//! # Example
//!
//! ```
//! use ltcx_parser::{LtcxReader, LtcxWriter};
//!
//! let text = r#"<graph id="1" units="in">
//!     <nodegroup><node x="0" y="0" z="0"/><node x="1" y="0" z="0"/></nodegroup>
//!     <beamgroup><beam n1="0" n2="1"/></beamgroup>
//! </graph>"#;
//!
//! let model = LtcxReader::new().read_str(text)?;
//! assert_eq!(model.graphs()[0].nodes()[1].x, 25.4);
//!
//! let xml = LtcxWriter::new().with_comment("converted").write_string(&model)?;
//! assert!(xml.contains(r#"type="rnd""#));
//! # Ok::<(), ltcx_model::LatticeError>(())
//! ```

mod reader;
mod scan;
pub mod schema;
mod writer;
pub mod xml;

pub use reader::LtcxReader;
pub use scan::{graph_types, graph_types_str};
pub use writer::LtcxWriter;
pub use xml::{XmlDocument, XmlElement, XmlNode};

use ltcx_model::{LatticeModel, Result};
use std::path::Path;

/// Read a file with default settings
pub fn read_file(path: impl AsRef<Path>) -> Result<LatticeModel> {
    LtcxReader::new().read_file(path)
}

/// Read document text with default settings
pub fn read_str(text: &str) -> Result<LatticeModel> {
    LtcxReader::new().read_str(text)
}

/// Read an already parsed document with default settings
pub fn read_document(doc: &XmlDocument) -> Result<LatticeModel> {
    LtcxReader::new().read_document(doc)
}

/// Write a model to a file with the given comment
pub fn write_file(model: &LatticeModel, path: impl AsRef<Path>, comment: &str) -> Result<()> {
    LtcxWriter::new().with_comment(comment).write_file(model, path)
}

/// Append a model to a parsed document with the given comment
pub fn write_document(model: &LatticeModel, doc: &mut XmlDocument, comment: &str) {
    LtcxWriter::new().with_comment(comment).write_document(model, doc)
}
