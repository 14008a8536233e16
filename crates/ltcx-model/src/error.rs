// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for lattice graph reading and writing

use thiserror::Error;

/// Result type alias for lattice operations
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Errors that can occur while reading or writing `.ltcx` documents
#[derive(Error, Debug)]
pub enum LatticeError {
    /// File could not be opened, read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML reported by the tokenizer
    #[error("XML error: {0}")]
    Xml(String),

    /// Required attribute is absent
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// Attribute value could not be converted to the expected type
    #[error("Attribute '{attribute}' on <{element}> has wrong type: '{value}'")]
    WrongAttributeType {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },

    /// Document contains no `<graph>` element
    #[error("No lattice: document has no <graph> element")]
    NoLattice,

    /// Graph has no `<nodegroup>` or the nodegroup holds no `<node>`
    #[error("Graph {graph} has no nodes")]
    NoNodes { graph: i32 },

    /// Graph has a `<beamgroup>` without any `<beam>`
    #[error("Graph {graph} has an empty beamgroup")]
    NoBeams { graph: i32 },
}

impl LatticeError {
    /// Create a new XML error
    pub fn xml(msg: impl Into<String>) -> Self {
        LatticeError::Xml(msg.into())
    }

    /// Create a new wrong-type error
    pub fn wrong_type(
        element: &'static str,
        attribute: &'static str,
        value: impl Into<String>,
    ) -> Self {
        LatticeError::WrongAttributeType {
            element,
            attribute,
            value: value.into(),
        }
    }

    /// Numeric code of the legacy C interface
    ///
    /// Codes 1-19 follow the tinyxml2 `XMLError` numbering, 21-23 are the
    /// lattice-specific structural errors.
    pub fn code(&self) -> u32 {
        match self {
            LatticeError::MissingAttribute { .. } => 1,
            LatticeError::WrongAttributeType { .. } => 2,
            LatticeError::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => 3,
                std::io::ErrorKind::PermissionDenied => 4,
                _ => 5,
            },
            LatticeError::Xml(_) => 17,
            LatticeError::NoLattice => 21,
            LatticeError::NoNodes { .. } => 22,
            LatticeError::NoBeams { .. } => 23,
        }
    }
}
