// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element and attribute names of the `.ltcx` schema

pub const GRAPH: &str = "graph";
pub const NODEGROUP: &str = "nodegroup";
pub const NODE: &str = "node";
pub const BEAMGROUP: &str = "beamgroup";
pub const BEAM: &str = "beam";
pub const FACEGROUP: &str = "facegroup";
pub const FACE: &str = "face";

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const UNITS: &str = "units";
pub const TYPE: &str = "type";

pub const RADIUS: &str = "r";
/// Radius spelling used by early writers
pub const LEGACY_RADIUS: &str = "rad";

/// Orientation start and end components, in document order
pub const ORIENTATION: [&str; 6] = ["xs", "ys", "zs", "xe", "ye", "ze"];

/// Beam endpoint attributes
pub const BEAM_ENDS: [&str; 2] = ["n1", "n2"];

/// Face vertex attributes; the fourth is optional
pub const FACE_VERTICES: [&str; 4] = ["n1", "n2", "n3", "n4"];

/// Name given to graphs without a `name` attribute
pub const DEFAULT_GRAPH_NAME: &str = "no_name";
