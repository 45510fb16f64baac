//! Well-known class tags of the collaborating molecular viewer.
//!
//! The viewer tags every generated scene-graph node with one or more of
//! these classes so whole groups can be restyled at once. Tag strings are
//! part of the wire contract with the viewer and must not change.

/// Material of an atom sphere.
pub const ATOM_SPHERE_MATERIAL: &str = "AtomSphereMaterial";

/// Transform wrapping an atom sphere.
pub const ATOM_SPHERE_TRANSFORM: &str = "AtomSphereTransform";

/// Material of an atom's element-symbol label.
pub const ATOM_LABEL_MATERIAL: &str = "AtomLabelMaterial";

/// Material of a bond cylinder.
pub const BOND_MATERIAL: &str = "BondMaterial";

/// Bond cylinder geometry (carries the radius field).
pub const BOND_CYLINDER: &str = "BondCylinder";

/// Transform wrapping a bond cylinder.
pub const BOND_CYLINDER_TRANSFORM: &str = "BondCylinderTransform";
