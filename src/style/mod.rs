//! Display modes and the attribute-write primitives behind them.
//!
//! A display mode names one of the classic molecular representations; each
//! maps to a fixed [`StylePreset`] bundle. The low-level primitives
//! ([`set_transparency`], [`set_scale`], [`set_color`], [`set_bond_radius`])
//! are public so hosts can bind them to UI controls directly (e.g. a bond
//! radius slider).

mod preset;

use glam::Vec3;
pub use preset::StylePreset;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::{tags, Scene};

// ---------------------------------------------------------------------------
// DisplayMode
// ---------------------------------------------------------------------------

/// The classic molecular display styles.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Bonds as thin lines; atoms invisible, element labels visible.
    Wireframe,
    /// Bonds as full cylinders; atoms and labels invisible.
    Sticks,
    /// Half-size atom spheres plus full bond cylinders.
    #[default]
    BallsAndSticks,
    /// Full-size atom spheres only; bonds invisible.
    Spacefill,
    /// Semi-transparent full spheres over thin cylinders, labels visible.
    Mixed,
}

impl DisplayMode {
    /// All modes, in UI order.
    pub const ALL: [Self; 5] = [
        Self::Wireframe,
        Self::Sticks,
        Self::BallsAndSticks,
        Self::Spacefill,
        Self::Mixed,
    ];

    /// Parse a viewer wire literal (`"WIREFRAME"`, `"BALLS_STICKS"`, ...).
    ///
    /// Returns `None` for anything else; callers decide whether that is an
    /// error or (as in [`apply_named_mode`]) an intentional no-op.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "WIREFRAME" => Some(Self::Wireframe),
            "STICKS" => Some(Self::Sticks),
            "BALLS_STICKS" => Some(Self::BallsAndSticks),
            "SPACEFILL" => Some(Self::Spacefill),
            "MIXED" => Some(Self::Mixed),
            _ => None,
        }
    }

    /// The viewer wire literal for this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wireframe => "WIREFRAME",
            Self::Sticks => "STICKS",
            Self::BallsAndSticks => "BALLS_STICKS",
            Self::Spacefill => "SPACEFILL",
            Self::Mixed => "MIXED",
        }
    }
}

// ---------------------------------------------------------------------------
// Transparency
// ---------------------------------------------------------------------------

/// A transparency input: either an on/off flag or a level in [0,1].
///
/// Viewer controls send booleans for "fully transparent / opaque" toggles
/// and fractional levels for partial transparency; both normalize to the
/// numeric field the scene graph stores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum Transparency {
    /// `true` = fully transparent, `false` = opaque.
    Flag(bool),
    /// Explicit level: 0 = opaque, 1 = fully transparent.
    Level(f32),
}

impl Transparency {
    /// Numeric transparency: flags map to 1.0/0.0, levels pass through
    /// unchanged.
    #[must_use]
    pub const fn normalized(self) -> f32 {
        match self {
            Self::Flag(true) => 1.0,
            Self::Flag(false) => 0.0,
            Self::Level(v) => v,
        }
    }
}

impl Default for Transparency {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl From<bool> for Transparency {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<f32> for Transparency {
    fn from(level: f32) -> Self {
        Self::Level(level)
    }
}

// ---------------------------------------------------------------------------
// Attribute-write primitives
// ---------------------------------------------------------------------------

/// Set the transparency of every node in a group.
pub fn set_transparency(
    scene: &mut Scene,
    tag: &str,
    value: impl Into<Transparency>,
) {
    let v = value.into().normalized();
    log::trace!("{tag}: transparency -> {v}");
    scene.for_each_tagged(tag, |node| node.set_transparency(v));
}

/// Set a uniform 3-axis scale `(scale, scale, scale)` on every node in a
/// group.
pub fn set_scale(scene: &mut Scene, tag: &str, scale: f32) {
    log::trace!("{tag}: scale -> {scale}");
    scene.for_each_tagged(tag, |node| node.set_uniform_scale(scale));
}

/// Set the material diffuse color of every node in a group.
///
/// No built-in preset touches color; this exists for host-driven custom
/// coloring (e.g. highlighting a substructure).
pub fn set_color(scene: &mut Scene, tag: &str, color: Vec3) {
    scene.for_each_tagged(tag, |node| node.set_diffuse_color(color));
}

/// Set the radius of every bond cylinder.
pub fn set_bond_radius(scene: &mut Scene, radius: f32) {
    log::trace!("bond radius -> {radius}");
    scene.for_each_tagged(tags::BOND_CYLINDER, |node| node.set_radius(radius));
}

// ---------------------------------------------------------------------------
// Mode dispatch
// ---------------------------------------------------------------------------

/// Apply a display mode's built-in preset to the scene.
pub fn apply_mode(scene: &mut Scene, mode: DisplayMode) {
    log::debug!("applying display mode {}", mode.name());
    StylePreset::for_mode(mode).apply(scene);
}

/// Apply a display mode given its viewer wire literal.
///
/// Unrecognized names are ignored on purpose: hosts forward raw UI strings,
/// and an unknown style must leave the scene exactly as it was rather than
/// fail the whole control path.
pub fn apply_named_mode(scene: &mut Scene, name: &str) {
    match DisplayMode::from_name(name) {
        Some(mode) => apply_mode(scene, mode),
        None => log::debug!("unhandled display mode name: {name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneNode;

    /// A minimal two-atom molecule: two spheres, two labels, one bond.
    fn diatomic_scene() -> Scene {
        let mut scene = Scene::new();
        for name in ["C1", "O2"] {
            let _ = scene.add_node(
                SceneNode::new(name)
                    .with_tag(tags::ATOM_SPHERE_MATERIAL)
                    .with_tag(tags::ATOM_SPHERE_TRANSFORM),
            );
            let _ = scene.add_node(
                SceneNode::new(format!("{name}-label"))
                    .with_tag(tags::ATOM_LABEL_MATERIAL),
            );
        }
        let mut bond = SceneNode::new("C1-O2")
            .with_tag(tags::BOND_MATERIAL)
            .with_tag(tags::BOND_CYLINDER)
            .with_tag(tags::BOND_CYLINDER_TRANSFORM);
        // The viewer generates bond cylinders with radius 0.05.
        bond.set_radius(0.05);
        let _ = scene.add_node(bond);
        scene
    }

    fn group_transparencies(scene: &Scene, tag: &str) -> Vec<f32> {
        scene.nodes_by_tag(tag).map(SceneNode::transparency).collect()
    }

    #[test]
    fn flag_transparency_normalizes_to_unit_values() {
        assert_eq!(Transparency::Flag(true).normalized(), 1.0);
        assert_eq!(Transparency::Flag(false).normalized(), 0.0);
    }

    #[test]
    fn level_transparency_passes_through_unchanged() {
        for v in [0.0, 0.25, 0.5, 1.0, 2.5, -1.0] {
            assert_eq!(Transparency::Level(v).normalized(), v);
        }
    }

    #[test]
    fn wireframe_preset_writes_expected_attributes() {
        let mut scene = diatomic_scene();
        apply_mode(&mut scene, DisplayMode::Wireframe);

        assert_eq!(
            group_transparencies(&scene, tags::ATOM_SPHERE_MATERIAL),
            [1.0, 1.0]
        );
        assert_eq!(
            group_transparencies(&scene, tags::ATOM_LABEL_MATERIAL),
            [0.0, 0.0]
        );
        assert_eq!(
            group_transparencies(&scene, tags::BOND_MATERIAL),
            [0.0]
        );
        for node in scene.nodes_by_tag(tags::BOND_CYLINDER) {
            assert_eq!(node.radius(), 0.02);
        }
        for node in scene.nodes_by_tag(tags::BOND_CYLINDER_TRANSFORM) {
            assert_eq!(node.scale_sfvec3f(), "0.5 0.5 0.5");
        }
        // Wireframe leaves atom sphere scale alone.
        for node in scene.nodes_by_tag(tags::ATOM_SPHERE_TRANSFORM) {
            assert_eq!(node.scale_sfvec3f(), "1 1 1");
        }
    }

    #[test]
    fn mixed_preset_uses_fractional_sphere_transparency() {
        let mut scene = diatomic_scene();
        apply_mode(&mut scene, DisplayMode::Mixed);
        assert_eq!(
            group_transparencies(&scene, tags::ATOM_SPHERE_MATERIAL),
            [0.5, 0.5]
        );
        assert_eq!(
            group_transparencies(&scene, tags::ATOM_LABEL_MATERIAL),
            [0.0, 0.0]
        );
    }

    #[test]
    fn later_mode_fully_overwrites_earlier_mode() {
        let mut via_sticks = diatomic_scene();
        apply_mode(&mut via_sticks, DisplayMode::Sticks);
        apply_mode(&mut via_sticks, DisplayMode::Spacefill);

        let mut direct = diatomic_scene();
        apply_mode(&mut direct, DisplayMode::Spacefill);

        // Sticks writes only attributes Spacefill also writes or values
        // equal to the viewer's generated defaults, so no history leaks.
        assert_eq!(via_sticks.nodes(), direct.nodes());
    }

    #[test]
    fn applying_a_mode_twice_is_idempotent() {
        let mut once = diatomic_scene();
        apply_mode(&mut once, DisplayMode::BallsAndSticks);

        let mut twice = diatomic_scene();
        apply_mode(&mut twice, DisplayMode::BallsAndSticks);
        apply_mode(&mut twice, DisplayMode::BallsAndSticks);

        assert_eq!(once.nodes(), twice.nodes());
    }

    #[test]
    fn unrecognized_mode_name_changes_nothing() {
        let mut scene = diatomic_scene();
        let before = scene.clone();
        apply_named_mode(&mut scene, "CARTOON");
        assert_eq!(scene.nodes(), before.nodes());
    }

    #[test]
    fn named_dispatch_matches_direct_dispatch() {
        for mode in DisplayMode::ALL {
            let mut named = diatomic_scene();
            apply_named_mode(&mut named, mode.name());

            let mut direct = diatomic_scene();
            apply_mode(&mut direct, mode);

            assert_eq!(named.nodes(), direct.nodes());
        }
    }

    #[test]
    fn wire_literals_round_trip() {
        for mode in DisplayMode::ALL {
            assert_eq!(DisplayMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(DisplayMode::from_name("wireframe"), None);
        assert_eq!(DisplayMode::from_name(""), None);
    }

    #[test]
    fn set_scale_is_total_over_the_group() {
        let mut scene = Scene::new();
        for name in ["a", "b", "c"] {
            let _ = scene.add_node(SceneNode::new(name).with_tag("X"));
        }
        set_scale(&mut scene, "X", 2.0);
        let scales: Vec<String> =
            scene.nodes_by_tag("X").map(SceneNode::scale_sfvec3f).collect();
        assert_eq!(scales, ["2 2 2", "2 2 2", "2 2 2"]);
    }

    #[test]
    fn boolean_transparency_input_is_coerced() {
        let mut scene = Scene::new();
        let _ = scene.add_node(SceneNode::new("a").with_tag("X"));
        set_transparency(&mut scene, "X", true);
        assert_eq!(group_transparencies(&scene, "X"), [1.0]);
        set_transparency(&mut scene, "X", false);
        assert_eq!(group_transparencies(&scene, "X"), [0.0]);
        set_transparency(&mut scene, "X", 0.5);
        assert_eq!(group_transparencies(&scene, "X"), [0.5]);
    }

    #[test]
    fn set_color_writes_diffuse_color() {
        let mut scene = Scene::new();
        let _ = scene.add_node(SceneNode::new("a").with_tag("X"));
        set_color(&mut scene, "X", Vec3::new(1.0, 0.0, 0.0));
        let node = scene.nodes_by_tag("X").next();
        assert_eq!(
            node.map(SceneNode::diffuse_color),
            Some(Vec3::new(1.0, 0.0, 0.0))
        );
    }
}
