use glam::Vec3;

// ---------------------------------------------------------------------------
// SceneNode
// ---------------------------------------------------------------------------

/// A presentation node in the host viewer's scene graph.
///
/// Carries the mutable attributes the style layer writes (transparency,
/// scale, diffuse color, cylinder radius) plus the class tags used to
/// address it as part of a group. The host creates and owns nodes; this
/// crate only mutates them through [`Scene`](super::Scene) borrows.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Human-readable name (e.g. the atom or bond label).
    name: String,
    /// Class tags, fixed at construction.
    tags: Vec<String>,
    /// Opacity complement: 0 = opaque, 1 = fully transparent.
    transparency: f32,
    /// Per-axis scale factors.
    scale: Vec3,
    /// Material diffuse color (RGB, each component in [0,1]).
    diffuse_color: Vec3,
    /// Cylinder radius (meaningful for bond cylinders only).
    radius: f32,
}

impl SceneNode {
    /// Create a node with X3D attribute defaults and no tags.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            transparency: 0.0,
            scale: Vec3::ONE,
            // X3D Material / Cylinder field defaults
            diffuse_color: Vec3::splat(0.8),
            radius: 1.0,
        }
    }

    /// Add a class tag (builder style).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether this node carries the given class tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Current transparency (0 = opaque, 1 = fully transparent).
    #[must_use]
    pub const fn transparency(&self) -> f32 {
        self.transparency
    }

    /// Set transparency directly.
    pub fn set_transparency(&mut self, transparency: f32) {
        self.transparency = transparency;
    }

    /// Current per-axis scale.
    #[must_use]
    pub const fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set the same scale factor on all three axes.
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }

    /// Render the scale as an X3D `SFVec3f` string (`"2 2 2"`), for hosts
    /// whose scene-graph fields are string-valued.
    #[must_use]
    pub fn scale_sfvec3f(&self) -> String {
        format!("{} {} {}", self.scale.x, self.scale.y, self.scale.z)
    }

    /// Current diffuse color.
    #[must_use]
    pub const fn diffuse_color(&self) -> Vec3 {
        self.diffuse_color
    }

    /// Set the material diffuse color.
    pub fn set_diffuse_color(&mut self, color: Vec3) {
        self.diffuse_color = color;
    }

    /// Current cylinder radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the cylinder radius.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }
}
