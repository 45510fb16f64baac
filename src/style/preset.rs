//! Style presets: one fixed attribute bundle per display mode, with TOML
//! file support for host-defined custom presets.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    set_bond_radius, set_scale, set_transparency, DisplayMode, Transparency,
};
use crate::error::MolStyleError;
use crate::scene::{tags, Scene};

/// The attribute bundle one display mode writes.
///
/// `None` fields mean "this preset does not touch that attribute", so the
/// scene keeps whatever the previous style (or the viewer's generator) left
/// there. All fields default so partial TOML files work.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Style Preset", inline)]
#[serde(default)]
pub struct StylePreset {
    /// Atom sphere material transparency.
    #[schemars(title = "Atom Sphere Transparency")]
    pub atom_sphere_transparency: Transparency,
    /// Uniform atom sphere scale, if the preset sets one.
    #[schemars(title = "Atom Sphere Scale")]
    pub atom_sphere_scale: Option<f32>,
    /// Atom label material transparency.
    #[schemars(title = "Atom Label Transparency")]
    pub atom_label_transparency: Transparency,
    /// Bond material transparency.
    #[schemars(title = "Bond Transparency")]
    pub bond_transparency: Transparency,
    /// Bond cylinder radius, if the preset sets one.
    #[schemars(title = "Bond Radius")]
    pub bond_radius: Option<f32>,
    /// Uniform bond cylinder scale, if the preset sets one.
    #[schemars(title = "Bond Scale")]
    pub bond_scale: Option<f32>,
}

impl StylePreset {
    /// The built-in bundle for a display mode.
    #[must_use]
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Wireframe => Self {
                atom_sphere_transparency: Transparency::Flag(true),
                atom_sphere_scale: None,
                atom_label_transparency: Transparency::Flag(false),
                bond_transparency: Transparency::Flag(false),
                bond_radius: Some(0.02),
                bond_scale: Some(0.5),
            },
            DisplayMode::Sticks => Self {
                atom_sphere_transparency: Transparency::Flag(true),
                atom_sphere_scale: None,
                atom_label_transparency: Transparency::Flag(true),
                bond_transparency: Transparency::Flag(false),
                bond_radius: Some(0.05),
                bond_scale: Some(1.0),
            },
            DisplayMode::BallsAndSticks => Self {
                atom_sphere_transparency: Transparency::Flag(false),
                atom_sphere_scale: Some(0.5),
                atom_label_transparency: Transparency::Flag(true),
                bond_transparency: Transparency::Flag(false),
                bond_radius: Some(0.05),
                bond_scale: Some(1.0),
            },
            DisplayMode::Spacefill => Self {
                atom_sphere_transparency: Transparency::Flag(false),
                atom_sphere_scale: Some(1.0),
                atom_label_transparency: Transparency::Flag(true),
                bond_transparency: Transparency::Flag(true),
                bond_radius: None,
                bond_scale: None,
            },
            DisplayMode::Mixed => Self {
                atom_sphere_transparency: Transparency::Level(0.5),
                atom_sphere_scale: Some(1.0),
                atom_label_transparency: Transparency::Flag(false),
                bond_transparency: Transparency::Flag(false),
                bond_radius: Some(0.05),
                bond_scale: Some(0.5),
            },
        }
    }

    /// Write this bundle to the scene.
    ///
    /// The writes touch disjoint attributes, so their order only matters
    /// for trace logs.
    pub fn apply(&self, scene: &mut Scene) {
        set_transparency(
            scene,
            tags::ATOM_SPHERE_MATERIAL,
            self.atom_sphere_transparency,
        );
        if let Some(scale) = self.atom_sphere_scale {
            set_scale(scene, tags::ATOM_SPHERE_TRANSFORM, scale);
        }
        set_transparency(
            scene,
            tags::ATOM_LABEL_MATERIAL,
            self.atom_label_transparency,
        );
        set_transparency(scene, tags::BOND_MATERIAL, self.bond_transparency);
        if let Some(radius) = self.bond_radius {
            set_bond_radius(scene, radius);
        }
        if let Some(scale) = self.bond_scale {
            set_scale(scene, tags::BOND_CYLINDER_TRANSFORM, scale);
        }
    }

    /// Generate a JSON Schema describing the preset fields (for host UIs).
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(StylePreset)
    }

    /// Load a preset from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MolStyleError::Io`] if the file cannot be read and
    /// [`MolStyleError::PresetParse`] if it is not valid preset TOML.
    pub fn load(path: &Path) -> Result<Self, MolStyleError> {
        let content =
            std::fs::read_to_string(path).map_err(MolStyleError::Io)?;
        let preset = toml::from_str(&content)
            .map_err(|e| MolStyleError::PresetParse(e.to_string()))?;
        log::info!("Loaded style preset from {}", path.display());
        Ok(preset)
    }

    /// Save this preset to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`MolStyleError::Io`] if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MolStyleError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolStyleError::PresetParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolStyleError::Io)?;
        }
        std::fs::write(path, content).map_err(MolStyleError::Io)?;
        log::info!("Saved style preset to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
