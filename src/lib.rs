// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison against preset constants is intentional
#![allow(clippy::float_cmp)]

//! Display-style presets for 3D molecular scene graphs.
//!
//! A molecular viewer renders atoms as spheres, bonds as cylinders, and
//! element symbols as labels, grouping the resulting scene-graph nodes under
//! well-known class tags (see [`scene::tags`]). This crate switches the
//! viewer between the classic display styles — wireframe, sticks,
//! balls-and-sticks, space-fill, and a mixed style — by writing presentation
//! attributes (transparency, uniform scale, cylinder radius, diffuse color)
//! across those node groups.
//!
//! # Key entry points
//!
//! - [`scene::Scene`] - tagged node groups owned by the host viewer
//! - [`style::DisplayMode`] - the five display styles
//! - [`style::apply_mode`] - apply a style's preset to a scene
//! - [`style::StylePreset`] - one style's attribute bundle, TOML-loadable
//!
//! The crate holds no state of its own: every call is an independent bundle
//! of attribute writes against a `&mut Scene` borrow, and applying a mode is
//! idempotent. Nothing here renders, parses structure files, or persists a
//! "current mode" — that all belongs to the host.

pub mod error;
pub mod scene;
pub mod style;

pub use error::MolStyleError;
