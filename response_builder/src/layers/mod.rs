//! Layered configuration composition.
//!
//! Configuration reaches the builder from several places: the baked-in
//! defaults, an optional document, prefixed environment variables and
//! overrides passed at runtime. Each source becomes a [`ConfigLayer`] tagged
//! with its [`LayerProvenance`], and [`LayerComposer`] folds them in order
//! with [`crate::merge::merge_config`], so a later layer can change values
//! but never the shape of an earlier one.

mod composer;
mod layer;

pub use composer::LayerComposer;
pub use layer::{ConfigLayer, LayerProvenance};
