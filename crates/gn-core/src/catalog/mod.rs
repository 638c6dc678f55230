//! Static template and feature catalogs.
//!
//! Both catalogs are fixed at build time and never mutated. Lookups are by
//! exact, case-sensitive key; iteration follows declaration order.

pub mod features;
pub mod templates;

pub use features::{catalog_position, feature, feature_keys, FeatureInfo, FEATURES};
pub use templates::{template, template_keys, Complexity, TemplateInfo, DEFAULT_TEMPLATE, TEMPLATES};
