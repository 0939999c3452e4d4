//! Feature classification.

use crate::data::{FeatureType, Schema, Table};

use super::types::FeatureSets;

/// Split the features shared by `reference` and `current` by their reference type.
///
/// Only the reference schema decides the type; features missing from either table are
/// left out. Order follows the schema.
pub fn classify_features(schema: &Schema, reference: &Table, current: &Table) -> FeatureSets {
    let mut sets = FeatureSets::default();
    for (name, feature_type) in schema.iter() {
        if !reference.contains(name) || !current.contains(name) {
            continue;
        }
        match feature_type {
            FeatureType::Numeric => sets.numeric.push(name.to_string()),
            FeatureType::Categorical => sets.categorical.push(name.to_string()),
        }
    }
    sets
}
