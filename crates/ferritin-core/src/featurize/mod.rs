mod feature_map;
mod residue_features;

pub use feature_map::FeatureMap;
pub use residue_features::{ResidueDescriptors, ResidueFeatures, SecondaryStructure};
