use crate::data::Record;
use crate::topology::GeoFeature;

/// How a map feature finds its record among the filtered ones.
pub trait FeatureJoin {
    fn lookup<'a>(&self, feature: &GeoFeature, records: &[&'a Record]) -> Option<&'a Record>;
}

/// First record whose country equals the feature name, byte for byte.
/// Unnamed features never match.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactName;

impl FeatureJoin for ExactName {
    fn lookup<'a>(&self, feature: &GeoFeature, records: &[&'a Record]) -> Option<&'a Record> {
        let name = feature.name.as_deref()?;
        records.iter().copied().find(|r| r.country == name)
    }
}
