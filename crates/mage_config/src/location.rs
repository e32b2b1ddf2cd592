//! Default birth location and the offline gazetteer.

use mage_base::{GeoLocation, LocationCandidate, StaticGazetteer};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default coordinates for the birth chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct LocationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl LocationConfig {
    /// The configured location, if both coordinates are set.
    pub fn geo_location(&self) -> Result<Option<GeoLocation>, ConfigError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => GeoLocation::new(lat, lon)
                .map(Some)
                .map_err(|e| ConfigError::invalid("location", e)),
            (None, None) => Ok(None),
            _ => Err(ConfigError::invalid(
                "location",
                "latitude and longitude must be set together",
            )),
        }
    }
}

/// A named place searchable by name.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceConfig {
    pub fn candidate(&self) -> Result<LocationCandidate, ConfigError> {
        let location = GeoLocation::new(self.latitude, self.longitude)
            .map_err(|e| ConfigError::invalid(&format!("places.{}", self.name), e))?;
        Ok(LocationCandidate {
            display_name: self.name.clone(),
            location,
        })
    }
}

/// Build a gazetteer over the configured places, in file order.
pub fn gazetteer(places: &[PlaceConfig]) -> Result<StaticGazetteer, ConfigError> {
    let candidates = places
        .iter()
        .map(PlaceConfig::candidate)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StaticGazetteer::new(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_a_location_is_rejected() {
        let loc = LocationConfig {
            latitude: Some(10.0),
            longitude: None,
        };
        assert!(loc.geo_location().is_err());
        assert_eq!(LocationConfig::default().geo_location().unwrap(), None);
    }

    #[test]
    fn out_of_range_place_is_rejected() {
        let place = PlaceConfig {
            name: "Nowhere".into(),
            latitude: 91.0,
            longitude: 0.0,
        };
        let err = place.candidate().unwrap_err();
        assert!(err.to_string().contains("places.Nowhere"), "{err}");
    }
}
