//! Geographic locations and the place-name lookup seam.
//!
//! Turning a free-text place name into coordinates is the job of an external
//! service. The calculators only see the [`LocationLookup`] trait and accept
//! the first candidate it ranks.

use tracing::debug;

use crate::error::MageError;

/// Queries shorter than this are not sent to a lookup.
pub const MIN_QUERY_CHARS: usize = 3;
/// At most this many candidates are kept from a lookup.
pub const MAX_CANDIDATES: usize = 5;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Build a location, rejecting non-finite or out-of-range coordinates.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, MageError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(MageError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(MageError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(MageError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// One ranked answer from a place-name search.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCandidate {
    pub display_name: String,
    pub location: GeoLocation,
}

/// Something that can resolve place names to coordinates.
pub trait LocationLookup {
    /// Ranked candidates for `query`, best first. An empty vector means
    /// nothing matched.
    fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, MageError>;
}

/// Search `lookup`, keeping at most [`MAX_CANDIDATES`] results.
pub fn suggest(
    lookup: &dyn LocationLookup,
    query: &str,
) -> Result<Vec<LocationCandidate>, MageError> {
    let q = query.trim();
    if q.chars().count() < MIN_QUERY_CHARS {
        return Err(MageError::MissingInput("place name (at least 3 characters)"));
    }
    let mut found = lookup.search(q)?;
    found.truncate(MAX_CANDIDATES);
    debug!(query = q, hits = found.len(), "location search");
    Ok(found)
}

/// Resolve `query` to the first ranked candidate.
pub fn resolve_location(
    lookup: &dyn LocationLookup,
    query: &str,
) -> Result<LocationCandidate, MageError> {
    suggest(lookup, query)?
        .into_iter()
        .next()
        .ok_or_else(|| MageError::LocationNotFound(query.trim().to_string()))
}

/// In-memory lookup over a fixed list of named places.
///
/// Matches case-insensitively on any substring of the display name,
/// preserving list order.
#[derive(Debug, Clone, Default)]
pub struct StaticGazetteer {
    places: Vec<LocationCandidate>,
}

impl StaticGazetteer {
    pub fn new(places: Vec<LocationCandidate>) -> Self {
        Self { places }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl LocationLookup for StaticGazetteer {
    fn search(&self, query: &str) -> Result<Vec<LocationCandidate>, MageError> {
        let needle = query.to_lowercase();
        Ok(self
            .places
            .iter()
            .filter(|p| p.display_name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
