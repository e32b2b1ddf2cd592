//! Default personal details used when a command omits them.

use mage_base::ZodiacSign;
use mage_time::{NaiveDate, NaiveTime, parse_date, parse_time};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// Birth date as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Birth time as `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<String>,

    /// Zodiac sign name or wheel index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
}

impl ProfileConfig {
    pub fn birth_date(&self) -> Result<Option<NaiveDate>, ConfigError> {
        self.birth_date
            .as_deref()
            .map(|s| parse_date(s).map_err(|e| ConfigError::invalid("profile.birth_date", e)))
            .transpose()
    }

    pub fn birth_time(&self) -> Result<Option<NaiveTime>, ConfigError> {
        self.birth_time
            .as_deref()
            .map(|s| parse_time(s).map_err(|e| ConfigError::invalid("profile.birth_time", e)))
            .transpose()
    }

    pub fn sign(&self) -> Result<Option<ZodiacSign>, ConfigError> {
        self.sign
            .as_deref()
            .map(|s| s.parse().map_err(|e| ConfigError::invalid("profile.sign", e)))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_has_nothing() {
        let p = ProfileConfig::default();
        assert_eq!(p.birth_date().unwrap(), None);
        assert_eq!(p.sign().unwrap(), None);
    }

    #[test]
    fn typed_accessors_parse() {
        let p = ProfileConfig {
            birth_date: Some("1990-06-15".into()),
            birth_time: Some("14:30".into()),
            sign: Some("gemini".into()),
        };
        assert_eq!(p.birth_date().unwrap(), NaiveDate::from_ymd_opt(1990, 6, 15));
        assert_eq!(p.birth_time().unwrap(), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(p.sign().unwrap(), Some(ZodiacSign::Gemini));
    }

    #[test]
    fn bad_sign_names_the_field() {
        let p = ProfileConfig {
            sign: Some("Ophiuchus".into()),
            ..Default::default()
        };
        let err = p.sign().unwrap_err();
        assert!(err.to_string().contains("profile.sign"), "{err}");
    }
}
