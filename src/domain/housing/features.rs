use crate::domain::errors::FeatureDomainError;
use std::ops::RangeInclusive;

pub const AREA_RANGE: RangeInclusive<u32> = 1000..=20000;
pub const BEDROOMS_RANGE: RangeInclusive<u8> = 1..=8;
pub const BATHROOMS_RANGE: RangeInclusive<u8> = 1..=6;
pub const STORIES_RANGE: RangeInclusive<u8> = 1..=4;
pub const PARKING_RANGE: RangeInclusive<u8> = 0..=3;

/// Furnishing status of a house, ordered the way the model was trained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FurnishingStatus {
    Unfurnished,
    SemiFurnished,
    #[default]
    Furnished,
}

impl FurnishingStatus {
    pub const ALL: [FurnishingStatus; 3] = [
        FurnishingStatus::Unfurnished,
        FurnishingStatus::SemiFurnished,
        FurnishingStatus::Furnished,
    ];

    /// Ordinal code fed to the model.
    pub fn ordinal(&self) -> u8 {
        match self {
            FurnishingStatus::Unfurnished => 0,
            FurnishingStatus::SemiFurnished => 1,
            FurnishingStatus::Furnished => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FurnishingStatus::Unfurnished => "unfurnished",
            FurnishingStatus::SemiFurnished => "semi-furnished",
            FurnishingStatus::Furnished => "furnished",
        }
    }

    /// Label with every hyphen-separated word capitalized, e.g. "Semi-Furnished"
    pub fn title(&self) -> &'static str {
        match self {
            FurnishingStatus::Unfurnished => "Unfurnished",
            FurnishingStatus::SemiFurnished => "Semi-Furnished",
            FurnishingStatus::Furnished => "Furnished",
        }
    }
}

/// Attributes of a single house, as entered by the user.
///
/// Built fresh for every prediction request and dropped once encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseFeatures {
    pub area: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub stories: u8,
    pub mainroad: bool,
    pub guestroom: bool,
    pub basement: bool,
    pub hotwaterheating: bool,
    pub airconditioning: bool,
    pub parking: u8,
    pub prefarea: bool,
    pub furnishing_status: FurnishingStatus,
}

impl HouseFeatures {
    /// Checks every bounded field against its domain and reports the first
    /// one that falls outside.
    pub fn validate(&self) -> Result<(), FeatureDomainError> {
        check_range("area", i64::from(self.area), &AREA_RANGE)?;
        check_range("bedrooms", i64::from(self.bedrooms), &BEDROOMS_RANGE)?;
        check_range("bathrooms", i64::from(self.bathrooms), &BATHROOMS_RANGE)?;
        check_range("stories", i64::from(self.stories), &STORIES_RANGE)?;
        check_range("parking", i64::from(self.parking), &PARKING_RANGE)?;
        Ok(())
    }
}

fn check_range<T>(
    field: &'static str,
    value: i64,
    range: &RangeInclusive<T>,
) -> Result<(), FeatureDomainError>
where
    T: Copy + Into<i64>,
{
    let min: i64 = (*range.start()).into();
    let max: i64 = (*range.end()).into();
    if value < min || value > max {
        return Err(FeatureDomainError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HouseFeatures {
        HouseFeatures {
            area: 7000,
            bedrooms: 4,
            bathrooms: 3,
            stories: 3,
            mainroad: true,
            guestroom: true,
            basement: true,
            hotwaterheating: true,
            airconditioning: true,
            parking: 2,
            prefarea: true,
            furnishing_status: FurnishingStatus::Furnished,
        }
    }

    #[test]
    fn test_furnishing_ordinals() {
        let codes: Vec<u8> = FurnishingStatus::ALL.iter().map(|s| s.ordinal()).collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }

    #[test]
    fn test_validate_accepts_domain_edges() {
        let low = HouseFeatures {
            area: 1000,
            bedrooms: 1,
            bathrooms: 1,
            stories: 1,
            parking: 0,
            ..sample()
        };
        let high = HouseFeatures {
            area: 20000,
            bedrooms: 8,
            bathrooms: 6,
            stories: 4,
            parking: 3,
            ..sample()
        };
        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let house = HouseFeatures {
            bedrooms: 9,
            parking: 4,
            ..sample()
        };
        let err = house.validate().unwrap_err();
        assert_eq!(
            err,
            FeatureDomainError::OutOfRange {
                field: "bedrooms",
                value: 9,
                min: 1,
                max: 8,
            }
        );
    }

    #[test]
    fn test_validate_rejects_zero_bathrooms() {
        let house = HouseFeatures {
            bathrooms: 0,
            ..sample()
        };
        assert!(house.validate().is_err());
    }
}
