use crate::domain::housing::HouseFeatures;

/// Ordered list of feature names.
/// This order MUST match exactly the column order the model was trained on.
/// Any change here is a breaking change for every model artifact.
pub const FEATURE_NAMES: &[&str] = &[
    "area",
    "bedrooms",
    "bathrooms",
    "stories",
    "mainroad",
    "guestroom",
    "basement",
    "hotwaterheating",
    "airconditioning",
    "parking",
    "prefarea",
    "furnishingstatus",
];

pub const FEATURE_COUNT: usize = 12;

/// Fixed-order numeric input for a single model row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedVector([f64; FEATURE_COUNT]);

impl EncodedVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Value of a named feature, `None` for names outside `FEATURE_NAMES`
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.0[idx])
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Converts house attributes into the model's input vector.
/// Assumes the attributes were already checked against their domains.
pub fn encode(features: &HouseFeatures) -> EncodedVector {
    EncodedVector([
        f64::from(features.area),
        f64::from(features.bedrooms),
        f64::from(features.bathrooms),
        f64::from(features.stories),
        flag(features.mainroad),
        flag(features.guestroom),
        flag(features.basement),
        flag(features.hotwaterheating),
        flag(features.airconditioning),
        f64::from(features.parking),
        flag(features.prefarea),
        f64::from(features.furnishing_status.ordinal()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::housing::FurnishingStatus;

    fn house() -> HouseFeatures {
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
    fn test_feature_vector_length() {
        let vec = encode(&house());
        assert_eq!(vec.as_slice().len(), FEATURE_NAMES.len());
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_feature_order() {
        let vec = encode(&house());
        assert_eq!(
            vec.as_slice(),
            &[7000.0, 4.0, 3.0, 3.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 2.0]
        );
    }

    #[test]
    fn test_feature_consistency() {
        let fs = HouseFeatures {
            area: 3500,
            parking: 0,
            prefarea: false,
            furnishing_status: FurnishingStatus::SemiFurnished,
            ..house()
        };

        let vec = encode(&fs);
        // Area is index 0
        assert_eq!(vec.as_slice()[0], 3500.0);
        // Parking sits between airconditioning and prefarea
        assert_eq!(vec.get("parking"), Some(0.0));
        assert_eq!(vec.get("prefarea"), Some(0.0));
        // Furnishing is last index (11)
        assert_eq!(vec.as_slice()[11], 1.0);
        assert_eq!(vec.get("garage"), None);
    }

    #[test]
    fn test_booleans_encode_as_flags() {
        let none = HouseFeatures {
            mainroad: false,
            guestroom: false,
            basement: false,
            hotwaterheating: false,
            airconditioning: false,
            prefarea: false,
            ..house()
        };
        let vec = encode(&none);
        for name in [
            "mainroad",
            "guestroom",
            "basement",
            "hotwaterheating",
            "airconditioning",
            "prefarea",
        ] {
            assert_eq!(vec.get(name), Some(0.0), "{name}");
        }
    }

    #[test]
    fn test_furnishing_codes() {
        for (status, code) in FurnishingStatus::ALL.into_iter().zip([0.0, 1.0, 2.0]) {
            let vec = encode(&HouseFeatures {
                furnishing_status: status,
                ..house()
            });
            assert_eq!(vec.get("furnishingstatus"), Some(code));
        }
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let h = house();
        assert_eq!(encode(&h), encode(&h));
    }
}
