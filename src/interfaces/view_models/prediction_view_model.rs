use crate::application::prediction_service::{ModelState, PredictionService};
use crate::domain::errors::{FeatureDomainError, ModelError};
use crate::domain::housing::features::AREA_RANGE;
use crate::domain::housing::{FurnishingStatus, HouseFeatures, format_thousands};
use std::path::Path;
use tracing::info;

pub const BEDROOM_OPTIONS: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
pub const BATHROOM_OPTIONS: [u8; 6] = [1, 2, 3, 4, 5, 6];
pub const STORY_OPTIONS: [u8; 4] = [1, 2, 3, 4];
pub const PARKING_OPTIONS: [u8; 4] = [0, 1, 2, 3];
pub const AREA_STEP: u32 = 100;

/// Two-way selection shown as "No" / "Yes"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YesNo {
    No,
    #[default]
    Yes,
}

impl YesNo {
    pub const OPTIONS: [YesNo; 2] = [YesNo::No, YesNo::Yes];

    pub fn label(&self) -> &'static str {
        match self {
            YesNo::No => "No",
            YesNo::Yes => "Yes",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// Raw widget state of the input form.
///
/// Numeric fields are wider than their domains so that an out-of-range entry
/// can be represented and rejected by `to_features`.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseForm {
    pub area: i64,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub stories: u8,
    pub mainroad: YesNo,
    pub guestroom: YesNo,
    pub basement: YesNo,
    pub hotwaterheating: YesNo,
    pub airconditioning: YesNo,
    pub parking: u8,
    pub prefarea: YesNo,
    pub furnishing_status: FurnishingStatus,
}

impl Default for HouseForm {
    fn default() -> Self {
        Self {
            area: 7000,
            bedrooms: 4,
            bathrooms: 3,
            stories: 3,
            mainroad: YesNo::Yes,
            guestroom: YesNo::Yes,
            basement: YesNo::Yes,
            hotwaterheating: YesNo::Yes,
            airconditioning: YesNo::Yes,
            parking: 2,
            prefarea: YesNo::Yes,
            furnishing_status: FurnishingStatus::Furnished,
        }
    }
}

/// One row of the property summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub feature: &'static str,
    pub value: String,
}

/// One line of the amenity checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    pub present: bool,
    pub label: &'static str,
}

impl ChecklistItem {
    pub fn marker(&self) -> &'static str {
        if self.present { "✅" } else { "❌" }
    }
}

impl HouseForm {
    /// Validates the widget values and builds the model input.
    /// Out-of-domain values are rejected here, before any encoding happens.
    pub fn to_features(&self) -> Result<HouseFeatures, FeatureDomainError> {
        let area = u32::try_from(self.area).map_err(|_| FeatureDomainError::OutOfRange {
            field: "area",
            value: self.area,
            min: i64::from(*AREA_RANGE.start()),
            max: i64::from(*AREA_RANGE.end()),
        })?;

        let features = HouseFeatures {
            area,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            stories: self.stories,
            mainroad: self.mainroad.is_yes(),
            guestroom: self.guestroom.is_yes(),
            basement: self.basement.is_yes(),
            hotwaterheating: self.hotwaterheating.is_yes(),
            airconditioning: self.airconditioning.is_yes(),
            parking: self.parking,
            prefarea: self.prefarea.is_yes(),
            furnishing_status: self.furnishing_status,
        };
        features.validate()?;
        Ok(features)
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        let area = u32::try_from(self.area)
            .map(format_thousands)
            .unwrap_or_else(|_| self.area.to_string());

        vec![
            SummaryRow {
                feature: "Area",
                value: format!("{} sq ft", area),
            },
            SummaryRow {
                feature: "Bedrooms",
                value: self.bedrooms.to_string(),
            },
            SummaryRow {
                feature: "Bathrooms",
                value: self.bathrooms.to_string(),
            },
            SummaryRow {
                feature: "Stories",
                value: self.stories.to_string(),
            },
            SummaryRow {
                feature: "Parking",
                value: self.parking.to_string(),
            },
            SummaryRow {
                feature: "Furnishing",
                value: self.furnishing_status.title().to_string(),
            },
        ]
    }

    pub fn checklist(&self) -> Vec<ChecklistItem> {
        [
            (self.mainroad, "Main Road Access"),
            (self.guestroom, "Guest Room"),
            (self.basement, "Basement"),
            (self.hotwaterheating, "Hot Water Heating"),
            (self.airconditioning, "Air Conditioning"),
            (self.prefarea, "Preferred Area"),
        ]
        .into_iter()
        .map(|(value, label)| ChecklistItem {
            present: value.is_yes(),
            label,
        })
        .collect()
    }
}

/// What the result area shows after the predict button is pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionOutcome {
    Price(String),
    Error(String),
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// User-facing text for a model error
pub fn user_message(error: &ModelError) -> String {
    match error {
        ModelError::ArtifactNotFound { path } => {
            format!("Model file '{}' not found.", file_label(path))
        }
        ModelError::ArtifactCorrupt { path, reason } => {
            format!("Model file '{}' could not be loaded: {}", file_label(path), reason)
        }
        ModelError::PredictionError { reason } => format!("Error making prediction: {}", reason),
    }
}

/// User-facing text for a rejected form value
pub fn input_message(error: &FeatureDomainError) -> String {
    format!("Invalid input: {}", error)
}

pub struct PredictionViewModel;

impl PredictionViewModel {
    /// Banner text while the model is unusable; `None` once it is ready
    pub fn load_banner(service: &PredictionService) -> Option<String> {
        match service.state() {
            ModelState::Failed => service.load_error().map(user_message),
            ModelState::Unloaded | ModelState::Loading | ModelState::Ready => None,
        }
    }

    pub fn can_predict(service: &PredictionService) -> bool {
        service.state() != ModelState::Failed
    }

    /// Validates the form, encodes it, and asks the service for a price
    pub fn predict(service: &PredictionService, form: &HouseForm) -> PredictionOutcome {
        let features = match form.to_features() {
            Ok(features) => features,
            Err(e) => {
                info!("Rejected form input: {}", e);
                return PredictionOutcome::Error(input_message(&e));
            }
        };

        match service.predict_features(&features) {
            Ok(result) => PredictionOutcome::Price(result.to_currency()),
            Err(e) => PredictionOutcome::Error(user_message(&e)),
        }
    }
}
