use serde::Deserialize;

use crate::{
    errors::AppError,
    models::review::{MAX_RATING, MIN_RATING, Review, lenient_rating},
};

/// Body of the direct `/notify` bypass.
#[derive(Debug, Default, Deserialize)]
pub struct NotifyPayload {
    #[serde(rename = "Elective_Module", default)]
    pub elective_module: Option<String>,
    #[serde(rename = "Elective_Code", default)]
    pub elective_code: Option<String>,
    #[serde(rename = "Ratings", default, deserialize_with = "lenient_rating")]
    pub ratings: Option<i32>,
}

/// What the public channel gets told about a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub elective_module: String,
    pub elective_code: String,
    pub ratings: i32,
}

impl NotifyPayload {
    // Empty strings and a zero rating count as missing, same as the old notifier.
    pub fn validate(self) -> Result<Announcement, AppError> {
        let module = self.elective_module.filter(|m| !m.trim().is_empty());
        let code = self.elective_code.filter(|c| !c.trim().is_empty());
        let ratings = self.ratings.filter(|r| *r != 0);

        let (Some(elective_module), Some(elective_code), Some(ratings)) = (module, code, ratings)
        else {
            return Err(AppError::ValidationError("Missing required fields".into()));
        };

        if !(MIN_RATING..=MAX_RATING).contains(&ratings) {
            return Err(AppError::ValidationError(format!(
                "Ratings must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, ratings
            )));
        }

        Ok(Announcement {
            elective_module,
            elective_code,
            ratings,
        })
    }
}

impl From<&Review> for Announcement {
    fn from(review: &Review) -> Self {
        Self {
            elective_module: review.elective_module.clone(),
            elective_code: review.elective_code.clone(),
            ratings: review.ratings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_fields_are_missing() {
        let payload = NotifyPayload {
            elective_module: Some("  ".into()),
            elective_code: Some("CS201".into()),
            ratings: Some(4),
        };

        assert!(matches!(
            payload.validate(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_zero_rating_is_missing() {
        let payload = NotifyPayload {
            elective_module: Some("Data Structures".into()),
            elective_code: Some("CS201".into()),
            ratings: Some(0),
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_valid_payload() {
        let payload = NotifyPayload {
            elective_module: Some("Data Structures".into()),
            elective_code: Some("CS201".into()),
            ratings: Some(5),
        };

        let announcement = payload.validate().unwrap();
        assert_eq!(announcement.elective_code, "CS201");
        assert_eq!(announcement.ratings, 5);
    }

    #[test]
    fn test_string_rating_from_form() {
        let payload: NotifyPayload = serde_json::from_value(json!({
            "Elective_Module": "Data Structures",
            "Elective_Code": "CS201",
            "Ratings": "4"
        }))
        .unwrap();

        assert_eq!(payload.validate().unwrap().ratings, 4);
    }

    #[test]
    fn test_string_zero_rating_is_missing() {
        let payload: NotifyPayload = serde_json::from_value(json!({
            "Elective_Module": "Data Structures",
            "Elective_Code": "CS201",
            "Ratings": "0"
        }))
        .unwrap();

        assert!(payload.validate().is_err());
    }
}
