use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A review as stored in either `pending_reviews` or `user_reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    #[serde(rename = "Elective_Module")]
    pub elective_module: String,
    #[serde(rename = "Elective_Code")]
    pub elective_code: String,
    #[serde(rename = "Academic_Year")]
    pub academic_year: String,
    #[serde(rename = "Semester")]
    pub semester: String,
    #[serde(rename = "Ratings")]
    pub ratings: i32,
    #[serde(rename = "Rating_Reason")]
    pub rating_reason: String,
    #[serde(rename = "TLDR_experiences")]
    pub tldr_experiences: String,
    #[serde(rename = "Assignment_Review")]
    pub assignment_review: String,
    #[serde(rename = "Assignment_Weightage")]
    pub assignment_weightage: String,
    #[serde(rename = "Life_Hacks")]
    pub life_hacks: String,
}

/// A validated review that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub elective_module: String,
    pub elective_code: String,
    pub academic_year: String,
    pub semester: String,
    pub ratings: i32,
    pub rating_reason: String,
    pub tldr_experiences: String,
    pub assignment_review: String,
    pub assignment_weightage: String,
    pub life_hacks: String,
}

impl NewReview {
    pub fn with_id(self, id: i64) -> Review {
        Review {
            id,
            elective_module: self.elective_module,
            elective_code: self.elective_code,
            academic_year: self.academic_year,
            semester: self.semester,
            ratings: self.ratings,
            rating_reason: self.rating_reason,
            tldr_experiences: self.tldr_experiences,
            assignment_review: self.assignment_review,
            assignment_weightage: self.assignment_weightage,
            life_hacks: self.life_hacks,
        }
    }
}

/// Inbound review body. Every field is optional at the wire level so that
/// missing and `null` values can be reported together.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewSubmission {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "Elective_Module", default)]
    pub elective_module: Option<String>,
    #[serde(rename = "Elective_Code", default)]
    pub elective_code: Option<String>,
    #[serde(rename = "Academic_Year", default, deserialize_with = "lenient_string")]
    pub academic_year: Option<String>,
    #[serde(rename = "Semester", default, deserialize_with = "lenient_string")]
    pub semester: Option<String>,
    #[serde(rename = "Ratings", default, deserialize_with = "lenient_rating")]
    pub ratings: Option<i32>,
    #[serde(rename = "Rating_Reason", default)]
    pub rating_reason: Option<String>,
    #[serde(rename = "TLDR_experiences", default)]
    pub tldr_experiences: Option<String>,
    #[serde(rename = "Assignment_Review", default)]
    pub assignment_review: Option<String>,
    #[serde(rename = "Assignment_Weightage", default)]
    pub assignment_weightage: Option<String>,
    #[serde(rename = "Life_Hacks", default)]
    pub life_hacks: Option<String>,
}

impl ReviewSubmission {
    pub fn validate(self) -> Result<NewReview, AppError> {
        let missing: Vec<&str> = [
            ("Elective_Module", self.elective_module.is_none()),
            ("Elective_Code", self.elective_code.is_none()),
            ("Academic_Year", self.academic_year.is_none()),
            ("Semester", self.semester.is_none()),
            ("Ratings", self.ratings.is_none()),
            ("Rating_Reason", self.rating_reason.is_none()),
            ("TLDR_experiences", self.tldr_experiences.is_none()),
            ("Assignment_Review", self.assignment_review.is_none()),
            ("Assignment_Weightage", self.assignment_weightage.is_none()),
            ("Life_Hacks", self.life_hacks.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let ratings = self.ratings.unwrap_or_default();
        if !(MIN_RATING..=MAX_RATING).contains(&ratings) {
            return Err(AppError::ValidationError(format!(
                "Ratings must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, ratings
            )));
        }

        Ok(NewReview {
            elective_module: self.elective_module.unwrap_or_default(),
            elective_code: self.elective_code.unwrap_or_default(),
            academic_year: self.academic_year.unwrap_or_default(),
            semester: self.semester.unwrap_or_default(),
            ratings,
            rating_reason: self.rating_reason.unwrap_or_default(),
            tldr_experiences: self.tldr_experiences.unwrap_or_default(),
            assignment_review: self.assignment_review.unwrap_or_default(),
            assignment_weightage: self.assignment_weightage.unwrap_or_default(),
            life_hacks: self.life_hacks.unwrap_or_default(),
        })
    }
}

// Academic year and semester arrive as either "2024" or 2024 depending on the form.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

// Ratings come from form fields too, so "4" is as good as 4.
pub(crate) fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        String(String),
    }

    let Some(value) = Option::<IntOrString>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let rating = match value {
        IntOrString::Int(n) => i32::try_from(n).map_err(|_| {
            serde::de::Error::custom(format!("Ratings out of range: {n}"))
        })?,
        IntOrString::String(s) => s.trim().parse::<i32>().map_err(|_| {
            serde::de::Error::custom(format!("Ratings is not a number: {s:?}"))
        })?,
    };

    Ok(Some(rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> serde_json::Value {
        json!({
            "Elective_Module": "Data Structures",
            "Elective_Code": "CS201",
            "Academic_Year": "2024",
            "Semester": "1",
            "Ratings": 4,
            "Rating_Reason": "clear",
            "TLDR_experiences": "ok",
            "Assignment_Review": "fair",
            "Assignment_Weightage": "40%",
            "Life_Hacks": "attend labs"
        })
    }

    #[test]
    fn test_complete_submission_validates() {
        let submission: ReviewSubmission = serde_json::from_value(full_body()).unwrap();
        let review = submission.validate().unwrap();

        assert_eq!(review.elective_code, "CS201");
        assert_eq!(review.ratings, 4);
        assert_eq!(review.life_hacks, "attend labs");
    }

    #[test]
    fn test_missing_and_null_fields_are_reported() {
        let mut body = full_body();
        body.as_object_mut().unwrap().remove("Life_Hacks");
        body["Semester"] = serde_json::Value::Null;

        let submission: ReviewSubmission = serde_json::from_value(body).unwrap();
        let err = submission.validate().unwrap_err();

        match err {
            AppError::ValidationError(msg) => {
                assert!(msg.contains("Semester"));
                assert!(msg.contains("Life_Hacks"));
                assert!(!msg.contains("Elective_Code"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let mut body = full_body();
        body["Ratings"] = json!(6);

        let submission: ReviewSubmission = serde_json::from_value(body).unwrap();
        assert!(matches!(
            submission.validate(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_numeric_year_and_semester_are_accepted() {
        let mut body = full_body();
        body["Academic_Year"] = json!(2024);
        body["Semester"] = json!(2);

        let submission: ReviewSubmission = serde_json::from_value(body).unwrap();
        let review = submission.validate().unwrap();

        assert_eq!(review.academic_year, "2024");
        assert_eq!(review.semester, "2");
    }

    #[test]
    fn test_string_rating_is_accepted() {
        let mut body = full_body();
        body["Ratings"] = json!(" 4 ");

        let submission: ReviewSubmission = serde_json::from_value(body).unwrap();
        assert_eq!(submission.validate().unwrap().ratings, 4);
    }

    #[test]
    fn test_non_numeric_rating_fails_to_parse() {
        let mut body = full_body();
        body["Ratings"] = json!("four");

        assert!(serde_json::from_value::<ReviewSubmission>(body).is_err());
    }

    #[test]
    fn test_null_rating_is_missing() {
        let mut body = full_body();
        body["Ratings"] = serde_json::Value::Null;

        let submission: ReviewSubmission = serde_json::from_value(body).unwrap();
        match submission.validate() {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("Ratings")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
