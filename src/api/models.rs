use serde::{Deserialize, Deserializer, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:4000/api/v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the backend URL baked in at build time, falling back to a local dev server.
    pub fn from_env() -> Self {
        match option_env!("COURSEFRONT_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Runtime override from persisted settings wins over the build-time value.
    pub fn with_override(self, override_url: Option<&str>) -> Self {
        match override_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => self,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Backends send numbers either as JSON numbers or as numeric strings.
fn number_from_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|number| number.is_finite()))
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.unwrap_or(0.0))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdditionalDetails {
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, alias = "contactNumber")]
    pub contact_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Instructor {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "additionalDetails")]
    pub additional_details: Option<AdditionalDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubSection {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "timeDuration")]
    pub time_duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Section {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "sectionName")]
    pub section_name: String,
    #[serde(default, alias = "subSection")]
    pub sub_section: Vec<SubSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RatingAndReview {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: f64,
    #[serde(default)]
    pub review: Option<String>,
}

/// Enrollment entries arrive either as bare user ids or as populated user documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnrolledStudent {
    Id(String),
    User {
        #[serde(default, alias = "_id")]
        id: String,
    },
}

impl EnrolledStudent {
    pub fn user_id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::User { id } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CourseDetails {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "courseName")]
    pub course_name: Option<String>,
    #[serde(default, alias = "courseDescription")]
    pub course_description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, alias = "whatYouWillLearn")]
    pub what_you_will_learn: Option<String>,
    #[serde(default, alias = "courseContent")]
    pub course_content: Option<Vec<Section>>,
    #[serde(default, alias = "ratingAndReviews")]
    pub rating_and_reviews: Option<Vec<RatingAndReview>>,
    #[serde(default)]
    pub instructor: Option<Instructor>,
    #[serde(default, alias = "studentsEnrolled")]
    pub students_enrolled: Option<Vec<EnrolledStudent>>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    #[serde(default)]
    pub tag: Option<Vec<String>>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CourseDetailsPayload {
    #[serde(alias = "courseDetails")]
    pub course_details: CourseDetails,
    /// Seconds; some backends send it as a numeric string.
    #[serde(default, alias = "totalDuration")]
    pub total_duration: Option<serde_json::Value>,
}

impl CourseDetailsPayload {
    pub fn total_duration_seconds(&self) -> Option<f64> {
        self.total_duration.as_ref().and_then(number_from_value)
    }
}

/// Outcome of a course-details request. A failed result never carries a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<CourseDetailsPayload>,
}

impl FetchResult {
    pub fn loaded(data: CourseDetailsPayload) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "firstName")]
    pub first_name: String,
    #[serde(default, alias = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "accountType")]
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EnrolledCourse {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, alias = "courseName")]
    pub course_name: Option<String>,
    #[serde(default, alias = "courseDescription")]
    pub course_description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, alias = "totalDuration")]
    pub total_duration: Option<String>,
    #[serde(default, alias = "progressPercentage")]
    pub progress_percentage: Option<f64>,
}

/// Order handed back by the payment backend before verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaymentOrder {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub token: String,
    pub courses: Vec<String>,
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_payload_parses_backend_field_names() {
        let json = r#"{
            "courseDetails": {
                "_id": "c1",
                "courseName": "Rust 101",
                "price": 499,
                "courseContent": [
                    { "_id": "s1", "sectionName": "Intro", "subSection": [{ "_id": "l1", "title": "Hello", "timeDuration": "120" }] }
                ],
                "studentsEnrolled": ["u1", { "_id": "u2", "firstName": "Ada" }],
                "instructor": { "firstName": "Grace", "lastName": "Hopper", "additionalDetails": { "about": "Admiral" } }
            },
            "totalDuration": "3661"
        }"#;

        let payload: CourseDetailsPayload = serde_json::from_str(json).expect("parse payload");
        let course = &payload.course_details;
        assert_eq!(course.id, "c1");
        assert_eq!(course.course_name.as_deref(), Some("Rust 101"));
        assert_eq!(course.price, Some(499.0));
        let content = course.course_content.as_ref().expect("content");
        assert_eq!(content[0].sub_section[0].time_duration.as_deref(), Some("120"));
        let enrolled: Vec<&str> = course
            .students_enrolled
            .iter()
            .flatten()
            .map(EnrolledStudent::user_id)
            .collect();
        assert_eq!(enrolled, vec!["u1", "u2"]);
        assert_eq!(payload.total_duration_seconds(), Some(3661.0));
    }

    #[test]
    fn missing_fields_fall_back_to_empty() {
        let payload: CourseDetailsPayload =
            serde_json::from_str(r#"{ "courseDetails": {} }"#).expect("parse payload");
        assert!(payload.course_details.course_name.is_none());
        assert!(payload.course_details.course_content.is_none());
        assert_eq!(payload.total_duration_seconds(), None);
    }

    #[test]
    fn loose_numbers_do_not_reject_the_course() {
        let json = r#"{
            "courseDetails": {
                "_id": "c2",
                "price": "1299",
                "ratingAndReviews": [
                    { "_id": "r1", "rating": "4.5" },
                    { "_id": "r2", "rating": null },
                    { "_id": "r3", "rating": 3 }
                ]
            }
        }"#;

        let payload: CourseDetailsPayload = serde_json::from_str(json).expect("parse payload");
        let course = &payload.course_details;
        assert_eq!(course.price, Some(1299.0));
        let ratings: Vec<f64> = course
            .rating_and_reviews
            .iter()
            .flatten()
            .map(|review| review.rating)
            .collect();
        assert_eq!(ratings, vec![4.5, 0.0, 3.0]);
    }

    #[test]
    fn unreadable_price_is_treated_as_missing() {
        let payload: CourseDetailsPayload = serde_json::from_str(
            r#"{ "courseDetails": { "_id": "c3", "price": null } }"#,
        )
        .expect("parse payload");
        assert_eq!(payload.course_details.price, None);

        let payload: CourseDetailsPayload = serde_json::from_str(
            r#"{ "courseDetails": { "_id": "c3", "price": "free" } }"#,
        )
        .expect("parse payload");
        assert_eq!(payload.course_details.price, None);
    }

    #[test]
    fn api_config_trims_and_overrides() {
        let config = ApiConfig::new("https://api.example.com/v1/ ");
        assert_eq!(config.base_url, "https://api.example.com/v1");

        let same = config.clone().with_override(Some("  "));
        assert_eq!(same, config);

        let overridden = config.with_override(Some("http://10.0.0.2:4000/api/v1/"));
        assert_eq!(overridden.base_url, "http://10.0.0.2:4000/api/v1");
    }
}
