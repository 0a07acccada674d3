use crate::api::models::*;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const CLIENT_NAME: &str = "Coursefront";

/// Thin client over the storefront REST backend.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontClient {
    pub config: ApiConfig,
}

impl StorefrontClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        HTTP_CLIENT
            .post(self.endpoint(path))
            .header("X-Client-Name", CLIENT_NAME)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        HTTP_CLIENT
            .get(self.endpoint(path))
            .header("X-Client-Name", CLIENT_NAME)
    }
}

// Course lookup and the page-level fetch wrapper.
include!("course_details.rs");
// Order capture and verification for course purchases.
include!("payments.rs");
// Login and profile endpoints backing the session.
include!("auth_and_profile.rs");
// Envelope types shared by every backend response.
include!("response_models.rs");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = StorefrontClient::new(ApiConfig::new("http://localhost:4000/api/v1/"));
        assert_eq!(
            client.endpoint("/course/getCourseDetails"),
            "http://localhost:4000/api/v1/course/getCourseDetails"
        );
        assert_eq!(
            client.endpoint("auth/login"),
            "http://localhost:4000/api/v1/auth/login"
        );
    }

    #[test]
    fn envelope_failure_prefers_backend_message() {
        let envelope: ApiEnvelope<CourseDetailsPayload> =
            serde_json::from_str(r#"{ "success": false, "message": "Course not found" }"#)
                .expect("parse envelope");
        assert_eq!(
            envelope.into_data().unwrap_err(),
            "Course not found".to_string()
        );
    }

    #[test]
    fn envelope_success_without_data_is_an_error() {
        let envelope: ApiEnvelope<CourseDetailsPayload> =
            serde_json::from_str(r#"{ "success": true }"#).expect("parse envelope");
        assert!(envelope.into_data().is_err());
    }

    #[test]
    fn envelope_success_yields_payload() {
        let envelope: ApiEnvelope<CourseDetailsPayload> = serde_json::from_str(
            r#"{ "success": true, "data": { "courseDetails": { "_id": "c9" }, "totalDuration": 90 } }"#,
        )
        .expect("parse envelope");
        let payload = envelope.into_data().expect("payload");
        assert_eq!(payload.course_details.id, "c9");
        assert_eq!(payload.total_duration_seconds(), Some(90.0));
    }
}
