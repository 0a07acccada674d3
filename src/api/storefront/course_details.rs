// Course detail lookup.
impl StorefrontClient {
    pub async fn get_course_details(&self, course_id: &str) -> Result<CourseDetailsPayload, String> {
        let course_id = course_id.trim();
        if course_id.is_empty() {
            return Err("Missing course id".to_string());
        }

        tracing::debug!(course_id, "requesting course details");
        let response = self
            .post("course/getCourseDetails")
            .json(&CourseDetailsRequest { course_id })
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let json: ApiEnvelope<CourseDetailsPayload> =
            response.json().await.map_err(|e| e.to_string())?;

        json.into_data()
    }
}

/// Fetches a course and folds every failure into an unsuccessful `FetchResult`.
pub async fn fetch_course_details(config: ApiConfig, course_id: String) -> FetchResult {
    let client = StorefrontClient::new(config);
    match client.get_course_details(&course_id).await {
        Ok(payload) => FetchResult::loaded(payload),
        Err(error) => {
            tracing::warn!(%course_id, %error, "could not fetch course details");
            FetchResult::failed(error)
        }
    }
}
