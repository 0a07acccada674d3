// Session login and profile lookups.
impl StorefrontClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<(String, User), String> {
        let response = self
            .post("auth/login")
            .json(request)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let json: LoginResponse = response.json().await.map_err(|e| e.to_string())?;

        if !json.success {
            return Err(json.message.unwrap_or("Login failed".to_string()));
        }
        match (json.token, json.user) {
            (Some(token), Some(user)) if !token.trim().is_empty() => Ok((token, user)),
            _ => Err("Login response did not include a session".to_string()),
        }
    }

    pub async fn get_enrolled_courses(&self, token: &str) -> Result<Vec<EnrolledCourse>, String> {
        let response = self
            .get("profile/getEnrolledCourses")
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let json: ApiEnvelope<Vec<EnrolledCourse>> =
            response.json().await.map_err(|e| e.to_string())?;

        json.into_data()
    }
}
