// Response envelopes returned by the storefront backend.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> Result<T, String> {
        if !self.success {
            return Err(self
                .message
                .unwrap_or("Request was not successful".to_string()));
        }
        self.data
            .ok_or("Response did not include any data".to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
struct CourseDetailsRequest<'a> {
    #[serde(rename = "courseId")]
    course_id: &'a str,
}

#[derive(Debug, Serialize)]
struct CapturePaymentRequest<'a> {
    courses: &'a [String],
}

#[derive(Debug, Serialize)]
struct VerifyPaymentRequest<'a> {
    courses: &'a [String],
    #[serde(rename = "orderId")]
    order_id: &'a str,
}
