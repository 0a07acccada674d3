// Purchase flow: create an order for the selected courses, then confirm it.
impl StorefrontClient {
    pub async fn capture_payment(
        &self,
        token: &str,
        courses: &[String],
    ) -> Result<PaymentOrder, String> {
        if courses.is_empty() {
            return Err("No courses selected".to_string());
        }

        let response = self
            .post("payment/capturePayment")
            .bearer_auth(token)
            .json(&CapturePaymentRequest { courses })
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let json: ApiEnvelope<PaymentOrder> = response.json().await.map_err(|e| e.to_string())?;

        json.into_data()
    }

    pub async fn verify_payment(
        &self,
        token: &str,
        courses: &[String],
        order: &PaymentOrder,
    ) -> Result<(), String> {
        let response = self
            .post("payment/verifyPayment")
            .bearer_auth(token)
            .json(&VerifyPaymentRequest {
                courses,
                order_id: &order.id,
            })
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let json: ApiEnvelope<serde_json::Value> =
            response.json().await.map_err(|e| e.to_string())?;

        if json.success {
            Ok(())
        } else {
            Err(json
                .message
                .unwrap_or("Could not verify payment".to_string()))
        }
    }
}

/// Runs a full purchase. The caller owns the payment-loading flag around this call.
pub async fn buy_courses(config: ApiConfig, request: PurchaseRequest) -> Result<(), String> {
    let client = StorefrontClient::new(config);
    let order = client
        .capture_payment(&request.token, &request.courses)
        .await?;
    tracing::info!(order_id = %order.id, courses = request.courses.len(), "payment order created");

    client
        .verify_payment(&request.token, &request.courses, &order)
        .await?;
    if let Some(user) = request.user.as_ref() {
        tracing::info!(user_id = %user.id, "purchase verified");
    }
    Ok(())
}
