use crate::error::AppError;
use crate::forms::schema::ValidatedValues;

/// Client for the hosted form relay. One shared reqwest client, built once.
pub struct RelayClient {
    client: reqwest::Client,
}

impl RelayClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    /// POST the validated fields as multipart form data. Success is any
    /// OK-class status; everything else is an upstream failure.
    pub async fn submit(&self, url: &str, values: &ValidatedValues) -> Result<(), AppError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in values.iter() {
            form = form.text(name, value.to_string());
        }

        let resp = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Relay request failed: {e}")))?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(1024)
                .collect::<String>();
            Err(AppError::Upstream(format!(
                "Relay returned {status}: {body}"
            )))
        }
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::new()
    }
}
