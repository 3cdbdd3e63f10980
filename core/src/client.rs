use reqwest::Client;

use crate::config::GeminiConfig;
use crate::errors::{ProviderError, ProviderResult};
use crate::types::*;

/// Client for interacting with the Gemini generateContent API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    model: GeminiModel,
    api_base: String,
}

impl GeminiClient {
    /// Create a new Gemini API client
    pub fn new(config: GeminiConfig) -> ProviderResult<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ProviderError::ConfigError(
                "API key is required to initialize the Gemini client".to_string(),
            )
        })?;

        let model = GeminiModel::new(api_key, config.model_name.clone());
        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            client: Client::new(),
            model,
            api_base,
        })
    }

    /// Get the generateContent URL for the configured model
    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model.model_name, self.model.api_key
        )
    }

    /// Generate content using the Gemini API
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> ProviderResult<GenerateContentResponse> {
        let url = self.endpoint_url();

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.map_err(|e| {
                ProviderError::ResponseError(format!("Failed to read error response: {}", e))
            })?;

            return Err(ProviderError::HttpError {
                status_code: status.as_u16(),
                message: format!("API request failed: {}", error_body),
            });
        }

        let response_body = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ProviderError::ResponseError(format!("Failed to parse response: {}", e)))?;

        Ok(response_body)
    }

    /// Single-turn text generation: build the request, call the API, and
    /// return the first candidate's text.
    pub async fn generate_text(
        &self,
        prompt: &str,
        max_output_tokens: i32,
    ) -> ProviderResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt.to_string())],
                role: Some("user".to_string()),
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                top_p: None,
                max_output_tokens: Some(max_output_tokens),
            }),
        };

        let response = self.generate_content(request).await?;
        Self::extract_text_from_response(&response)
    }

    /// Helper method to extract text from a response
    pub fn extract_text_from_response(
        response: &GenerateContentResponse,
    ) -> ProviderResult<String> {
        let candidate = response.candidates.first().ok_or_else(|| {
            ProviderError::ResponseError("No candidates in response".to_string())
        })?;

        let content = candidate
            .content
            .as_ref()
            .ok_or_else(|| ProviderError::ResponseError("No content in candidate".to_string()))?;

        let part = content
            .parts
            .first()
            .ok_or_else(|| ProviderError::ResponseError("No parts in content".to_string()))?;

        let text = part
            .text
            .as_ref()
            .ok_or_else(|| ProviderError::ResponseError("No text in part".to_string()))?;

        Ok(text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base: &str) -> GeminiClient {
        let config = GeminiConfig {
            api_key: Some("test-key".into()),
            model_name: Some("test-model".into()),
            api_base: Some(base.into()),
        };
        GeminiClient::new(config).unwrap()
    }

    #[test]
    fn new_requires_api_key() {
        let result = GeminiClient::new(GeminiConfig::default());
        assert!(matches!(result, Err(ProviderError::ConfigError(_))));
    }

    #[test]
    fn endpoint_url_embeds_model_and_key() {
        let client = client_with_base("http://localhost:1234/v1beta");
        assert_eq!(
            client.endpoint_url(),
            "http://localhost:1234/v1beta/models/test-model:generateContent?key=test-key"
        );
    }

    #[test]
    fn extract_text_walks_the_envelope() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"hello"}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            GeminiClient::extract_text_from_response(&response).unwrap(),
            "hello"
        );
    }

    #[test]
    fn extract_text_rejects_empty_candidates() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        let result = GeminiClient::extract_text_from_response(&response);
        assert!(matches!(result, Err(ProviderError::ResponseError(_))));
    }

    #[tokio::test]
    async fn transport_failure_is_a_request_error() {
        // Nothing listens on the discard port; the send itself fails.
        let client = client_with_base("http://127.0.0.1:9/v1beta");
        let result = client.generate_text("hello", 16).await;
        assert!(matches!(result, Err(ProviderError::RequestError(_))));
    }
}
