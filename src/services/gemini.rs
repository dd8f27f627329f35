// src/services/gemini.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::common::error::AppError;

// Contrato do colaborador externo de resumo: recebe o prompt pronto e devolve
// texto. A trait isola o resto do código do provedor concreto e permite
// dublês nos testes.
#[async_trait]
pub trait SummarizationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    // Lê a chave do ambiente; sem ela o serviço de resumo fica indisponível.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AppError::GatewayUnavailable),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Falha ao criar o cliente HTTP");

        Self { config, client }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl SummarizationProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::GatewayTimeout
                } else {
                    AppError::GatewayError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GatewayError(format!("status {status}: {body}")));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::GatewayError(format!("resposta inválida: {e}")))?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::GatewayError("resposta sem conteúdo".to_string()));
        }

        Ok(text)
    }
}

// ----- Tipos da API Gemini -----

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_comeca_com_o_modelo_padrao() {
        let config = GeminiConfig::new("chave-teste");
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.api_key(), "chave-teste");
    }

    #[test]
    fn builder_sobrescreve_modelo_e_endereco() {
        let config = GeminiConfig::new("chave")
            .with_model("gemini-2.0-pro")
            .with_base_url("http://localhost:9090")
            .with_timeout(Duration::from_secs(5));

        let client = GeminiClient::new(config);
        assert_eq!(
            client.generate_url(),
            "http://localhost:9090/v1beta/models/gemini-2.0-pro:generateContent"
        );
    }

    #[test]
    fn resposta_da_api_concatena_as_partes_de_texto() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Resumo "},
                        {"text": "final."}
                    ]
                }
            }]
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        assert_eq!(text, "Resumo final.");
    }

    #[test]
    fn resposta_sem_candidatos_desserializa_vazia() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
