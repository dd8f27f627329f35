// src/config.rs

use std::{env, sync::Arc, time::Duration};

use crate::services::{
    BoardService, CrmService, DashboardService, SummaryService,
    gemini::{DEFAULT_GEMINI_MODEL, GeminiClient, GeminiConfig, SummarizationProvider},
};
use crate::store::CompanyStore;

const DEFAULT_SUMMARY_TIMEOUT_SECS: u64 = 30;

// O estado compartilhado que será acessível em toda a aplicação
pub struct AppState {
    pub crm_service: CrmService,
    pub board_service: BoardService,
    pub dashboard_service: DashboardService,
    pub summary_service: SummaryService,
}

impl AppState {
    // Carrega as configurações do ambiente e monta os serviços.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let timeout = match env::var("SUMMARY_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse()?),
            Err(_) => Duration::from_secs(DEFAULT_SUMMARY_TIMEOUT_SECS),
        };

        // Sem a chave, o recurso de resumo fica desabilitado mas o resto da
        // aplicação sobe normalmente.
        let provider: Option<Arc<dyn SummarizationProvider>> = match GeminiConfig::from_env() {
            Ok(config) => {
                let model =
                    env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
                let config = config.with_model(model).with_timeout(timeout);
                Some(Arc::new(GeminiClient::new(config)))
            }
            Err(_) => {
                tracing::warn!(
                    "Chave da API Gemini não encontrada. O recurso de resumo ficará desabilitado."
                );
                None
            }
        };

        let crm_service = CrmService::new(CompanyStore::seeded());
        tracing::info!(
            "✅ Base em memória iniciada com {} empresas de exemplo.",
            crm_service.companies().len()
        );

        Ok(Self {
            crm_service,
            board_service: BoardService::new(),
            dashboard_service: DashboardService::new(),
            summary_service: SummaryService::new(provider, timeout),
        })
    }
}
