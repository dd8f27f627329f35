// src/services/summary_service.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;

use crate::models::crm::Interaction;
use crate::services::gemini::SummarizationProvider;

// Textos fixos mostrados no lugar do resumo. Indisponibilidade do serviço
// externo vira informação na tela, nunca erro propagado.
pub const MSG_UNCONFIGURED: &str =
    "A chave da API Gemini não está configurada. Não é possível gerar o resumo.";
pub const MSG_NO_INTERACTIONS: &str = "Nenhuma interação registrada para resumir.";
pub const MSG_GATEWAY_FAILURE: &str =
    "Ocorreu um erro ao tentar gerar o resumo. Por favor, tente novamente.";

// Orquestra o resumo por IA do histórico de uma empresa: formata a
// transcrição, delega ao provedor e devolve o texto que vier, sem
// transformação. Enquanto uma chamada está no ar, a loja continua livre para
// outras mutações; só o resumo em si é serializado.
pub struct SummaryService {
    provider: Option<Arc<dyn SummarizationProvider>>,
    timeout: Duration,
    in_flight: AtomicBool,
    gate: Mutex<()>,
}

impl SummaryService {
    pub fn new(provider: Option<Arc<dyn SummarizationProvider>>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            in_flight: AtomicBool::new(false),
            gate: Mutex::new(()),
        }
    }

    // Permite à tela desabilitar o botão enquanto um resumo está pendente.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Nunca falha para quem chama: sem chave configurada, sem interações ou
    /// com erro na chamada remota, o retorno é um dos textos fixos.
    pub async fn summarize(&self, interactions: &[Interaction]) -> String {
        let Some(provider) = &self.provider else {
            return MSG_UNCONFIGURED.to_string();
        };

        if interactions.is_empty() {
            return MSG_NO_INTERACTIONS.to_string();
        }

        // Uma chamada por vez: quem chegar durante um resumo espera a vez.
        let _guard = self.gate.lock().await;
        self.in_flight.store(true, Ordering::SeqCst);

        let prompt = build_prompt(interactions);
        let result = tokio::time::timeout(self.timeout, provider.generate(&prompt)).await;

        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(Ok(text)) => text,
            Ok(Err(err)) => {
                tracing::error!("Erro ao chamar o serviço de resumo: {err}");
                MSG_GATEWAY_FAILURE.to_string()
            }
            Err(_) => {
                tracing::error!(
                    "Tempo limite de {}s excedido no serviço de resumo",
                    self.timeout.as_secs()
                );
                MSG_GATEWAY_FAILURE.to_string()
            }
        }
    }
}

// Transcrição determinística do histórico, na ordem de criação.
pub fn format_transcript(interactions: &[Interaction]) -> String {
    interactions
        .iter()
        .map(|interaction| {
            format!(
                "- Data do Contato: {}\n  Anotações: {}\n  Acompanhamento: {}",
                interaction.contact_date, interaction.notes, interaction.follow_up_date
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn build_prompt(interactions: &[Interaction]) -> String {
    format!(
        "Resuma as seguintes interações com um cliente de forma concisa e objetiva.\n\
         Destaque os pontos principais e o sentimento geral das conversas.\n\
         O resumo deve ser em português.\n\n\
         Histórico de Interações:\n{}",
        format_transcript(interactions)
    )
}
