//src/main.rs

use painel_crm::config::AppState;
use painel_crm::models::crm::{CompanyCategory, CompanyStatus};

// Passeio guiado pelo núcleo: sobe o estado com a amostra inicial, mostra o
// quadro, simula um arrasto, agrega o dashboard e pede um resumo por IA.
#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let mut app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    // --- QUADRO ---
    let board = app_state.board_service.project(app_state.crm_service.companies());
    for column in &board.columns {
        tracing::info!("📋 {} — {} empresa(s)", column.category, column.total);
        for cell in &column.cells {
            for company in &cell.companies {
                tracing::info!("     [{}] {}", cell.status, company.name);
            }
        }
    }

    // --- ARRASTO ---
    // A primeira empresa da amostra avança para Fechamento em Captação.
    let first_id = app_state
        .crm_service
        .companies()
        .first()
        .expect("amostra inicial vazia")
        .id;
    if let Some(company) = app_state.crm_service.move_company(
        first_id,
        CompanyCategory::Captacao,
        CompanyStatus::Fechamento,
    ) {
        tracing::info!(
            "🚀 {} movida para {} em {}",
            company.name,
            CompanyStatus::Fechamento,
            CompanyCategory::Captacao
        );
    }

    // --- DASHBOARD ---
    let summary = app_state.dashboard_service.summary(app_state.crm_service.companies());
    tracing::info!("💰 Valor total das operações: R$ {}", summary.total_value);
    for category in &summary.categories {
        tracing::info!(
            "     {}: R$ {} ({} em prospecção, {} em fechamento, {} concluídas)",
            category.category,
            category.total_value,
            category.count_for(CompanyStatus::Prospeccao),
            category.count_for(CompanyStatus::Fechamento),
            category.count_for(CompanyStatus::Concluido)
        );
    }
    for recent in &summary.recent_interactions {
        tracing::info!(
            "     🕓 {} — {}: {}",
            recent.interaction.contact_date,
            recent.company_name,
            recent.interaction.notes
        );
    }

    // --- RESUMO POR IA ---
    // Sem GEMINI_API_KEY configurada, sai o texto informativo padrão.
    let interactions = app_state
        .crm_service
        .companies()
        .first()
        .expect("amostra inicial vazia")
        .interactions
        .clone();
    let resumo = app_state.summary_service.summarize(&interactions).await;
    tracing::info!("🤖 Resumo: {resumo}");
}
