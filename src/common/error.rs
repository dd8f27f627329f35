use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Empresa não encontrada")]
    CompanyNotFound,

    // O serviço de resumo nunca deve derrubar a tela: quem chama converte
    // estas variantes em texto informativo.
    #[error("Serviço de resumo não configurado")]
    GatewayUnavailable,

    #[error("Tempo limite excedido ao chamar o serviço de resumo")]
    GatewayTimeout,

    #[error("Erro ao chamar o serviço de resumo: {0}")]
    GatewayError(String),
}
