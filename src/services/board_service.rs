// src/services/board_service.rs

use crate::models::{
    board::{BoardCell, BoardColumn, BoardView},
    crm::{Company, CompanyCategory, CompanyStatus},
};

// Projeta a lista de empresas na grade categoria × status. Função total:
// recalculada a cada leitura, nunca falha e nunca mexe na loja.
#[derive(Debug, Clone, Default)]
pub struct BoardService;

impl BoardService {
    pub fn new() -> Self {
        Self
    }

    pub fn project(&self, companies: &[Company]) -> BoardView {
        let columns = CompanyCategory::ALL
            .iter()
            .map(|&category| {
                // O cabeçalho conta quem marcou a categoria, mesmo que o
                // detalhe esteja faltando e a empresa não caia em faixa nenhuma.
                let enrolled: Vec<&Company> =
                    companies.iter().filter(|c| c.is_enrolled(category)).collect();

                let cells = CompanyStatus::ALL
                    .iter()
                    .map(|&status| BoardCell {
                        status,
                        companies: enrolled
                            .iter()
                            .filter(|c| {
                                c.enrolled_detail(category)
                                    .is_some_and(|detail| detail.status == status)
                            })
                            .map(|c| (*c).clone())
                            .collect(),
                    })
                    .collect();

                BoardColumn { category, total: enrolled.len(), cells }
            })
            .collect();

        BoardView { columns }
    }
}
