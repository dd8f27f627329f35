// src/models/board.rs

use serde::Serialize;

use crate::models::crm::{Company, CompanyCategory, CompanyStatus};

// Projeção do quadro: uma coluna por categoria, uma faixa por status.
// É derivada da lista de empresas a cada leitura e nunca é mutada.

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardCell {
    pub status: CompanyStatus,
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    pub category: CompanyCategory,

    // Contador do cabeçalho da coluna: empresas com a categoria selecionada,
    // independente da faixa em que aparecem.
    pub total: usize,

    pub cells: Vec<BoardCell>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub columns: Vec<BoardColumn>,
}

impl BoardView {
    pub fn column(&self, category: CompanyCategory) -> Option<&BoardColumn> {
        self.columns.iter().find(|c| c.category == category)
    }

    pub fn cell(&self, category: CompanyCategory, status: CompanyStatus) -> &[Company] {
        self.column(category)
            .and_then(|column| column.cells.iter().find(|cell| cell.status == status))
            .map(|cell| cell.companies.as_slice())
            .unwrap_or(&[])
    }
}
