// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::crm::{CompanyCategory, CompanyStatus, Interaction};

// 1. Cards por categoria
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: CompanyStatus,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: CompanyCategory,
    pub total_value: Decimal,

    // Sempre as três etapas, zeradas quando não há ninguém nelas.
    pub status_counts: Vec<StatusCount>,
}

impl CategorySummary {
    pub fn count_for(&self, status: CompanyStatus) -> usize {
        self.status_counts
            .iter()
            .find(|entry| entry.status == status)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

// 2. Feed de interações recentes, anotado com a empresa dona
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentInteraction {
    pub company_id: Uuid,
    pub company_name: String,
    pub interaction: Interaction,
}

// 3. Resumo geral
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    // Soma sobre cada par (empresa, categoria selecionada): uma empresa em
    // duas categorias entra duas vezes, pois cada engajamento é independente.
    pub total_value: Decimal,

    pub categories: Vec<CategorySummary>,
    pub recent_interactions: Vec<RecentInteraction>,
}

impl DashboardSummary {
    pub fn category(&self, category: CompanyCategory) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }
}
