// src/models/crm.rs

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

// As quatro frentes comerciais do quadro. Uma empresa pode participar de
// várias ao mesmo tempo (conjunto, não valor único).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyCategory {
    #[serde(rename = "Captação")]
    Captacao,
    #[serde(rename = "Crédito")]
    Credito,
    #[serde(rename = "Serviços")]
    Servicos,
    #[serde(rename = "Adimplência")]
    Adimplencia,
}

impl CompanyCategory {
    // Ordem fixa das colunas do quadro.
    pub const ALL: [CompanyCategory; 4] = [
        CompanyCategory::Captacao,
        CompanyCategory::Credito,
        CompanyCategory::Servicos,
        CompanyCategory::Adimplencia,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompanyCategory::Captacao => "Captação",
            CompanyCategory::Credito => "Crédito",
            CompanyCategory::Servicos => "Serviços",
            CompanyCategory::Adimplencia => "Adimplência",
        }
    }
}

impl fmt::Display for CompanyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Etapas do funil. A ordem de declaração é a ordem das faixas no quadro
// e da contagem no dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompanyStatus {
    #[serde(rename = "Prospecção")]
    Prospeccao,
    #[serde(rename = "Fechamento")]
    Fechamento,
    #[serde(rename = "Concluído")]
    Concluido,
}

impl CompanyStatus {
    pub const ALL: [CompanyStatus; 3] = [
        CompanyStatus::Prospeccao,
        CompanyStatus::Fechamento,
        CompanyStatus::Concluido,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompanyStatus::Prospeccao => "Prospecção",
            CompanyStatus::Fechamento => "Fechamento",
            CompanyStatus::Concluido => "Concluído",
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- ENTIDADES ---

// Situação da empresa dentro de UMA categoria: etapa atual + valor da
// operação negociada ali. Só existe enquanto a categoria estiver selecionada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    pub status: CompanyStatus,
    pub operation_value: Decimal,
}

impl Default for CategoryDetail {
    // Valor usado ao marcar uma categoria nova no formulário.
    fn default() -> Self {
        Self {
            status: CompanyStatus::Prospeccao,
            operation_value: Decimal::ZERO,
        }
    }
}

// Registro imutável de contato. Nunca é editado nem removido depois de criado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: Uuid,
    pub contact_date: NaiveDate,
    pub notes: String,
    pub follow_up_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,

    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub industry: String,
    pub description: String,

    // Conjunto de categorias selecionadas (ordem de inserção, sem repetição).
    pub category: Vec<CompanyCategory>,

    // Invariante: há um detalhe para a categoria C se e somente se C está
    // em `category`. O CompanyStore reconcilia isso a cada mutação.
    pub category_details: HashMap<CompanyCategory, CategoryDetail>,

    // Histórico em ordem de criação, somente acréscimo.
    pub interactions: Vec<Interaction>,
}

impl Company {
    pub fn is_enrolled(&self, category: CompanyCategory) -> bool {
        self.category.contains(&category)
    }

    pub fn detail(&self, category: CompanyCategory) -> Option<&CategoryDetail> {
        self.category_details.get(&category)
    }

    // Detalhe visível apenas quando a categoria está de fato selecionada.
    // Um detalhe órfão (sem a categoria correspondente) é tratado como
    // "não participa", nunca como erro.
    pub fn enrolled_detail(&self, category: CompanyCategory) -> Option<&CategoryDetail> {
        if self.is_enrolled(category) {
            self.detail(category)
        } else {
            None
        }
    }
}

// --- PAYLOADS (entrada dos formulários) ---

// Atributos editáveis da empresa. O conjunto de categorias e seus detalhes
// são substituídos de uma vez só; id e interações ficam de fora.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    pub address: String,

    // O formulário não exige e-mail; fica livre.
    #[serde(default)]
    pub email: String,

    #[validate(length(min = 1, message = "required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "required"))]
    pub industry: String,

    #[validate(length(min = 1, message = "required"))]
    pub description: String,

    #[serde(default)]
    pub category: Vec<CompanyCategory>,

    #[serde(default)]
    pub category_details: HashMap<CompanyCategory, CategoryDetail>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InteractionPayload {
    pub contact_date: NaiveDate,

    #[validate(length(min = 1, message = "required"))]
    pub notes: String,

    pub follow_up_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categoria_serializa_com_rotulo_em_portugues() {
        let json = serde_json::to_string(&CompanyCategory::Captacao).unwrap();
        assert_eq!(json, "\"Captação\"");

        let parsed: CompanyCategory = serde_json::from_str("\"Adimplência\"").unwrap();
        assert_eq!(parsed, CompanyCategory::Adimplencia);
    }

    #[test]
    fn status_segue_a_ordem_do_funil() {
        assert!(CompanyStatus::Prospeccao < CompanyStatus::Fechamento);
        assert!(CompanyStatus::Fechamento < CompanyStatus::Concluido);
        assert_eq!(
            CompanyStatus::ALL,
            [
                CompanyStatus::Prospeccao,
                CompanyStatus::Fechamento,
                CompanyStatus::Concluido,
            ]
        );
    }

    #[test]
    fn detalhe_padrao_comeca_em_prospeccao_com_valor_zero() {
        let detail = CategoryDetail::default();
        assert_eq!(detail.status, CompanyStatus::Prospeccao);
        assert_eq!(detail.operation_value, Decimal::ZERO);
    }

    #[test]
    fn detalhe_orfao_conta_como_nao_participante() {
        let mut details = HashMap::new();
        details.insert(CompanyCategory::Credito, CategoryDetail::default());

        let company = Company {
            id: Uuid::new_v4(),
            name: "Sem Categoria".to_string(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            industry: String::new(),
            description: String::new(),
            category: vec![],
            category_details: details,
            interactions: vec![],
        };

        assert!(company.detail(CompanyCategory::Credito).is_some());
        assert!(company.enrolled_detail(CompanyCategory::Credito).is_none());
    }

    #[test]
    fn payload_sem_campos_obrigatorios_falha_na_validacao() {
        let payload = CompanyPayload::default();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["name", "address", "phone", "industry", "description"] {
            assert!(fields.contains_key(field), "campo {field} deveria ser obrigatório");
        }
        assert!(!fields.contains_key("email"));
    }
}
