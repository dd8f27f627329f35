// src/services/crm_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    models::crm::{Company, CompanyCategory, CompanyPayload, CompanyStatus, InteractionPayload},
    store::CompanyStore,
};

// Pontos de entrada das ações da interface. Valida o formulário antes de
// tocar na loja de dados e devolve a entidade atualizada, para a tela
// renderizar sem buscar de novo.
#[derive(Debug, Default)]
pub struct CrmService {
    store: CompanyStore,
}

impl CrmService {
    pub fn new(store: CompanyStore) -> Self {
        Self { store }
    }

    // =========================================================================
    //  EMPRESAS
    // =========================================================================

    pub fn create_company(&mut self, payload: CompanyPayload) -> Result<Company, AppError> {
        payload.validate()?;
        Ok(self.store.create_company(payload))
    }

    pub fn update_company(
        &mut self,
        id: Uuid,
        payload: CompanyPayload,
    ) -> Result<Company, AppError> {
        payload.validate()?;
        self.store.update_company(id, payload)
    }

    // O arrasto no quadro não passa por formulário: sem validação e sem erro,
    // `None` significa que nada mudou.
    pub fn move_company(
        &mut self,
        company_id: Uuid,
        target_category: CompanyCategory,
        target_status: CompanyStatus,
    ) -> Option<Company> {
        self.store.move_company(company_id, target_category, target_status)
    }

    // =========================================================================
    //  INTERAÇÕES
    // =========================================================================

    pub fn add_interaction(
        &mut self,
        company_id: Uuid,
        payload: InteractionPayload,
    ) -> Result<Company, AppError> {
        payload.validate()?;
        self.store.add_interaction(company_id, payload)
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    pub fn companies(&self) -> &[Company] {
        self.store.companies()
    }

    pub fn get_company(&self, id: Uuid) -> Option<&Company> {
        self.store.get(id)
    }
}
