// src/store/company_store.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::crm::{
        CategoryDetail, Company, CompanyCategory, CompanyPayload, CompanyStatus, Interaction,
        InteractionPayload,
    },
    store::seed,
};

// Dono único da lista canônica de empresas. Toda mutação passa por aqui e
// sai com o invariante categoria/detalhe garantido; as projeções (quadro,
// dashboard) apenas leem `companies()`.
#[derive(Debug, Default)]
pub struct CompanyStore {
    companies: Vec<Company>,
}

impl CompanyStore {
    pub fn new() -> Self {
        Self { companies: Vec::new() }
    }

    // Carga inicial fixa usada na inicialização (sem persistência, os dados
    // vivem apenas enquanto o processo vive).
    pub fn seeded() -> Self {
        Self { companies: seed::bootstrap_companies() }
    }

    // =========================================================================
    //  LEITURA
    // =========================================================================

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn get(&self, id: Uuid) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    // =========================================================================
    //  MUTAÇÕES
    // =========================================================================

    /// Cria a empresa com id novo e histórico vazio; categorias e detalhes
    /// vêm do formulário e são reconciliados antes de entrar na lista.
    pub fn create_company(&mut self, payload: CompanyPayload) -> Company {
        let mut company = Company {
            id: Uuid::new_v4(),
            name: payload.name,
            address: payload.address,
            email: payload.email,
            phone: payload.phone,
            industry: payload.industry,
            description: payload.description,
            category: payload.category,
            category_details: payload.category_details,
            interactions: Vec::new(),
        };
        reconcile_enrollment(&mut company);

        self.companies.push(company.clone());
        company
    }

    /// Substitui os atributos editáveis e o conjunto de categorias + detalhes
    /// de uma vez. Id e interações não mudam por este caminho. Desmarcar uma
    /// categoria descarta o detalhe dela na hora, sem retenção.
    pub fn update_company(
        &mut self,
        id: Uuid,
        payload: CompanyPayload,
    ) -> Result<Company, AppError> {
        let company = self
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::CompanyNotFound)?;

        company.name = payload.name;
        company.address = payload.address;
        company.email = payload.email;
        company.phone = payload.phone;
        company.industry = payload.industry;
        company.description = payload.description;
        company.category = payload.category;
        company.category_details = payload.category_details;
        reconcile_enrollment(company);

        Ok(company.clone())
    }

    /// Acrescenta uma interação ao fim do histórico com id próprio. Entradas
    /// anteriores nunca são alteradas.
    pub fn add_interaction(
        &mut self,
        company_id: Uuid,
        payload: InteractionPayload,
    ) -> Result<Company, AppError> {
        let company = self
            .companies
            .iter_mut()
            .find(|c| c.id == company_id)
            .ok_or(AppError::CompanyNotFound)?;

        company.interactions.push(Interaction {
            id: Uuid::new_v4(),
            contact_date: payload.contact_date,
            notes: payload.notes,
            follow_up_date: payload.follow_up_date,
        });

        Ok(company.clone())
    }

    /// Transição disparada pelo arrasto no quadro. Devolve `None` quando nada
    /// mudou: empresa desconhecida, ou categoria que a empresa nunca marcou —
    /// entrar numa categoria nova é papel do formulário de edição, não do
    /// arrasto. Os detalhes das demais categorias ficam intactos.
    pub fn move_company(
        &mut self,
        company_id: Uuid,
        target_category: CompanyCategory,
        target_status: CompanyStatus,
    ) -> Option<Company> {
        let Some(company) = self.companies.iter_mut().find(|c| c.id == company_id) else {
            tracing::debug!(%company_id, "movimento ignorado: empresa desconhecida");
            return None;
        };

        if let Some(detail) = company.category_details.get_mut(&target_category) {
            // Categoria já detalhada: só a etapa muda, o valor é preservado.
            detail.status = target_status;
        } else if company.category.contains(&target_category) {
            // Categoria marcada mas sem detalhe: recria o detalhe com valor zero.
            company.category_details.insert(
                target_category,
                CategoryDetail { status: target_status, operation_value: Decimal::ZERO },
            );
        } else {
            tracing::debug!(
                %company_id,
                categoria = %target_category,
                "movimento ignorado: categoria não selecionada para a empresa"
            );
            return None;
        }

        Some(company.clone())
    }
}

// Reconciliação do invariante em cada ponto de mutação, não só na criação:
// - a lista de categorias vira um conjunto (sem repetição, ordem preservada);
// - detalhes de categorias desmarcadas são descartados;
// - categorias marcadas sem detalhe ganham o detalhe padrão;
// - valores de operação negativos são zerados.
fn reconcile_enrollment(company: &mut Company) {
    let mut seen: Vec<CompanyCategory> = Vec::with_capacity(company.category.len());
    company.category.retain(|cat| {
        if seen.contains(cat) {
            false
        } else {
            seen.push(*cat);
            true
        }
    });

    let category = &company.category;
    company.category_details.retain(|cat, _| category.contains(cat));

    for cat in &company.category {
        company.category_details.entry(*cat).or_default();
    }

    for detail in company.category_details.values_mut() {
        if detail.operation_value < Decimal::ZERO {
            detail.operation_value = Decimal::ZERO;
        }
    }
}
