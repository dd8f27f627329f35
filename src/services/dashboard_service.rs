// src/services/dashboard_service.rs

use rust_decimal::Decimal;

use crate::models::{
    crm::{Company, CompanyCategory, CompanyStatus},
    dashboard::{CategorySummary, DashboardSummary, RecentInteraction, StatusCount},
};

// Quantas interações entram no feed de "Interações Recentes".
pub const RECENT_INTERACTIONS_LIMIT: usize = 5;

// Agrega totais e contagens a partir da lista de empresas. Assim como a
// projeção do quadro, é função total recalculada a cada leitura.
#[derive(Debug, Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub fn summary(&self, companies: &[Company]) -> DashboardSummary {
        let mut total_value = Decimal::ZERO;

        let categories = CompanyCategory::ALL
            .iter()
            .map(|&category| {
                let mut category_total = Decimal::ZERO;
                let mut status_counts: Vec<StatusCount> = CompanyStatus::ALL
                    .iter()
                    .map(|&status| StatusCount { status, count: 0 })
                    .collect();

                for company in companies {
                    // Categoria marcada sem detalhe não soma nem conta.
                    let Some(detail) = company.enrolled_detail(category) else {
                        continue;
                    };

                    category_total += detail.operation_value;
                    if let Some(entry) =
                        status_counts.iter_mut().find(|e| e.status == detail.status)
                    {
                        entry.count += 1;
                    }
                }

                // Cada participação soma no total geral: empresa em duas
                // categorias contribui duas vezes, de propósito.
                total_value += category_total;

                CategorySummary { category, total_value: category_total, status_counts }
            })
            .collect();

        DashboardSummary {
            total_value,
            categories,
            recent_interactions: self.recent_interactions(companies),
        }
    }

    // Feed achatado de todas as empresas, mais recente primeiro. Empates de
    // data mantêm a ordem original (ordem da loja, depois ordem de criação).
    fn recent_interactions(&self, companies: &[Company]) -> Vec<RecentInteraction> {
        let mut feed: Vec<RecentInteraction> = companies
            .iter()
            .flat_map(|company| {
                company.interactions.iter().map(|interaction| RecentInteraction {
                    company_id: company.id,
                    company_name: company.name.clone(),
                    interaction: interaction.clone(),
                })
            })
            .collect();

        feed.sort_by(|a, b| b.interaction.contact_date.cmp(&a.interaction.contact_date));
        feed.truncate(RECENT_INTERACTIONS_LIMIT);
        feed
    }

    // Listagem somente-leitura do clique em uma etapa de um card: exatamente
    // as empresas daquela categoria naquela etapa.
    pub fn drill_down(
        &self,
        companies: &[Company],
        category: CompanyCategory,
        status: CompanyStatus,
    ) -> Vec<Company> {
        companies
            .iter()
            .filter(|company| {
                company
                    .enrolled_detail(category)
                    .is_some_and(|detail| detail.status == status)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::models::crm::{CategoryDetail, Interaction};

    fn company(name: &str, enrollments: Vec<(CompanyCategory, CompanyStatus, i64)>) -> Company {
        Company {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            industry: String::new(),
            description: String::new(),
            category: enrollments.iter().map(|(cat, _, _)| *cat).collect(),
            category_details: enrollments
                .into_iter()
                .map(|(cat, status, value)| {
                    (cat, CategoryDetail { status, operation_value: Decimal::from(value) })
                })
                .collect(),
            interactions: vec![],
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn interaction(contact: NaiveDate, notes: &str) -> Interaction {
        Interaction {
            id: Uuid::new_v4(),
            contact_date: contact,
            notes: notes.to_string(),
            follow_up_date: contact,
        }
    }

    #[test]
    fn total_da_categoria_soma_os_valores_de_operacao() {
        let companies = vec![
            company("A", vec![(CompanyCategory::Credito, CompanyStatus::Prospeccao, 100)]),
            company("B", vec![(CompanyCategory::Credito, CompanyStatus::Fechamento, 150)]),
        ];

        let summary = DashboardService::new().summary(&companies);

        let credito = summary.category(CompanyCategory::Credito).unwrap();
        assert_eq!(credito.total_value, Decimal::from(250));
        assert_eq!(summary.total_value, Decimal::from(250));
        assert_eq!(credito.count_for(CompanyStatus::Prospeccao), 1);
        assert_eq!(credito.count_for(CompanyStatus::Fechamento), 1);
        assert_eq!(credito.count_for(CompanyStatus::Concluido), 0);
    }

    #[test]
    fn empresa_em_duas_categorias_conta_duas_vezes_no_total_geral() {
        let companies = vec![company(
            "Dupla",
            vec![
                (CompanyCategory::Captacao, CompanyStatus::Prospeccao, 50),
                (CompanyCategory::Credito, CompanyStatus::Prospeccao, 75),
            ],
        )];

        let summary = DashboardService::new().summary(&companies);

        assert_eq!(
            summary.category(CompanyCategory::Captacao).unwrap().total_value,
            Decimal::from(50)
        );
        assert_eq!(
            summary.category(CompanyCategory::Credito).unwrap().total_value,
            Decimal::from(75)
        );
        assert_eq!(summary.total_value, Decimal::from(125));
    }

    #[test]
    fn categoria_marcada_sem_detalhe_nao_soma_nem_conta() {
        let mut broken = company("Sem Detalhe", vec![]);
        broken.category.push(CompanyCategory::Servicos);

        let summary = DashboardService::new().summary(&[broken]);

        let servicos = summary.category(CompanyCategory::Servicos).unwrap();
        assert_eq!(servicos.total_value, Decimal::ZERO);
        assert!(servicos.status_counts.iter().all(|entry| entry.count == 0));
    }

    #[test]
    fn feed_ordena_da_mais_recente_para_a_mais_antiga() {
        let mut a = company("A", vec![]);
        a.interactions.push(interaction(date(2024, 6, 20), "antiga"));
        let mut b = company("B", vec![]);
        b.interactions.push(interaction(date(2024, 7, 15), "recente"));
        let mut c = company("C", vec![]);
        c.interactions.push(interaction(date(2024, 7, 10), "meio"));

        let summary = DashboardService::new().summary(&[a, b, c]);

        let dates: Vec<NaiveDate> = summary
            .recent_interactions
            .iter()
            .map(|entry| entry.interaction.contact_date)
            .collect();
        assert_eq!(dates, vec![date(2024, 7, 15), date(2024, 7, 10), date(2024, 6, 20)]);
        assert_eq!(summary.recent_interactions[0].company_name, "B");
    }

    #[test]
    fn empate_de_data_mantem_a_ordem_original() {
        let mut a = company("A", vec![]);
        a.interactions.push(interaction(date(2024, 7, 1), "primeira da empresa A"));
        a.interactions.push(interaction(date(2024, 7, 1), "segunda da empresa A"));
        let mut b = company("B", vec![]);
        b.interactions.push(interaction(date(2024, 7, 1), "da empresa B"));

        let summary = DashboardService::new().summary(&[a, b]);

        let notes: Vec<&str> = summary
            .recent_interactions
            .iter()
            .map(|entry| entry.interaction.notes.as_str())
            .collect();
        assert_eq!(
            notes,
            vec!["primeira da empresa A", "segunda da empresa A", "da empresa B"]
        );
    }

    #[test]
    fn feed_corta_em_cinco_interacoes() {
        let mut a = company("A", vec![]);
        for day in 1..=7 {
            a.interactions.push(interaction(date(2024, 7, day), "contato"));
        }

        let summary = DashboardService::new().summary(&[a]);

        assert_eq!(summary.recent_interactions.len(), RECENT_INTERACTIONS_LIMIT);
        assert_eq!(
            summary.recent_interactions[0].interaction.contact_date,
            date(2024, 7, 7)
        );
    }

    #[test]
    fn drill_down_retorna_exatamente_a_categoria_e_etapa_clicadas() {
        let in_filter =
            company("Dentro", vec![(CompanyCategory::Captacao, CompanyStatus::Prospeccao, 10)]);
        let other_status =
            company("Outra Etapa", vec![(CompanyCategory::Captacao, CompanyStatus::Concluido, 10)]);
        let other_category =
            company("Outra Categoria", vec![(CompanyCategory::Credito, CompanyStatus::Prospeccao, 10)]);

        // Detalhe órfão de Captação: não participa, não pode aparecer.
        let mut stray = company("Órfã", vec![]);
        stray.category_details.insert(
            CompanyCategory::Captacao,
            CategoryDetail {
                status: CompanyStatus::Prospeccao,
                operation_value: Decimal::ZERO,
            },
        );

        let companies = vec![in_filter, other_status, other_category, stray];
        let result = DashboardService::new().drill_down(
            &companies,
            CompanyCategory::Captacao,
            CompanyStatus::Prospeccao,
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Dentro");
    }
}
