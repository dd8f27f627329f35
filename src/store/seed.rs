// src/store/seed.rs

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::crm::{
    CategoryDetail, Company, CompanyCategory, CompanyStatus, Interaction,
};

// Amostra fixa carregada na inicialização. Sem camada de persistência, é ela
// que dá conteúdo ao quadro e ao dashboard em uma instância nova; uma
// implantação real trocaria isto por uma fonte externa.

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("data da amostra inicial inválida")
}

pub fn bootstrap_companies() -> Vec<Company> {
    let inovatech = Company {
        id: Uuid::new_v4(),
        name: "InovaTech Soluções".to_string(),
        address: "Rua das Inovações, 123, São Paulo, SP".to_string(),
        email: "contato@inovatech.com".to_string(),
        phone: "(11) 98765-4321".to_string(),
        industry: "Tecnologia".to_string(),
        description: "Desenvolvimento de software e soluções em nuvem.".to_string(),
        category: vec![CompanyCategory::Captacao],
        category_details: HashMap::from([(
            CompanyCategory::Captacao,
            CategoryDetail {
                status: CompanyStatus::Prospeccao,
                operation_value: Decimal::from(50_000),
            },
        )]),
        interactions: vec![Interaction {
            id: Uuid::new_v4(),
            contact_date: date(2024, 7, 10),
            notes: "Primeiro contato, apresentamos a proposta.".to_string(),
            follow_up_date: date(2024, 7, 17),
        }],
    };

    let construbem = Company {
        id: Uuid::new_v4(),
        name: "ConstruBem".to_string(),
        address: "Avenida das Obras, 456, Rio de Janeiro, RJ".to_string(),
        email: "orcamento@construbem.com".to_string(),
        phone: "(21) 91234-5678".to_string(),
        industry: "Construção Civil".to_string(),
        description: "Construções e reformas residenciais e comerciais.".to_string(),
        category: vec![CompanyCategory::Credito],
        category_details: HashMap::from([(
            CompanyCategory::Credito,
            CategoryDetail {
                status: CompanyStatus::Fechamento,
                operation_value: Decimal::from(250_000),
            },
        )]),
        interactions: vec![],
    };

    let agroforte = Company {
        id: Uuid::new_v4(),
        name: "AgroForte".to_string(),
        address: "Rodovia dos Grãos, 789, Cuiabá, MT".to_string(),
        email: "vendas@agroforte.com.br".to_string(),
        phone: "(65) 99988-7766".to_string(),
        industry: "Agronegócio".to_string(),
        description: "Distribuidor de insumos agrícolas e sementes.".to_string(),
        category: vec![CompanyCategory::Servicos],
        category_details: HashMap::from([(
            CompanyCategory::Servicos,
            CategoryDetail {
                status: CompanyStatus::Concluido,
                operation_value: Decimal::from(120_000),
            },
        )]),
        interactions: vec![
            Interaction {
                id: Uuid::new_v4(),
                contact_date: date(2024, 6, 20),
                notes: "Fechamento do contrato de fornecimento.".to_string(),
                follow_up_date: date(2024, 8, 20),
            },
            Interaction {
                id: Uuid::new_v4(),
                contact_date: date(2024, 7, 15),
                notes: "Acompanhamento da primeira entrega.".to_string(),
                follow_up_date: date(2024, 7, 22),
            },
        ],
    };

    vec![inovatech, construbem, agroforte]
}
