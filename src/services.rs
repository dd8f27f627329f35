pub mod crm_service;
pub use crm_service::CrmService;
pub mod board_service;
pub use board_service::BoardService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod summary_service;
pub use summary_service::SummaryService;
pub mod gemini;
pub use gemini::{GeminiClient, GeminiConfig};
