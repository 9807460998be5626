pub mod traits;
pub mod schema;
pub mod result;
pub mod validate;
pub mod error;
pub mod knowledge;
pub mod ticket;

pub use knowledge::KnowledgeSearchTool;
pub use ticket::SupportTicketTool;
