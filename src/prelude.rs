pub use crate::config::{Config, ConfigError, NotifierConfig, RetrievalConfig};
pub use crate::dispatcher::{
    error::DispatchError,
    traits::ToolDispatcher,
    types::{Dispatcher, ToolCall},
};
pub use crate::error::{Error, Result};
pub use crate::notify::{
    slack::SlackNotifier,
    traits::TicketNotifier,
    SupportTicket,
    TicketCategory,
    TicketPriority,
    TicketReceipt,
};
pub use crate::retrieval::{http::HttpRetriever, traits::Retriever};
pub use crate::tools::{
    error::ToolError,
    result::ToolResult,
    schema::{ArgSchema, ToolSchema},
    traits::Tool,
    KnowledgeSearchTool,
    SupportTicketTool,
};
