use super::{NotifyResult, SupportTicket, TicketReceipt};

/// Delivers new support tickets to the human support team.
#[async_trait::async_trait]
pub trait TicketNotifier: Send + Sync {
    /// Assign an id to `ticket` and deliver it. Exactly one delivery attempt is made.
    async fn create_ticket(&self, ticket: &SupportTicket) -> NotifyResult<TicketReceipt>;
}
