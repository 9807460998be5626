use chrono::Utc;
use tracing::{debug, error, info};

use crate::config::NotifierConfig;
use super::{
    blocks::build_ticket_message,
    error::NotifyError,
    id::{format_timestamp, TicketIdGenerator},
    traits::TicketNotifier,
    NotifyResult,
    SupportTicket,
    TicketReceipt,
};

/// Posts new tickets to a Slack incoming webhook.
#[derive(Debug)]
pub struct SlackNotifier {
    pub(crate) client: reqwest::Client,
    pub(crate) webhook_url: String,
    pub(crate) ids: TicketIdGenerator,
}

impl SlackNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
            ids: TicketIdGenerator::default(),
        }
    }

    pub fn from_config(webhook_url: impl Into<String>, config: &NotifierConfig) -> Self {
        Self::new(webhook_url).with_ticket_prefix(config.ticket_prefix.clone())
    }

    /// Use a different ticket id prefix.
    pub fn with_ticket_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ids = TicketIdGenerator::new(prefix);
        self
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait::async_trait]
impl TicketNotifier for SlackNotifier {
    async fn create_ticket(&self, ticket: &SupportTicket) -> NotifyResult<TicketReceipt> {
        let now = Utc::now();
        let ticket_id = self.ids.next_id(now);
        let timestamp = format_timestamp(now);
        info!(
            ticket_id = %ticket_id,
            priority = %ticket.priority,
            category = %ticket.category,
            "raising support ticket"
        );

        let message = build_ticket_message(ticket, &ticket_id, &timestamp);
        let body = serde_json::to_vec(&message)?;
        debug!(ticket_id = %ticket_id, bytes = body.len(), "notification payload built");

        let response = self
            .client
            .post(&self.webhook_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(NotifyError::transport)?;

        let status = response.status();
        if !status.is_success() {
            error!(ticket_id = %ticket_id, status = status.as_u16(), "ticket notification rejected");
            return Err(NotifyError::Delivery { status: status.as_u16() });
        }

        info!(ticket_id = %ticket_id, "support ticket delivered");
        Ok(TicketReceipt { ticket_id, timestamp })
    }
}
