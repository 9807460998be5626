use std::sync::Arc;
use serde_json::Value;

use crate::notify::{traits::TicketNotifier, SupportTicket};
use super::{
    error::ToolError,
    result::ToolResult,
    traits::{ArgSchema, Tool, ToolSchema},
};

pub const TOOL_NAME: &str = "raise_support_ticket";

const TICKET_FAILED: &str = "Failed to create support ticket. Please try again or contact support directly.";

fn ticket_schema() -> ToolSchema {
    ToolSchema::new(
        TOOL_NAME,
        "Create a support ticket when you cannot resolve the customer's issue or when they request human assistance. This will notify the Zocket support team via Slack. Always collect the required customer information before calling this function.",
        vec![
            ArgSchema::required("customer_name", "string", "Customer's first name"),
            ArgSchema::required("customer_lastname", "string", "Customer's last name"),
            ArgSchema::required("company_name", "string", "Customer's company name"),
            ArgSchema::optional("email", "string", "Customer's email address (optional but recommended)"),
            ArgSchema::optional("phone", "string", "Customer's phone number (optional)"),
            ArgSchema::required("issue_summary", "string", "Brief summary of the issue (1-2 sentences)"),
            ArgSchema::required(
                "issue_details",
                "string",
                "Detailed description of the issue, including steps taken and any error messages",
            ),
            ArgSchema::required(
                "priority",
                "string",
                "Priority level based on business impact: low (general questions), medium (feature issues), high (blocking workflows), urgent (system down)",
            ),
            ArgSchema::required(
                "category",
                "string",
                "Category of the issue to help route to the right team: technical, billing, feature_request, bug_report, general",
            ),
        ],
    )
}

/// Hands the conversation over to the support team through a [`TicketNotifier`].
pub struct SupportTicketTool {
    notifier: Arc<dyn TicketNotifier>,
    schema: ToolSchema,
}

impl SupportTicketTool {
    pub fn new(notifier: Arc<dyn TicketNotifier>) -> Self {
        Self {
            notifier,
            schema: ticket_schema(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for SupportTicketTool {
    fn schema(&self) -> &ToolSchema {
        &self.schema
    }

    fn failure(&self, err: &ToolError) -> ToolResult {
        ToolResult::failure(TICKET_FAILED, TICKET_FAILED).with_details(err.to_string())
    }

    async fn run(&self, input: Value) -> Result<ToolResult, ToolError> {
        let ticket: SupportTicket = serde_json::from_value(input).map_err(ToolError::params)?;
        let receipt = self.notifier.create_ticket(&ticket).await?;
        Ok(ToolResult::success(format!(
            "Support ticket {} has been created successfully! Our team will review it and get back to you soon. You should receive a follow-up within 24 hours.",
            receipt.ticket_id
        ))
        .with("ticket_id", receipt.ticket_id)
        .with("timestamp", receipt.timestamp))
    }
}
