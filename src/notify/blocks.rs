use serde_json::{json, Value};

use super::SupportTicket;

fn mrkdwn(text: String) -> Value {
    json!({ "type": "mrkdwn", "text": text })
}

/// Build the Block Kit message announcing a new ticket.
///
/// Layout: header, summary fields (customer, company, priority, category),
/// issue summary, issue details, an optional contact section holding only
/// the contact fields that were provided, and a footer marking the ticket as
/// raised by the assistant.
pub fn build_ticket_message(ticket: &SupportTicket, ticket_id: &str, timestamp: &str) -> Value {
    let mut blocks = vec![
        json!({
            "type": "header",
            "text": {
                "type": "plain_text",
                "text": format!("🎫 Support Ticket: {}", ticket_id)
            }
        }),
        json!({
            "type": "section",
            "fields": [
                mrkdwn(format!("*Customer:* {}", ticket.customer_full_name())),
                mrkdwn(format!("*Company:* {}", ticket.company_name)),
                mrkdwn(format!("*Priority:* {}", ticket.priority.label())),
                mrkdwn(format!("*Category:* {}", ticket.category.label())),
            ]
        }),
        json!({
            "type": "section",
            "text": mrkdwn(format!("*Issue Summary:*\n{}", ticket.issue_summary))
        }),
        json!({
            "type": "section",
            "text": mrkdwn(format!("*Issue Details:*\n{}", ticket.issue_details))
        }),
    ];

    let mut contact = Vec::new();
    if let Some(email) = ticket.email() {
        contact.push(mrkdwn(format!("*Email:* {}", email)));
    }
    if let Some(phone) = ticket.phone() {
        contact.push(mrkdwn(format!("*Phone:* {}", phone)));
    }
    if !contact.is_empty() {
        blocks.push(json!({ "type": "section", "fields": contact }));
    }

    blocks.push(json!({
        "type": "context",
        "elements": [mrkdwn(format!("📅 Created: {} | 🤖 Via AI Agent", timestamp))]
    }));

    json!({
        "text": format!("🎫 New Support Ticket - {}", ticket_id),
        "blocks": blocks,
    })
}
