pub mod traits;
pub mod slack;
pub mod blocks;
pub mod id;
pub mod error;

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// Business impact of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TicketPriority {
    Low,      // general questions
    Medium,   // feature issues
    High,     // blocking workflows
    Urgent,   // system down
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }

    /// Label shown to the support team, e.g. `URGENT`.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "urgent" => Ok(TicketPriority::Urgent),
            other => Err(format!(
                "unknown priority '{}', expected one of: low, medium, high, urgent",
                other
            )),
        }
    }
}

impl TryFrom<String> for TicketPriority {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing category of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TicketCategory {
    Technical,
    Billing,
    FeatureRequest,
    BugReport,
    General,
}

impl TicketCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Technical => "technical",
            TicketCategory::Billing => "billing",
            TicketCategory::FeatureRequest => "feature_request",
            TicketCategory::BugReport => "bug_report",
            TicketCategory::General => "general",
        }
    }

    /// Label shown to the support team, e.g. `BUG REPORT`.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl FromStr for TicketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "technical" => Ok(TicketCategory::Technical),
            "billing" => Ok(TicketCategory::Billing),
            "feature_request" => Ok(TicketCategory::FeatureRequest),
            "bug_report" => Ok(TicketCategory::BugReport),
            "general" => Ok(TicketCategory::General),
            _ => Err(format!(
                "unknown category '{}', expected one of: technical, billing, feature_request, bug_report, general",
                s.trim()
            )),
        }
    }
}

impl TryFrom<String> for TicketCategory {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer issue to hand over to the human support team.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupportTicket {
    pub customer_name: String,
    pub customer_lastname: String,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub issue_summary: String,
    pub issue_details: String,
    pub priority: TicketPriority,
    pub category: TicketCategory,
}

impl SupportTicket {
    pub fn customer_full_name(&self) -> String {
        format!("{} {}", self.customer_name, self.customer_lastname)
    }

    /// Email, if one was given and is not blank.
    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    /// Phone number, if one was given and is not blank.
    pub fn phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Proof that a ticket notification was delivered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketReceipt {
    pub ticket_id: String,
    /// RFC 3339 UTC creation time.
    pub timestamp: String,
}

/// Result type for notification operations.
pub type NotifyResult<T> = std::result::Result<T, error::NotifyError>;
