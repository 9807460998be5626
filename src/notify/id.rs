use std::sync::atomic::{AtomicI64, Ordering};
use chrono::{DateTime, SecondsFormat, Utc};

/// Prefix used for ticket ids when none is configured.
pub const DEFAULT_TICKET_PREFIX: &str = "ZOCKET";

/// Last numeric suffix handed out by any generator in this process.
static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Issues `<prefix>-<unix millis>` ticket ids.
///
/// The numeric suffix is strictly increasing across every generator in the
/// process: when two tickets land in the same millisecond the later one is
/// bumped forward, even if they come from different notifiers.
#[derive(Debug)]
pub struct TicketIdGenerator {
    prefix: String,
    last: &'static AtomicI64,
}

impl TicketIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last: &LAST_ISSUED,
        }
    }

    /// Generator with a counter of its own, so tests can assert exact ids.
    #[cfg(test)]
    fn isolated(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            last: Box::leak(Box::new(AtomicI64::new(0))),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Id for a ticket created at `now`.
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let bump = |last: i64| if millis > last { millis } else { last + 1 };
        // The closure always yields Some, so both arms carry the previous value.
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(bump(last)))
            .unwrap_or_else(|last| last);
        format!("{}-{}", self.prefix, bump(previous))
    }
}

impl Default for TicketIdGenerator {
    fn default() -> Self {
        TicketIdGenerator::new(DEFAULT_TICKET_PREFIX)
    }
}

/// RFC 3339 UTC timestamp with millisecond precision, e.g. `2024-05-01T09:30:00.123Z`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
