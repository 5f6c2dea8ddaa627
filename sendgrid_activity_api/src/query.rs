//! Query builder for the Email Activity `/messages` endpoint.

use url::Url;

/// Result cap applied when the caller leaves the limit blank or supplies a
/// value that does not parse as a positive integer.
pub const DEFAULT_LIMIT: u32 = 100;

/// Filter set for one `/messages` request.
///
/// Unset fields are omitted from the filter query entirely; `limit` is always
/// sent and defaults to [`DEFAULT_LIMIT`]. Built fresh for every fetch.
#[derive(Clone)]
pub struct MessageQuery {
    pub limit: u32,
    pub to_email: Option<String>,
    pub from_email: Option<String>,
    pub subject: Option<String>,
    pub status: Option<String>,
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            to_email: None,
            from_email: None,
            subject: None,
            status: None,
        }
    }
}

impl MessageQuery {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_to_email(mut self, to_email: &str) -> Self {
        self.to_email = Some(to_email.to_string());
        self
    }

    pub fn with_from_email(mut self, from_email: &str) -> Self {
        self.from_email = Some(from_email.to_string());
        self
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Resolves a raw, user-entered limit. Blank input means "use the
    /// default"; anything that fails to parse as a positive integer is
    /// logged and also falls back to [`DEFAULT_LIMIT`].
    pub fn resolve_limit(raw: &str) -> u32 {
        let raw = raw.trim();
        if raw.is_empty() {
            return DEFAULT_LIMIT;
        }
        match raw.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                tracing::warn!(
                    "Ignoring invalid limit {:?}, using default of {}",
                    raw,
                    DEFAULT_LIMIT
                );
                DEFAULT_LIMIT
            }
        }
    }

    /// Set non-limit fields, in their fixed emission order.
    fn conditions(&self) -> Vec<(&'static str, &str)> {
        let mut conditions = Vec::new();
        if let Some(v) = &self.to_email {
            conditions.push(("to_email", v.as_str()));
        }
        if let Some(v) = &self.from_email {
            conditions.push(("from_email", v.as_str()));
        }
        if let Some(v) = &self.subject {
            conditions.push(("subject", v.as_str()));
        }
        if let Some(v) = &self.status {
            conditions.push(("status", v.as_str()));
        }
        conditions
    }

    /// Appends this query's parameters to the given URL, returning the
    /// modified URL.
    ///
    /// `limit` is always appended. The set filter fields become a single
    /// `query` parameter holding `field="value"` conditions joined with the
    /// provider's `AND ` separator. Separators come from joining the emitted
    /// condition list, so the last condition never carries one regardless of
    /// which fields happen to be set. Percent-encoding is handled by the URL
    /// query-pair serializer.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string());
        let conditions = self.conditions();
        if !conditions.is_empty() {
            let query = conditions
                .iter()
                .map(|(field, value)| format!("{}=\"{}\"", field, value))
                .collect::<Vec<_>>()
                .join("AND ");
            url.query_pairs_mut().append_pair("query", &query);
        }
        url
    }
}
