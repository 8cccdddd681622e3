//! Query-string assembly for the paginated list endpoints.
//!
//! The backend expects Laravel conventions: `page` plus optional filters,
//! with array filters repeated as `skills[]=1&skills[]=2`.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::fmt::Write as _;

/// Filters for the seeker job list and the employer post list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub page: u64,
    pub title: String,
    pub employer: String,
    pub skills: Vec<i64>,
    /// `YYYY-MM-DD HH:MM:SS` lower bound on creation time.
    pub created_at: Option<String>,
}

impl JobQuery {
    pub fn for_page(page: u64) -> Self {
        Self { page, ..Self::default() }
    }

    /// Render as a query string, `page` always first, empty filters omitted.
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![("page".to_owned(), self.page.max(1).to_string())];
        if !self.title.trim().is_empty() {
            pairs.push(("title".to_owned(), self.title.trim().to_owned()));
        }
        if !self.employer.trim().is_empty() {
            pairs.push(("employer".to_owned(), self.employer.trim().to_owned()));
        }
        for skill in &self.skills {
            pairs.push(("skills[]".to_owned(), skill.to_string()));
        }
        if let Some(created_at) = &self.created_at {
            pairs.push(("created_at".to_owned(), created_at.clone()));
        }
        render(&pairs)
    }
}

/// Status filter values understood by the applications endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    Accepted,
    Rejected,
}

impl StatusFilter {
    /// Numeric code the backend expects.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Pending => "1",
            Self::Accepted => "2",
            Self::Rejected => "3",
        }
    }

    /// Parse a `<select>` value; the empty string means "all".
    pub fn from_select(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Self::Pending),
            "2" => Some(Self::Accepted),
            "3" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Filters for the seeker's own applications list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationQuery {
    pub page: u64,
    pub title: String,
    pub status: Option<StatusFilter>,
    pub created_at: Option<String>,
}

impl ApplicationQuery {
    pub fn for_page(page: u64) -> Self {
        Self { page, ..Self::default() }
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![("page".to_owned(), self.page.max(1).to_string())];
        if !self.title.trim().is_empty() {
            pairs.push(("title".to_owned(), self.title.trim().to_owned()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_owned(), status.as_param().to_owned()));
        }
        if let Some(created_at) = &self.created_at {
            pairs.push(("created_at".to_owned(), created_at.clone()));
        }
        render(&pairs)
    }
}

fn render(pairs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (index, (key, value)) in pairs.iter().enumerate() {
        if index > 0 {
            out.push('&');
        }
        let _ = write!(out, "{}={}", encode_component(key), encode_component(value));
    }
    out
}

/// Percent-encode a query component; unreserved characters pass through.
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            other => {
                let _ = write!(out, "%{other:02X}");
            }
        }
    }
    out
}
