use serde::{Deserialize, Serialize};

/// A roster row from the persons sheet. `username` is derived from the
/// email local-part at extraction time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub full_name: String,
    pub email: String,
    pub username: String,
}

/// A network-session row from the sessions sheet. `username` is derived
/// from the account name with its domain prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub network_code: String,
    pub account: String,
    pub ip: String,
    pub username: String,
}

/// One output row: a person joined to the first qualifying session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedRecord {
    pub full_name: String,
    pub email: String,
    pub network_code: String,
    pub ip: String,
}

/// Both extracted tables, in source row order.
#[derive(Debug, Clone)]
pub struct ExtractedTables {
    pub persons: Vec<PersonRecord>,
    pub sessions: Vec<SessionRecord>,
}
