use crate::domain::model::{MatchedRecord, PersonRecord, SessionRecord};

/// Joins each person to the first session in source order satisfying any of:
/// an exact username match, the person's username appearing inside the
/// lowercased account, or the session's username appearing inside the
/// lowercased email. Persons with no qualifying session produce no output.
///
/// First match wins, not best match: when several sessions qualify, the
/// earliest source row is taken regardless of whether it matched exactly or
/// by substring. The linear scan is deliberate — substring predicates rule
/// out a hash join, and source order is the only tie-break.
pub fn match_records(persons: &[PersonRecord], sessions: &[SessionRecord]) -> Vec<MatchedRecord> {
    persons
        .iter()
        .filter_map(|person| {
            sessions
                .iter()
                .find(|session| qualifies(person, session))
                .map(|session| MatchedRecord {
                    full_name: person.full_name.clone(),
                    email: person.email.clone(),
                    network_code: session.network_code.clone(),
                    ip: session.ip.clone(),
                })
        })
        .collect()
}

fn qualifies(person: &PersonRecord, session: &SessionRecord) -> bool {
    session.username == person.username
        || session.account.to_lowercase().contains(&person.username)
        || person.email.to_lowercase().contains(&session.username)
}
