//! View-layer helpers
//!
//! Read endpoints degrade to an empty list on transient failure instead of
//! crashing the page; the admin console additionally filters members by a
//! name substring.

use crate::LedgerClient;
use shared::models::{Member, Payment};

/// Fetch the ledger, falling back to an empty list on failure
pub async fn payments_or_empty(client: &LedgerClient) -> Vec<Payment> {
    match client.list_payments().await {
        Ok(payments) => payments,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch payments, showing empty list");
            Vec::new()
        }
    }
}

/// Fetch active members, falling back to an empty list on failure
pub async fn members_or_empty(client: &LedgerClient) -> Vec<Member> {
    match client.list_members().await {
        Ok(members) => members,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch members, showing empty list");
            Vec::new()
        }
    }
}

/// Case-insensitive substring search over the fetched member list
pub fn search_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    if query.is_empty() {
        return members.iter().collect();
    }
    let needle = query.to_lowercase();
    members
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> Member {
        Member {
            id: 1,
            name: name.to_string(),
            email: None,
            phone: None,
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn member_search_is_case_insensitive() {
        let members = vec![member("Ana Silva"), member("Bruno Costa")];

        let hits = search_members(&members, "silva");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ana Silva");

        assert_eq!(search_members(&members, "").len(), 2);
        assert!(search_members(&members, "zzz").is_empty());
    }
}
