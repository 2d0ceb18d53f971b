//! Payment filtering
//!
//! The same algorithm backs the public page and the admin console. Purely
//! derived state: recomputed on every input change, nothing is cached.

use shared::models::Payment;

/// Client-side filter state, never persisted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentFilter {
    /// Case-insensitive substring match on the payer's display name
    pub name: String,
    /// Inclusive lower bound, ISO date (`YYYY-MM-DD`)
    pub start_date: String,
    /// Inclusive upper bound, ISO date
    pub end_date: String,
    /// Whether the filter panel is open (view state, no effect on matching)
    pub show_filters: bool,
}

impl PaymentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every criterion and close the panel
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when any criterion is set
    pub fn is_active(&self) -> bool {
        !self.name.is_empty() || !self.start_date.is_empty() || !self.end_date.is_empty()
    }

    /// A payment matches when every set criterion holds:
    /// - name filter empty, or `member_name` contains it case-insensitively
    /// - start empty, or payment date ≥ start
    /// - end empty, or payment date ≤ end
    ///
    /// Dates compare as ISO date-only strings; a time-of-day suffix on the
    /// stored date is stripped first.
    pub fn matches(&self, payment: &Payment) -> bool {
        let matches_name = self.name.is_empty()
            || payment
                .member_name
                .to_lowercase()
                .contains(&self.name.to_lowercase());

        let date = date_part(&payment.payment_date);
        let matches_start = self.start_date.is_empty() || date >= self.start_date.as_str();
        let matches_end = self.end_date.is_empty() || date <= self.end_date.as_str();

        matches_name && matches_start && matches_end
    }

    /// Apply the filter to a fetched list
    pub fn apply<'a>(&self, payments: &'a [Payment]) -> Vec<&'a Payment> {
        payments.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Strip any time-of-day component (`2024-03-10T12:00:00` → `2024-03-10`)
fn date_part(payment_date: &str) -> &str {
    payment_date.split('T').next().unwrap_or(payment_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(name: &str, date: &str) -> Payment {
        Payment {
            id: 1,
            member_name: name.to_string(),
            amount: 50.0,
            payment_date: date.to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = PaymentFilter::new();
        assert!(!filter.is_active());
        assert!(filter.matches(&payment("Ana Silva", "2024-03-10")));
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let mut filter = PaymentFilter::new();
        filter.name = "ana".into();

        assert!(filter.matches(&payment("Ana Silva", "2024-03-10")));
        assert!(filter.matches(&payment("MARIANA", "2024-03-10")));
        assert!(!filter.matches(&payment("João", "2024-03-10")));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let mut filter = PaymentFilter::new();
        filter.start_date = "2024-01-01".into();
        filter.end_date = "2024-01-31".into();

        assert!(filter.matches(&payment("Ana", "2024-01-01")));
        assert!(filter.matches(&payment("Ana", "2024-01-31")));
        assert!(!filter.matches(&payment("Ana", "2023-12-31")));
        assert!(!filter.matches(&payment("Ana", "2024-02-01")));
    }

    #[test]
    fn time_component_is_stripped_before_comparison() {
        let mut filter = PaymentFilter::new();
        filter.end_date = "2024-01-31".into();

        // Lexically "2024-01-31T23:59" > "2024-01-31", but the date part ties
        assert!(filter.matches(&payment("Ana", "2024-01-31T23:59:00")));
    }

    #[test]
    fn independent_criteria_commute() {
        let payments = vec![
            payment("Ana Silva", "2024-01-15"),
            payment("Ana Souza", "2024-02-15"),
            payment("Bruno", "2024-01-20"),
        ];

        let mut by_name = PaymentFilter::new();
        by_name.name = "Ana".into();

        let mut by_date = PaymentFilter::new();
        by_date.start_date = "2024-01-01".into();
        by_date.end_date = "2024-01-31".into();

        let mut combined = PaymentFilter::new();
        combined.name = "Ana".into();
        combined.start_date = "2024-01-01".into();
        combined.end_date = "2024-01-31".into();

        // name-then-date
        let step1: Vec<Payment> = by_name.apply(&payments).into_iter().cloned().collect();
        let name_then_date: Vec<&Payment> = by_date.apply(&step1);

        // date-then-name
        let step2: Vec<Payment> = by_date.apply(&payments).into_iter().cloned().collect();
        let date_then_name: Vec<&Payment> = by_name.apply(&step2);

        // one pass
        let one_pass = combined.apply(&payments);

        let names = |v: &[&Payment]| {
            v.iter().map(|p| p.member_name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&name_then_date), names(&one_pass));
        assert_eq!(names(&date_then_name), names(&one_pass));
        assert_eq!(names(&one_pass), vec!["Ana Silva".to_string()]);
    }

    #[test]
    fn clear_resets_all_criteria() {
        let mut filter = PaymentFilter::new();
        filter.name = "Ana".into();
        filter.start_date = "2024-01-01".into();
        filter.show_filters = true;

        filter.clear();
        assert_eq!(filter, PaymentFilter::default());
    }
}
