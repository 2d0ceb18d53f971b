//! Dashboard statistics
//!
//! Aggregates computed over the currently filtered payment subset, shown in
//! the header cards of both views.

use shared::models::Payment;

/// Header card values
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Sum of amounts in the filtered subset
    pub total_amount: f64,
    /// Distinct contributing member names
    pub unique_members: usize,
    /// Payments dated in the given calendar month
    pub this_month_count: usize,
}

impl DashboardStats {
    /// Compute against the current calendar month (UTC)
    pub fn compute(payments: &[&Payment]) -> Self {
        let month = chrono::Utc::now().format("%Y-%m").to_string();
        Self::compute_for_month(payments, &month)
    }

    /// Compute against an explicit `YYYY-MM` month
    pub fn compute_for_month(payments: &[&Payment], month: &str) -> Self {
        let total_amount = payments.iter().map(|p| p.amount).sum();

        let mut names: Vec<&str> = payments.iter().map(|p| p.member_name.as_str()).collect();
        names.sort_unstable();
        names.dedup();

        let this_month_count = payments
            .iter()
            .filter(|p| p.payment_date.starts_with(month))
            .count();

        Self {
            total_amount,
            unique_members: names.len(),
            this_month_count,
        }
    }
}
