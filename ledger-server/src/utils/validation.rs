//! Input validation
//!
//! Field-level checks run before any store mutation. Error messages are the
//! user-facing Portuguese strings the admin console surfaces inline.
//! SQLite TEXT has no built-in length enforcement, so ceilings live here.

use validator::ValidateEmail;

use crate::utils::AppError;
use shared::models::PaymentCreate;

// ── Text length limits ──────────────────────────────────────────────

/// Member and payment display names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Short free text: phone numbers, date strings
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Field checks ────────────────────────────────────────────────────

/// Validate a payment payload: non-empty name, strictly positive finite
/// amount, non-empty date string. No existence check against members —
/// `member_name` is deliberately free text.
pub fn validate_payment(payload: &PaymentCreate) -> Result<(), AppError> {
    if payload.member_name.trim().is_empty() {
        return Err(AppError::validation("Nome é obrigatório"));
    }
    if payload.member_name.len() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Nome é muito longo (máx. {MAX_NAME_LEN} caracteres)"
        )));
    }
    if !(payload.amount > 0.0) || !payload.amount.is_finite() {
        return Err(AppError::validation("Valor deve ser positivo"));
    }
    if payload.payment_date.trim().is_empty() {
        return Err(AppError::validation("Data é obrigatória"));
    }
    if payload.payment_date.len() > MAX_SHORT_TEXT_LEN {
        return Err(AppError::validation("Data inválida"));
    }
    Ok(())
}

/// Validate a member name and return it trimmed
pub fn validate_member_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Nome é obrigatório"));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Nome é muito longo (máx. {MAX_NAME_LEN} caracteres)"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional email address for syntax. Empty strings are treated
/// as absent, matching what the admin form submits.
pub fn validate_optional_email(email: Option<&str>) -> Result<(), AppError> {
    if let Some(e) = email
        && !e.trim().is_empty()
    {
        if e.len() > MAX_EMAIL_LEN || !e.validate_email() {
            return Err(AppError::validation("Email inválido"));
        }
    }
    Ok(())
}

/// Validate an optional phone field (free text, length-capped)
pub fn validate_optional_phone(phone: Option<&str>) -> Result<(), AppError> {
    if let Some(p) = phone
        && p.len() > MAX_SHORT_TEXT_LEN
    {
        return Err(AppError::validation(format!(
            "Telefone é muito longo (máx. {MAX_SHORT_TEXT_LEN} caracteres)"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(name: &str, amount: f64, date: &str) -> PaymentCreate {
        PaymentCreate {
            member_name: name.to_string(),
            amount,
            payment_date: date.to_string(),
        }
    }

    #[test]
    fn payment_requires_positive_amount() {
        assert!(validate_payment(&payment("Ana Silva", 50.0, "2024-03-10")).is_ok());

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = validate_payment(&payment("Ana Silva", bad, "2024-03-10")).unwrap_err();
            assert_eq!(err.to_string(), "Valor deve ser positivo");
        }
    }

    #[test]
    fn payment_requires_name_and_date() {
        let err = validate_payment(&payment("   ", 10.0, "2024-03-10")).unwrap_err();
        assert_eq!(err.to_string(), "Nome é obrigatório");

        let err = validate_payment(&payment("Ana", 10.0, "")).unwrap_err();
        assert_eq!(err.to_string(), "Data é obrigatória");
    }

    #[test]
    fn member_name_is_trimmed() {
        assert_eq!(validate_member_name("  Ana Silva  ").unwrap(), "Ana Silva");
        assert!(validate_member_name("   ").is_err());
    }

    #[test]
    fn email_syntax_is_checked_when_present() {
        assert!(validate_optional_email(None).is_ok());
        assert!(validate_optional_email(Some("")).is_ok());
        assert!(validate_optional_email(Some("ana@example.com")).is_ok());

        let err = validate_optional_email(Some("not-an-email")).unwrap_err();
        assert_eq!(err.to_string(), "Email inválido");
    }
}
