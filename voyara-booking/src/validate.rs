use serde::Serialize;

use crate::forms::BookingForm;
use crate::workflow::BookingStep;

/// One field-level validation failure. Non-fatal: the form layer re-renders
/// with the message next to the offending field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Validate the staged form data for one checkout step. Pure over the form;
/// an empty list means the step may be advanced. Step 3 carries no field
/// validation (the terms checkbox lives in the form layer, not here).
pub fn validate_step(step: BookingStep, form: &BookingForm) -> Vec<FieldError> {
    match step {
        BookingStep::PersonalInfo => validate_personal_info(form),
        BookingStep::Payment => validate_payment_info(form),
        BookingStep::Review => Vec::new(),
    }
}

fn validate_personal_info(form: &BookingForm) -> Vec<FieldError> {
    let info = &form.personal_info;
    let mut errors = Vec::new();

    if info.first_name.is_empty() {
        errors.push(FieldError::new("firstName", "First name is required"));
    }
    if info.last_name.is_empty() {
        errors.push(FieldError::new("lastName", "Last name is required"));
    }
    if info.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(&info.email) {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address",
        ));
    }
    if info.phone.is_empty() {
        errors.push(FieldError::new("phone", "Phone number is required"));
    }
    if info.date_of_birth.is_empty() {
        errors.push(FieldError::new("dateOfBirth", "Date of birth is required"));
    }

    errors
}

fn validate_payment_info(form: &BookingForm) -> Vec<FieldError> {
    let info = &form.payment_info;
    let mut errors = Vec::new();

    if info.card_number.is_empty() {
        errors.push(FieldError::new("cardNumber", "Card number is required"));
    } else if !is_valid_card_number(&info.card_number.0) {
        errors.push(FieldError::new(
            "cardNumber",
            "Please enter a valid 16-digit card number",
        ));
    }
    if info.expiry_date.is_empty() {
        errors.push(FieldError::new("expiryDate", "Expiry date is required"));
    }
    if info.cvv.is_empty() {
        errors.push(FieldError::new("cvv", "CVV is required"));
    } else if info.cvv.0.len() != 3 || !info.cvv.0.chars().all(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new("cvv", "CVV must be 3 digits"));
    }
    if info.cardholder_name.is_empty() {
        errors.push(FieldError::new(
            "cardholderName",
            "Cardholder name is required",
        ));
    }

    errors
}

/// local@domain shape: a non-empty local part, and a domain with at least one
/// dot separating non-empty labels. No whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Exactly 16 digits once whitespace is stripped.
fn is_valid_card_number(card_number: &str) -> bool {
    let digits: String = card_number.split_whitespace().collect();
    digits.len() == 16 && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{BookingFormPatch, PaymentInfoPatch, PersonalInfoPatch};

    fn filled_personal_form() -> BookingForm {
        let mut form = BookingForm::default();
        form.apply(BookingFormPatch {
            personal_info: Some(PersonalInfoPatch {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                email: Some("ada@example.com".to_string()),
                phone: Some("+44 20 7946 0000".to_string()),
                date_of_birth: Some("1990-12-10".to_string()),
            }),
            ..Default::default()
        });
        form
    }

    fn filled_payment_form() -> BookingForm {
        let mut form = BookingForm::default();
        form.apply(BookingFormPatch {
            payment_info: Some(PaymentInfoPatch {
                card_number: Some("4242 4242 4242 4242".to_string()),
                expiry_date: Some("12/27".to_string()),
                cvv: Some("123".to_string()),
                cardholder_name: Some("Ada Lovelace".to_string()),
            }),
            ..Default::default()
        });
        form
    }

    #[test]
    fn test_empty_form_fails_step_one_per_field() {
        let errors = validate_step(BookingStep::PersonalInfo, &BookingForm::default());
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["firstName", "lastName", "email", "phone", "dateOfBirth"]
        );
    }

    #[test]
    fn test_complete_personal_info_passes() {
        let form = filled_personal_form();
        assert!(validate_step(BookingStep::PersonalInfo, &form).is_empty());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example."));
        assert!(!is_valid_email("ada lovelace@example.com"));
    }

    #[test]
    fn test_bad_email_reports_format_error() {
        let mut form = filled_personal_form();
        form.apply(BookingFormPatch {
            personal_info: Some(PersonalInfoPatch {
                email: Some("not-an-email".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let errors = validate_step(BookingStep::PersonalInfo, &form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Please enter a valid email address");
    }

    #[test]
    fn test_fifteen_digit_card_fails() {
        let mut form = filled_payment_form();
        form.apply(BookingFormPatch {
            payment_info: Some(PaymentInfoPatch {
                card_number: Some("424242424242424".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let errors = validate_step(BookingStep::Payment, &form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cardNumber");
    }

    #[test]
    fn test_complete_payment_info_passes() {
        let form = filled_payment_form();
        assert!(validate_step(BookingStep::Payment, &form).is_empty());
    }

    #[test]
    fn test_cvv_must_be_three_digits() {
        let mut form = filled_payment_form();
        form.apply(BookingFormPatch {
            payment_info: Some(PaymentInfoPatch {
                cvv: Some("12".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let errors = validate_step(BookingStep::Payment, &form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cvv");
    }

    #[test]
    fn test_review_step_has_no_field_validation() {
        assert!(validate_step(BookingStep::Review, &BookingForm::default()).is_empty());
    }
}
