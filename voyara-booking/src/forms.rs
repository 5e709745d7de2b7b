use serde::{Deserialize, Serialize};
use voyara_shared::Masked;

/// Traveler details collected at step 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
}

/// Card details collected at step 2. Form-staging data only: never persisted,
/// and the card number and CVV are masked in Debug output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    /// Normalized digit string; grouping into 4-digit blocks is presentation
    /// only (see [`format_card_number`]).
    pub card_number: Masked<String>,
    /// MM/YY
    pub expiry_date: String,
    pub cvv: Masked<String>,
    pub cardholder_name: String,
}

/// Everything the checkout form stages for one booking session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    pub personal_info: PersonalInfo,
    pub payment_info: PaymentInfo,
    pub travelers: u32,
    pub special_requests: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            payment_info: PaymentInfo::default(),
            travelers: 1,
            special_requests: String::new(),
        }
    }
}

/// Partial update from the form layer. Absent fields are left untouched;
/// nested sections merge field by field. Travelers are deliberately not part
/// of the patch since they drive the cost recomputation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormPatch {
    pub personal_info: Option<PersonalInfoPatch>,
    pub payment_info: Option<PaymentInfoPatch>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfoPatch {
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,
    pub cardholder_name: Option<String>,
}

impl BookingForm {
    /// Shallow-merge a patch into the staged form data.
    pub fn apply(&mut self, patch: BookingFormPatch) {
        if let Some(personal) = patch.personal_info {
            let target = &mut self.personal_info;
            if let Some(v) = personal.first_name {
                target.first_name = v;
            }
            if let Some(v) = personal.last_name {
                target.last_name = v;
            }
            if let Some(v) = personal.email {
                target.email = v;
            }
            if let Some(v) = personal.phone {
                target.phone = v;
            }
            if let Some(v) = personal.date_of_birth {
                target.date_of_birth = v;
            }
        }
        if let Some(payment) = patch.payment_info {
            let target = &mut self.payment_info;
            if let Some(v) = payment.card_number {
                // Store the semantic value; formatting stays at the boundary
                target.card_number = Masked(normalize_card_number(&v));
            }
            if let Some(v) = payment.expiry_date {
                target.expiry_date = v;
            }
            if let Some(v) = payment.cvv {
                target.cvv = Masked(v.chars().filter(char::is_ascii_digit).collect());
            }
            if let Some(v) = payment.cardholder_name {
                target.cardholder_name = v;
            }
        }
        if let Some(v) = patch.special_requests {
            self.special_requests = v;
        }
    }
}

/// Strip a card number down to its digits.
pub fn normalize_card_number(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Presentation helper: group a digit string into space-separated 4-digit
/// blocks ("4242424242424242" -> "4242 4242 4242 4242").
pub fn format_card_number(raw: &str) -> String {
    let digits = normalize_card_number(raw);
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_everything_but_digits() {
        assert_eq!(normalize_card_number("4242 4242 4242 4242"), "4242424242424242");
        assert_eq!(normalize_card_number("4242-4242-x"), "42424242");
        assert_eq!(normalize_card_number(""), "");
    }

    #[test]
    fn test_format_groups_by_four() {
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("424242"), "4242 42");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut form = BookingForm::default();
        form.personal_info.first_name = "Ada".to_string();
        form.personal_info.email = "ada@example.com".to_string();

        form.apply(BookingFormPatch {
            personal_info: Some(PersonalInfoPatch {
                last_name: Some("Lovelace".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(form.personal_info.first_name, "Ada");
        assert_eq!(form.personal_info.last_name, "Lovelace");
        assert_eq!(form.personal_info.email, "ada@example.com");
    }

    #[test]
    fn test_patch_normalizes_card_input() {
        let mut form = BookingForm::default();
        form.apply(BookingFormPatch {
            payment_info: Some(PaymentInfoPatch {
                card_number: Some("4242 4242 4242 4242".to_string()),
                cvv: Some("1x2y3".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(form.payment_info.card_number.0, "4242424242424242");
        assert_eq!(form.payment_info.cvv.0, "123");
    }

    #[test]
    fn test_patch_does_not_touch_travelers() {
        let mut form = BookingForm::default();
        form.travelers = 4;
        form.apply(BookingFormPatch {
            special_requests: Some("Window seats".to_string()),
            ..Default::default()
        });
        assert_eq!(form.travelers, 4);
        assert_eq!(form.special_requests, "Window seats");
    }

    #[test]
    fn test_patch_deserializes_from_form_layer_json() {
        let json = r#"
            {
                "personalInfo": { "firstName": "Ada", "dateOfBirth": "1990-12-10" },
                "paymentInfo": { "cardNumber": "4242 4242 4242 4242" },
                "specialRequests": "Vegetarian meals"
            }
        "#;
        let patch: BookingFormPatch = serde_json::from_str(json).expect("Failed to deserialize");

        let mut form = BookingForm::default();
        form.apply(patch);
        assert_eq!(form.personal_info.first_name, "Ada");
        assert_eq!(form.personal_info.date_of_birth, "1990-12-10");
        assert_eq!(form.payment_info.card_number.0, "4242424242424242");
        assert_eq!(form.special_requests, "Vegetarian meals");
    }

    #[test]
    fn test_payment_debug_never_shows_card_digits() {
        let mut form = BookingForm::default();
        form.apply(BookingFormPatch {
            payment_info: Some(PaymentInfoPatch {
                card_number: Some("4242424242424242".to_string()),
                cvv: Some("123".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        let dump = format!("{:?}", form);
        assert!(!dump.contains("4242"));
        assert!(!dump.contains("123"));
    }
}
