//! Field validation
//!
//! Every field in scope is checked and every failure is reported, so the
//! presentation layer can show all inline messages at once.

use super::field::{FieldId, FieldKind, FormField};
use super::phone::{strip_separators, MAX_PHONE_DIGITS};
use crate::state::FormEvents;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Shortest accepted phone number, in digits
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please agree to the collection and use of your personal data.")]
    ConsentRequired,
    #[error("{0} is required.")]
    FieldRequired(&'static str),
    #[error("Phone number may contain digits only.")]
    PhoneNotNumeric,
    #[error("Enter a 10 or 11 digit phone number.")]
    PhoneWrongLength { digits: usize },
    #[error("Enter a valid email address.")]
    EmailMalformed,
}

/// Every failure found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub failures: Vec<(FieldId, ValidationError)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn first(&self) -> Option<&(FieldId, ValidationError)> {
        self.failures.first()
    }

    #[cfg(test)]
    pub fn error_for(&self, field: FieldId) -> Option<&ValidationError> {
        self.failures
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, err)| err)
    }
}

/// Whether a trimmed value looks like an email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Check a phone value after separators are removed
pub fn check_phone(value: &str) -> Result<(), ValidationError> {
    let digits = strip_separators(value.trim());
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PhoneNotNumeric);
    }
    let len = digits.len();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&len) {
        return Err(ValidationError::PhoneWrongLength { digits: len });
    }
    Ok(())
}

/// Check a single required field.
///
/// Order: unchecked checkbox, empty value, phone shape, email shape.
pub fn check_field(field: &FormField) -> Result<(), ValidationError> {
    if field.spec.kind == FieldKind::Checkbox {
        return if field.is_checked() {
            Ok(())
        } else {
            Err(ValidationError::ConsentRequired)
        };
    }

    let value = field.as_text().trim();
    if value.is_empty() {
        return Err(ValidationError::FieldRequired(field.label()));
    }

    if field.id() == FieldId::Phone {
        return check_phone(value);
    }

    if field.spec.kind == FieldKind::Email && !is_valid_email(value) {
        return Err(ValidationError::EmailMalformed);
    }

    Ok(())
}

/// Validate the given fields, notifying `events` for each one.
///
/// Optional fields are skipped. Nothing short-circuits.
pub fn validate<'a>(
    fields: impl IntoIterator<Item = &'a FormField>,
    events: &mut dyn FormEvents,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    for field in fields.into_iter().filter(|f| f.spec.required) {
        match check_field(field) {
            Ok(()) => events.on_field_valid(field.id()),
            Err(err) => {
                events.on_field_error(field.id(), &err);
                report.failures.push((field.id(), err));
            }
        }
    }
    report
}

/// Blur-time check of an email field.
///
/// An empty value clears the indicator instead of reporting it as missing.
pub fn check_email_on_blur(field: &FormField, events: &mut dyn FormEvents) {
    let value = field.as_text().trim();
    if value.is_empty() {
        events.on_field_cleared(field.id());
    } else if is_valid_email(value) {
        events.on_field_valid(field.id());
    } else {
        events.on_field_error(field.id(), &ValidationError::EmailMalformed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::events::recorder::{Recorded, Recorder};
    use crate::state::MockFormEvents;

    fn field_with(id: FieldId, value: &str) -> FormField {
        let mut field = FormField::new(id);
        field.set_text(value);
        field
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_simple_address() {
            assert!(is_valid_email("a@b.co"));
            assert!(is_valid_email("  kim@example.com  "));
        }

        #[test]
        fn test_rejects_malformed() {
            for bad in ["a@b", "a.com", "", "a@@b.com", "a b@c.com", "@b.com"] {
                assert!(!is_valid_email(bad), "{bad:?} should be rejected");
            }
        }

        #[test]
        fn test_field_check() {
            assert_eq!(
                check_field(&field_with(FieldId::Email, "a@b")),
                Err(ValidationError::EmailMalformed)
            );
            assert_eq!(check_field(&field_with(FieldId::Email, "a@b.co")), Ok(()));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_accepts_ten_and_eleven_digits() {
            assert_eq!(check_phone("0212345678"), Ok(()));
            assert_eq!(check_phone("01012345678"), Ok(()));
            assert_eq!(check_phone("010-1234-5678"), Ok(()));
        }

        #[test]
        fn test_rejects_wrong_length() {
            assert_eq!(
                check_phone("012345678"),
                Err(ValidationError::PhoneWrongLength { digits: 9 })
            );
            assert_eq!(
                check_phone("012345678901"),
                Err(ValidationError::PhoneWrongLength { digits: 12 })
            );
            assert_eq!(
                check_phone(""),
                Err(ValidationError::PhoneWrongLength { digits: 0 })
            );
        }

        #[test]
        fn test_rejects_non_numeric() {
            assert_eq!(
                check_phone("010-abcd-5678"),
                Err(ValidationError::PhoneNotNumeric)
            );
            assert_eq!(check_phone("+821012345678"), Err(ValidationError::PhoneNotNumeric));
        }

        #[test]
        fn test_empty_phone_field_is_required_error() {
            assert_eq!(
                check_field(&field_with(FieldId::Phone, "   ")),
                Err(ValidationError::FieldRequired("Phone"))
            );
        }

        #[test]
        fn test_formatted_scenario_is_valid() {
            let formatted = crate::state::forms::phone::format("01012345678");
            assert_eq!(formatted, "010-1234-5678");
            assert_eq!(check_field(&field_with(FieldId::Phone, &formatted)), Ok(()));
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn test_unchecked_consent() {
            let field = FormField::new(FieldId::Consent);
            assert_eq!(check_field(&field), Err(ValidationError::ConsentRequired));
        }

        #[test]
        fn test_blank_email_reports_required_not_malformed() {
            assert_eq!(
                check_field(&field_with(FieldId::Email, "  ")),
                Err(ValidationError::FieldRequired("Email"))
            );
        }

        #[test]
        fn test_messages() {
            assert_eq!(
                ValidationError::FieldRequired("Full Name").to_string(),
                "Full Name is required."
            );
            assert_eq!(
                ValidationError::PhoneWrongLength { digits: 9 }.to_string(),
                "Enter a 10 or 11 digit phone number."
            );
        }
    }

    mod collect_all {
        use super::*;

        #[test]
        fn test_reports_every_failure() {
            let fields = vec![
                field_with(FieldId::FullName, ""),
                field_with(FieldId::Email, "a@b"),
                field_with(FieldId::Phone, "123"),
                field_with(FieldId::CompanyName, "Acme"),
                FormField::new(FieldId::Consent),
            ];
            let mut events = Recorder::default();
            let report = validate(&fields, &mut events);

            assert!(!report.is_valid());
            assert_eq!(report.failures.len(), 4);
            assert_eq!(
                report.error_for(FieldId::FullName),
                Some(&ValidationError::FieldRequired("Full Name"))
            );
            assert_eq!(
                report.error_for(FieldId::Consent),
                Some(&ValidationError::ConsentRequired)
            );
            assert_eq!(events.errors().len(), 4);
            assert_eq!(events.valid_fields(), vec![FieldId::CompanyName]);
        }

        #[test]
        fn test_skips_optional_fields() {
            let mut optional = field_with(FieldId::CompanyName, "");
            optional.spec.required = false;
            let mut events = MockFormEvents::new();
            events.expect_on_field_error().never();
            events.expect_on_field_valid().never();

            let report = validate([&optional], &mut events);
            assert!(report.is_valid());
        }

        #[test]
        fn test_all_valid() {
            let mut consent = FormField::new(FieldId::Consent);
            consent.set_checked(true);
            let fields = vec![
                field_with(FieldId::FullName, "Kim"),
                field_with(FieldId::Email, "kim@example.com"),
                consent,
            ];
            let mut events = MockFormEvents::new();
            events.expect_on_field_valid().times(3).return_const(());
            events.expect_on_field_error().never();

            assert!(validate(&fields, &mut events).is_valid());
        }
    }

    mod blur {
        use super::*;

        #[test]
        fn test_empty_clears_indicator() {
            let mut events = Recorder::default();
            check_email_on_blur(&field_with(FieldId::Email, " "), &mut events);
            assert_eq!(events.events, vec![Recorded::FieldCleared(FieldId::Email)]);
        }

        #[test]
        fn test_valid_and_invalid() {
            let mut events = Recorder::default();
            check_email_on_blur(&field_with(FieldId::Email, "a@b.co"), &mut events);
            check_email_on_blur(&field_with(FieldId::Email, "a@b"), &mut events);
            assert_eq!(
                events.events,
                vec![
                    Recorded::FieldValid(FieldId::Email),
                    Recorded::FieldError(FieldId::Email, ValidationError::EmailMalformed),
                ]
            );
        }
    }
}
