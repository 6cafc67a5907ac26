/// Unit tests for the validation gate
/// Tests field rules, error shape, and email syntax
use rust_credit_score_api::models::FieldError;
use rust_credit_score_api::validation::{
    is_valid_email, validate_applicant, MSG_INVALID_DOCUMENT, MSG_NAME_TOO_SHORT,
};
use serde_json::json;

#[cfg(test)]
mod applicant_tests {
    use super::*;

    #[test]
    fn test_short_name_rejected() {
        let body = json!({
            "name": "Jo",
            "cpf": "12345678901",
            "birthDate": "2000-01-01",
            "email": "a@b.com"
        });

        let errors = validate_applicant(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], FieldError::new("name", MSG_NAME_TOO_SHORT));
    }

    #[test]
    fn test_short_cpf_rejected() {
        let body = json!({
            "name": "John Smith",
            "cpf": "123",
            "birthDate": "2000-01-01",
            "email": "a@b.com"
        });

        let errors = validate_applicant(&body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], FieldError::new("cpf", MSG_INVALID_DOCUMENT));
    }

    #[test]
    fn test_well_formed_input_accepted() {
        let body = json!({
            "name": "John Smith",
            "cpf": "529.982.247-25",
            "birthDate": "1985-07-14",
            "email": "john.smith@example.com"
        });

        let record = validate_applicant(&body).unwrap();
        assert_eq!(record.name, "John Smith");
        assert_eq!(record.document_id, "529.982.247-25");
        assert_eq!(record.birth_date, "1985-07-14");
        assert_eq!(record.email, "john.smith@example.com");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let body = json!({
            "name": "John Smith",
            "cpf": "12345678901",
            "birthDate": "2000-01-01",
            "email": "a@b.com",
            "phone": "11987654321"
        });

        assert!(validate_applicant(&body).is_ok());
    }

    #[test]
    fn test_empty_object_reports_all_fields() {
        let errors = validate_applicant(&json!({})).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "cpf", "birthDate", "email"]);
    }

    #[test]
    fn test_errors_serialize_as_field_message_pairs() {
        let errors = validate_applicant(&json!({ "name": "Jo" })).unwrap_err();
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value[0]["field"], "name");
        assert_eq!(value[0]["message"], MSG_NAME_TOO_SHORT);
    }
}

#[cfg(test)]
mod email_validation_tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.com"));
        assert!(is_valid_email("user+tag@example.co.uk"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("a@b.com"));
    }

    #[test]
    fn test_invalid_emails_basic() {
        // Missing @ or .
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@examplecom"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));

        // Single-letter TLD
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_invalid_emails_malformed() {
        assert!(!is_valid_email("user @example.com")); // space
        assert!(!is_valid_email("user@exam ple.com")); // space in domain
        assert!(!is_valid_email("user..name@example.com"));
        assert!(!is_valid_email(".user@example.com"));
    }
}
