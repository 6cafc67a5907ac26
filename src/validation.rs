/// Validation gate for applicant submissions
///
/// Takes the raw JSON body and either returns a typed [`ApplicantRecord`]
/// or one [`FieldError`] per violated field. Malformed input is a normal
/// outcome here, never a panic.
use crate::models::{ApplicantRecord, FieldError};
use crate::scoring::clean_document;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_DOCUMENT_LEN: usize = 11;

pub const MSG_REQUIRED: &str = "Campo obrigatório";
pub const MSG_NOT_TEXT: &str = "Esperado texto";
pub const MSG_NOT_OBJECT: &str = "Esperado um objeto";
pub const MSG_NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 3 caracteres";
pub const MSG_INVALID_DOCUMENT: &str = "CPF inválido";
pub const MSG_DOCUMENT_WITHOUT_DIGITS: &str = "CPF deve conter dígitos";
pub const MSG_BIRTH_DATE_REQUIRED: &str = "Data de nascimento é obrigatória";
pub const MSG_INVALID_EMAIL: &str = "Email inválido";

// local@domain.tld, at least one dot in the domain and a 2+ letter TLD
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9_'+\-.]*[a-zA-Z0-9_+\-]@(?:[a-zA-Z0-9][a-zA-Z0-9\-]*\.)+[a-zA-Z]{2,}$",
    )
    .expect("email regex compiles")
});

/// Validate email address syntax.
///
/// Checks for:
/// - `local@domain.tld` shape with a letters-only TLD
/// - No leading dot and no consecutive dots
pub fn is_valid_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}

/// Runs every field rule and collects the failures.
///
/// Errors come back in form order: `name`, `cpf`, `birthDate`, `email`.
pub fn validate_applicant(body: &Value) -> Result<ApplicantRecord, Vec<FieldError>> {
    let Some(object) = body.as_object() else {
        return Err(vec![FieldError::new("", MSG_NOT_OBJECT)]);
    };

    let mut errors = Vec::new();

    let name = string_field(object, "name", &mut errors, |name| {
        (text_len(name) < MIN_NAME_LEN).then_some(MSG_NAME_TOO_SHORT)
    });

    let document_id = string_field(object, "cpf", &mut errors, |cpf| {
        if text_len(cpf) < MIN_DOCUMENT_LEN {
            Some(MSG_INVALID_DOCUMENT)
        } else if clean_document(cpf).is_empty() {
            Some(MSG_DOCUMENT_WITHOUT_DIGITS)
        } else {
            None
        }
    });

    let birth_date = string_field(object, "birthDate", &mut errors, |date| {
        date.is_empty().then_some(MSG_BIRTH_DATE_REQUIRED)
    });

    let email = string_field(object, "email", &mut errors, |email| {
        (!is_valid_email(email)).then_some(MSG_INVALID_EMAIL)
    });

    match (name, document_id, birth_date, email) {
        (Some(name), Some(document_id), Some(birth_date), Some(email)) => {
            Ok(ApplicantRecord {
                name,
                document_id,
                birth_date,
                email,
            })
        }
        _ => Err(errors),
    }
}

/// Validates a bare email, as used by the sign-in form.
pub fn validate_email_field(email: Option<&str>) -> Result<String, Vec<FieldError>> {
    match email {
        None => Err(vec![FieldError::new("email", MSG_REQUIRED)]),
        Some(email) if !is_valid_email(email) => {
            Err(vec![FieldError::new("email", MSG_INVALID_EMAIL)])
        }
        Some(email) => Ok(email.to_string()),
    }
}

/// Length in UTF-16 code units, the unit browser form checks count in.
/// Characters outside the BMP (emoji) count as two.
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Extracts a string field and applies `rule`, recording at most one error.
fn string_field<F>(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
    rule: F,
) -> Option<String>
where
    F: FnOnce(&str) -> Option<&'static str>,
{
    let message = match object.get(field) {
        None | Some(Value::Null) => MSG_REQUIRED,
        Some(Value::String(value)) => match rule(value) {
            None => return Some(value.clone()),
            Some(message) => message,
        },
        Some(_) => MSG_NOT_TEXT,
    };

    errors.push(FieldError::new(field, message));
    None
}
