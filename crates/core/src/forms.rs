//! Client-side form models and their validation rules.
//!
//! A form's submit control is enabled iff [`Validate::validate`] passes; the
//! same types double as request bodies so the service re-checks them on
//! arrival.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::models::session::{Session, SessionPayload};
use crate::types::DbId;

/// Credentials for `POST /api/auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[validate(length(min = 1, max = 20))]
    pub first_name: String,
    #[validate(length(min = 1, max = 20))]
    pub last_name: String,
    #[validate(email, length(max = 50))]
    pub email: String,
    #[validate(length(min = 1, max = 40))]
    pub password: String,
}

/// Editable state of the session create/update form.
///
/// `date` and `teacher_id` start empty and must be picked before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SessionForm {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(required)]
    pub date: Option<NaiveDate>,
    #[validate(required)]
    pub teacher_id: Option<DbId>,
    #[validate(length(min = 1, max = 2500))]
    pub description: String,
}

impl SessionForm {
    /// Pre-fill the form from an existing session (update mode).
    pub fn from_session(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            date: Some(session.date.date()),
            teacher_id: Some(session.teacher_id),
            description: session.description.clone(),
        }
    }

    /// Convert a valid form into the request body.
    pub fn to_payload(&self) -> Result<SessionPayload, CoreError> {
        self.validate()?;
        match (self.date, self.teacher_id) {
            (Some(date), Some(teacher_id)) => Ok(SessionPayload {
                name: self.name.clone(),
                date,
                teacher_id,
                description: self.description.clone(),
            }),
            _ => Err(CoreError::Validation("date, teacher_id".into())),
        }
    }
}

/// Whether a form's submit control should be enabled.
pub fn is_submittable<F: Validate>(form: &F) -> bool {
    form.validate().is_ok()
}

/// Sorted, comma-separated list of the invalid fields.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields.join(", ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_login_form_is_not_submittable() {
        assert!(!is_submittable(&LoginForm::default()));
    }

    #[test]
    fn login_requires_well_formed_email() {
        assert!(!is_submittable(&LoginForm::new("not-an-email", "test!1234")));
        assert!(!is_submittable(&LoginForm::new("yoga@studio.com", "")));
        assert!(is_submittable(&LoginForm::new("yoga@studio.com", "test!1234")));
    }

    #[test]
    fn register_requires_every_field() {
        let mut form = RegisterForm {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@test.com".into(),
            password: "Test123!".into(),
        };
        assert!(is_submittable(&form));

        form.last_name.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(describe(&errors), "last_name");
    }

    #[test]
    fn register_body_uses_camel_case_keys() {
        let form = RegisterForm {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@test.com".into(),
            password: "Test123!".into(),
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe@test.com",
                "password": "Test123!"
            })
        );
    }

    #[test]
    fn session_form_starts_invalid_and_lists_missing_fields() {
        let form = SessionForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(describe(&errors), "date, description, name, teacher_id");
        assert_matches!(form.to_payload(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn filled_session_form_converts_to_payload() {
        let form = SessionForm {
            name: "Evening Yoga".into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 2),
            teacher_id: Some(1),
            description: "Relax after work".into(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.teacher_id, 1);
        assert_eq!(payload.name, "Evening Yoga");
    }
}
