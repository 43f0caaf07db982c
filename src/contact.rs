//! Contact form record, validation and submission.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

pub const SERVICE_TYPES: &[&str] = &[
    "Performance Optimization",
    "Technology Implementation",
    "Data Strategy & Analytics",
    "Fan Engagement Solutions",
    "Commercial Innovation",
    "Strategic Consulting",
    "Other",
];

pub const ORGANIZATION_TYPES: &[&str] = &[
    "Professional Sports Team",
    "Sports League/Association",
    "Sports Technology Company",
    "Broadcasting/Media",
    "Sports Venue",
    "Collegiate Athletics",
    "Other",
];

pub const BUDGETS: &[&str] = &[
    "Under $50K",
    "$50K - $100K",
    "$100K - $250K",
    "$250K - $500K",
    "$500K+",
    "Not sure yet",
];

pub const TIMELINES: &[&str] = &[
    "Immediate (1-2 months)",
    "Near-term (3-6 months)",
    "Medium-term (6-12 months)",
    "Long-term (12+ months)",
    "Exploratory discussion",
];

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub organization_type: String,
    pub service_type: String,
    pub message: String,
    pub budget: String,
    pub timeline: String,
    pub newsletter: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Organization,
    OrganizationType,
    ServiceType,
    Message,
    Budget,
    Timeline,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Could not prepare your message: {0}")]
    Encode(String),
    #[error("Network error, please check your connection and try again.")]
    Network(String),
    #[error("Something went wrong sending your message (status {0}). Please try again.")]
    Status(u16),
}

fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Organization => self.organization = value,
            Field::OrganizationType => self.organization_type = value,
            Field::ServiceType => self.service_type = value,
            Field::Message => self.message = value,
            Field::Budget => self.budget = value,
            Field::Timeline => self.timeline = value,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("organization", &self.organization),
            ("organization type", &self.organization_type),
            ("service", &self.service_type),
            ("message", &self.message),
        ];
        if let Some((label, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(FormError::MissingField(*label));
        }
        if !valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub is_submitting: bool,
    pub submitted: bool,
    pub error: Option<String>,
}

impl SubmissionState {
    pub fn begin(&mut self) {
        self.is_submitting = true;
        self.error = None;
    }

    pub fn reject(&mut self, error: &FormError) {
        self.is_submitting = false;
        self.error = Some(error.to_string());
    }

    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        self.is_submitting = false;
        match result {
            Ok(()) => {
                self.submitted = true;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub async fn submit(form: &ContactForm) -> Result<(), SubmitError> {
    let request = Request::post(config::get_form_endpoint())
        .header("Accept", "application/json")
        .json(form)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Alex Morgan".into(),
            email: "alex@club.example".into(),
            organization: "FC Example".into(),
            organization_type: ORGANIZATION_TYPES[0].into(),
            service_type: SERVICE_TYPES[0].into(),
            message: "We want to reduce soft tissue injuries.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let form = filled();
        assert!(form.budget.is_empty() && form.timeline.is_empty() && !form.newsletter);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut form = filled();
        form.set(Field::Organization, "   ".into());
        form.set(Field::Message, String::new());
        assert_eq!(form.validate(), Err(FormError::MissingField("organization")));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["alex", "@club.com", "alex@club", "alex@.com", "a@b@c.com", "alex@club."] {
            let mut form = filled();
            form.set(Field::Email, bad.into());
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let mut form = filled();
        form.newsletter = true;
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["organizationType"], "Professional Sports Team");
        assert_eq!(json["serviceType"], "Performance Optimization");
        assert_eq!(json["newsletter"], true);
        assert!(json.get("organization_type").is_none());
        assert_eq!(json.as_object().map(|o| o.len()), Some(9));
    }

    #[test]
    fn non_ok_status_surfaces_error_and_reenables_submit() {
        let mut state = SubmissionState::default();
        state.begin();
        assert!(state.is_submitting);
        state.finish(Err(SubmitError::Status(500)));
        assert!(!state.is_submitting);
        assert!(!state.submitted);
        assert!(state.error.as_deref().map_or(false, |e| !e.is_empty()));
    }

    #[test]
    fn network_failure_surfaces_error() {
        let mut state = SubmissionState::default();
        state.begin();
        state.finish(Err(SubmitError::Network("offline".into())));
        assert!(!state.is_submitting);
        assert!(state.error.is_some());
    }

    #[test]
    fn success_clears_previous_error() {
        let mut state = SubmissionState::default();
        state.begin();
        state.finish(Err(SubmitError::Status(429)));
        state.begin();
        assert_eq!(state.error, None);
        state.finish(Ok(()));
        assert!(state.submitted);
        assert_eq!(state.error, None);
        state.reset();
        assert_eq!(state, SubmissionState::default());
    }

    #[test]
    fn validation_rejection_is_shown_inline() {
        let mut state = SubmissionState::default();
        state.reject(&FormError::InvalidEmail);
        assert_eq!(state.error.as_deref(), Some("Please enter a valid email address."));
        assert!(!state.is_submitting);
    }
}
