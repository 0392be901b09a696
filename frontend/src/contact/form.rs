use log::{error, info, warn};
use thiserror::Error;

use crate::config::EMAIL_PATTERN;
use crate::contact::sink::SubmissionSink;

pub const SUCCESS_NOTICE: &str =
    "Merci ! Votre messagerie va s'ouvrir pour finaliser l'envoi de votre demande.";

/// Lead data typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Company,
    Phone,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Company,
        Field::Phone,
        Field::Email,
        Field::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nom",
            Field::Company => "Société",
            Field::Phone => "Téléphone",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Company)
    }
}

impl ContactRequest {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// What the visitor sees when a submission does not go through.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Veuillez remplir tous les champs obligatoires.")]
    MissingFields,
    #[error("Veuillez saisir une adresse email valide.")]
    InvalidEmail,
    #[error("Une erreur est survenue. Veuillez nous contacter directement au 01 23 45 67 89.")]
    SubmissionFailure,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Error(FormError),
    Success(&'static str),
}

/// Checks run in order, the first failure wins. Phone only has to be present.
pub fn validate(request: &ContactRequest) -> Result<(), FormError> {
    let missing = Field::ALL
        .iter()
        .filter(|f| f.is_required())
        .any(|f| request.get(*f).trim().is_empty());
    if missing {
        return Err(FormError::MissingFields);
    }

    if !EMAIL_PATTERN.is_match(request.email.trim()) {
        return Err(FormError::InvalidEmail);
    }

    Ok(())
}

/// Handed out on success; only the latest one may clear the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket(u64);

#[derive(Debug, Default)]
pub struct ContactForm {
    request: ContactRequest,
    status: SubmissionStatus,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &ContactRequest {
        &self.request
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn update(&mut self, field: Field, value: String) {
        self.request.set(field, value);
        // an edit counts as a retry, the old error no longer applies
        if matches!(self.status, SubmissionStatus::Error(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Option<ResetTicket> {
        if let Err(kind) = validate(&self.request) {
            warn!("Contact form rejected: {:?}", kind);
            self.status = SubmissionStatus::Error(kind);
            return None;
        }

        match sink.submit(&self.request) {
            Ok(()) => {
                info!("Contact request handed off for {}", self.request.name);
                self.generation += 1;
                self.status = SubmissionStatus::Success(SUCCESS_NOTICE);
                Some(ResetTicket(self.generation))
            }
            Err(e) => {
                error!("Contact hand-off failed: {}", e);
                self.status = SubmissionStatus::Error(FormError::SubmissionFailure);
                None
            }
        }
    }

    /// Clears the form, unless a later submission has superseded `ticket`.
    pub fn reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.request = ContactRequest::default();
        self.status = SubmissionStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::sink::SubmitError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        seen: RefCell<Vec<ContactRequest>>,
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&self, request: &ContactRequest) -> Result<(), SubmitError> {
            self.seen.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn submit(&self, _request: &ContactRequest) -> Result<(), SubmitError> {
            Err(SubmitError::NoWindow)
        }
    }

    fn jean() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(Field::Name, "Jean".into());
        form.update(Field::Phone, "0600000000".into());
        form.update(Field::Email, "jean@test.fr".into());
        form.update(Field::Message, "Bonjour".into());
        form
    }

    #[test]
    fn each_missing_required_field_is_rejected() {
        for field in Field::ALL.iter().copied().filter(|f| f.is_required()) {
            let mut form = jean();
            form.update(field, String::new());
            let sink = RecordingSink::default();

            assert_eq!(form.submit(&sink), None);
            assert_eq!(form.status(), &SubmissionStatus::Error(FormError::MissingFields));
            assert!(sink.seen.borrow().is_empty(), "{:?} blank still reached the sink", field);
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = jean();
        form.update(Field::Message, "   \n".into());
        form.submit(&RecordingSink::default());
        assert_eq!(form.status(), &SubmissionStatus::Error(FormError::MissingFields));
    }

    #[test]
    fn missing_fields_reported_before_bad_email() {
        let mut form = jean();
        form.update(Field::Email, "nope".into());
        form.update(Field::Name, String::new());
        form.submit(&RecordingSink::default());
        assert_eq!(form.status(), &SubmissionStatus::Error(FormError::MissingFields));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["jean.test.fr", "jean@testfr", "jean@", "@test.fr", "je an@test.fr", "jean@test."] {
            let request = ContactRequest {
                email: email.to_string(),
                ..jean().request().clone()
            };
            assert_eq!(validate(&request), Err(FormError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn company_is_optional_and_phone_is_free_form() {
        let mut request = jean().request().clone();
        request.phone = "appelez-moi le matin".into();
        assert_eq!(validate(&request), Ok(()));
    }

    #[test]
    fn valid_request_reaches_sink_and_succeeds() {
        let mut form = jean();
        let sink = RecordingSink::default();

        assert!(form.submit(&sink).is_some());
        assert_eq!(form.status(), &SubmissionStatus::Success(SUCCESS_NOTICE));
        assert_eq!(sink.seen.borrow().len(), 1);
        assert_eq!(sink.seen.borrow()[0].name, "Jean");
    }

    #[test]
    fn sink_failure_becomes_submission_failure() {
        let mut form = jean();
        assert_eq!(form.submit(&FailingSink), None);
        assert_eq!(form.status(), &SubmissionStatus::Error(FormError::SubmissionFailure));
        assert!(FormError::SubmissionFailure.to_string().contains("01 23 45 67 89"));
        // fields survive so the visitor can retry
        assert_eq!(form.request().name, "Jean");
    }

    #[test]
    fn reset_after_success_clears_everything() {
        let mut form = jean();
        let ticket = form.submit(&RecordingSink::default()).unwrap();

        assert!(form.reset(ticket));
        assert_eq!(form.request(), &ContactRequest::default());
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut form = jean();
        let sink = RecordingSink::default();
        let first = form.submit(&sink).unwrap();
        let second = form.submit(&sink).unwrap();

        assert!(!form.reset(first));
        assert_eq!(form.request().name, "Jean");
        assert!(form.reset(second));
        assert_eq!(form.request().name, "");
    }

    #[test]
    fn resubmitting_invalid_input_gives_same_error() {
        let mut form = jean();
        form.update(Field::Email, "jean-at-test.fr".into());
        let sink = RecordingSink::default();

        form.submit(&sink);
        let first = form.status().clone();
        form.submit(&sink);
        assert_eq!(form.status(), &first);
        assert_eq!(first, SubmissionStatus::Error(FormError::InvalidEmail));
    }

    #[test]
    fn editing_one_field_leaves_the_rest() {
        let mut form = jean();
        let before = form.request().clone();
        form.update(Field::Company, "BTP Constructions".into());

        for field in Field::ALL.iter().copied().filter(|f| *f != Field::Company) {
            assert_eq!(form.request().get(field), before.get(field));
        }
        assert_eq!(form.request().company, "BTP Constructions");
    }

    #[test]
    fn edit_clears_error_but_not_success() {
        let mut form = ContactForm::new();
        form.submit(&RecordingSink::default());
        assert!(matches!(form.status(), SubmissionStatus::Error(_)));
        form.update(Field::Name, "J".into());
        assert_eq!(form.status(), &SubmissionStatus::Idle);

        let mut form = jean();
        form.submit(&RecordingSink::default());
        form.update(Field::Message, "Autre chose".into());
        assert_eq!(form.status(), &SubmissionStatus::Success(SUCCESS_NOTICE));
    }
}
