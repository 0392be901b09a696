use thiserror::Error;

use crate::contact::form::ContactRequest;

const NOT_PROVIDED: &str = "Non renseigné";

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("no recipient address configured")]
    EmptyRecipient,
    #[error("browser window not available")]
    NoWindow,
    #[error("navigation to mail client failed: {0}")]
    Navigation(String),
}

/// Where a validated request goes. The form never looks past this trait,
/// so the mail hand-off can be replaced without touching validation.
pub trait SubmissionSink {
    fn submit(&self, request: &ContactRequest) -> Result<(), SubmitError>;
}

pub fn compose_subject(request: &ContactRequest) -> String {
    format!("Demande de devis - {}", request.name.trim())
}

pub fn compose_body(request: &ContactRequest) -> String {
    let company = match request.company.trim() {
        "" => NOT_PROVIDED,
        company => company,
    };

    format!(
        "Nouvelle demande de devis - AMR Échafaudage\n\
         \n\
         Nom: {}\n\
         Société: {}\n\
         Téléphone: {}\n\
         Email: {}\n\
         \n\
         Message:\n\
         {}\n\
         \n\
         ---\n\
         Cette demande a été envoyée depuis le site web AMR Échafaudage.",
        request.name.trim(),
        company,
        request.phone.trim(),
        request.email.trim(),
        request.message.trim(),
    )
}

pub fn mailto_uri(recipient: &str, request: &ContactRequest) -> Result<String, SubmitError> {
    if recipient.trim().is_empty() {
        return Err(SubmitError::EmptyRecipient);
    }
    Ok(format!(
        "mailto:{}?subject={}&body={}",
        recipient.trim(),
        urlencoding::encode(&compose_subject(request)),
        urlencoding::encode(&compose_body(request)),
    ))
}

type Opener = Box<dyn Fn(&str) -> Result<(), SubmitError>>;

/// Hands the request to the visitor's own mail client through a mailto link.
pub struct MailtoSink {
    recipient: String,
    open: Opener,
}

impl MailtoSink {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self::with_opener(recipient, open_in_browser)
    }

    pub fn with_opener<F>(recipient: impl Into<String>, open: F) -> Self
    where
        F: Fn(&str) -> Result<(), SubmitError> + 'static,
    {
        Self {
            recipient: recipient.into(),
            open: Box::new(open),
        }
    }
}

impl SubmissionSink for MailtoSink {
    fn submit(&self, request: &ContactRequest) -> Result<(), SubmitError> {
        let uri = mailto_uri(&self.recipient, request)?;
        (self.open)(&uri)
    }
}

fn open_in_browser(uri: &str) -> Result<(), SubmitError> {
    let window = web_sys::window().ok_or(SubmitError::NoWindow)?;
    window
        .location()
        .set_href(uri)
        .map_err(|e| SubmitError::Navigation(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn jean() -> ContactRequest {
        ContactRequest {
            name: "Jean".into(),
            company: String::new(),
            phone: "0600000000".into(),
            email: "jean@test.fr".into(),
            message: "Bonjour".into(),
        }
    }

    #[test]
    fn body_follows_template() {
        let body = compose_body(&jean());
        assert_eq!(
            body,
            "Nouvelle demande de devis - AMR Échafaudage\n\nNom: Jean\nSociété: Non renseigné\n\
             Téléphone: 0600000000\nEmail: jean@test.fr\n\nMessage:\nBonjour\n\n---\n\
             Cette demande a été envoyée depuis le site web AMR Échafaudage."
        );
    }

    #[test]
    fn padded_input_is_trimmed_when_composed() {
        let request = ContactRequest {
            name: " Jean ".into(),
            company: "  ".into(),
            email: " jean@test.fr ".into(),
            message: "\nBonjour \n".into(),
            ..jean()
        };
        assert_eq!(compose_body(&request), compose_body(&jean()));
        assert_eq!(compose_subject(&request), "Demande de devis - Jean");

        let uri = mailto_uri("contact@amr-echafaudage.fr", &request).unwrap();
        assert!(uri.contains("subject=Demande%20de%20devis%20-%20Jean&body="));
    }

    #[test]
    fn company_is_kept_when_given() {
        let request = ContactRequest { company: "Rénovation Plus".into(), ..jean() };
        assert!(compose_body(&request).contains("Société: Rénovation Plus\n"));
    }

    #[test]
    fn uri_is_percent_encoded() {
        let uri = mailto_uri("contact@amr-echafaudage.fr", &jean()).unwrap();

        assert!(uri.starts_with("mailto:contact@amr-echafaudage.fr?subject=Demande%20de%20devis%20-%20Jean&body="));
        assert!(uri.contains(&*urlencoding::encode("Nom: Jean")));
        assert!(uri.contains(&*urlencoding::encode("Société: Non renseigné")));
        assert!(uri.contains("Bonjour"));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn message_with_reserved_chars_cannot_break_the_query() {
        let request = ContactRequest { message: "a&body=b?c#d".into(), ..jean() };
        let uri = mailto_uri("contact@amr-echafaudage.fr", &request).unwrap();
        assert_eq!(uri.matches("&body=").count(), 1);
        assert!(!uri.contains('#'));
    }

    #[test]
    fn empty_recipient_is_an_error() {
        assert_eq!(mailto_uri("  ", &jean()), Err(SubmitError::EmptyRecipient));
    }

    #[test]
    fn sink_opens_composed_uri() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let opened = opened.clone();
            MailtoSink::with_opener("contact@amr-echafaudage.fr", move |uri| {
                opened.borrow_mut().push(uri.to_string());
                Ok(())
            })
        };

        sink.submit(&jean()).unwrap();
        let opened = opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0], mailto_uri("contact@amr-echafaudage.fr", &jean()).unwrap());
    }

    #[test]
    fn opener_failure_is_propagated() {
        let sink = MailtoSink::with_opener("contact@amr-echafaudage.fr", |_| {
            Err(SubmitError::Navigation("blocked".into()))
        });
        assert_eq!(
            sink.submit(&jean()),
            Err(SubmitError::Navigation("blocked".into()))
        );
    }
}
