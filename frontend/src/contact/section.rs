use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{self, RESET_DELAY_MS};
use crate::contact::form::{ContactForm, Field, ResetTicket, SubmissionStatus};
use crate::contact::sink::MailtoSink;
use crate::content::{Icon, CONTACT};

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Reset(ResetTicket),
}

pub struct ContactSection {
    form: ContactForm,
    sink: MailtoSink,
    // Dropping the handle cancels the timer, so an unmounted section never resets
    pending_reset: Option<Timeout>,
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(),
            sink: MailtoSink::new(config::recipient_address()),
            pending_reset: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.form.update(field, value);
                true
            }
            ContactMsg::Submit => {
                if let Some(ticket) = self.form.submit(&self.sink) {
                    let link = ctx.link().clone();
                    self.pending_reset = Some(Timeout::new(RESET_DELAY_MS, move || {
                        link.send_message(ContactMsg::Reset(ticket));
                    }));
                }
                true
            }
            ContactMsg::Reset(ticket) => {
                self.pending_reset = None;
                self.form.reset(ticket)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <section id="contact" class="contact-section">
                <div class="contact-grid">
                    <div class="contact-info">
                        <h2>{"Contactez-nous"}</h2>
                        <p>{"Remplissez le formulaire et notre équipe vous recontactera rapidement pour étudier votre projet."}</p>
                        { contact_line(Icon::Phone, "Téléphone", CONTACT.phone) }
                        { contact_line(Icon::Mail, "Email", CONTACT.email) }
                        { contact_line(Icon::MapPin, "Zone d'intervention", CONTACT.area) }
                    </div>

                    <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                        { self.render_status() }
                        { self.render_input(ctx, Field::Name, "text") }
                        { self.render_input(ctx, Field::Company, "text") }
                        { self.render_input(ctx, Field::Phone, "tel") }
                        { self.render_input(ctx, Field::Email, "email") }
                        { self.render_message(ctx) }
                        <button type="submit" class="contact-submit">
                            {"Envoyer ma demande"}
                        </button>
                    </form>
                </div>
            </section>
        }
    }
}

impl ContactSection {
    fn render_status(&self) -> Html {
        match self.form.status() {
            SubmissionStatus::Idle => html! {},
            SubmissionStatus::Error(kind) => html! {
                <div class="form-error">{ kind.to_string() }</div>
            },
            SubmissionStatus::Success(notice) => html! {
                <div class="form-success">{ *notice }</div>
            },
        }
    }

    fn render_input(&self, ctx: &Context<Self>, field: Field, kind: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Edit(field, input.value())
        });

        html! {
            <div class="form-field">
                <label>{ label_text(field) }</label>
                <input
                    type={kind}
                    value={self.form.request().get(field).to_string()}
                    {oninput}
                />
            </div>
        }
    }

    fn render_message(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Message, input.value())
        });

        html! {
            <div class="form-field">
                <label>{ label_text(Field::Message) }</label>
                <textarea
                    rows="4"
                    value={self.form.request().message.clone()}
                    {oninput}
                />
            </div>
        }
    }
}

fn label_text(field: Field) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

fn contact_line(icon: Icon, title: &'static str, value: &'static str) -> Html {
    html! {
        <div class="contact-line">
            <span class="contact-icon">{ icon.glyph() }</span>
            <div>
                <p class="contact-line-title">{ title }</p>
                <p class="contact-line-value">{ value }</p>
            </div>
        </div>
    }
}
