use async_trait::async_trait;
use std::sync::Arc;

use super::ports::incoming::{SendContactEmailError, SendContactEmailUseCase};
use super::ports::outgoing::EmailSender;
use crate::shared::validation::ContactData;

pub struct ContactEmailService {
    sender: Arc<dyn EmailSender>,
    recipient: Option<String>,
}

impl ContactEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: Option<String>) -> Self {
        Self { sender, recipient }
    }
}

/// Escapes a user-supplied value for interpolation into the HTML body.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_body(message: &ContactData) -> String {
    format!(
        "<h2>New contact form submission</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Subject:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>",
        escape_html(&message.name),
        escape_html(&message.email),
        escape_html(&message.subject),
        escape_html(&message.message).replace('\n', "<br>"),
    )
}

#[async_trait]
impl SendContactEmailUseCase for ContactEmailService {
    async fn execute(&self, message: ContactData) -> Result<(), SendContactEmailError> {
        // Fail closed when unconfigured rather than dropping mail silently.
        let recipient = self
            .recipient
            .as_deref()
            .ok_or(SendContactEmailError::MissingRecipient)?;

        let subject = format!("Portfolio contact: {}", message.subject);
        let body = render_body(&message);

        self.sender
            .send_email(recipient, &message.email, &subject, &body)
            .await
            .map_err(SendContactEmailError::SendFailed)
    }
}
