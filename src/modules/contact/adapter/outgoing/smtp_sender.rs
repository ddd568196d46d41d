use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::modules::contact::application::ports::outgoing::EmailSender;

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, String> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| e.to_string())?
            .credentials(creds)
            .build();

        Ok(Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        })
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self {
            mailer: Box::new(transport),
            from_email: from_email.to_string(),
        }
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(
        &self,
        to: &str,
        reply_to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), String> {
        let email = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(to.parse().map_err(|e| format!("{:?}", e))?)
            .reply_to(reply_to.parse().map_err(|e| format!("{:?}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| e.to_string())?;

        self.mailer.send(email).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockMailer;

    #[async_trait]
    impl Mailer for MockMailer {
        async fn send(&self, _email: Message) -> Result<(), String> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn builds_and_sends_a_well_formed_message() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(MockMailer), "noreply@example.com");

        let result = sender
            .send_email(
                "owner@example.com",
                "visitor@example.com",
                "Hello",
                "<p>Hi</p>",
            )
            .await;

        assert!(result.is_ok(), "Expected Ok, got {:?}", result);
    }

    #[tokio::test]
    async fn invalid_reply_to_never_reaches_the_mailer() {
        struct DummyMailer;

        #[async_trait]
        impl Mailer for DummyMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                panic!("Should not reach mailer with an invalid reply-to");
            }
        }

        let sender = SmtpEmailSender::new_with_mailer(Box::new(DummyMailer), "noreply@example.com");

        let result = sender
            .send_email("owner@example.com", "not-an-email", "Subject", "<p>x</p>")
            .await;

        assert!(result.is_err(), "Expected error from invalid reply-to");
    }

    #[tokio::test]
    async fn invalid_from_address_is_an_error() {
        struct DummyMailer;

        #[async_trait]
        impl Mailer for DummyMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                panic!("Should not reach mailer with an invalid sender");
            }
        }

        let sender = SmtpEmailSender::new_with_mailer(Box::new(DummyMailer), "invalid-from-email");

        let result = sender
            .send_email(
                "owner@example.com",
                "visitor@example.com",
                "Subject",
                "<p>x</p>",
            )
            .await;

        assert!(result.is_err(), "Expected error from invalid 'from' address");
    }
}
