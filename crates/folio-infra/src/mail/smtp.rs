//! SMTP notifier - delivers the owner notice and the sender auto-reply
//! through a STARTTLS relay.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use folio_core::domain::Contact;
use folio_core::ports::{ContactNotifier, NotifyError};

/// SMTP relay settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Address the notifications are sent from.
    pub from_address: String,
    /// Site-owner address receiving the submission summary.
    pub owner_address: String,
}

/// Notifier delivering both contact mails over SMTP.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    owner: Mailbox,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, NotifyError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: parse_mailbox(&config.from_address)?,
            owner: parse_mailbox(&config.owner_address)?,
        })
    }

    fn owner_notice(&self, contact: &Contact) -> Result<Message, NotifyError> {
        let body = format!(
            "New contact message\n\n\
             Name: {}\n\
             Email: {}\n\
             Subject: {}\n\
             IP address: {}\n\n\
             {}\n",
            contact.name,
            contact.email,
            truncate(&contact.subject, 100),
            contact.ip_address.as_deref().unwrap_or("Unknown"),
            truncate(&contact.message, 1000),
        );

        Message::builder()
            .from(self.from.clone())
            .to(self.owner.clone())
            .subject(format!(
                "Portfolio contact: {}",
                truncate(&contact.subject, 100)
            ))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| NotifyError::Message(e.to_string()))
    }

    fn auto_reply(&self, contact: &Contact) -> Result<Message, NotifyError> {
        let to = parse_mailbox(&contact.email)?;
        let body = format!(
            "Hi {},\n\n\
             Thank you for reaching out! I've received your message about \
             \"{}\" and will get back to you as soon as possible, typically \
             within 24-48 hours.\n\n\
             Best regards\n",
            contact.name,
            truncate(&contact.subject, 50),
        );

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Thank you for your message!")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| NotifyError::Message(e.to_string()))
    }
}

#[async_trait]
impl ContactNotifier for SmtpNotifier {
    async fn notify(&self, contact: &Contact) -> Result<(), NotifyError> {
        let owner = self.owner_notice(contact)?;
        let reply = self.auto_reply(contact)?;

        let (owner_sent, reply_sent) =
            tokio::join!(self.transport.send(owner), self.transport.send(reply));

        owner_sent.map_err(|e| NotifyError::Transport(e.to_string()))?;
        reply_sent.map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse()
        .map_err(|_| NotifyError::Address(address.to_string()))
}

/// At most `max` characters, whole characters only.
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
