use std::sync::Arc;

use model::contact::Contact;
use model::signup::SignupEvent;
use repository::contact::ContactStore;
use sendgrid::{Mailer, Message};
use tokio::task::JoinHandle;

/// Sends the welcome email and records the contact for one signup.
///
/// The contact write decides the outcome of an invocation. The welcome email is
/// best-effort: it runs as a detached task and its failures are only logged.
pub struct SignupHandler<M, S> {
    mailer: Arc<M>,
    store: S,
    from_address: String,
    template_id: String,
}

impl<M, S> SignupHandler<M, S>
where
    M: Mailer + 'static,
    S: ContactStore,
{
    pub fn new(mailer: Arc<M>, store: S, from_address: String, template_id: String) -> Self {
        SignupHandler {
            mailer,
            store,
            from_address,
            template_id,
        }
    }

    pub async fn handle(&self, event: SignupEvent) -> Result<String, S::Error> {
        tracing::info!("Signup received for {}", masked(&event.mailaddress));

        // Never joined. Once the response is reported the runtime may freeze the
        // container, and a send still in flight only resumes on the next invocation.
        drop(self.send_welcome_email(self.welcome_message(&event)));

        self.save_contact(&Contact::from(&event)).await?;

        Ok(event.firstname)
    }

    pub fn welcome_message(&self, event: &SignupEvent) -> Message {
        Message::new(
            event.mailaddress.clone(),
            self.from_address.clone(),
            self.template_id.clone(),
        )
        .with_template_data("first_name", event.firstname.clone())
    }

    pub fn send_welcome_email(&self, message: Message) -> JoinHandle<()> {
        let mailer = Arc::clone(&self.mailer);

        tokio::spawn(async move {
            match mailer.send(&message).await {
                Ok(()) => tracing::debug!("Welcome email task finished for {}", masked(&message.to)),
                Err(err) => tracing::error!(
                    "Welcome email to {} could not be sent: {}",
                    masked(&message.to),
                    err
                ),
            }
        })
    }

    pub async fn save_contact(&self, contact: &Contact) -> Result<(), S::Error> {
        match self.store.put(contact).await {
            Ok(Some(previous)) => {
                tracing::info!(
                    "Replaced contact {} (firstname was {:?})",
                    masked(&contact.email),
                    previous.firstname
                );
                Ok(())
            }
            Ok(None) => {
                tracing::info!("Saved new contact {}", masked(&contact.email));
                Ok(())
            }
            Err(err) => {
                tracing::error!("Saving contact {} failed: {}", masked(&contact.email), err);
                Err(err)
            }
        }
    }
}

/// Keeps the first character of the local part and the domain: `a***@example.com`.
fn masked(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => format!("***@{}", domain),
        },
        None => "***".to_string(),
    }
}
