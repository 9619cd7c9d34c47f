//! Submission transports.
//!
//! The form never talks to the network itself. A [`Transport`] takes the
//! assembled [`RegistrationPayload`] and reports the server's JSON answer;
//! [`dispatch`] wires one event through a form and, when the form asks for
//! it, through a transport.

use serde_json::{json, Value};

use crate::error::SubmitResult;
use crate::form::{Effect, Event, RegistrationForm};
use crate::payload::RegistrationPayload;

/// Sends a registration payload somewhere.
#[allow(async_fn_in_trait)]
pub trait Transport<B> {
    /// Send `payload`, returning the decoded JSON response on a 2xx answer.
    async fn send(&self, payload: RegistrationPayload<B>) -> SubmitResult<Value>;
}

/// Transport that only logs the payload and reports success.
///
/// Used where no registration endpoint exists yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTransport;

impl<B> Transport<B> for LogTransport {
    async fn send(&self, payload: RegistrationPayload<B>) -> SubmitResult<Value> {
        log::info!("Registration not transmitted: {}", payload.summary());
        Ok(json!({ "ok": true }))
    }
}

/// Apply `event` to `form`, performing any submission it triggers.
pub async fn dispatch<B, T>(form: &mut RegistrationForm<B>, transport: &T, event: Event<B>)
where
    B: Clone,
    T: Transport<B>,
{
    if let Effect::Send(payload) = form.update(event) {
        let outcome = transport.send(payload).await;
        let _ = form.update(Event::Completed(outcome));
    }
}
