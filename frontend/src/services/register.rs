//! Registration submission over HTTP.
//!
//! The musician form posts its payload as `multipart/form-data` (the browser
//! sets the boundary). The band form has no endpoint yet and only logs what
//! it would send.

use bandconnect::config::MUSICIAN_REGISTER_PATH;
use bandconnect::{
    FormKind, LogTransport, PayloadPart, RegistrationPayload, SubmitError, SubmitResult, Transport,
};
use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{AbortSignal, File, FormData};

use crate::API_BASE_URL;

/// Join an API base URL and an endpoint path.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Best-effort message out of a JS exception.
fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Convert a payload into browser `FormData`, in field order.
pub fn to_form_data(payload: RegistrationPayload<File>) -> SubmitResult<FormData> {
    let form_data = FormData::new().map_err(|e| {
        SubmitError::Network(format!("Failed to create FormData: {}", js_error_message(&e)))
    })?;

    for (key, part) in payload.into_parts() {
        let appended = match part {
            PayloadPart::Text(value) => form_data.append_with_str(&key, &value),
            PayloadPart::File(upload) => {
                form_data.append_with_blob_and_filename(&key, &upload.handle, &upload.name)
            }
        };
        appended.map_err(|e| {
            SubmitError::Network(format!("Failed to append {}: {}", key, js_error_message(&e)))
        })?;
    }

    Ok(form_data)
}

/// Multipart POST to a registration endpoint.
pub struct HttpTransport {
    url: String,
    abort: Option<AbortSignal>,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            abort: None,
        }
    }

    /// Cancel the request when `signal` fires.
    pub fn with_abort_signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.abort = signal;
        self
    }

    fn is_aborted(&self) -> bool {
        self.abort.as_ref().is_some_and(AbortSignal::aborted)
    }
}

impl Transport<File> for HttpTransport {
    async fn send(&self, payload: RegistrationPayload<File>) -> SubmitResult<Value> {
        let form_data = to_form_data(payload)?;

        let request = Request::post(&self.url)
            .abort_signal(self.abort.as_ref())
            .body(form_data)
            .map_err(|e| SubmitError::Network(format!("Failed to build request: {}", e)))?;

        log::debug!("📤 POST {}", self.url);

        let response = request.send().await.map_err(|e| {
            if self.is_aborted() {
                SubmitError::Aborted
            } else {
                SubmitError::Network(e.to_string())
            }
        })?;

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        read_response(response.status(), response.ok(), &body)
    }
}

/// Turn a registration response into the submission outcome.
///
/// Any non-2xx status fails with its body as the reason; a 2xx body must be JSON.
pub fn read_response(status: u16, ok: bool, body: &str) -> SubmitResult<Value> {
    if !ok {
        return Err(SubmitError::Http {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| SubmitError::Decode(e.to_string()))
}

/// Transport used by a registration form.
pub enum RegistrationTransport {
    Http(HttpTransport),
    Log(LogTransport),
}

impl RegistrationTransport {
    /// Transport for `kind`, cancelled by `abort` where it goes over the network.
    pub fn for_kind(kind: FormKind, abort: Option<AbortSignal>) -> Self {
        match kind {
            FormKind::Musician => {
                let url = endpoint_url(API_BASE_URL, MUSICIAN_REGISTER_PATH);
                RegistrationTransport::Http(HttpTransport::new(url).with_abort_signal(abort))
            }
            FormKind::Band => RegistrationTransport::Log(LogTransport),
        }
    }
}

impl Transport<File> for RegistrationTransport {
    async fn send(&self, payload: RegistrationPayload<File>) -> SubmitResult<Value> {
        match self {
            RegistrationTransport::Http(http) => http.send(payload).await,
            RegistrationTransport::Log(stub) => stub.send(payload).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_slashes() {
        assert_eq!(
            endpoint_url("http://localhost:3000/api/", "/register-musician"),
            "http://localhost:3000/api/register-musician"
        );
        assert_eq!(
            endpoint_url("http://localhost:3000/api", "register-musician"),
            "http://localhost:3000/api/register-musician"
        );
    }

    #[test]
    fn test_read_response_success() {
        let value = read_response(200, true, r#"{"ok":true}"#).unwrap();
        assert_eq!(value["ok"], true);
    }

    #[test]
    fn test_read_response_server_error() {
        let err = read_response(500, false, "database down").unwrap_err();
        match &err {
            SubmitError::Http { status, body } => {
                assert_eq!(*status, 500);
                assert_eq!(body, "database down");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
        assert_eq!(err.to_string(), "Server error (500): database down");
    }

    #[test]
    fn test_read_response_rejects_non_json_body() {
        let err = read_response(200, true, "<html>ok</html>").unwrap_err();
        assert!(matches!(err, SubmitError::Decode(_)));
    }
}
