// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Types for failures returned by REST/JSON services.
//!
//! These services return errors as a JSON object in the response body:
//!
//! ```json
//! {
//!   "error": {
//!     "code": 403,
//!     "message": "caller does not have storage.objects.get access",
//!     "status": "PERMISSION_DENIED",
//!     "errors": [{ "domain": "global", "reason": "forbidden", "message": "..." }]
//!   }
//! }
//! ```

use crate::Result;
use crate::error::Error;
use crate::failure::FailureShape;
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// A failure returned by a REST/JSON service.
///
/// # Example
/// ```
/// # use google_cloud_error_details::rest::ApiError;
/// let body = bytes::Bytes::from_static(br#"{"error": {"code": 404, "message": "no such bucket"}}"#);
/// let error = ApiError::from_http_response("storage", http::StatusCode::NOT_FOUND, &body)?;
/// assert_eq!(error.error().message, "no such bucket");
/// # Ok::<(), google_cloud_error_details::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("the {service_name} service returned {http_status_code}: {}", .error.message)]
pub struct ApiError {
    service_name: String,
    http_status_code: StatusCode,
    error: RequestError,
    error_source: Option<String>,
    help_link: Option<String>,
}

impl ApiError {
    /// Creates an error from its parts.
    pub fn new<T: Into<String>>(
        service_name: T,
        http_status_code: StatusCode,
        error: RequestError,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            http_status_code,
            error,
            error_source: None,
            help_link: None,
        }
    }

    /// Creates a new instance from an HTTP error response.
    ///
    /// The body must be a JSON object with a single `error` field.
    pub fn from_http_response<T: Into<String>>(
        service_name: T,
        http_status_code: StatusCode,
        body: &bytes::Bytes,
    ) -> Result<Self> {
        let error = serde_json::from_slice::<ErrorWrapper>(body)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        Ok(Self::new(service_name, http_status_code, error))
    }

    /// Sets the link to the documentation for this error.
    pub fn with_help_link<T: Into<String>>(mut self, v: T) -> Self {
        self.help_link = Some(v.into());
        self
    }

    /// Sets the name of the component that raised the error.
    pub fn with_source<T: Into<String>>(mut self, v: T) -> Self {
        self.error_source = Some(v.into());
        self
    }

    /// The name of the service that returned the error.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// The HTTP status code of the response.
    pub fn http_status_code(&self) -> StatusCode {
        self.http_status_code
    }

    /// The parsed error object.
    pub fn error(&self) -> &RequestError {
        &self.error
    }

    /// The component that raised the error, if known.
    pub fn error_source(&self) -> Option<&str> {
        self.error_source.as_deref()
    }

    /// The link to the documentation for this error.
    ///
    /// Defaults to the first `extendedHelp` in the error list.
    pub fn help_link(&self) -> Option<&str> {
        self.help_link.as_deref().or_else(|| {
            self.error
                .errors
                .iter()
                .map(|e| e.extended_help.as_str())
                .find(|h| !h.is_empty())
        })
    }
}

impl FailureShape for ApiError {
    fn message(&self) -> String {
        self.error.message.clone()
    }

    fn service_name(&self) -> Option<String> {
        Some(self.service_name.clone())
    }

    fn http_status_code(&self) -> Option<StatusCode> {
        Some(self.http_status_code)
    }

    fn request_error(&self) -> Option<RequestError> {
        Some(self.error.clone())
    }

    fn error_source(&self) -> Option<String> {
        self.error_source.clone()
    }

    fn help_link(&self) -> Option<String> {
        ApiError::help_link(self).map(str::to_string)
    }
}

/// The `error` object in a REST error response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RequestError {
    /// The HTTP status code.
    pub code: i32,

    pub message: String,

    /// The name of the canonical status code, e.g. `PERMISSION_DENIED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The individual errors, in the legacy error format.
    pub errors: Vec<SingleError>,

    /// Any error details, as returned by the service.
    pub details: Vec<serde_json::Value>,
}

impl RequestError {
    /// Sets the value for [code][RequestError::code].
    pub fn set_code(mut self, v: i32) -> Self {
        self.code = v;
        self
    }

    /// Sets the value for [message][RequestError::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [status][RequestError::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value for [errors][RequestError::errors].
    pub fn set_errors<T: IntoIterator<Item = SingleError>>(mut self, v: T) -> Self {
        self.errors = v.into_iter().collect();
        self
    }

    /// Sets the value for [details][RequestError::details].
    pub fn set_details<T: IntoIterator<Item = serde_json::Value>>(mut self, v: T) -> Self {
        self.details = v.into_iter().collect();
        self
    }
}

/// One entry in the `errors` list of a REST error response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SingleError {
    pub domain: String,
    pub reason: String,
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extended_help: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub send_report: String,
}

impl SingleError {
    /// Sets the value for [domain][SingleError::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = v.into();
        self
    }

    /// Sets the value for [reason][SingleError::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }

    /// Sets the value for [message][SingleError::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [location][SingleError::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }

    /// Sets the value for [location_type][SingleError::location_type].
    pub fn set_location_type<T: Into<String>>(mut self, v: T) -> Self {
        self.location_type = v.into();
        self
    }

    /// Sets the value for [extended_help][SingleError::extended_help].
    pub fn set_extended_help<T: Into<String>>(mut self, v: T) -> Self {
        self.extended_help = v.into();
        self
    }
}

/// A helper to deserialize the wrapped error.
#[derive(Clone, Debug, Deserialize)]
struct ErrorWrapper {
    error: RequestError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_body() -> bytes::Bytes {
        let body = json!({
            "error": {
                "code": 403,
                "message": "caller does not have storage.objects.get access",
                "status": "PERMISSION_DENIED",
                "errors": [{
                    "domain": "global",
                    "reason": "forbidden",
                    "message": "caller does not have storage.objects.get access",
                    "extendedHelp": "https://cloud.google.com/storage/docs/access-control",
                }],
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                    "reason": "IAM_PERMISSION_DENIED",
                    "domain": "storage.googleapis.com",
                }],
            }
        });
        bytes::Bytes::from(body.to_string())
    }

    #[test]
    fn from_http_response() -> Result<()> {
        let got = ApiError::from_http_response("storage", StatusCode::FORBIDDEN, &sample_body())?;
        assert_eq!(got.service_name(), "storage");
        assert_eq!(got.http_status_code(), StatusCode::FORBIDDEN);
        let want = RequestError::default()
            .set_code(403)
            .set_message("caller does not have storage.objects.get access")
            .set_status("PERMISSION_DENIED")
            .set_errors([SingleError::default()
                .set_domain("global")
                .set_reason("forbidden")
                .set_message("caller does not have storage.objects.get access")
                .set_extended_help("https://cloud.google.com/storage/docs/access-control")])
            .set_details([json!({
                "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                "reason": "IAM_PERMISSION_DENIED",
                "domain": "storage.googleapis.com",
            })]);
        assert_eq!(got.error(), &want);
        assert_eq!(got.error_source(), None);
        Ok(())
    }

    #[test]
    fn from_http_response_minimal() -> Result<()> {
        let body = bytes::Bytes::from_static(br#"{"error": {"message": "try again"}}"#);
        let got = ApiError::from_http_response("compute", StatusCode::SERVICE_UNAVAILABLE, &body)?;
        assert_eq!(got.error(), &RequestError::default().set_message("try again"));
        assert_eq!(got.help_link(), None);
        Ok(())
    }

    #[test]
    fn from_http_response_bad_body() {
        let body = bytes::Bytes::from_static(b"<html>502 Bad Gateway</html>");
        let err = ApiError::from_http_response("storage", StatusCode::BAD_GATEWAY, &body)
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");

        let body = bytes::Bytes::from_static(br#"{"code": 502}"#);
        let err = ApiError::from_http_response("storage", StatusCode::BAD_GATEWAY, &body)
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn help_link() -> Result<()> {
        let got = ApiError::from_http_response("storage", StatusCode::FORBIDDEN, &sample_body())?;
        assert_eq!(
            got.help_link(),
            Some("https://cloud.google.com/storage/docs/access-control")
        );
        let got = got.with_help_link("https://example.com/help");
        assert_eq!(got.help_link(), Some("https://example.com/help"));
        Ok(())
    }

    #[test]
    fn source() {
        let got = ApiError::new("storage", StatusCode::FORBIDDEN, RequestError::default())
            .with_source("google-cloud-storage");
        assert_eq!(got.error_source(), Some("google-cloud-storage"));
    }

    #[test]
    fn display() {
        let got = ApiError::new(
            "storage",
            StatusCode::NOT_FOUND,
            RequestError::default().set_message("no such bucket"),
        );
        let fmt = got.to_string();
        assert!(fmt.contains("storage"), "{fmt}");
        assert!(fmt.contains("404"), "{fmt}");
        assert!(fmt.contains("no such bucket"), "{fmt}");
    }

    #[test]
    fn shape() -> Result<()> {
        let got = ApiError::from_http_response("storage", StatusCode::FORBIDDEN, &sample_body())?
            .with_source("google-cloud-storage");
        assert_eq!(
            FailureShape::message(&got),
            "caller does not have storage.objects.get access"
        );
        assert_eq!(
            FailureShape::service_name(&got),
            Some("storage".to_string())
        );
        assert_eq!(
            FailureShape::http_status_code(&got),
            Some(StatusCode::FORBIDDEN)
        );
        assert_eq!(FailureShape::request_error(&got).as_ref(), Some(got.error()));
        assert_eq!(
            FailureShape::error_source(&got),
            Some("google-cloud-storage".to_string())
        );
        assert_eq!(
            FailureShape::help_link(&got),
            Some("https://cloud.google.com/storage/docs/access-control".to_string())
        );
        assert_eq!(got.rpc_status(), None);
        assert_eq!(got.trailers(), None);
        Ok(())
    }

    #[test]
    fn serialize_skips_empty_fields() -> Result<()> {
        let input = RequestError::default()
            .set_code(400)
            .set_message("bad")
            .set_errors([SingleError::default().set_reason("invalid")]);
        let got = serde_json::to_value(&input)?;
        let want = json!({
            "code": 400,
            "message": "bad",
            "errors": [{"domain": "", "reason": "invalid", "message": ""}],
            "details": [],
        });
        assert_eq!(got, want);
        Ok(())
    }
}
