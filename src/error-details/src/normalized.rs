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

use crate::Result;
use crate::details::{self, Detail};
use crate::error::Error;
use crate::failure::{Failure, FailureShape, RpcStatus};
use crate::metadata::Metadata;
use crate::model;
use crate::options::Options;
use crate::rest::{RequestError, SingleError};
use crate::rpc::{self, Code, StatusDetails};
use http::StatusCode;
use serde::Serialize;

static EMPTY_REQUEST_ERROR: RequestError = RequestError {
    code: 0,
    message: String::new(),
    status: None,
    errors: Vec::new(),
    details: Vec::new(),
};

static EMPTY_STATUS: RpcStatus = RpcStatus {
    code: Code::Unknown,
    detail: String::new(),
};

static EMPTY_TRAILERS: Metadata = Metadata::new();

/// A uniform view of a failure returned by a Google Cloud service.
///
/// Services return errors following one of two conventions. REST/JSON
/// services return an HTTP status code and a JSON error object. RPC services
/// return a status code and trailing metadata, where the
/// `grpc-status-details-bin` trailer carries structured error details.
///
/// A `NormalizedError` classifies the failure once, when it is created. The
/// field accessors work for both conventions, returning an empty value when
/// the field does not exist in the convention. The detail decoders, such as
/// [help()][NormalizedError::help], only work for RPC-style failures.
///
/// # Example
/// ```
/// # use google_cloud_error_details::{NormalizedError, Options};
/// # use google_cloud_error_details::model;
/// # use prost::Message;
/// let envelope = model::Status {
///     code: 8,
///     message: "quota exceeded".into(),
///     details: vec![prost_types::Any::from_msg(&model::Help {
///         links: vec![model::help::Link {
///             description: "See quota docs".into(),
///             url: "https://cloud.google.com/docs/quotas".into(),
///         }],
///     }).unwrap()],
/// };
/// let status = tonic::Status::with_details(
///     tonic::Code::ResourceExhausted,
///     "quota exceeded",
///     envelope.encode_to_vec().into(),
/// );
/// let normalized = NormalizedError::with_options(&status, &Options::default())?;
/// assert!(normalized.is_rpc_style());
/// let help = normalized.help()?.unwrap_or_default();
/// assert_eq!(help.links[0].description, "See quota docs");
/// # Ok::<(), google_cloud_error_details::Error>(())
/// ```
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct NormalizedError {
    failure: Failure,
    message: String,
    pretty_print: bool,
}

impl NormalizedError {
    /// Normalizes `raw`, using the environment to configure pretty-printing.
    ///
    /// Pretty-printing is enabled if `pretty_print_override` is true, or if
    /// `GOOGLE_ENABLE_ERROR_DETAIL` is set to `true`. The environment is read
    /// once, in this call.
    pub fn create<T: FailureShape + ?Sized>(raw: &T, pretty_print_override: bool) -> Result<Self> {
        let options = Options::from_env();
        let pretty_print = pretty_print_override || options.pretty_print();
        Self::with_options(raw, &options.set_pretty_print(pretty_print))
    }

    /// Normalizes `raw` using an explicit configuration.
    ///
    /// Fails if `raw` matches neither convention. With pretty-printing
    /// enabled, also fails if the error details in the trailers are malformed.
    pub fn with_options<T: FailureShape + ?Sized>(raw: &T, options: &Options) -> Result<Self> {
        let failure = Failure::classify(raw)?;
        let mut normalized = Self {
            failure,
            message: raw.message(),
            pretty_print: options.pretty_print(),
        };
        if normalized.pretty_print {
            normalized.message = normalized.pretty_message()?;
        }
        tracing::debug!(
            rpc_style = normalized.is_rpc_style(),
            pretty_print = normalized.pretty_print,
            "normalized error"
        );
        Ok(normalized)
    }

    /// Returns true if the failure follows the RPC conventions.
    pub fn is_rpc_style(&self) -> bool {
        self.failure.is_rpc_style()
    }

    /// Returns true if [message()][NormalizedError::message] is a
    /// pretty-printed document.
    pub fn pretty_print(&self) -> bool {
        self.pretty_print
    }

    /// The error message.
    ///
    /// With pretty-printing enabled this is a JSON document including the
    /// original message and the decoded error details.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The name of the service, empty for RPC-style failures.
    pub fn service_name(&self) -> &str {
        match &self.failure {
            Failure::Rest(f) => &f.service_name,
            Failure::Rpc(_) => "",
        }
    }

    /// The HTTP status code, `None` for RPC-style failures.
    pub fn http_status_code(&self) -> Option<StatusCode> {
        match &self.failure {
            Failure::Rest(f) => Some(f.http_status_code),
            Failure::Rpc(_) => None,
        }
    }

    /// The REST error object, empty for RPC-style failures.
    pub fn error(&self) -> &RequestError {
        match &self.failure {
            Failure::Rest(f) => &f.error,
            Failure::Rpc(_) => &EMPTY_REQUEST_ERROR,
        }
    }

    /// The individual errors in the REST error object.
    pub fn errors(&self) -> &[SingleError] {
        &self.error().errors
    }

    /// The component that raised a REST-style failure, if known.
    pub fn error_source(&self) -> Option<&str> {
        match &self.failure {
            Failure::Rest(f) => f.error_source.as_deref(),
            Failure::Rpc(_) => None,
        }
    }

    /// A link to the documentation for a REST-style failure, if any.
    pub fn help_link(&self) -> Option<&str> {
        match &self.failure {
            Failure::Rest(f) => f.help_link.as_deref(),
            Failure::Rpc(_) => None,
        }
    }

    /// The RPC status. REST-style failures return an `UNKNOWN` status with an
    /// empty detail.
    pub fn status(&self) -> &RpcStatus {
        match &self.failure {
            Failure::Rpc(f) => &f.status,
            Failure::Rest(_) => &EMPTY_STATUS,
        }
    }

    /// The code of the [status()][NormalizedError::status].
    pub fn status_code(&self) -> Code {
        self.status().code
    }

    /// The trailing metadata, empty for REST-style failures.
    pub fn trailers(&self) -> &Metadata {
        match &self.failure {
            Failure::Rpc(f) => &f.trailers,
            Failure::Rest(_) => &EMPTY_TRAILERS,
        }
    }

    /// Decodes the first `google.rpc.Help` in the error details.
    pub fn help(&self) -> Result<Option<model::Help>> {
        self.detail()
    }

    /// Decodes the first `google.rpc.ErrorInfo` in the error details.
    pub fn error_info(&self) -> Result<Option<model::ErrorInfo>> {
        self.detail()
    }

    /// Decodes the first `google.rpc.BadRequest` in the error details.
    pub fn bad_request(&self) -> Result<Option<model::BadRequest>> {
        self.detail()
    }

    /// Decodes the first `google.rpc.PreconditionFailure` in the error details.
    pub fn precondition_failure(&self) -> Result<Option<model::PreconditionFailure>> {
        self.detail()
    }

    /// Decodes the first `google.rpc.QuotaFailure` in the error details.
    pub fn quota_failure(&self) -> Result<Option<model::QuotaFailure>> {
        self.detail()
    }

    /// Decodes the first `google.rpc.RetryInfo` in the error details.
    pub fn retry_info(&self) -> Result<Option<model::RetryInfo>> {
        self.detail()
    }

    /// Decodes the first `google.rpc.DebugInfo` in the error details.
    pub fn debug_info(&self) -> Result<Option<model::DebugInfo>> {
        self.detail()
    }

    /// Decodes the first `google.rpc.RequestInfo` in the error details.
    pub fn request_info(&self) -> Result<Option<model::RequestInfo>> {
        self.detail()
    }

    /// Decodes the first `google.rpc.ResourceInfo` in the error details.
    pub fn resource_info(&self) -> Result<Option<model::ResourceInfo>> {
        self.detail()
    }

    /// Decodes the first `google.rpc.LocalizedMessage` in the error details.
    pub fn localized_message(&self) -> Result<Option<model::LocalizedMessage>> {
        self.detail()
    }

    /// Decodes the first error detail of type `T`.
    ///
    /// Returns `Ok(None)` if the trailers have no such detail. Returns an error
    /// if the failure is REST-style, or if the details are malformed.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_error_details::{NormalizedError, model};
    /// # fn sample(normalized: &NormalizedError) -> google_cloud_error_details::Result<()> {
    /// if let Some(info) = normalized.detail::<model::ErrorInfo>()? {
    ///     println!("reason={} domain={}", info.reason, info.domain);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn detail<T: Detail>(&self) -> Result<Option<T>> {
        details::find(self.rpc_trailers()?)
    }

    /// Decodes all the error details, in the order the service sent them.
    ///
    /// Details of unknown types are returned as [StatusDetails::Other]. Only
    /// the `grpc-status-details-bin` envelope is examined.
    pub fn status_details(&self) -> Result<Vec<StatusDetails>> {
        Ok(self
            .envelope()?
            .map(|status| status.details)
            .unwrap_or_default())
    }

    /// Decodes the `grpc-status-details-bin` envelope.
    pub fn envelope(&self) -> Result<Option<rpc::Status>> {
        details::envelope(self.rpc_trailers()?)?
            .map(rpc::Status::try_from)
            .transpose()
    }

    fn rpc_trailers(&self) -> Result<&Metadata> {
        match &self.failure {
            Failure::Rpc(f) => Ok(&f.trailers),
            Failure::Rest(_) => Err(Error::invalid_operation("not an RPC-style failure")),
        }
    }

    fn pretty_message(&self) -> Result<String> {
        match &self.failure {
            Failure::Rpc(_) => to_pretty_json(&RpcDocument {
                message: &self.message,
                help: self.help()?,
                error_info: self.error_info()?,
                bad_request: self.bad_request()?,
            }),
            Failure::Rest(f) => to_pretty_json(&RestDocument {
                message: &self.message,
                service_name: &f.service_name,
                http_status_code: f.http_status_code.as_u16(),
                error: &f.error,
            }),
        }
    }
}

fn to_pretty_json<T: Serialize>(document: &T) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(Error::ser)
}

#[derive(Serialize)]
struct RpcDocument<'a> {
    message: &'a str,
    #[serde(rename = "google.rpc.Help")]
    help: Option<model::Help>,
    #[serde(rename = "google.rpc.ErrorInfo")]
    error_info: Option<model::ErrorInfo>,
    #[serde(rename = "google.rpc.BadRequest")]
    bad_request: Option<model::BadRequest>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RestDocument<'a> {
    message: &'a str,
    service_name: &'a str,
    http_status_code: u16,
    error: &'a RequestError,
}
