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
use crate::details::STATUS_DETAILS_KEY;
use crate::error::Error;
use crate::metadata::Metadata;
use crate::rest::RequestError;
use crate::rpc::Code;
use bytes::Bytes;
use http::StatusCode;

/// The status of a failed RPC.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RpcStatus {
    /// The status code.
    pub code: Code,

    /// A short, developer-facing, description of the problem.
    pub detail: String,
}

impl RpcStatus {
    /// Creates a status from its code and detail message.
    pub fn new<T: Into<Code>, D: Into<String>>(code: T, detail: D) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }
}

/// The fields exposed by a raw failure.
///
/// [NormalizedError][crate::NormalizedError] classifies a failure by the
/// fields it exposes, never by its concrete type. A failure with an RPC status
/// and trailers is RPC-style. A failure with an HTTP status code and a request
/// error is REST-style.
///
/// This crate implements the trait for [tonic::Status] and
/// [ApiError][crate::rest::ApiError]. Applications can implement it for other
/// types. Only [message()][FailureShape::message] is required, the other
/// methods return `None` unless overridden.
pub trait FailureShape {
    /// The human-readable message.
    fn message(&self) -> String;

    /// The RPC status, for failures following the RPC conventions.
    fn rpc_status(&self) -> Option<RpcStatus> {
        None
    }

    /// The trailing metadata, including any `grpc-status-details-bin` entry.
    fn trailers(&self) -> Option<Metadata> {
        None
    }

    /// The name of the service that returned a REST error.
    fn service_name(&self) -> Option<String> {
        None
    }

    /// The HTTP status code of a REST error.
    fn http_status_code(&self) -> Option<StatusCode> {
        None
    }

    /// The parsed body of a REST error response.
    fn request_error(&self) -> Option<RequestError> {
        None
    }

    /// The component that raised a REST error, if known.
    fn error_source(&self) -> Option<String> {
        None
    }

    /// A link to the documentation for a REST error, if any.
    fn help_link(&self) -> Option<String> {
        None
    }
}

impl FailureShape for tonic::Status {
    fn message(&self) -> String {
        tonic::Status::message(self).to_string()
    }

    fn rpc_status(&self) -> Option<RpcStatus> {
        Some(RpcStatus::new(self.code(), tonic::Status::message(self)))
    }

    fn trailers(&self) -> Option<Metadata> {
        // tonic removes the details trailer from the metadata.
        let mut trailers = Metadata::from(self.metadata());
        if !self.details().is_empty() && !trailers.contains_key(STATUS_DETAILS_KEY) {
            trailers.append(STATUS_DETAILS_KEY, Bytes::copy_from_slice(self.details()));
        }
        Some(trailers)
    }
}

/// A failure, classified by the convention that produced it.
#[derive(Clone, Debug)]
pub(crate) enum Failure {
    Rest(RestFailure),
    Rpc(RpcFailure),
}

#[derive(Clone, Debug)]
pub(crate) struct RestFailure {
    pub service_name: String,
    pub http_status_code: StatusCode,
    pub error: RequestError,
    pub error_source: Option<String>,
    pub help_link: Option<String>,
}

#[derive(Clone, Debug)]
pub(crate) struct RpcFailure {
    pub status: RpcStatus,
    pub trailers: Metadata,
}

impl Failure {
    pub(crate) fn classify<T: FailureShape + ?Sized>(raw: &T) -> Result<Self> {
        if let (Some(status), Some(trailers)) = (raw.rpc_status(), raw.trailers()) {
            return Ok(Failure::Rpc(RpcFailure { status, trailers }));
        }
        if let (Some(http_status_code), Some(error)) = (raw.http_status_code(), raw.request_error())
        {
            return Ok(Failure::Rest(RestFailure {
                service_name: raw.service_name().unwrap_or_default(),
                http_status_code,
                error,
                error_source: raw.error_source(),
                help_link: raw.help_link(),
            }));
        }
        Err(Error::unrecognized())
    }

    pub(crate) fn is_rpc_style(&self) -> bool {
        matches!(self, Failure::Rpc(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model;
    use anyhow::Result;
    use prost::Message;
    use tonic::metadata::MetadataValue;

    mockall::mock! {
        #[derive(Debug)]
        Raw {}

        impl FailureShape for Raw {
            fn message(&self) -> String;
            fn rpc_status(&self) -> Option<RpcStatus>;
            fn trailers(&self) -> Option<Metadata>;
            fn service_name(&self) -> Option<String>;
            fn http_status_code(&self) -> Option<StatusCode>;
            fn request_error(&self) -> Option<RequestError>;
            fn error_source(&self) -> Option<String>;
            fn help_link(&self) -> Option<String>;
        }
    }

    fn expect_rest_fields(mock: &mut MockRaw) {
        mock.expect_service_name()
            .return_const(Some("storage".to_string()));
        mock.expect_http_status_code()
            .return_const(Some(StatusCode::FORBIDDEN));
        mock.expect_request_error()
            .return_const(Some(RequestError::default()));
        mock.expect_error_source().returning(|| None);
        mock.expect_help_link().returning(|| None);
    }

    #[test]
    fn classify_rpc() -> Result<()> {
        let mut mock = MockRaw::new();
        mock.expect_rpc_status()
            .return_const(Some(RpcStatus::new(Code::NotFound, "not found")));
        mock.expect_trailers().return_const(Some(Metadata::new()));
        let got = Failure::classify(&mock)?;
        assert!(got.is_rpc_style(), "{got:?}");
        assert!(
            matches!(&got, Failure::Rpc(f) if f.status.code == Code::NotFound),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn classify_rpc_wins() -> Result<()> {
        let mut mock = MockRaw::new();
        mock.expect_rpc_status()
            .return_const(Some(RpcStatus::default()));
        mock.expect_trailers().return_const(Some(Metadata::new()));
        expect_rest_fields(&mut mock);
        let got = Failure::classify(&mock)?;
        assert!(got.is_rpc_style(), "{got:?}");
        Ok(())
    }

    #[test]
    fn classify_rest() -> Result<()> {
        let mut mock = MockRaw::new();
        mock.expect_rpc_status().returning(|| None);
        mock.expect_trailers().returning(|| None);
        expect_rest_fields(&mut mock);
        let got = Failure::classify(&mock)?;
        assert!(!got.is_rpc_style(), "{got:?}");
        assert!(
            matches!(&got, Failure::Rest(f) if f.service_name == "storage" && f.http_status_code == StatusCode::FORBIDDEN),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn classify_status_without_trailers() -> Result<()> {
        let mut mock = MockRaw::new();
        mock.expect_rpc_status()
            .return_const(Some(RpcStatus::default()));
        mock.expect_trailers().returning(|| None);
        expect_rest_fields(&mut mock);
        let got = Failure::classify(&mock)?;
        assert!(!got.is_rpc_style(), "{got:?}");
        Ok(())
    }

    #[test]
    fn classify_unrecognized() {
        let mut mock = MockRaw::new();
        mock.expect_rpc_status().returning(|| None);
        mock.expect_trailers().return_const(Some(Metadata::new()));
        mock.expect_http_status_code()
            .return_const(Some(StatusCode::BAD_REQUEST));
        mock.expect_request_error().returning(|| None);
        let err = Failure::classify(&mock).unwrap_err();
        assert!(err.is_unrecognized(), "{err:?}");
    }

    #[test]
    fn tonic_status() -> Result<()> {
        let envelope = model::Status {
            code: Code::PermissionDenied as i32,
            message: "denied".into(),
            details: Vec::new(),
        };
        let mut status = tonic::Status::with_details(
            tonic::Code::PermissionDenied,
            "denied",
            envelope.encode_to_vec().into(),
        );
        status
            .metadata_mut()
            .insert("x-goog-request-id", MetadataValue::from_static("abc123"));

        assert_eq!(FailureShape::message(&status), "denied");
        assert_eq!(
            status.rpc_status(),
            Some(RpcStatus::new(Code::PermissionDenied, "denied"))
        );
        let trailers = status.trailers().unwrap();
        assert_eq!(
            trailers.get(STATUS_DETAILS_KEY),
            Some(&Bytes::from(envelope.encode_to_vec()))
        );
        assert_eq!(
            trailers.get("x-goog-request-id"),
            Some(&Bytes::from_static(b"abc123"))
        );
        assert_eq!(status.http_status_code(), None);
        assert_eq!(status.request_error(), None);
        Ok(())
    }

    #[test]
    fn tonic_status_without_details() {
        let status = tonic::Status::not_found("missing");
        let trailers = status.trailers().unwrap();
        assert!(trailers.is_empty(), "{trailers:?}");
        assert!(Failure::classify(&status).is_ok_and(|f| f.is_rpc_style()));
    }
}
