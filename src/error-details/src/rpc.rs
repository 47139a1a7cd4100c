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
use crate::error::Error;
use crate::model;
use prost::Message;

/// The decoded contents of the `grpc-status-details-bin` trailer.
///
/// Each [Status] contains three pieces of data: error code, error message, and
/// error details. The details are decoded eagerly when the [Status] is
/// created, use the detail decoders in
/// [NormalizedError][crate::NormalizedError] to decode a single detail type.
///
/// You can find out more about this error model and how to work with it in the
/// [API Design Guide](https://cloud.google.com/apis/design/errors).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, which should be in English.
    pub message: String,

    /// The error details, in the order they appear in the envelope.
    pub details: Vec<StatusDetails>,
}

impl TryFrom<model::Status> for Status {
    type Error = Error;

    fn try_from(value: model::Status) -> Result<Self> {
        let details = value
            .details
            .iter()
            .map(StatusDetails::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            code: value.code.into(),
            message: value.message,
            details,
        })
    }
}

/// The canonical error codes for Google Cloud APIs.
///
/// See [google.rpc.Code] for the full description of each value, including
/// its HTTP mapping.
///
/// [google.rpc.Code]: https://github.com/googleapis/googleapis/blob/master/google/rpc/code.proto
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Code {
    /// Not an error; returned on success.
    Ok = 0,
    /// The operation was cancelled, typically by the caller.
    Cancelled = 1,
    /// Unknown error.
    #[default]
    Unknown = 2,
    /// The client specified an invalid argument.
    InvalidArgument = 3,
    /// The deadline expired before the operation could complete.
    DeadlineExceeded = 4,
    /// Some requested entity was not found.
    NotFound = 5,
    /// The entity that a client attempted to create already exists.
    AlreadyExists = 6,
    /// The caller does not have permission to execute the specified operation.
    PermissionDenied = 7,
    /// Some resource has been exhausted, such as a per-user quota.
    ResourceExhausted = 8,
    /// The system is not in a state required for the operation's execution.
    FailedPrecondition = 9,
    /// The operation was aborted, typically due to a concurrency issue.
    Aborted = 10,
    /// The operation was attempted past the valid range.
    OutOfRange = 11,
    /// The operation is not implemented or is not supported/enabled.
    Unimplemented = 12,
    /// Internal errors.
    Internal = 13,
    /// The service is currently unavailable.
    Unavailable = 14,
    /// Unrecoverable data loss or corruption.
    DataLoss = 15,
    /// The request does not have valid authentication credentials.
    Unauthenticated = 16,
}

impl Code {
    /// The canonical name of the code, for example `NOT_FOUND`.
    pub fn name(&self) -> &str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            2 => Code::Unknown,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::default(),
        }
    }
}

impl From<tonic::Code> for Code {
    fn from(value: tonic::Code) -> Self {
        Code::from(value as i32)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The type of details associated with [Status].
///
/// Google Cloud RPCs often return a detailed error description. These details
/// can be used to better understand the root cause of the problem.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum StatusDetails {
    BadRequest(model::BadRequest),
    DebugInfo(model::DebugInfo),
    ErrorInfo(model::ErrorInfo),
    Help(model::Help),
    LocalizedMessage(model::LocalizedMessage),
    PreconditionFailure(model::PreconditionFailure),
    QuotaFailure(model::QuotaFailure),
    RequestInfo(model::RequestInfo),
    ResourceInfo(model::ResourceInfo),
    RetryInfo(model::RetryInfo),
    /// An entry with a type this crate does not know about.
    Other(prost_types::Any),
}

impl TryFrom<&prost_types::Any> for StatusDetails {
    type Error = Error;

    fn try_from(value: &prost_types::Any) -> Result<Self> {
        macro_rules! try_convert {
            ($($variant:ident),*) => {
                $(
                    if crate::details::is_type::<model::$variant>(&value.type_url) {
                        let v = model::$variant::decode(value.value.as_slice()).map_err(Error::deser)?;
                        return Ok(StatusDetails::$variant(v));
                    }
                )*
            };
        }

        try_convert!(
            BadRequest,
            DebugInfo,
            ErrorInfo,
            Help,
            LocalizedMessage,
            PreconditionFailure,
            QuotaFailure,
            RequestInfo,
            ResourceInfo,
            RetryInfo
        );

        Ok(StatusDetails::Other(value.clone()))
    }
}
