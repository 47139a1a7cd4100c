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

//! Google Cloud Client Libraries for Rust - Error Details
//!
//! Google Cloud services report errors using one of two conventions. REST/JSON
//! services return an HTTP status code and a JSON error object. RPC services
//! return a [status code][rpc::Code] and trailing metadata. The
//! `grpc-status-details-bin` trailer contains a `google.rpc.Status` message,
//! which carries structured error details such as [model::Help] or
//! [model::BadRequest].
//!
//! This crate normalizes both kinds of failures into a [NormalizedError],
//! which offers a uniform view of the failure and decodes the structured error
//! details on demand.
//!
//! # Example
//! ```
//! use google_cloud_error_details::{NormalizedError, Options};
//! # let status = tonic::Status::not_found("no such bucket");
//! let normalized = NormalizedError::create(&status, false)?;
//! if normalized.is_rpc_style() {
//!     println!("status = {:?}", normalized.status());
//!     if let Some(info) = normalized.error_info()? {
//!         println!("reason = {}", info.reason);
//!     }
//! } else {
//!     println!("{} returned {:?}", normalized.service_name(), normalized.http_status_code());
//! }
//! # Ok::<(), google_cloud_error_details::Error>(())
//! ```
//!
//! Set `GOOGLE_ENABLE_ERROR_DETAIL=true` in the environment to change
//! [NormalizedError::message] into a JSON document including the error
//! details. Use [NormalizedError::with_options] to configure this explicitly.

pub type Result<T> = std::result::Result<T, crate::error::Error>;

mod details;
pub use details::{Detail, STATUS_DETAILS_KEY};

mod error;
pub use error::Error;

mod failure;
pub use failure::{FailureShape, RpcStatus};

mod metadata;
pub use metadata::Metadata;

mod normalized;
pub use normalized::NormalizedError;

mod options;
pub use options::{Options, PRETTY_PRINT_VAR};

pub mod rest;
pub mod rpc;

/// The `google.rpc` error detail messages.
pub mod model {
    include!("generated/protos/rpc/google.rpc.rs");
}
