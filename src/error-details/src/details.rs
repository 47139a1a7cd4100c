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

//! Decodes error details from the trailers of an RPC.

use crate::Result;
use crate::error::Error;
use crate::metadata::Metadata;
use crate::model;
use prost::Message;

/// The trailer carrying the binary `google.rpc.Status` envelope.
pub const STATUS_DETAILS_KEY: &str = "grpc-status-details-bin";

/// A message type that services return as an error detail.
///
/// All the types in [model][crate::model], other than `Status`, implement
/// this trait. Applications rarely need to implement it, but may do so to
/// decode custom detail types with
/// [NormalizedError::detail()][crate::NormalizedError::detail].
pub trait Detail: Message + prost::Name + Default + Sized {
    /// The trailer used by older services to return this detail on its own.
    ///
    /// For example, `google.rpc.help-bin` for `google.rpc.Help`.
    fn legacy_key() -> String {
        format!("{}-bin", Self::full_name().to_ascii_lowercase())
    }
}

impl Detail for model::BadRequest {}
impl Detail for model::DebugInfo {}
impl Detail for model::ErrorInfo {}
impl Detail for model::Help {}
impl Detail for model::LocalizedMessage {}
impl Detail for model::PreconditionFailure {}
impl Detail for model::QuotaFailure {}
impl Detail for model::RequestInfo {}
impl Detail for model::ResourceInfo {}
impl Detail for model::RetryInfo {}

/// Returns true if `type_url` names the message `T`, in any domain.
pub(crate) fn is_type<T: prost::Name>(type_url: &str) -> bool {
    let name = match type_url.rsplit_once('/') {
        Some((_, name)) => name,
        None => type_url,
    };
    name == T::full_name()
}

/// Decodes the `google.rpc.Status` envelope, if the trailers have one.
///
/// Only the first value is used if the trailer repeats. A trailer that was
/// received but could not be decoded is a deserialization error.
pub(crate) fn envelope(trailers: &Metadata) -> Result<Option<model::Status>> {
    match trailers.get(STATUS_DETAILS_KEY) {
        Some(v) => model::Status::decode(v.as_ref())
            .map(Some)
            .map_err(Error::deser),
        None if trailers.is_invalid(STATUS_DETAILS_KEY) => Err(undecodable(STATUS_DETAILS_KEY)),
        None => Ok(None),
    }
}

/// Finds the first detail of type `T`.
///
/// Falls back to the legacy per-type trailer when there is no envelope.
pub(crate) fn find<T: Detail>(trailers: &Metadata) -> Result<Option<T>> {
    if let Some(status) = envelope(trailers)? {
        return first_match(&status.details);
    }
    let key = T::legacy_key();
    match trailers.get(&key) {
        None if trailers.is_invalid(&key) => Err(undecodable(&key)),
        None => Ok(None),
        Some(v) => {
            tracing::debug!("using legacy error detail trailer {key}");
            T::decode(v.as_ref()).map(Some).map_err(Error::deser)
        }
    }
}

fn undecodable(key: &str) -> Error {
    Error::deser(format!("the {key} trailer is not valid base64"))
}

fn first_match<T: Detail>(details: &[prost_types::Any]) -> Result<Option<T>> {
    details
        .iter()
        .find(|any| is_type::<T>(&any.type_url))
        .map(|any| T::decode(any.value.as_slice()).map_err(Error::deser))
        .transpose()
}
