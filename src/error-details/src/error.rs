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

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error returned by the functions in this crate.
///
/// Normalizing a failed call never fails the call a second time, but some
/// operations on a [NormalizedError][crate::NormalizedError] are partial. This
/// type offers a series of predicates to determine what went wrong.
///
/// # Example
/// ```
/// use google_cloud_error_details::{NormalizedError, Options};
/// # use google_cloud_error_details::rest::{ApiError, RequestError};
/// # let raw = ApiError::new("storage", http::StatusCode::FORBIDDEN, RequestError::default());
/// let normalized = NormalizedError::with_options(&raw, &Options::default())?;
/// match normalized.help() {
///     Ok(Some(help)) => println!("see {help:?}"),
///     Ok(None) => println!("the service did not include any links"),
///     Err(e) if e.is_invalid_operation() => println!("REST errors have no trailers: {e}"),
///     Err(e) => println!("cannot decode the error details: {e}"),
/// }
/// # Ok::<(), google_cloud_error_details::Error>(())
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing an operation that is not available for
    /// the classified failure.
    ///
    /// # Example
    /// ```
    /// use google_cloud_error_details::Error;
    /// let error = Error::invalid_operation("not an RPC-style failure");
    /// assert!(error.is_invalid_operation());
    /// ```
    pub fn invalid_operation<T: Into<String>>(message: T) -> Self {
        Self {
            kind: ErrorKind::InvalidOperation(message.into()),
            source: None,
        }
    }

    /// The operation does not apply to this kind of failure.
    ///
    /// # Troubleshooting
    ///
    /// The structured error details are only available for RPC-style failures,
    /// where the service returns them in the `grpc-status-details-bin`
    /// trailer. Check [is_rpc_style()][crate::NormalizedError::is_rpc_style]
    /// before calling the detail decoders, or use
    /// [error()][crate::NormalizedError::error] to examine REST-style
    /// failures.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidOperation(_))
    }

    /// Creates an error representing a failure that matches neither the
    /// REST-style nor the RPC-style conventions.
    ///
    /// # Example
    /// ```
    /// use google_cloud_error_details::Error;
    /// let error = Error::unrecognized();
    /// assert!(error.is_unrecognized());
    /// ```
    pub fn unrecognized() -> Self {
        Self {
            kind: ErrorKind::Unrecognized,
            source: None,
        }
    }

    /// The raw failure exposes neither an RPC status with trailers, nor an
    /// HTTP status code with a request error.
    ///
    /// # Troubleshooting
    ///
    /// This indicates the failure did not come from a Google Cloud service.
    /// For example, the connection may have failed before any response was
    /// received. Handle such errors directly.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self.kind, ErrorKind::Unrecognized)
    }

    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_error_details::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The error details could not be deserialized.
    ///
    /// # Troubleshooting
    ///
    /// The bytes in the `grpc-status-details-bin` trailer, or the payload of
    /// one of its entries, are not a valid encoding of the expected message.
    /// This is never reported when the details are simply missing. Use
    /// `format!("{:?}", ...)` to examine the error as it includes the
    /// original problem.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_error_details::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The pretty-printed message could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::InvalidOperation(m), _) => write!(f, "invalid operation: {m}"),
            (ErrorKind::Unrecognized, _) => write!(
                f,
                "the failure is neither a REST-style nor an RPC-style error"
            ),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the error details {e}")
            }
            (ErrorKind::Serialization, Some(e)) => {
                write!(f, "cannot serialize the error details {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn StdError)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    InvalidOperation(String),
    Unrecognized,
    Deserialization,
    Serialization,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_operation() {
        let error = Error::invalid_operation("not an RPC-style failure");
        assert!(error.is_invalid_operation(), "{error:?}");
        assert!(!error.is_unrecognized(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        let fmt = error.to_string();
        assert!(fmt.contains("not an RPC-style failure"), "{fmt}");
    }

    #[test]
    fn unrecognized() {
        let error = Error::unrecognized();
        assert!(error.is_unrecognized(), "{error:?}");
        assert!(!error.is_invalid_operation(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        let fmt = error.to_string();
        assert!(fmt.contains("neither a REST-style nor an RPC-style"), "{fmt}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser("test-only");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        let source = error.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("test-only"));
        let fmt = error.to_string();
        assert!(fmt.contains("cannot deserialize"), "{fmt}");
        assert!(fmt.contains("test-only"), "{fmt}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("test-only");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        let fmt = error.to_string();
        assert!(fmt.contains("cannot serialize"), "{fmt}");
    }
}
