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
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use bytes::Bytes;

/// The suffix of metadata keys carrying binary values.
const BINARY_SUFFIX: &str = "-bin";

// gRPC peers may or may not pad binary header values.
const BINARY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The trailing metadata of an RPC.
///
/// An ordered multimap from lowercase keys to raw values. Binary (`-bin`)
/// values are stored decoded. Keys may repeat, and the values for a key keep
/// the order in which they were received. Binary values that could not be
/// decoded are not stored, but their keys are remembered, see
/// [Metadata::is_invalid].
///
/// # Example
/// ```
/// # use google_cloud_error_details::Metadata;
/// let mut trailers = Metadata::new();
/// trailers.append("x-goog-request-id", "abc123");
/// trailers.append("X-Goog-Request-Id", "def456");
/// assert_eq!(trailers.get("x-goog-request-id").map(|v| v.as_ref()), Some("abc123".as_bytes()));
/// assert_eq!(trailers.get_all("x-goog-request-id").count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(String, Bytes)>,
    invalid: Vec<String>,
}

impl Metadata {
    /// Creates an empty set of trailers.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            invalid: Vec::new(),
        }
    }

    /// Adds a value for `key`, keeping any existing values.
    pub fn append<K, V>(&mut self, key: K, value: V)
    where
        K: AsRef<str>,
        V: Into<Bytes>,
    {
        self.entries
            .push((key.as_ref().to_ascii_lowercase(), value.into()));
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&Bytes> {
        self.get_all(key).next()
    }

    /// Returns all the values for `key`, in the order they were added.
    pub fn get_all<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Bytes> {
        self.entries
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Returns true if `key` has at least one value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if a value for `key` was received but could not be decoded.
    pub fn is_invalid(&self, key: &str) -> bool {
        self.invalid.iter().any(|k| k.eq_ignore_ascii_case(key))
    }

    pub(crate) fn mark_invalid(&mut self, key: &str) {
        if !self.is_invalid(key) {
            self.invalid.push(key.to_ascii_lowercase());
        }
    }

    /// Returns the keys, with repeats, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bytes)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of values, counting repeated keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: AsRef<str>,
    V: Into<Bytes>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut metadata = Self::new();
        iter.into_iter()
            .for_each(|(k, v)| metadata.append(k, v));
        metadata
    }
}

impl From<&tonic::metadata::MetadataMap> for Metadata {
    fn from(value: &tonic::metadata::MetadataMap) -> Self {
        use tonic::metadata::KeyAndValueRef;
        let mut metadata = Self::new();
        for entry in value.iter() {
            match entry {
                KeyAndValueRef::Ascii(k, v) => match v.to_bytes() {
                    Ok(b) => metadata.append(k.as_str(), b),
                    Err(e) => tracing::debug!("skipping metadata entry {}: {e:?}", k.as_str()),
                },
                KeyAndValueRef::Binary(k, v) => match v.to_bytes() {
                    Ok(b) => metadata.append(k.as_str(), b),
                    Err(e) => {
                        tracing::debug!("cannot decode metadata entry {}: {e:?}", k.as_str());
                        metadata.mark_invalid(k.as_str());
                    }
                },
            }
        }
        metadata
    }
}

impl TryFrom<&http::HeaderMap> for Metadata {
    type Error = Error;

    fn try_from(value: &http::HeaderMap) -> Result<Self> {
        let mut metadata = Self::new();
        for (k, v) in value.iter() {
            let key = k.as_str();
            if key.ends_with(BINARY_SUFFIX) {
                let decoded = BINARY_ENGINE.decode(v.as_bytes()).map_err(Error::deser)?;
                metadata.append(key, decoded);
            } else {
                metadata.append(key, Bytes::copy_from_slice(v.as_bytes()));
            }
        }
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use http::HeaderValue;
    use tonic::metadata::{MetadataMap, MetadataValue};

    #[test]
    fn empty() {
        let metadata = Metadata::new();
        assert!(metadata.is_empty());
        assert_eq!(metadata.len(), 0);
        assert_eq!(metadata.get("any"), None);
        assert!(!metadata.contains_key("any"));
        assert!(!metadata.is_invalid("any"));
        assert_eq!(metadata, Metadata::default());
    }

    #[test]
    fn multimap() {
        let mut metadata = Metadata::new();
        metadata.append("Key-A", "a0");
        metadata.append("key-b", "b0");
        metadata.append("key-a", "a1");
        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata.get("key-a"), Some(&Bytes::from_static(b"a0")));
        assert_eq!(metadata.get("KEY-A"), Some(&Bytes::from_static(b"a0")));
        let all = metadata.get_all("key-a").cloned().collect::<Vec<_>>();
        assert_eq!(all, vec![Bytes::from_static(b"a0"), Bytes::from_static(b"a1")]);
        let keys = metadata.keys().collect::<Vec<_>>();
        assert_eq!(keys, vec!["key-a", "key-b", "key-a"]);
        assert!(metadata.contains_key("key-b"));
        assert!(!metadata.contains_key("key-c"));
    }

    #[test]
    fn from_iterator() {
        let metadata = Metadata::from_iter([("a", "1"), ("b", "2")]);
        let got = metadata
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                ("a".to_string(), Bytes::from_static(b"1")),
                ("b".to_string(), Bytes::from_static(b"2")),
            ]
        );
    }

    #[test]
    fn from_tonic() -> Result<()> {
        let mut map = MetadataMap::new();
        map.insert("x-goog-request-id", "abc123".parse()?);
        map.insert_bin(
            "google.rpc.help-bin",
            MetadataValue::from_bytes(&[0x0a, 0x00]),
        );
        let metadata = Metadata::from(&map);
        assert_eq!(metadata.len(), 2);
        assert_eq!(
            metadata.get("x-goog-request-id"),
            Some(&Bytes::from_static(b"abc123"))
        );
        assert_eq!(
            metadata.get("google.rpc.help-bin"),
            Some(&Bytes::from_static(&[0x0a, 0x00]))
        );
        Ok(())
    }

    #[test]
    fn from_tonic_bad_binary() -> Result<()> {
        let mut headers = http::HeaderMap::new();
        headers.insert("grpc-status", HeaderValue::from_static("9"));
        headers.insert("google.rpc.help-bin", HeaderValue::from_static("!!not-base64!!"));
        let map = MetadataMap::from_headers(headers);
        let metadata = Metadata::from(&map);
        assert_eq!(metadata.get("google.rpc.help-bin"), None);
        assert!(metadata.is_invalid("google.rpc.help-bin"), "{metadata:?}");
        assert!(metadata.is_invalid("Google.Rpc.Help-Bin"), "{metadata:?}");
        assert!(!metadata.is_invalid("grpc-status"), "{metadata:?}");
        Ok(())
    }

    #[test]
    fn mark_invalid_once() {
        let mut metadata = Metadata::new();
        metadata.mark_invalid("Test-Bin");
        metadata.mark_invalid("test-bin");
        assert!(metadata.is_invalid("test-bin"));
        assert!(metadata.is_empty());
        assert_ne!(metadata, Metadata::new());
    }

    #[test]
    fn from_http() -> Result<()> {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-goog-request-id", HeaderValue::from_static("abc123"));
        headers.append("test-bin", HeaderValue::from_static("AQID"));
        // Unpadded values are accepted too.
        headers.append("test-bin", HeaderValue::from_static("AQIDBA"));
        let metadata = Metadata::try_from(&headers)?;
        assert_eq!(
            metadata.get("x-goog-request-id"),
            Some(&Bytes::from_static(b"abc123"))
        );
        let bin = metadata.get_all("test-bin").cloned().collect::<Vec<_>>();
        assert_eq!(
            bin,
            vec![
                Bytes::from_static(&[1, 2, 3]),
                Bytes::from_static(&[1, 2, 3, 4])
            ]
        );
        Ok(())
    }

    #[test]
    fn from_http_bad_binary() {
        let mut headers = http::HeaderMap::new();
        headers.insert("test-bin", HeaderValue::from_static("not base64!"));
        let err = Metadata::try_from(&headers).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }
}
