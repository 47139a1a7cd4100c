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

/// The environment variable enabling the pretty-printed messages.
pub const PRETTY_PRINT_VAR: &str = "GOOGLE_ENABLE_ERROR_DETAIL";

/// Configuration for [NormalizedError][crate::NormalizedError].
///
/// # Example
/// ```
/// # use google_cloud_error_details::Options;
/// let options = Options::default().set_pretty_print(true);
/// assert!(options.pretty_print());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    pretty_print: bool,
}

impl Options {
    /// Reads the configuration from the environment.
    ///
    /// Pretty-printing is enabled if `GOOGLE_ENABLE_ERROR_DETAIL` is exactly
    /// `true`. Any other value, including `TRUE` or `1`, leaves it disabled.
    pub fn from_env() -> Self {
        let pretty_print = std::env::var(PRETTY_PRINT_VAR)
            .map(|v| v == "true")
            .unwrap_or(false);
        Self { pretty_print }
    }

    /// Enables or disables the pretty-printed messages.
    pub fn set_pretty_print(mut self, v: bool) -> Self {
        self.pretty_print = v;
        self
    }

    pub fn pretty_print(&self) -> bool {
        self.pretty_print
    }
}
