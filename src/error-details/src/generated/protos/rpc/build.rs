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

// The detail messages also appear in pretty-printed errors, using the proto3
// JSON field names. `RetryInfo` holds a `Duration`, which has no serde
// support in `prost-types`.
#[cfg(feature = "_generate-protos")]
const JSON_MESSAGES: [&str; 9] = [
    ".google.rpc.BadRequest",
    ".google.rpc.DebugInfo",
    ".google.rpc.ErrorInfo",
    ".google.rpc.Help",
    ".google.rpc.LocalizedMessage",
    ".google.rpc.PreconditionFailure",
    ".google.rpc.QuotaFailure",
    ".google.rpc.RequestInfo",
    ".google.rpc.ResourceInfo",
];

fn main() {
    #[cfg(feature = "_generate-protos")]
    {
        let mut config = prost_build::Config::default();
        config.btree_map([".google.rpc.ErrorInfo.metadata"]);
        for path in JSON_MESSAGES {
            config
                .type_attribute(path, "#[derive(serde::Serialize, serde::Deserialize)]")
                .type_attribute(path, r#"#[serde(default, rename_all = "camelCase")]"#);
        }
        config
            .field_attribute(
                ".google.rpc.BadRequest.FieldViolation.reason",
                r#"#[serde(skip_serializing_if = "::prost::alloc::string::String::is_empty")]"#,
            )
            .field_attribute(
                ".google.rpc.BadRequest.FieldViolation.localized_message",
                r#"#[serde(skip_serializing_if = "::core::option::Option::is_none")]"#,
            )
            .out_dir(".")
            .compile_protos(
                &[
                    "protos/google/rpc/status.proto",
                    "protos/google/rpc/error_details.proto",
                ],
                &["protos"],
            )
            .expect("error compiling protos");
    }
}
