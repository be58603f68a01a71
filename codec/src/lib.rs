// Copyright 2015-2020 Capital One Services, LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//
// Uppercase Cloud Function Codec
//

//! Wire types shared between the uppercase function handler and its
//! invocation harness: the invocation event and context, the response
//! shapes, character statistics and validation errors.

#[macro_use]
extern crate serde_derive;

use serde_json::Value;

use std::error::Error;
use std::fmt;

/// The operation label attached to every successful response.
pub const OPERATION_UPPERCASE: &str = "uppercase_conversion";

/// The user attribution used when the invocation context names no user.
pub const UNKNOWN_USER: &str = "unknown";

/// Represents a validation failure of the invocation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The event is not a JSON object.
    NotAMapping,
    /// The event has no usable `text` field.
    MissingOrEmptyText,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAMapping => f.write_str("input must be a dict"),
            ValidationError::MissingOrEmptyText => f.write_str("missing or empty text field"),
        }
    }
}

impl Error for ValidationError {}

/// Represents the invocation event of the uppercase function.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct Request {
    /// The text to transform.
    #[serde(default)]
    pub text: Option<String>,
}

impl Request {
    /// Attempts to build a request from a decoded invocation event.
    ///
    /// The event must be a JSON object carrying a non-empty string `text`
    /// field. A `text` field of any other JSON type counts as missing.
    pub fn from_value(event: &Value) -> Result<Self, ValidationError> {
        if !event.is_object() {
            return Err(ValidationError::NotAMapping);
        }

        let request: Request = serde_json::from_value(event.clone())
            .map_err(|_| ValidationError::MissingOrEmptyText)?;
        match &request.text {
            Some(text) if !text.is_empty() => Ok(request),
            _ => Err(ValidationError::MissingOrEmptyText),
        }
    }

    /// Returns the validated text.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Auxiliary invocation metadata supplied by the hosting platform.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct FunctionContext {
    /// The identifier of the invoking user.
    #[serde(default)]
    pub user: Option<String>,
}

impl FunctionContext {
    /// Returns the invoking user, or a placeholder when absent.
    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(UNKNOWN_USER)
    }
}

/// Character statistics over the original input text.
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Statistics {
    /// Count of characters in the input.
    pub total_length: usize,
    /// Count of Unicode alphabetic characters.
    pub letter_count: usize,
    /// Count of Unicode numeric characters. `char::is_numeric` is wider
    /// than decimal digits: numeric letters and fraction forms (e.g. '½')
    /// count here too.
    pub digit_count: usize,
    /// Count of literal ASCII space characters. Other whitespace is
    /// uncounted.
    pub space_count: usize,
}

impl Statistics {
    /// Measures the specified text in a single pass.
    ///
    /// Letters, digits and ASCII spaces are counted; any other character
    /// class contributes to `total_length` alone.
    pub fn measure(text: &str) -> Self {
        let mut stats = Statistics::default();
        for c in text.chars() {
            stats.total_length += 1;
            if c.is_alphabetic() {
                stats.letter_count += 1;
            } else if c.is_numeric() {
                stats.digit_count += 1;
            } else if c == ' ' {
                stats.space_count += 1;
            }
        }

        stats
    }
}

/// Describes a successful transformation.
#[derive(Debug, PartialEq, Serialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
    /// The input text, unmodified.
    pub original_text: String,
    /// The input text with every character mapped to uppercase.
    pub uppercase_text: String,
    /// Statistics over the original text.
    pub statistics: Statistics,
    /// Attribution string naming the invoking user.
    pub processed_by: String,
    /// The fixed operation label.
    pub operation: String,
}

/// Describes a validation failure surfaced to the caller.
#[derive(Debug, PartialEq, Serialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable description of the failure.
    pub error: String,
}

/// Represents the response of the uppercase function.
///
/// Exactly one of two shapes is produced per invocation: a success record
/// carrying the transformed text, or an error record carrying a message.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// The transformation succeeded.
    Success(SuccessResponse),
    /// The invocation event failed validation.
    Failure(ErrorResponse),
}

impl Response {
    /// Returns an error response describing a validation failure.
    pub fn failure(err: ValidationError) -> Self {
        Response::Failure(ErrorResponse {
            success: false,
            error: err.to_string(),
        })
    }
}
