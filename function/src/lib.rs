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
// Uppercase Cloud Function Handler
//

//! The uppercase text-transformation handler.
//!
//! [`handle`] is a pure function over the decoded invocation event and
//! context: it performs no I/O and reads no environment state. All failure
//! modes are folded into the error response shape.

use log::debug;
use serde_json::Value;
use uppercase_codec::{
    FunctionContext, Request, Response, Statistics, SuccessResponse, OPERATION_UPPERCASE,
};

/// Handles one invocation of the uppercase function.
///
/// The event must be a JSON object with a non-empty string `text` field;
/// anything else yields the error response shape. This function never
/// panics for any event or context value.
pub fn handle(event: &Value, ctx: &FunctionContext) -> Response {
    let request = match Request::from_value(event) {
        Ok(request) => request,
        Err(e) => {
            debug!("Invalid invocation event: {}", e);
            return Response::failure(e);
        }
    };

    let text = request.text();
    // Statistics describe the original text; uppercasing may change the
    // character count (e.g. 'ß' maps to "SS").
    let statistics = Statistics::measure(text);

    Response::Success(SuccessResponse {
        success: true,
        uppercase_text: text.to_uppercase(),
        statistics,
        processed_by: format!("Rust function (user: {})", ctx.user()),
        operation: OPERATION_UPPERCASE.into(),
        original_text: text.into(),
    })
}
