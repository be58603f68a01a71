use anyhow::Context as _;
use log::{debug, error, info};
use serde_json::Value;
use uppercase_codec::FunctionContext;

use std::env;
use std::process;

/// Environment variable holding the JSON-encoded invocation event.
const EVENT_VAR: &str = "FUNCTION_EVENT";
/// Environment variable holding the JSON-encoded invocation context.
const CONTEXT_VAR: &str = "FUNCTION_CONTEXT";

// Entry point.
fn main() {
    if env_logger::try_init().is_err() {
        info!("Logger already initialized");
    }

    info!("uppercase function starting");

    // Handler-level validation errors are printed to stdout by `run` and
    // exit 0; only harness failures reach this branch.
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("{}", error_payload(&e));
        process::exit(1);
    }
}

// Decodes the invocation inputs, runs the handler and prints the response.
fn run() -> anyhow::Result<()> {
    let event: Value = decode_env(EVENT_VAR)?;
    let ctx: FunctionContext = decode_env(CONTEXT_VAR)?;
    debug!("Invocation event: {}", event);

    let response = uppercase_function::handle(&event, &ctx);
    let payload =
        serde_json::to_string(&response).context("Failed to serialize function response")?;
    // stdout carries only the result payload; all logging goes to stderr.
    println!("{}", payload);

    Ok(())
}

/// Decodes a value from the JSON in the specified environment variable.
/// An unset variable decodes as an empty object.
fn decode_env<T>(name: &str) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(env::VarError::NotPresent) => "{}".into(),
        Err(e) => return Err(e).with_context(|| format!("Unable to read {}", name)),
    };

    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", name))
}

/// Returns the error payload written to standard error on harness failure.
fn error_payload(err: &anyhow::Error) -> String {
    serde_json::json!({ "error": format!("{:#}", err) }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_env_unset_is_empty_object() {
        let event: Value = decode_env("UPPERCASE_TEST_UNSET_VAR").unwrap();
        assert_eq!(event, json!({}));

        let ctx: FunctionContext = decode_env("UPPERCASE_TEST_UNSET_CTX").unwrap();
        assert_eq!(ctx, FunctionContext::default());
    }

    #[test]
    fn decode_env_set() {
        env::set_var("UPPERCASE_TEST_EVENT", r#"{"text": "hi"}"#);
        let event: Value = decode_env("UPPERCASE_TEST_EVENT").unwrap();
        assert_eq!(event, json!({"text": "hi"}));
    }

    #[test]
    fn decode_env_invalid_json() {
        env::set_var("UPPERCASE_TEST_BAD_JSON", "{not json");
        let result: anyhow::Result<Value> = decode_env("UPPERCASE_TEST_BAD_JSON");
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Invalid JSON in UPPERCASE_TEST_BAD_JSON"));
    }

    #[test]
    fn decode_env_context() {
        env::set_var("UPPERCASE_TEST_CONTEXT", r#"{"user": "alice"}"#);
        let ctx: FunctionContext = decode_env("UPPERCASE_TEST_CONTEXT").unwrap();
        assert_eq!(ctx.user(), "alice");
    }

    #[test]
    fn error_payload_shape() {
        let err = anyhow::anyhow!("boom");
        let payload: Value = serde_json::from_str(&error_payload(&err)).unwrap();
        assert_eq!(payload, json!({"error": "boom"}));
    }
}
