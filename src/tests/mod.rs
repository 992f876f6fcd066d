use super::*;

// Shared test helpers
fn opts() -> Options {
    Options::default()
}

fn fmt(input: &str) -> String {
    crate::format_to_string(input, &opts()).unwrap()
}

fn fmt_value(input: &str) -> serde_json::Value {
    serde_json::from_str(&fmt(input)).unwrap()
}

// Submodules (topic-based)
mod constructor_calls;
mod errors_passthrough;
mod escapes;
mod fragments;
