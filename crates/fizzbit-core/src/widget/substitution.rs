//! Canned-phrase substitution.
//!
//! A few filler inputs carry no question, so they are swapped for a prompt
//! that asks for a fact. Matching is exact and case-insensitive on the
//! trimmed input; nothing fuzzier.

pub const FILLER_PHRASES: [&str; 4] = ["space fact", "anything", "tell me something", "fact"];

pub const ELABORATED_PROMPT: &str =
    "Yo Fizzbit, drop a chaotic Gen Z space fact. Make it spicy. No textbook energy.";

/// Text to send to the gateway for already-trimmed user input.
pub fn effective_input(trimmed: &str) -> &str {
    let lowered = trimmed.to_lowercase();
    if FILLER_PHRASES.contains(&lowered.as_str()) {
        ELABORATED_PROMPT
    } else {
        trimmed
    }
}
