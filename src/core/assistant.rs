// src/core/assistant.rs

use crate::core::knowledge_base::{
    RESPONSE_CATARACTS, RESPONSE_DEFAULT, RESPONSE_DIABETIC, RESPONSE_DRY_EYES,
};
use std::time::Duration;

/// Delay before a canned reply to a text message appears.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);
/// Delay before the fixed answer to an attached image appears.
pub const IMAGE_REPLY_DELAY: Duration = Duration::from_millis(1000);
/// How long the simulated voice capture "listens" before producing its
/// transcript.
pub const VOICE_CAPTURE_DELAY: Duration = Duration::from_millis(2000);

/// Selects the canned reply for a user message.
///
/// Matching is case-insensitive substring search in fixed priority order;
/// the first rule that fires wins:
/// 1. "diabetic" or "retinopathy"
/// 2. "cataract"
/// 3. "dry" and "eye" both present
/// 4. otherwise the generic fallback
pub fn reply_for(input: &str) -> &'static str {
    let input = input.to_lowercase();
    if input.contains("diabetic") || input.contains("retinopathy") {
        RESPONSE_DIABETIC
    } else if input.contains("cataract") {
        RESPONSE_CATARACTS
    } else if input.contains("dry") && input.contains("eye") {
        RESPONSE_DRY_EYES
    } else {
        RESPONSE_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cataract_matches_regardless_of_case_and_context() {
        assert_eq!(reply_for("How do I avoid a CATARACT later in life?"), RESPONSE_CATARACTS);
        assert_eq!(reply_for("cataracts"), RESPONSE_CATARACTS);
    }

    #[test]
    fn diabetic_rule_outranks_cataract_rule() {
        assert_eq!(reply_for("diabetic patient with cataract"), RESPONSE_DIABETIC);
        assert_eq!(reply_for("What is Retinopathy?"), RESPONSE_DIABETIC);
    }

    #[test]
    fn dry_eye_needs_both_words() {
        assert_eq!(reply_for("my EYES feel DRY"), RESPONSE_DRY_EYES);
        assert_eq!(reply_for("the air is very dry here"), RESPONSE_DEFAULT);
        assert_eq!(reply_for("my eye hurts"), RESPONSE_DEFAULT);
    }

    #[test]
    fn unmatched_input_falls_back() {
        assert_eq!(reply_for("hello"), RESPONSE_DEFAULT);
        assert_eq!(reply_for(""), RESPONSE_DEFAULT);
    }
}
