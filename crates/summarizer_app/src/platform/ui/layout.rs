use super::constants::*;

/// Static header printed once when the form opens.
pub fn initial_lines() -> Vec<String> {
    vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        TAGLINE.to_string(),
        String::new(),
        CAPTIONS_NOTICE.to_string(),
        String::new(),
    ]
}
