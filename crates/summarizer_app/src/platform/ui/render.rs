use summarizer_core::AppViewModel;

use super::constants::*;

/// Renders the dynamic part of the form as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![RULE.to_string()];

    let backend_note = if view.backend_resolved {
        ""
    } else {
        " (checking...)"
    };
    lines.push(format!("Backend: {}{}", view.backend_url, backend_note));

    let input = if view.input_url.is_empty() {
        INPUT_PLACEHOLDER
    } else {
        view.input_url.as_str()
    };
    lines.push(format!("{INPUT_LABEL}: {input}"));

    if view.submit_enabled {
        lines.push(format!("[ {} ]", view.submit_label));
    } else {
        lines.push(format!("[ {} ] (disabled)", view.submit_label));
    }

    if view.submit_rejected {
        lines.push(BUSY_NOTICE.to_string());
    }

    if let Some(error) = &view.error {
        lines.push(String::new());
        lines.push(format!("Error: {error}"));
    }

    if !view.summary_paragraphs.is_empty() {
        lines.push(String::new());
        lines.push(SUMMARY_HEADING.to_string());
        lines.push("-".repeat(SUMMARY_HEADING.len()));
        for paragraph in &view.summary_paragraphs {
            lines.push(paragraph.clone());
            lines.push(String::new());
        }
    }

    if view.submit_enabled && !view.should_exit {
        lines.push(PROMPT.to_string());
    }
    lines
}
