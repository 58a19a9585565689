//! Render description formatting
//!
//! Turns a `RenderDescription` into a small text panel:
//!
//! ```text
//!                                  [×]
//! (1) (2)  3
//! Step 2: Apply for jobs 💼
//! [Previous] [Next]
//! ```

use crate::wizard::{ButtonView, MessageList, RenderDescription};

fn format_button(button: &ButtonView) -> String {
    if button.disabled {
        format!("({})", button.label)
    } else {
        format!("[{}]", button.label)
    }
}

/// Format a render description as text
pub fn format_description(description: &RenderDescription) -> String {
    let mut output = String::new();
    output.push_str(&format_button(&description.close));
    output.push('\n');

    let Some(panel) = &description.panel else {
        return output;
    };

    let indicators: Vec<String> = panel
        .indicators
        .iter()
        .map(|indicator| {
            if indicator.active {
                format!("({})", indicator.number)
            } else {
                format!(" {} ", indicator.number)
            }
        })
        .collect();
    output.push_str(indicators.join(" ").trim_end());
    output.push('\n');

    output.push_str(&format!("Step {}: {}\n", panel.step, panel.message));
    output.push_str(&format!(
        "{} {}\n",
        format_button(&panel.previous),
        format_button(&panel.next)
    ));

    output
}

/// Format the message list, one numbered line per step
pub fn format_message_list(messages: &MessageList) -> String {
    let width = messages.len().to_string().len();
    let mut output = String::new();
    for (step, message) in messages.iter() {
        output.push_str(&format!("{:>width$}. {}\n", step, message, width = width));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{MessageList, StepWizard};

    fn wizard() -> StepWizard {
        StepWizard::new(MessageList::new(["one", "two", "three"]).unwrap())
    }

    #[test]
    fn test_format_open_first_step() {
        let text = format_description(&wizard().describe());
        assert_eq!(
            text,
            "[×]\n(1)  2   3\nStep 1: one\n(Previous) [Next]\n"
        );
    }

    #[test]
    fn test_format_last_step() {
        let mut wizard = wizard();
        wizard.advance();
        wizard.advance();
        let text = format_description(&wizard.describe());
        assert!(text.contains("(1) (2) (3)"));
        assert!(text.contains("Step 3: three"));
        assert!(text.contains("[Previous] (Next)"));
    }

    #[test]
    fn test_format_closed_shows_only_close() {
        let mut wizard = wizard();
        wizard.toggle_open();
        assert_eq!(format_description(&wizard.describe()), "[×]\n");
    }

    #[test]
    fn test_format_message_list() {
        let messages = MessageList::new((1..=10).map(|i| format!("m{}", i))).unwrap();
        let text = format_message_list(&messages);
        assert!(text.starts_with(" 1. m1\n"));
        assert!(text.ends_with("10. m10\n"));
    }
}
