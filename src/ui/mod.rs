use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;
mod theme;

pub use spinner::Spinner;
pub use style::Style;
pub use theme::{Theme, load_theme, save_theme};

use crate::translation::TextDirection;

const RIGHT_TO_LEFT_ISOLATE: char = '\u{2067}';
const POP_DIRECTIONAL_ISOLATE: char = '\u{2069}';

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Wraps a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this function prints a newline
/// to clean up the terminal and returns `Ok(())` instead of propagating the error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Marks right-to-left text so terminals lay it out correctly.
pub fn directional(text: &str, direction: TextDirection) -> String {
    match direction {
        TextDirection::LeftToRight => text.to_string(),
        TextDirection::RightToLeft => {
            format!("{RIGHT_TO_LEFT_ISOLATE}{text}{POP_DIRECTIONAL_ISOLATE}")
        }
    }
}
