use crate::error::{ErrorContext, TweakdexError};

pub fn format_error_chain(error: &TweakdexError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}
