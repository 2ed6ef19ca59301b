use crate::error::TweakdexError;

pub fn get_exit_code(error: &TweakdexError) -> i32 {
    match error {
        TweakdexError::ConfigFile(_) => 2,

        TweakdexError::TemplateNotFound(_) => 3,

        TweakdexError::PlaceholderMissing { .. } => 4,

        _ => 1,
    }
}
