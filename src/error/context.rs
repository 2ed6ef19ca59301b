// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::TweakdexError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a TweakdexError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a TweakdexError) -> Self {
        let (suggestion, details) = match error {
            TweakdexError::TemplateNotFound(path) => {
                let suggestion = Some(format!(
                    "Create '{path}' containing the list placeholder marker, or point \
                     --template at an existing template file."
                ));
                (suggestion, None)
            }
            TweakdexError::PlaceholderMissing {
                placeholder,
                template,
            } => {
                let suggestion = Some(format!(
                    "Add the literal marker '{placeholder}' to '{template}' where the \
                     generated package list should appear."
                ));
                (suggestion, None)
            }
            TweakdexError::ConfigFile(msg) => {
                let suggestion =
                    Some("Check tweakdex.toml for syntax errors or remove it to use the \
                          built-in defaults."
                        .to_string());
                let details = Some(format!("Configuration load failed: {msg}"));
                (suggestion, details)
            }
            TweakdexError::Io(e) => {
                let details = Some(format!("I/O operation failed: {e}"));
                (None, details)
            }
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
