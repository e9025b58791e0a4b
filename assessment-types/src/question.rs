use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question, unique and stable within a `Catalog`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Create a new question id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// The value stored in the `AnswerStore` when this option is selected.
    pub value: String,

    /// The label shown next to the radio button.
    pub label: String,
}

impl QuestionOption {
    /// Create a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single-choice question in a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable id, used as the key in the `AnswerStore`.
    id: QuestionId,

    /// The prompt text shown to the user.
    text: String,

    /// The options in display order.
    options: Vec<QuestionOption>,
}

impl Question {
    /// Create a new question.
    ///
    /// The options are checked when the question is added to a `Catalog`.
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>, options: Vec<QuestionOption>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
        }
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the options in display order.
    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    /// Get the option with the given value.
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Get the display position (0-based) of the option with the given value.
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }

    /// Check if the value is one of this question's option values.
    pub fn accepts(&self, value: &str) -> bool {
        self.option(value).is_some()
    }

    /// Describe why the options are unusable, if they are.
    pub(crate) fn option_problem(&self) -> Option<String> {
        if self.options.is_empty() {
            return Some(format!("question {} has no options", self.id));
        }
        for (index, option) in self.options.iter().enumerate() {
            if option.value.is_empty() {
                return Some(format!("question {} has an option with an empty value", self.id));
            }
            if self.options[..index].iter().any(|earlier| earlier.value == option.value) {
                return Some(format!(
                    "question {} has duplicate option value '{}'",
                    self.id, option.value
                ));
            }
        }
        None
    }
}
