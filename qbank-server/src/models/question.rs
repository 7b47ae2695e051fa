//! Question input validation
//!
//! Presence is the only rule: both fields must be non-empty strings.
//! No length, trimming, or content checks are applied.

use super::ValidationError;

/// A question/answer pair that passed presence validation and may be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
}

impl NewQuestion {
    /// Validate optional request fields into a storable pair.
    ///
    /// # Example
    /// ```
    /// use qbank_server::models::NewQuestion;
    ///
    /// assert!(NewQuestion::new(Some("Q?".into()), Some("A.".into())).is_ok());
    /// assert!(NewQuestion::new(Some("Q?".into()), None).is_err());
    /// assert!(NewQuestion::new(Some(String::new()), Some("A.".into())).is_err());
    /// ```
    pub fn new(question: Option<String>, answer: Option<String>) -> Result<Self, ValidationError> {
        let question = require("question", question)?;
        let answer = require("answer", answer)?;
        Ok(Self { question, answer })
    }

    /// Consume and return `(question, answer)`.
    pub fn into_parts(self) -> (String, String) {
        (self.question, self.answer)
    }
}

fn require(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some(s) if s.is_empty() => Err(ValidationError::Empty { field }),
        Some(s) => Ok(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_fields() {
        let q = NewQuestion::new(Some("What is a closure?".into()), Some("A function.".into()))
            .unwrap();
        let (question, answer) = q.into_parts();
        assert_eq!(question, "What is a closure?");
        assert_eq!(answer, "A function.");
    }

    #[test]
    fn rejects_missing_question() {
        let err = NewQuestion::new(None, Some("A.".into())).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "question" });
    }

    #[test]
    fn rejects_missing_answer() {
        let err = NewQuestion::new(Some("Q?".into()), None).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "answer" });
    }

    #[test]
    fn rejects_empty_strings() {
        let err = NewQuestion::new(Some(String::new()), Some("A.".into())).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "question" }));

        let err = NewQuestion::new(Some("Q?".into()), Some(String::new())).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "answer" }));
    }

    #[test]
    fn whitespace_is_present() {
        // Only emptiness is rejected; content is not inspected.
        assert!(NewQuestion::new(Some(" ".into()), Some("\t".into())).is_ok());
    }
}
