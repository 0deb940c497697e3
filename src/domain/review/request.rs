//! AnalysisRequest value object.

use super::errors::ReviewError;

/// Code submitted for analysis, plus optional metadata.
///
/// Blank optional fields are treated as absent so the prompt falls back to
/// its placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    code: String,
    language: Option<String>,
    context: Option<String>,
}

impl AnalysisRequest {
    /// Creates a request, rejecting absent or whitespace-only code.
    ///
    /// The code itself is kept byte-for-byte; only the emptiness check trims.
    pub fn new(code: Option<String>) -> Result<Self, ReviewError> {
        match code {
            Some(code) if !code.trim().is_empty() => Ok(Self {
                code,
                language: None,
                context: None,
            }),
            _ => Err(ReviewError::MissingCode),
        }
    }

    /// Sets the programming language.
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = non_blank(language);
        self
    }

    /// Sets the free-text context (team conventions for the style agent).
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = non_blank(context);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_code() {
        assert_eq!(AnalysisRequest::new(None), Err(ReviewError::MissingCode));
    }

    #[test]
    fn rejects_empty_and_blank_code() {
        assert_eq!(
            AnalysisRequest::new(Some(String::new())),
            Err(ReviewError::MissingCode)
        );
        assert_eq!(
            AnalysisRequest::new(Some(" \n\t".to_string())),
            Err(ReviewError::MissingCode)
        );
    }

    #[test]
    fn keeps_code_unmodified() {
        let code = "  def f():\n      pass\n";
        let request = AnalysisRequest::new(Some(code.to_string())).unwrap();
        assert_eq!(request.code(), code);
    }

    #[test]
    fn blank_optional_fields_become_absent() {
        let request = AnalysisRequest::new(Some("x = 1".to_string()))
            .unwrap()
            .with_language(Some("".to_string()))
            .with_context(Some("   ".to_string()));
        assert!(request.language().is_none());
        assert!(request.context().is_none());
    }

    #[test]
    fn keeps_provided_optional_fields() {
        let request = AnalysisRequest::new(Some("x = 1".to_string()))
            .unwrap()
            .with_language(Some("Python".to_string()))
            .with_context(Some("PEP 8".to_string()));
        assert_eq!(request.language(), Some("Python"));
        assert_eq!(request.context(), Some("PEP 8"));
    }
}
