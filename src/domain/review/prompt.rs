//! Prompt templates for the review agents.
//!
//! Rendering is plain substitution: the code is embedded verbatim and absent
//! optional fields are replaced with fixed placeholder text.

use super::agent::AgentKind;
use super::request::AnalysisRequest;

/// Placeholder for an absent language.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Placeholder for absent context or team conventions.
pub const NOT_PROVIDED: &str = "Not provided";

/// Renders the user prompt for `agent`.
pub fn render_prompt(agent: AgentKind, request: &AnalysisRequest) -> String {
    let language = request.language().unwrap_or(NOT_SPECIFIED);
    let context = request.context().unwrap_or(NOT_PROVIDED);
    let code = request.code();

    match agent {
        AgentKind::Bug => format!(
            "You are a Code Review Expert specializing in bug detection and code improvement.\n\
             Please analyze the following code and provide:\n\
             1. Any bugs or issues found\n\
             2. Suggestions for improvement\n\
             3. Best practices that could be applied\n\
             \n\
             Code to analyze:\n\
             {code}\n\
             \n\
             Please format your response with clear sections for issues, explanations, and solutions.\n"
        ),
        AgentKind::Style => format!(
            "Please analyze the following code for style and best practices compliance:\n\
             \n\
             Language: {language}\n\
             Team Conventions: {context}\n\
             \n\
             Code:\n\
             {code}\n\
             \n\
             Provide a comprehensive style analysis including:\n\
             1. Identified style violations and best practice issues\n\
             2. Priority levels and rationale\n\
             3. Detailed explanations of issues\n\
             4. Compliant code alternatives\n\
             5. Relevant style guide references\n\
             6. Team convention compliance (if provided)\n"
        ),
        AgentKind::Performance => format!(
            "Please analyze the following code for performance optimization opportunities:\n\
             \n\
             Language: {language}\n\
             Context: {context}\n\
             \n\
             Code:\n\
             {code}\n\
             \n\
             Provide a comprehensive performance analysis including:\n\
             1. Identified bottlenecks and inefficiencies\n\
             2. Impact levels and potential improvements\n\
             3. Detailed explanations of issues\n\
             4. Optimized code alternatives\n\
             5. Best practices for performance\n\
             6. Expected performance gains\n"
        ),
        AgentKind::Security => format!(
            "Please analyze the following code for security vulnerabilities:\n\
             \n\
             Language: {language}\n\
             \n\
             Code:\n\
             {code}\n\
             \n\
             Provide a comprehensive security analysis including:\n\
             1. Identified vulnerabilities\n\
             2. Severity levels\n\
             3. Detailed explanations\n\
             4. Secure code alternatives\n\
             5. Best practices for prevention\n"
        ),
    }
}
