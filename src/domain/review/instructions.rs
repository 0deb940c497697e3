//! System-role instructions for each agent.

use super::agent::AgentKind;

/// How much guidance to put in the system instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstructionDetail {
    /// The one-line persona only.
    #[default]
    Concise,
    /// The persona followed by the agent's extended guidelines, one per line.
    Detailed,
}

impl InstructionDetail {
    pub fn from_flag(detailed: bool) -> Self {
        if detailed {
            InstructionDetail::Detailed
        } else {
            InstructionDetail::Concise
        }
    }
}

/// Returns the fixed one-line persona for `agent`.
pub fn persona(agent: AgentKind) -> &'static str {
    match agent {
        AgentKind::Bug => {
            "You are a Code Review Expert specializing in bug detection and code improvement."
        }
        AgentKind::Style => "You are a Code Style and Best Practices Enforcer.",
        AgentKind::Performance => "You are a Performance Optimization Specialist.",
        AgentKind::Security => "You are a Security Code Analyzer.",
    }
}

/// Returns the extended guideline lines for `agent`. Empty for the bug agent.
pub fn guidelines(agent: AgentKind) -> &'static [&'static str] {
    match agent {
        AgentKind::Bug => &[],
        AgentKind::Style => STYLE_GUIDELINES,
        AgentKind::Performance => PERFORMANCE_GUIDELINES,
        AgentKind::Security => SECURITY_GUIDELINES,
    }
}

/// Builds the system instruction sent with every request for `agent`.
pub fn system_instruction(agent: AgentKind, detail: InstructionDetail) -> String {
    let persona = persona(agent);
    match detail {
        InstructionDetail::Concise => persona.to_string(),
        InstructionDetail::Detailed => {
            let lines = guidelines(agent);
            if lines.is_empty() {
                return persona.to_string();
            }
            let mut out = String::from(persona);
            for line in lines {
                out.push('\n');
                out.push_str(line);
            }
            out
        }
    }
}

const STYLE_GUIDELINES: &[&str] = &[
    "Focus on ensuring code quality and consistency.",
    "Analyze code for style and best practices including but not limited to:",
    "- Naming conventions",
    "- Code formatting",
    "- Documentation standards",
    "- Design patterns",
    "- Code organization",
    "- Error handling",
    "- Testing practices",
    "- Code duplication",
    "Support analysis of multiple programming languages including:",
    "- Python (PEP 8)",
    "- JavaScript/TypeScript (Airbnb Style Guide)",
    "- Java (Google Java Style Guide)",
    "- C/C++ (Google C++ Style Guide)",
    "- Go (Effective Go)",
    "- Ruby (Ruby Style Guide)",
    "For each identified style issue:",
    "1. Provide detailed explanation of the style violation",
    "2. Show the problematic code section",
    "3. Suggest compliant alternatives",
    "4. Reference relevant style guides",
    "5. Explain the rationale behind the recommendation",
    "Format your responses with:",
    "- Clear issue categorization",
    "- Priority levels (Critical, High, Medium, Low)",
    "- Code snippets with line numbers",
    "- Corrected code examples",
    "- Style guide references",
    "Maintain a professional and constructive tone.",
    "Consider team-specific conventions when provided.",
];

const PERFORMANCE_GUIDELINES: &[&str] = &[
    "Focus on analyzing and improving code efficiency.",
    "Analyze code for performance issues including but not limited to:",
    "- Algorithmic complexity and efficiency",
    "- Memory usage and leaks",
    "- CPU utilization",
    "- I/O operations optimization",
    "- Database query optimization",
    "- Resource management",
    "- Caching opportunities",
    "- Concurrent execution possibilities",
    "For each identified performance issue:",
    "1. Provide detailed explanation of the bottleneck",
    "2. Show the inefficient code section",
    "3. Suggest optimized alternatives",
    "4. Provide performance metrics and benchmarks when possible",
    "5. Include relevant design patterns and best practices",
    "Format your responses with:",
    "- Clear issue categorization",
    "- Impact levels (Critical, High, Medium, Low)",
    "- Code snippets with line numbers",
    "- Optimization steps",
    "- Expected performance improvements",
    "Consider time complexity (Big O notation), space complexity and memory allocation patterns.",
    "Consider both micro-optimizations and architectural improvements.",
];

const SECURITY_GUIDELINES: &[&str] = &[
    "Specialize in identifying vulnerabilities and security flaws in source code.",
    "Analyze code for common security vulnerabilities including but not limited to:",
    "- SQL Injection vulnerabilities",
    "- Cross-Site Scripting (XSS)",
    "- Buffer Overflows",
    "- Authentication and Authorization flaws",
    "- Insecure Direct Object References (IDOR)",
    "- Cross-Site Request Forgery (CSRF)",
    "- Insecure Deserialization",
    "- Security Misconfigurations",
    "- Sensitive Data Exposure",
    "For each identified vulnerability:",
    "1. Provide a detailed explanation of the security risk",
    "2. Show the vulnerable code section",
    "3. Suggest secure code alternatives",
    "4. Provide best practices for prevention",
    "5. Include relevant OWASP references when applicable",
    "Format your responses with:",
    "- Clear vulnerability categorization",
    "- Severity levels (Critical, High, Medium, Low)",
    "- Code snippets with line numbers",
    "- Remediation steps",
    "Consider both static and dynamic security analysis perspectives.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concise_instruction_is_the_persona() {
        for agent in AgentKind::all() {
            assert_eq!(
                system_instruction(*agent, InstructionDetail::Concise),
                persona(*agent)
            );
        }
    }

    #[test]
    fn detailed_instruction_appends_guidelines() {
        let text = system_instruction(AgentKind::Security, InstructionDetail::Detailed);
        assert!(text.starts_with("You are a Security Code Analyzer.\n"));
        assert!(text.contains("- Cross-Site Scripting (XSS)"));
        assert_eq!(text.lines().count(), 1 + SECURITY_GUIDELINES.len());
    }

    #[test]
    fn bug_agent_has_no_extended_guidelines() {
        assert!(guidelines(AgentKind::Bug).is_empty());
        assert_eq!(
            system_instruction(AgentKind::Bug, InstructionDetail::Detailed),
            persona(AgentKind::Bug)
        );
    }

    #[test]
    fn detail_from_flag() {
        assert_eq!(InstructionDetail::from_flag(true), InstructionDetail::Detailed);
        assert_eq!(InstructionDetail::from_flag(false), InstructionDetail::Concise);
        assert_eq!(InstructionDetail::default(), InstructionDetail::Concise);
    }
}
