//! AgentKind enum naming the four review agents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ParseAgentError;

/// The four review agents.
///
/// Each agent is a fixed pairing of a system instruction and a prompt
/// template; everything else about an analysis is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Bug,
    Style,
    Performance,
    Security,
}

impl AgentKind {
    /// Returns all agents in route order.
    pub fn all() -> &'static [AgentKind] {
        &[
            AgentKind::Bug,
            AgentKind::Style,
            AgentKind::Performance,
            AgentKind::Security,
        ]
    }

    /// Returns the lowercase slug used in routes and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Bug => "bug",
            AgentKind::Style => "style",
            AgentKind::Performance => "performance",
            AgentKind::Security => "security",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentKind::Bug => "Code Review Assistant",
            AgentKind::Style => "Code Style and Best Practices Analyzer",
            AgentKind::Performance => "Performance Optimization Analyzer",
            AgentKind::Security => "Security Code Analyzer",
        }
    }

    /// Whether the agent's template has a `Language:` line.
    pub fn uses_language(&self) -> bool {
        !matches!(self, AgentKind::Bug)
    }

    /// Label of the free-text context line in the template, if the agent has one.
    pub fn context_label(&self) -> Option<&'static str> {
        match self {
            AgentKind::Style => Some("Team Conventions"),
            AgentKind::Performance => Some("Context"),
            AgentKind::Bug | AgentKind::Security => None,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = ParseAgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|agent| agent.as_str() == needle)
            .ok_or_else(|| ParseAgentError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_four_agents_in_route_order() {
        let all = AgentKind::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], AgentKind::Bug);
        assert_eq!(all[3], AgentKind::Security);
    }

    #[test]
    fn parses_slugs_case_insensitively() {
        assert_eq!("bug".parse::<AgentKind>().unwrap(), AgentKind::Bug);
        assert_eq!(" Style ".parse::<AgentKind>().unwrap(), AgentKind::Style);
        assert_eq!(
            "PERFORMANCE".parse::<AgentKind>().unwrap(),
            AgentKind::Performance
        );
        assert!("lint".parse::<AgentKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for agent in AgentKind::all() {
            assert_eq!(agent.to_string().parse::<AgentKind>().unwrap(), *agent);
        }
    }

    #[test]
    fn only_style_and_performance_take_context() {
        assert_eq!(AgentKind::Style.context_label(), Some("Team Conventions"));
        assert_eq!(AgentKind::Performance.context_label(), Some("Context"));
        assert!(AgentKind::Bug.context_label().is_none());
        assert!(AgentKind::Security.context_label().is_none());
    }

    #[test]
    fn bug_agent_ignores_language() {
        assert!(!AgentKind::Bug.uses_language());
        assert!(AgentKind::Security.uses_language());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&AgentKind::Performance).unwrap();
        assert_eq!(json, "\"performance\"");
    }
}
