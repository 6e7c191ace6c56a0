//! Chat and announcement configuration.

use serde::Deserialize;

use super::defaults::{default_fallback_subject, default_greeting, default_system_author};

/// Chat configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Display name of the reserved system author (default: "System").
    #[serde(default = "default_system_author")]
    pub system_author: String,
    /// Study log subject used when no room is active (default: "Individual study").
    #[serde(default = "default_fallback_subject")]
    pub fallback_subject: String,
    /// Lines that replace the chat history on login.
    #[serde(default = "default_greeting")]
    pub greeting: Vec<GreetingLine>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            system_author: default_system_author(),
            fallback_subject: default_fallback_subject(),
            greeting: default_greeting(),
        }
    }
}

/// One canned chat line posted on login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GreetingLine {
    /// Author name. Omit for a system line.
    #[serde(default)]
    pub author: Option<String>,
    pub body: String,
    /// Fixed `HH:MM` stamp. Omit to stamp with the login time.
    #[serde(default)]
    pub time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_greeting_opens_with_a_system_line() {
        let config = ChatConfig::default();
        assert_eq!(config.greeting.len(), 3);
        assert!(config.greeting[0].author.is_none());
        assert!(config.greeting[1..].iter().all(|line| line.author.is_some()));
    }

    #[test]
    fn greeting_table_parses() {
        let toml = r#"
system_author = "Bot"

[[greeting]]
body = "Welcome"

[[greeting]]
author = "mika"
body = "hi"
time = "08:00"
"#;
        let config: ChatConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.system_author, "Bot");
        assert_eq!(config.fallback_subject, "Individual study");
        assert_eq!(
            config.greeting[1],
            GreetingLine {
                author: Some("mika".to_string()),
                body: "hi".to_string(),
                time: Some("08:00".to_string()),
            }
        );
    }
}
