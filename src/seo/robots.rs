//! robots.txt policy, kept in lock-step with the route gate.

use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;

use crate::config::{host_of, normalize_base_url};
use crate::routing::ReservedPaths;

/// Link-preview crawlers given an explicit allow rule.
pub const SOCIAL_CRAWLERS: &[&str] = &[
    "facebookexternalhit",
    "Facebot",
    "Twitterbot",
    "LinkedInBot",
    "WhatsApp",
    "Slackbot",
    "TelegramBot",
    "Discordbot",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
    pub host: String,
}

impl RobotsPolicy {
    /// Render in robots.txt layout, one blank line between groups.
    pub fn to_text(&self) -> String {
        let mut text = String::new();

        for rule in &self.rules {
            let _ = writeln!(text, "User-Agent: {}", rule.user_agent);
            for path in &rule.allow {
                let _ = writeln!(text, "Allow: {}", path);
            }
            for path in &rule.disallow {
                let _ = writeln!(text, "Disallow: {}", path);
            }
            text.push('\n');
        }

        let _ = writeln!(text, "Host: {}", self.host);
        let _ = writeln!(text, "Sitemap: {}", self.sitemap);
        text
    }
}

pub struct RobotsGenerator {
    reserved: Arc<ReservedPaths>,
    base_url: String,
}

impl RobotsGenerator {
    /// `reserved` must be the same instance the route gate was built with.
    pub fn new(reserved: Arc<ReservedPaths>, base_url: &str) -> Self {
        Self {
            reserved,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn generate(&self) -> RobotsPolicy {
        let mut rules = vec![RobotsRule {
            user_agent: "*".to_string(),
            allow: vec!["/".to_string()],
            disallow: self.reserved.paths().into_iter().map(String::from).collect(),
        }];

        rules.extend(SOCIAL_CRAWLERS.iter().map(|agent| RobotsRule {
            user_agent: agent.to_string(),
            allow: vec!["/".to_string()],
            disallow: Vec::new(),
        }));

        RobotsPolicy {
            rules,
            sitemap: format!("{}/sitemap.xml", self.base_url),
            host: host_of(&self.base_url).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;
    use crate::routing::{GateDecision, RouteGate};

    fn reserved() -> Arc<ReservedPaths> {
        Arc::new(ReservedPaths::packages(&LocaleRegistry::standard()))
    }

    #[test]
    fn test_generic_rule_disallows_reserved_paths() {
        let policy = RobotsGenerator::new(reserved(), "https://tours.test").generate();
        let generic = &policy.rules[0];

        assert_eq!(generic.user_agent, "*");
        assert_eq!(generic.allow, vec!["/"]);
        assert_eq!(generic.disallow.len(), 7);
        assert_eq!(generic.disallow[0], "/packages");
        assert!(generic.disallow.contains(&"/zh/packages".to_string()));
    }

    #[test]
    fn test_disallow_matches_gate() {
        let reserved = reserved();
        let gate = RouteGate::new(Arc::clone(&reserved));
        let policy = RobotsGenerator::new(Arc::clone(&reserved), "https://tours.test").generate();

        let disallow = &policy.rules[0].disallow;
        assert_eq!(disallow, &gate.reserved().paths());
        for path in disallow {
            assert_eq!(gate.check(path), GateDecision::Blocked, "{}", path);
        }
    }

    #[test]
    fn test_social_crawlers_allowed() {
        let policy = RobotsGenerator::new(reserved(), "https://tours.test").generate();
        assert_eq!(policy.rules.len(), 1 + SOCIAL_CRAWLERS.len());

        for rule in &policy.rules[1..] {
            assert!(SOCIAL_CRAWLERS.contains(&rule.user_agent.as_str()));
            assert_eq!(rule.allow, vec!["/"]);
            assert!(rule.disallow.is_empty());
        }
    }

    #[test]
    fn test_sitemap_and_host_from_base_url() {
        let policy = RobotsGenerator::new(reserved(), "https://tours.test/").generate();
        assert_eq!(policy.sitemap, "https://tours.test/sitemap.xml");
        assert_eq!(policy.host, "tours.test");
    }

    #[test]
    fn test_host_matches_config_host() {
        let config = crate::config::Config {
            base_url: "https://tours.test".to_string(),
            ..crate::config::Config::default()
        };
        let policy = RobotsGenerator::new(reserved(), &config.base_url).generate();
        assert_eq!(policy.host, config.host());
    }

    #[test]
    fn test_to_text() {
        let text = RobotsGenerator::new(reserved(), "https://tours.test")
            .generate()
            .to_text();

        assert!(text.starts_with("User-Agent: *\nAllow: /\nDisallow: /packages\n"));
        assert!(text.contains("Disallow: /ja/packages\n"));
        assert!(text.contains("User-Agent: Twitterbot\nAllow: /\n"));
        assert!(text.contains("Host: tours.test\n"));
        assert!(text.ends_with("Sitemap: https://tours.test/sitemap.xml\n"));
    }
}
