//! Official project templates.

use serde::Serialize;

/// Canonical template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "saas-basic";

/// Relative effort of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        };
        f.pad(label)
    }
}

/// Catalog entry for a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Features a project built from this template enables by default.
    pub features: &'static [&'static str],
    pub complexity: Complexity,
}

/// All templates, in declaration order.
pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        key: "saas-basic",
        name: "SaaS Basic",
        description: "Complete SaaS application with authentication and billing",
        features: &["authentication", "database", "api", "frontend", "docker", "cicd"],
        complexity: Complexity::Medium,
    },
    TemplateInfo {
        key: "api-only",
        name: "API Only",
        description: "REST API without a frontend",
        features: &["database", "api", "docker", "cicd"],
        complexity: Complexity::Low,
    },
    TemplateInfo {
        key: "frontend-only",
        name: "Frontend Only",
        description: "Frontend application without a backend",
        features: &["frontend", "docker", "cicd"],
        complexity: Complexity::Low,
    },
    TemplateInfo {
        key: "microservices",
        name: "Microservices",
        description: "Microservices architecture",
        features: &["api", "database", "docker", "cicd", "monitoring"],
        complexity: Complexity::High,
    },
    TemplateInfo {
        key: "e-commerce",
        name: "E-commerce",
        description: "Complete online store",
        features: &["authentication", "database", "api", "frontend", "payments", "docker"],
        complexity: Complexity::High,
    },
    TemplateInfo {
        key: "blog",
        name: "Blog",
        description: "Blog with a content management system",
        features: &["authentication", "database", "api", "frontend", "docker"],
        complexity: Complexity::Medium,
    },
    TemplateInfo {
        key: "ai-ready",
        name: "AI Ready",
        description: "Application prepared for AI integration",
        features: &["authentication", "database", "api", "frontend", "ai", "docker"],
        complexity: Complexity::High,
    },
    TemplateInfo {
        key: "minimal",
        name: "Minimal",
        description: "Minimal starter project",
        features: &["api", "docker"],
        complexity: Complexity::Low,
    },
];

/// Look up a template by exact key.
pub fn template(key: &str) -> Option<&'static TemplateInfo> {
    TEMPLATES.iter().find(|t| t.key == key)
}

pub fn template_keys() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|t| t.key)
}
