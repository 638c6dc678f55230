//! Optional project features and their declared dependencies.

use serde::Serialize;

/// Catalog entry for a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Features this one cannot work without.
    pub dependencies: &'static [&'static str],
}

/// All features, in declaration order.
pub const FEATURES: &[FeatureInfo] = &[
    FeatureInfo {
        key: "authentication",
        name: "Authentication",
        description: "Authentication and authorization",
        dependencies: &["database"],
    },
    FeatureInfo {
        key: "database",
        name: "Database",
        description: "Database setup",
        dependencies: &[],
    },
    FeatureInfo {
        key: "api",
        name: "REST API",
        description: "Complete REST API",
        dependencies: &[],
    },
    FeatureInfo {
        key: "frontend",
        name: "Frontend",
        description: "Modern user interface",
        dependencies: &[],
    },
    FeatureInfo {
        key: "docker",
        name: "Docker",
        description: "Docker containerization",
        dependencies: &[],
    },
    FeatureInfo {
        key: "cicd",
        name: "CI/CD",
        description: "Continuous integration pipeline",
        dependencies: &["docker"],
    },
    FeatureInfo {
        key: "monitoring",
        name: "Monitoring",
        description: "Monitoring and metrics",
        dependencies: &["docker"],
    },
    FeatureInfo {
        key: "ai",
        name: "AI",
        description: "AI and LLM integration",
        dependencies: &["api", "database"],
    },
    FeatureInfo {
        key: "testing",
        name: "Testing",
        description: "Automated tests",
        dependencies: &[],
    },
    FeatureInfo {
        key: "documentation",
        name: "Documentation",
        description: "Generated documentation",
        dependencies: &[],
    },
    FeatureInfo {
        key: "analytics",
        name: "Analytics",
        description: "Usage analytics",
        dependencies: &["database"],
    },
    FeatureInfo {
        key: "caching",
        name: "Caching",
        description: "Caching layer",
        dependencies: &[],
    },
    FeatureInfo {
        key: "search",
        name: "Search",
        description: "Search engine",
        dependencies: &["database"],
    },
    FeatureInfo {
        key: "notifications",
        name: "Notifications",
        description: "Notification delivery",
        dependencies: &["database"],
    },
    FeatureInfo {
        key: "payments",
        name: "Payments",
        description: "Payment processing",
        dependencies: &["database", "authentication"],
    },
];

/// Look up a feature by exact key.
pub fn feature(key: &str) -> Option<&'static FeatureInfo> {
    FEATURES.iter().find(|f| f.key == key)
}

pub fn feature_keys() -> impl Iterator<Item = &'static str> {
    FEATURES.iter().map(|f| f.key)
}

/// Position of `key` in declaration order.
pub fn catalog_position(key: &str) -> Option<usize> {
    FEATURES.iter().position(|f| f.key == key)
}
