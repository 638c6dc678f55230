//! Project name rules.
//!
//! Checks are applied in a fixed order and every finding is collected:
//! - length between 2 and 50 characters
//! - an ASCII letter first, then ASCII letters, digits, `-` or `_`
//! - no problematic whole-string patterns (digits only, separators only,
//!   dots only, whitespace, characters invalid in file names)
//! - not a reserved word (case-insensitive)
//! - style warnings and suggestions that never block

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::result::ValidationResult;

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 50;

/// Names longer than this get a suggestion to shorten.
const LONG_NAME_HINT: usize = 30;

/// Names that collide with devices, common directories, or keywords.
pub const RESERVED_NAMES: &[&str] = &[
    // Windows device names
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
    // Placeholders and build artifacts
    "test", "example", "sample", "demo", "tmp", "temp", "cache", "src", "lib", "bin", "dist",
    "build", "node_modules", ".git",
    // Language keywords
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "false", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "none", "nonlocal", "not", "or", "pass", "raise", "return", "true", "try", "while",
    "with", "yield",
];

static ALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("regex"));

static PROBLEMATIC_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\d+$",
        r"^[_-]+$",
        r"^\.+$",
        r"\s",
        r#"[<>:"/\\|?*]"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("problematic name regex"))
    .collect()
});

/// Validates proposed project names.
pub struct NameValidator;

impl NameValidator {
    pub fn validate(name: &str) -> ValidationResult {
        let mut result = ValidationResult::success();

        if name.is_empty() {
            result.add_error("Project name is required");
            return result;
        }

        check_length(name, &mut result);
        check_charset(name, &mut result);
        check_problematic(name, &mut result);
        check_reserved(name, &mut result);
        check_style(name, &mut result);

        result
    }

    /// Validate an untyped value, as found in a JSON project description.
    pub fn validate_value(value: &Value) -> ValidationResult {
        match value {
            Value::String(name) => Self::validate(name),
            Value::Null => Self::validate(""),
            _ => ValidationResult::failure(
                vec!["Project name must be a string".to_string()],
                Vec::new(),
                Vec::new(),
            ),
        }
    }

    pub fn is_reserved(name: &str) -> bool {
        let lowered = name.to_lowercase();
        RESERVED_NAMES.contains(&lowered.as_str())
    }
}

fn check_length(name: &str, result: &mut ValidationResult) {
    let len = name.chars().count();
    if len < MIN_NAME_LEN {
        result.add_error(format!("Name must be at least {MIN_NAME_LEN} characters long"));
        result.add_suggestion("Example: 'my-app', 'web-project'");
    }
    if len > MAX_NAME_LEN {
        result.add_error(format!("Name cannot be longer than {MAX_NAME_LEN} characters"));
        result.add_suggestion("Use a shorter, descriptive name");
    }
}

fn check_charset(name: &str, result: &mut ValidationResult) {
    if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        result.add_error("Name must start with a letter");
        result.add_suggestion("Example: 'my-project', 'web-app'");
    }
    if !ALLOWED_RE.is_match(name) {
        result.add_error("Name can only contain letters, digits, hyphens (-) and underscores (_)");
        result.add_suggestion("Allowed characters: a-z, A-Z, 0-9, -, _");
    }
}

fn check_problematic(name: &str, result: &mut ValidationResult) {
    // One error no matter how many patterns match.
    if PROBLEMATIC_RES.iter().any(|re| re.is_match(name)) {
        result.add_error(format!("Name '{name}' contains a problematic pattern"));
    }
}

fn check_reserved(name: &str, result: &mut ValidationResult) {
    if NameValidator::is_reserved(name) {
        result.add_error(format!("'{name}' is a reserved name"));
        result.add_suggestion("Use a different name such as 'my-project' or 'main-app'");
    }
}

fn check_style(name: &str, result: &mut ValidationResult) {
    if name.ends_with('-') {
        result.add_warning("Name ends with a hyphen, which can cause problems");
        result.add_suggestion("Remove the trailing hyphen");
    }
    if name.starts_with('_') {
        result.add_warning("Name starts with an underscore, which can cause problems");
        result.add_suggestion("Start with a letter instead");
    }
    if name.contains("--") {
        result.add_warning("Name contains double hyphens");
        result.add_suggestion("Use single hyphens: 'my-project'");
    }
    if name.contains("__") {
        result.add_warning("Name contains double underscores");
        result.add_suggestion("Use single underscores: 'my_project'");
    }

    let has_letters = name.chars().any(char::is_alphabetic);
    if has_letters && !name.chars().any(char::is_lowercase) {
        result.add_suggestion("Consider lowercase for readability");
    }
    if name.chars().count() > LONG_NAME_HINT {
        result.add_suggestion("Shorter names are easier to remember");
    }
}
