//! CLI preference model.
//!
//! `CliConfig` is the flat, in-memory record. On disk the same fields are
//! grouped into five sections (`ui`, `behavior`, `templates`, `project`,
//! `debug`). Every field has a built-in default, and reading the nested form
//! is lenient: unknown sections, unknown keys, and values of the wrong JSON
//! type are ignored so older and newer config files keep loading.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::ConfigError;

/// Top-level section of the nested config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Ui,
    Behavior,
    Templates,
    Project,
    Debug,
}

impl Section {
    /// Sections in file order.
    pub const ALL: [Section; 5] = [
        Section::Ui,
        Section::Behavior,
        Section::Templates,
        Section::Project,
        Section::Debug,
    ];

    /// Key used for this section in the JSON file.
    pub fn key(self) -> &'static str {
        match self {
            Section::Ui => "ui",
            Section::Behavior => "behavior",
            Section::Templates => "templates",
            Section::Project => "project",
            Section::Debug => "debug",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Primitive type of a config field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Bool,
}

impl FieldKind {
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Bool => "boolean",
        }
    }
}

/// Static description of one config field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub section: Section,
    pub kind: FieldKind,
}

const fn field(name: &'static str, section: Section, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        section,
        kind,
    }
}

/// Flat CLI preference record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    // UI
    pub theme: String,
    pub show_banner: bool,
    pub progress_style: String,
    pub color_output: bool,
    pub terminal_width: String,

    // Behavior
    pub interactive_mode: bool,
    pub auto_confirm: bool,
    pub verbose_output: bool,
    pub skip_dependency_check: bool,

    // Templates
    pub default_template: String,
    pub template_source: String,

    // Project
    pub default_output_dir: String,
    pub auto_cd: bool,
    pub create_git_repo: bool,
    pub init_commit: bool,

    // Debug
    pub debug_mode: bool,
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_banner: true,
            progress_style: "bar".to_string(),
            color_output: true,
            terminal_width: "auto".to_string(),
            interactive_mode: true,
            auto_confirm: false,
            verbose_output: false,
            skip_dependency_check: false,
            default_template: "saas-basic".to_string(),
            template_source: "official".to_string(),
            default_output_dir: ".".to_string(),
            auto_cd: true,
            create_git_repo: true,
            init_commit: true,
            debug_mode: false,
            log_level: "INFO".to_string(),
        }
    }
}

enum Slot<'a> {
    Str(&'a mut String),
    Bool(&'a mut bool),
}

impl CliConfig {
    /// Every field, in nested-form order.
    pub const FIELDS: &'static [FieldSpec] = &[
        field("theme", Section::Ui, FieldKind::String),
        field("show_banner", Section::Ui, FieldKind::Bool),
        field("progress_style", Section::Ui, FieldKind::String),
        field("color_output", Section::Ui, FieldKind::Bool),
        field("terminal_width", Section::Ui, FieldKind::String),
        field("interactive_mode", Section::Behavior, FieldKind::Bool),
        field("auto_confirm", Section::Behavior, FieldKind::Bool),
        field("verbose_output", Section::Behavior, FieldKind::Bool),
        field("skip_dependency_check", Section::Behavior, FieldKind::Bool),
        field("default_template", Section::Templates, FieldKind::String),
        field("template_source", Section::Templates, FieldKind::String),
        field("default_output_dir", Section::Project, FieldKind::String),
        field("auto_cd", Section::Project, FieldKind::Bool),
        field("create_git_repo", Section::Project, FieldKind::Bool),
        field("init_commit", Section::Project, FieldKind::Bool),
        field("debug_mode", Section::Debug, FieldKind::Bool),
        field("log_level", Section::Debug, FieldKind::String),
    ];

    /// Look up the static description of a field.
    pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.name == name)
    }

    pub fn field_names() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(|spec| spec.name)
    }

    fn slot(&mut self, name: &str) -> Option<Slot<'_>> {
        let slot = match name {
            "theme" => Slot::Str(&mut self.theme),
            "show_banner" => Slot::Bool(&mut self.show_banner),
            "progress_style" => Slot::Str(&mut self.progress_style),
            "color_output" => Slot::Bool(&mut self.color_output),
            "terminal_width" => Slot::Str(&mut self.terminal_width),
            "interactive_mode" => Slot::Bool(&mut self.interactive_mode),
            "auto_confirm" => Slot::Bool(&mut self.auto_confirm),
            "verbose_output" => Slot::Bool(&mut self.verbose_output),
            "skip_dependency_check" => Slot::Bool(&mut self.skip_dependency_check),
            "default_template" => Slot::Str(&mut self.default_template),
            "template_source" => Slot::Str(&mut self.template_source),
            "default_output_dir" => Slot::Str(&mut self.default_output_dir),
            "auto_cd" => Slot::Bool(&mut self.auto_cd),
            "create_git_repo" => Slot::Bool(&mut self.create_git_repo),
            "init_commit" => Slot::Bool(&mut self.init_commit),
            "debug_mode" => Slot::Bool(&mut self.debug_mode),
            "log_level" => Slot::Str(&mut self.log_level),
            _ => return None,
        };
        Some(slot)
    }

    /// Read a field by name as JSON. `None` for names outside the schema.
    pub fn get_field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "theme" => Value::from(self.theme.as_str()),
            "show_banner" => Value::from(self.show_banner),
            "progress_style" => Value::from(self.progress_style.as_str()),
            "color_output" => Value::from(self.color_output),
            "terminal_width" => Value::from(self.terminal_width.as_str()),
            "interactive_mode" => Value::from(self.interactive_mode),
            "auto_confirm" => Value::from(self.auto_confirm),
            "verbose_output" => Value::from(self.verbose_output),
            "skip_dependency_check" => Value::from(self.skip_dependency_check),
            "default_template" => Value::from(self.default_template.as_str()),
            "template_source" => Value::from(self.template_source.as_str()),
            "default_output_dir" => Value::from(self.default_output_dir.as_str()),
            "auto_cd" => Value::from(self.auto_cd),
            "create_git_repo" => Value::from(self.create_git_repo),
            "init_commit" => Value::from(self.init_commit),
            "debug_mode" => Value::from(self.debug_mode),
            "log_level" => Value::from(self.log_level.as_str()),
            _ => return None,
        };
        Some(value)
    }

    /// Set a field by name. The value must match the field's JSON type.
    pub fn set_field(&mut self, name: &str, value: &Value) -> Result<(), ConfigError> {
        let slot = self
            .slot(name)
            .ok_or_else(|| ConfigError::UnknownField(name.to_string()))?;
        match (slot, value) {
            (Slot::Str(target), Value::String(s)) => *target = s.clone(),
            (Slot::Bool(target), Value::Bool(b)) => *target = *b,
            (Slot::Str(_), _) => {
                return Err(ConfigError::TypeMismatch {
                    field: name.to_string(),
                    expected: FieldKind::String.describe(),
                })
            }
            (Slot::Bool(_), _) => {
                return Err(ConfigError::TypeMismatch {
                    field: name.to_string(),
                    expected: FieldKind::Bool.describe(),
                })
            }
        }
        Ok(())
    }

    /// Set a field from command-line text.
    ///
    /// Boolean fields accept `true/false`, `yes/no`, `on/off`, and `1/0`.
    pub fn set_field_from_str(&mut self, name: &str, raw: &str) -> Result<(), ConfigError> {
        let spec =
            Self::field_spec(name).ok_or_else(|| ConfigError::UnknownField(name.to_string()))?;
        let value = match spec.kind {
            FieldKind::String => Value::from(raw),
            FieldKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Value::Bool(true),
                "false" | "no" | "off" | "0" => Value::Bool(false),
                _ => {
                    return Err(ConfigError::TypeMismatch {
                        field: name.to_string(),
                        expected: FieldKind::Bool.describe(),
                    })
                }
            },
        };
        self.set_field(name, &value)
    }

    /// Group the flat fields into the typed five-section form.
    pub fn to_nested(&self) -> NestedConfig {
        NestedConfig {
            ui: UiSection {
                theme: self.theme.clone(),
                show_banner: self.show_banner,
                progress_style: self.progress_style.clone(),
                color_output: self.color_output,
                terminal_width: self.terminal_width.clone(),
            },
            behavior: BehaviorSection {
                interactive_mode: self.interactive_mode,
                auto_confirm: self.auto_confirm,
                verbose_output: self.verbose_output,
                skip_dependency_check: self.skip_dependency_check,
            },
            templates: TemplatesSection {
                default_template: self.default_template.clone(),
                template_source: self.template_source.clone(),
            },
            project: ProjectSection {
                default_output_dir: self.default_output_dir.clone(),
                auto_cd: self.auto_cd,
                create_git_repo: self.create_git_repo,
                init_commit: self.init_commit,
            },
            debug: DebugSection {
                debug_mode: self.debug_mode,
                log_level: self.log_level.clone(),
            },
        }
    }

    /// The nested form as a JSON object, suitable for merging.
    pub fn to_nested_value(&self) -> Value {
        serde_json::to_value(self.to_nested()).unwrap_or_default()
    }

    /// Nested form of the built-in defaults.
    pub fn defaults_nested() -> Value {
        Self::default().to_nested_value()
    }

    /// Flatten a nested structure back into the flat record.
    ///
    /// Object-valued top-level entries are treated as sections and their keys
    /// are applied as field names. Scalar top-level entries are applied as
    /// field names directly, after every section. Anything that does not name a field, or carries
    /// the wrong JSON type (including `null`), keeps the default.
    pub fn from_nested(value: &Value) -> Self {
        let mut config = Self::default();
        let Some(root) = value.as_object() else {
            debug!("nested config is not an object, using defaults");
            return config;
        };

        // Section entries first, then top-level scalars, so a scalar field
        // always wins over the same field inside a section.
        let sections = root
            .values()
            .filter_map(Value::as_object)
            .flat_map(|section| section.iter());
        let scalars = root.iter().filter(|(_, entry)| !entry.is_object());

        for (key, entry) in sections.chain(scalars) {
            let key = key.as_str();
            match config.set_field(key, entry) {
                Ok(()) => {}
                Err(ConfigError::UnknownField(_)) => trace!(key, "ignoring unknown config key"),
                Err(e) => debug!(key, error = %e, "ignoring config value"),
            }
        }
        config
    }
}

/// Typed five-section layout of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NestedConfig {
    /// Terminal presentation preferences.
    pub ui: UiSection,
    /// Prompting and output behavior.
    pub behavior: BehaviorSection,
    /// Template selection defaults.
    pub templates: TemplatesSection,
    /// Defaults applied to newly generated projects.
    pub project: ProjectSection,
    /// Diagnostics.
    pub debug: DebugSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UiSection {
    /// Color theme name.
    pub theme: String,
    /// Print the banner on startup.
    pub show_banner: bool,
    /// Progress indicator style.
    pub progress_style: String,
    /// Emit ANSI colors.
    pub color_output: bool,
    /// Terminal width in columns, or `auto`.
    pub terminal_width: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorSection {
    /// Prompt for missing options.
    pub interactive_mode: bool,
    /// Answer yes to confirmations.
    pub auto_confirm: bool,
    /// Print detailed progress.
    pub verbose_output: bool,
    /// Skip checking for external tools.
    pub skip_dependency_check: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TemplatesSection {
    /// Template used when none is given. Validated against the catalog when used.
    pub default_template: String,
    /// Where templates come from.
    pub template_source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProjectSection {
    /// Parent directory for new projects.
    pub default_output_dir: String,
    /// Change into the project directory after creation.
    pub auto_cd: bool,
    /// Initialize a git repository.
    pub create_git_repo: bool,
    /// Create an initial commit.
    pub init_commit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DebugSection {
    /// Enable debug diagnostics.
    pub debug_mode: bool,
    /// Log level (DEBUG, INFO, WARNING, ERROR, CRITICAL).
    pub log_level: String,
}

impl Default for NestedConfig {
    fn default() -> Self {
        CliConfig::default().to_nested()
    }
}

impl Default for UiSection {
    fn default() -> Self {
        NestedConfig::default().ui
    }
}

impl Default for BehaviorSection {
    fn default() -> Self {
        NestedConfig::default().behavior
    }
}

impl Default for TemplatesSection {
    fn default() -> Self {
        NestedConfig::default().templates
    }
}

impl Default for ProjectSection {
    fn default() -> Self {
        NestedConfig::default().project
    }
}

impl Default for DebugSection {
    fn default() -> Self {
        NestedConfig::default().debug
    }
}

/// JSON Schema for the config file.
pub fn config_schema() -> Result<Value, serde_json::Error> {
    serde_json::to_value(schemars::schema_for!(NestedConfig))
}
