// Copyright The Splitpane Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading split layouts from TOML.
//!
//! User config is layered over `splitpane.default.toml`, so a config file only
//! needs the values it changes. Strategies are replaced wholesale rather than
//! merged field by field.

#[macro_use]
mod partial;
use std::fs::File;
use std::io::Read;
use std::ops::Range;
use std::path::{Path, PathBuf};

use macro_rules_attribute::derive;
use partial::{PartialConfig, ValidationError};
use serde::{Deserialize, Serialize};

use crate::model::{
    ConditionalStrategy, ConfigurationError, Density, FoldFeature, FractionStrategy,
    LayoutDirection, OffsetStrategy, Orientation, SplitLayout, SplitLayoutOptions, SplitStrategy,
};

pub fn config_path_default() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".splitpane.toml"))
}

/// A validated config.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub density: Density,
    pub strategy: SplitStrategy,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
#[serde(default)]
struct ConfigPartial {
    settings: SettingsPartial,
    strategy: Option<StrategyConfig>,
}

#[derive(PartialConfig!)]
#[derive_args(SettingsPartial)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Pixels per dp.
    pub density: f64,
    pub direction: LayoutDirection,
    #[derive_args(DividerPartial)]
    pub divider: Divider,
    #[derive_args(PanesPartial)]
    pub panes: Panes,
}

#[derive(PartialConfig!)]
#[derive_args(DividerPartial)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Divider {
    pub thickness: f64,
    pub handle_width: f64,
}

#[derive(PartialConfig!)]
#[derive_args(PanesPartial)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Panes {
    pub min_first: f64,
    pub min_second: f64,
}

impl Settings {
    pub fn layout_options(&self) -> SplitLayoutOptions {
        SplitLayoutOptions {
            divider_thickness: self.divider.thickness,
            handle_width: self.divider.handle_width,
            min_first_pane: self.panes.min_first,
            min_second_pane: self.panes.min_second,
        }
    }
}

/// The serialized form of a [`SplitStrategy`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    Fraction {
        orientation: Orientation,
        #[serde(default = "default_split_fraction")]
        split_fraction: f64,
        #[serde(default)]
        gap_width: f64,
    },
    Offset {
        orientation: Orientation,
        split_offset: f64,
        #[serde(default = "default_offset_from_start")]
        offset_from_start: bool,
        #[serde(default)]
        gap_width: f64,
    },
    Composite {
        #[serde(default)]
        conditionals: Vec<ConditionalConfig>,
        default: Box<StrategyConfig>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConditionalConfig {
    Fold {
        orientation: Orientation,
        fold: FoldFeature,
    },
    Breakpoint {
        #[serde(default)]
        min_width: f64,
        #[serde(default)]
        min_height: f64,
        strategy: Box<StrategyConfig>,
    },
}

fn default_split_fraction() -> f64 {
    0.5
}

fn default_offset_from_start() -> bool {
    true
}

impl StrategyConfig {
    pub fn build(&self) -> Result<SplitStrategy, ConfigurationError> {
        Ok(match self {
            StrategyConfig::Fraction {
                orientation,
                split_fraction,
                gap_width,
            } => SplitStrategy::Fraction(FractionStrategy::new(
                *orientation,
                *split_fraction,
                *gap_width,
            )?),
            StrategyConfig::Offset {
                orientation,
                split_offset,
                offset_from_start,
                gap_width,
            } => SplitStrategy::Offset(OffsetStrategy::new(
                *orientation,
                *split_offset,
                *offset_from_start,
                *gap_width,
            )?),
            StrategyConfig::Composite {
                conditionals,
                default,
            } => SplitStrategy::composite(
                conditionals.iter().map(ConditionalConfig::build).collect::<Result<_, _>>()?,
                default.build()?,
            ),
        })
    }
}

impl ConditionalConfig {
    pub fn build(&self) -> Result<ConditionalStrategy, ConfigurationError> {
        match self {
            ConditionalConfig::Fold { orientation, fold } => Ok(ConditionalStrategy::Fold {
                orientation: *orientation,
                fold: *fold,
            }),
            ConditionalConfig::Breakpoint {
                min_width,
                min_height,
                strategy,
            } => ConditionalStrategy::breakpoint(*min_width, *min_height, strategy.build()?),
        }
    }
}

impl ConfigPartial {
    fn default() -> Self {
        toml::from_str(include_str!("../splitpane.default.toml"))
            .expect("embedded default config should parse")
    }

    fn validate(self) -> Result<Config, SpannedError> {
        let Some(strategy) = self.strategy else {
            return Err(SpannedError {
                message: "Missing [strategy] section".to_owned(),
                span: None,
            });
        };
        let settings = self.settings.validate()?;
        let density = Density::new(settings.density)
            .ok_or(ConfigurationError::InvalidDensity(settings.density))?;
        settings.layout_options().validate()?;
        Ok(Config {
            settings,
            density,
            strategy: strategy.build()?,
        })
    }

    fn merge(low: Self, high: Self) -> Self {
        Self {
            settings: SettingsPartial::merge(low.settings, high.settings),
            strategy: high.strategy.or(low.strategy),
        }
    }
}

impl Config {
    /// Loads the config at `custom_path`, or the default config file if it
    /// exists. Falls back to the built-in defaults otherwise.
    pub fn load(custom_path: Option<&Path>) -> anyhow::Result<Config> {
        let mut buf = String::new();
        let default = config_path_default();
        let (mut file, path) = match (custom_path, default.as_deref()) {
            (Some(path), _) => (File::open(path)?, path),
            (None, None) => return Ok(Config::default()),
            (None, Some(default)) => match File::open(default) {
                Ok(file) => (file, default),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
                Err(e) => return Err(e.into()),
            },
        };
        file.read_to_string(&mut buf)?;
        Self::parse(&buf).map_err(|e| anyhow::anyhow!("{}", format_toml_error(e, &buf, path)))
    }

    pub fn default() -> Config {
        ConfigPartial::default()
            .validate()
            .expect("embedded default config should be valid")
    }

    pub fn parse(buf: &str) -> Result<Self, SpannedError> {
        let c: ConfigPartial = toml::from_str(buf)?;
        let defaults = ConfigPartial::default();
        ConfigPartial::merge(defaults, c).validate()
    }

    /// Creates a fresh split layout with no divider offset.
    pub fn split_layout(&self) -> Result<SplitLayout, ConfigurationError> {
        SplitLayout::new(self.strategy.clone(), self.settings.layout_options())
    }
}

fn format_toml_error(error: SpannedError, input: &str, path: &Path) -> String {
    use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

    let message = error.message;
    let Some(span) = error.span else {
        return format!("could not load config: {message}");
    };

    let snippet = Snippet::source(input)
        .path(path.to_string_lossy())
        .annotation(AnnotationKind::Primary.span(span.start..span.end).label(message));

    let report = Level::ERROR.primary_title("could not parse config").element(snippet);

    let renderer = Renderer::styled();
    format!("{}", renderer.render(&[report]))
}

/// A config error, with the location in the file if known.
#[derive(Debug)]
pub struct SpannedError {
    pub message: String,
    pub span: Option<Range<usize>>,
}

impl std::fmt::Display for SpannedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SpannedError {}

impl From<toml::de::Error> for SpannedError {
    fn from(e: toml::de::Error) -> Self {
        Self {
            message: e.message().to_owned(),
            span: e.span(),
        }
    }
}

impl From<ValidationError> for SpannedError {
    fn from(e: ValidationError) -> Self {
        Self {
            message: format!("{e}"),
            span: None,
        }
    }
}

impl From<ConfigurationError> for SpannedError {
    fn from(e: ConfigurationError) -> Self {
        Self {
            message: format!("{e}"),
            span: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Rect;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.density, Density::IDENTITY);
        assert!(config.strategy.is_horizontal());
        config.split_layout().unwrap();
    }

    #[test]
    fn default_settings_match_unspecified_setting_values() {
        assert_eq!(Config::default().settings, Config::parse("").unwrap().settings);
    }

    #[test]
    fn default_options_match_the_builtin_defaults() {
        assert_eq!(
            Config::default().settings.layout_options(),
            SplitLayoutOptions::default()
        );
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
            [settings]
            direction = "right_to_left"

            [settings.panes]
            min_first = 240.0
            "#,
        )
        .unwrap();
        assert_eq!(config.settings.direction, LayoutDirection::RightToLeft);
        assert_eq!(config.settings.panes.min_first, 240.0);
        assert_eq!(config.settings.panes.min_second, 100.0);
        assert_eq!(config.settings.divider.handle_width, 8.0);
    }

    #[test]
    fn strategies_are_replaced_as_a_whole() {
        let config = Config::parse(
            r#"
            [strategy]
            kind = "offset"
            orientation = "vertical"
            split_offset = 120.0
            offset_from_start = false
            "#,
        )
        .unwrap();
        assert_eq!(
            config.strategy,
            SplitStrategy::vertical_offset(120.0, false, 0.0).unwrap()
        );
    }

    #[test]
    fn composite_strategies_are_parsed() {
        let config = Config::parse(
            r#"
            [strategy]
            kind = "composite"

            [[strategy.conditionals]]
            kind = "fold"
            orientation = "horizontal"
            [strategy.conditionals.fold]
            orientation = "vertical"
            bounds = { left = 400.0, top = 0.0, right = 420.0, bottom = 600.0 }

            [[strategy.conditionals]]
            kind = "breakpoint"
            min_width = 900.0
            strategy = { kind = "fraction", orientation = "horizontal", split_fraction = 0.3 }

            [strategy.default]
            kind = "fraction"
            orientation = "vertical"
            "#,
        )
        .unwrap();
        let expected = SplitStrategy::composite(
            vec![
                ConditionalStrategy::Fold {
                    orientation: Orientation::Horizontal,
                    fold: FoldFeature {
                        bounds: Rect::new(400.0, 0.0, 420.0, 600.0),
                        orientation: Orientation::Vertical,
                    },
                },
                ConditionalStrategy::breakpoint(
                    900.0,
                    0.0,
                    SplitStrategy::horizontal_fraction(0.3, 0.0).unwrap(),
                )
                .unwrap(),
            ],
            SplitStrategy::vertical_fraction(0.5, 0.0).unwrap(),
        );
        assert_eq!(config.strategy, expected);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = Config::parse(
            "[strategy]\nkind = \"fraction\"\norientation = \"horizontal\"\nsplit_fraction = 2.0",
        )
        .unwrap_err();
        assert_eq!(err.message, "Split fraction must be within [0, 1], got 2");

        let err = Config::parse("[settings]\ndensity = 0.0").unwrap_err();
        assert!(err.message.contains("Density"), "{}", err.message);

        let err =
            Config::parse("[settings.divider]\nthickness = 10.0\nhandle_width = 4.0").unwrap_err();
        assert!(err.message.contains("handle width"), "{}", err.message);
    }

    #[test]
    fn unknown_fields_are_rejected_with_a_span() {
        let err = Config::parse("[settings]\ndensty = 2.0").unwrap_err();
        assert!(err.span.is_some());
    }

    #[test]
    fn it_loads_a_custom_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\ndensity = 2.0").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.density, Density::new(2.0).unwrap());
    }

    #[test]
    fn load_errors_mention_the_problem() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\ndirection = \"upside_down\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(format!("{err}").contains("could not parse config"), "{err}");
    }
}
