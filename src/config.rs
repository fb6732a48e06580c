// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Configuration layout.
//!
//! Specify the layout of the configuration file albumcredits reads on
//! startup. Every section is optional. File I/O is left to the caller to
//! figure out.
//!
//! # General Layout
//!
//! ```toml
//! [input]
//! directory = "$HOME/music/incoming"
//!
//! [output]
//! verbose = false
//!
//! [fixup]
//! all_caps = ["Some Studio"]
//!
//! [[fixup.names]]
//! from = "FOO RECORDS"
//! to = "Foo Records"
//! ```
//!
//! Name rules apply in the order they are listed, each one seeing the output
//! of the previous one.

use crate::entry::NameFixups;

use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// Settings layout.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Input settings.
    pub input: InputSettings,

    /// Output settings.
    pub output: OutputSettings,

    /// Additional fixups applied to credited names on merge.
    pub fixup: FixupSettings,
}

impl Settings {
    /// Build name fixups with configured rules appended to built-in rules.
    ///
    /// Plain substitution rules come before all caps rules.
    pub fn name_fixups(&self) -> NameFixups {
        let mut fixups = NameFixups::default();
        for rule in &self.fixup.names {
            fixups.push_rule(rule.from.as_str(), rule.to.as_str());
        }
        for name in &self.fixup.all_caps {
            fixups.push_all_caps(name.as_str());
        }

        fixups
    }
}

impl FromStr for Settings {
    type Err = ConfigError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut settings: Settings = toml::de::from_str(data).map_err(ConfigError::Deserialize)?;

        // INVARIANT: Perform shell expansion on input directory field.
        if let Some(directory) = settings.input.directory.take() {
            let expanded = shellexpand::full(directory.to_string_lossy().as_ref())
                .map_err(ConfigError::ShellExpansion)?
                .into_owned();
            settings.input.directory = Some(PathBuf::from(expanded));
        }

        Ok(settings)
    }
}

/// Input settings.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSettings {
    /// Directory to use when none is given on the command line.
    pub directory: Option<PathBuf>,
}

impl InputSettings {
    /// Treat configured directory as [`Path`] slice.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

/// Output settings.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Print summary of functions instead of credit blocks.
    pub verbose: bool,
}

/// Name fixup settings.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixupSettings {
    /// Substring replacements in order of application.
    pub names: Vec<NameRule>,

    /// Names whose all caps spelling should be replaced by them.
    pub all_caps: Vec<String>,
}

/// Single substring replacement for credited names.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameRule {
    /// Text to replace.
    pub from: String,

    /// Replacement text.
    pub to: String,
}

/// Configuration error types.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),

    /// Failed to perform shell expansion on configuration.
    #[error(transparent)]
    ShellExpansion(#[from] shellexpand::LookupError<std::env::VarError>),
}
