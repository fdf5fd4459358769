use std::path::Path;

use anyhow::Context;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let config = Self::from_toml(&raw).with_context(|| format!("invalid config file {}", path.display()))?;

        tracing::debug!(
            config_path = %path.display(),
            other_errors = config.other_errors.len(),
            "loaded triage configuration"
        );

        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).context("config variable expansion failed")?;

        let config: Self = toml::from_str(&expanded).context("failed to parse config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a named-error entry has an empty name or message
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_other_errors()?;
        Ok(())
    }

    fn validate_other_errors(&self) -> anyhow::Result<()> {
        for (name, entry) in &self.other_errors {
            if name.trim().is_empty() {
                anyhow::bail!("other_errors entry names must not be empty");
            }

            if entry.message.trim().is_empty() {
                anyhow::bail!("other_errors.{name}.message must not be empty");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use triage_core::StatusCode;

    use crate::{Config, LogFormat};

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.log.format, LogFormat::Text);
        assert!(config.other_errors.is_empty());
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
            [log]
            filter = "triage_translate=debug"
            format = "json"

            [other_errors.CastError]
            status = 422
            message = "Unprocessable"

            [other_errors.SyntaxError]
            status = 400
            message = "Malformed body"
        "#;

        // 422 is outside the catalog
        assert!(Config::from_toml(toml).is_err());

        let config = Config::from_toml(&toml.replace("422", "409")).unwrap();
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.other_errors.len(), 2);
        assert_eq!(config.other_errors["CastError"].status, StatusCode::Conflict);

        let names: Vec<&str> = config.other_errors.keys().map(String::as_str).collect();
        assert_eq!(names, ["CastError", "SyntaxError"]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_toml("[log]\nlevel = \"info\"").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"failed to parse config");
    }

    #[test]
    fn empty_message_is_rejected() {
        let toml = "[other_errors.CastError]\nstatus = 400\nmessage = \"  \"";
        let err = Config::from_toml(toml).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"other_errors.CastError.message must not be empty");
    }

    #[test]
    fn empty_name_is_rejected() {
        let toml = "[other_errors.\"\"]\nstatus = 400\nmessage = \"Invalid\"";
        assert!(Config::from_toml(toml).is_err());
    }

    #[test]
    fn expands_environment_before_parsing() {
        temp_env::with_var("TRIAGE_TEST_FILTER", Some("warn"), || {
            let config = Config::from_toml("[log]\nfilter = \"{{ env.TRIAGE_TEST_FILTER }}\"").unwrap();
            assert_eq!(config.log.filter, "warn");
        });
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[other_errors.Timeout]\nstatus = 503\nmessage = \"Try again later\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.other_errors["Timeout"].status, StatusCode::ServiceUnavailable);
        assert_eq!(config.other_errors["Timeout"].message, "Try again later");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }
}
