//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use grader_config::GraderConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/grader/exams.db"

[analysis]
url = "https://vision.example.com"
prompt = "Grade this page."

[assistant]
url = "https://tutor.example.com"

[general]
default_limit = 5
"#,
        )?;

        let config: GraderConfig = Figment::from(Serialized::defaults(GraderConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/grader/exams.db");
        assert_eq!(config.analysis.url, "https://vision.example.com");
        assert_eq!(config.analysis.prompt, "Grade this page.");
        assert_eq!(config.assistant.url, "https://tutor.example.com");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".grader")?;
        jail.create_file(
            ".grader/config.toml",
            r#"
[assistant]
url = "http://10.0.0.7:8000"
"#,
        )?;

        let config = GraderConfig::load().expect("config loads");
        assert_eq!(config.assistant.url, "http://10.0.0.7:8000");
        assert_eq!(config.analysis.url, "http://localhost:8000");
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analysis]
url = "http://gpu-box:8000"
"#,
        )?;

        let config: GraderConfig = Figment::from(Serialized::defaults(GraderConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.analysis.url, "http://gpu-box:8000");
        assert_eq!(config.analysis.prompt, grader_config::DEFAULT_ANALYSIS_PROMPT);
        assert_eq!(config.database.path, ".grader/grader.db");
        Ok(())
    });
}

#[test]
fn invalid_url_in_project_file_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".grader")?;
        jail.create_file(
            ".grader/config.toml",
            r#"
[analysis]
url = "ftp://nope"
"#,
        )?;

        let err = GraderConfig::load().unwrap_err();
        assert!(err.to_string().contains("analysis.url"));
        Ok(())
    });
}
