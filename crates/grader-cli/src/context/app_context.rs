use anyhow::Context;
use grader_config::GraderConfig;
use grader_db::service::ExamService;
use grader_remote::{AnalysisClient, AssistantClient};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ExamService,
    pub config: GraderConfig,
}

impl AppContext {
    /// Open the database named by `--db` or the configuration.
    ///
    /// The parent directory of an on-disk database is created if missing.
    pub async fn init(mut config: GraderConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        if let Some(path) = db_override {
            config.database.path = path.to_string();
        }

        if let Some(dir) = config.database.parent_dir() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let service = ExamService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        tracing::debug!(path = %config.database.path, "database ready");

        Ok(Self { service, config })
    }

    /// Client for the configured analysis service.
    pub fn analysis_client(&self) -> anyhow::Result<AnalysisClient> {
        AnalysisClient::new(&self.config.analysis.url).context("failed to build analysis client")
    }

    /// Client for the configured assistant service.
    pub fn assistant_client(&self) -> anyhow::Result<AssistantClient> {
        AssistantClient::new(&self.config.assistant.url).context("failed to build assistant client")
    }
}
