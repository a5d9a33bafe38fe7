use std::{path::PathBuf, time::Duration};

use anyhow::{Context, bail};
use kraftlog_import_storage::rest::{Credentials, REST, ReqwestSendRequest};

#[derive(clap::Args, Clone)]
pub struct Settings {
    /// Base URL of the KraftLog API
    #[arg(long, env = "KRAFTLOG_API_BASE_URL", global = true)]
    pub api_url: Option<String>,

    #[arg(long, env = "KRAFTLOG_API_USERNAME", global = true, default_value = "")]
    pub username: String,

    #[arg(
        long,
        env = "KRAFTLOG_API_PASSWORD",
        global = true,
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// YAML file translating muscle group headers into catalog muscle groups
    #[arg(
        long,
        env = "EXERCISE_MUSCLE_GROUPS_CONFIG_PATH",
        global = true,
        default_value = "exercise-muscle-groups.yml"
    )]
    pub muscle_groups: PathBuf,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout: u64,
}

impl Settings {
    pub fn catalog(&self) -> anyhow::Result<REST<ReqwestSendRequest>> {
        let Some(api_url) = self.api_url.as_deref().filter(|url| !url.trim().is_empty()) else {
            bail!("no API URL configured, use --api-url or KRAFTLOG_API_BASE_URL");
        };

        REST::new(
            api_url,
            Credentials {
                username: self.username.clone(),
                password: self.password.clone(),
            },
            Duration::from_secs(self.timeout),
        )
        .context("failed to create HTTP client")
    }
}
