use crate::api::mealdb::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mealfinder", version, about = "Browse TheMealDB recipes in your terminal")]
pub struct Config {
    /// Base URL of the recipe API
    #[arg(long, env = "MEALFINDER_API_BASE", default_value = DEFAULT_BASE_URL)]
    pub api_base: String,

    /// Fragment to open at startup, e.g. `#/category/Seafood`
    #[arg(long, env = "MEALFINDER_ROUTE", default_value = "#/")]
    pub route: String,

    /// Write logs to this file (logging is off when unset)
    #[arg(long, env = "MEALFINDER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive
    #[arg(long, env = "MEALFINDER_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Reads `.env` (if any) before parsing so its values act as env defaults.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["mealfinder"]).unwrap();
        assert_eq!(config.route, "#/");
        assert!(config.api_base.starts_with("https://www.themealdb.com"));
    }

    #[test]
    fn flags_override() {
        let config = Config::try_parse_from([
            "mealfinder",
            "--route",
            "#/meal/52772",
            "--log-file",
            "/tmp/mealfinder.log",
        ])
        .unwrap();
        assert_eq!(config.route, "#/meal/52772");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/mealfinder.log")));
    }
}
