//! Repository factory for dependency injection.
//!
//! This module creates repository instances from runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
use super::repositories::PostgresRepository;
use super::repository::{FullRepository, RepositoryError, RepositoryResult};
#[cfg(feature = "postgres-repo")]
use super::PostgresConfig;
use crate::config::AppConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Postgres + Diesel implementation
    Postgres,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("postgres", "pg", "local").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create the repository selected by `config`.
    pub async fn from_config(config: &AppConfig) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = config
            .repository_type()
            .map_err(|e| RepositoryError::configuration(e.to_string()))?;

        match repo_type {
            RepositoryType::Postgres => {
                #[cfg(feature = "postgres-repo")]
                {
                    let pg = Self::create_postgres(&config.to_postgres_config()).await?;
                    Ok(pg as Arc<dyn FullRepository>)
                }
                #[cfg(not(feature = "postgres-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Postgres repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local(config.repository.seed_categories)),
        }
    }

    /// Create a Postgres repository. Migrations run before this returns.
    #[cfg(feature = "postgres-repo")]
    pub async fn create_postgres(
        config: &PostgresConfig,
    ) -> RepositoryResult<Arc<PostgresRepository>> {
        let config = config.clone();
        // Pool construction and migrations block on network I/O
        let repo = tokio::task::spawn_blocking(move || PostgresRepository::new(config))
            .await
            .map_err(|e| RepositoryError::internal(format!("Task join error: {}", e)))??;
        Ok(Arc::new(repo))
    }

    /// Create an in-memory local repository, optionally seeded with the
    /// default categories.
    pub fn create_local(seed_categories: bool) -> Arc<dyn FullRepository> {
        if seed_categories {
            Arc::new(LocalRepository::with_default_categories())
        } else {
            Arc::new(LocalRepository::new())
        }
    }
}
