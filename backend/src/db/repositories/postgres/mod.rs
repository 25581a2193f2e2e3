//! Postgres repository implementation using Diesel.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Automatic retry for transient failures
//! - Automatic migration execution (creates and seeds both tables)
//!
//! ## Configuration
//!
//! Settings come from the `[postgres]` table of the application config
//! (see `AppConfig::to_postgres_config`). Only the connection URL has an
//! environment override, `DATABASE_URL` or `PG_DATABASE_URL`.

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;
use tokio::task;

use crate::db::repository::{
    CategoryRepository, ErrorContext, QuestionRepository, RepositoryError, RepositoryResult,
};
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

mod models;
mod schema;

use models::*;
use schema::*;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
    /// Maximum number of retry attempts for transient failures
    pub max_retries: u32,
    /// Initial retry delay in milliseconds (doubles with each retry)
    pub retry_delay_ms: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

/// Diesel-backed repository for Postgres.
#[derive(Clone, Debug)]
pub struct PostgresRepository {
    pool: PgPool,
    config: PostgresConfig,
}

impl PostgresRepository {
    /// Create a new repository and run pending migrations.
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("get_connection_for_migrations"),
                )
            })?;
            Self::run_migrations(&mut conn)?;
        }

        log::info!(
            "Postgres repository ready (pool max_size={})",
            config.max_pool_size
        );
        Ok(Self { pool, config })
    }

    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Migration failed: {}", e),
                ErrorContext::new("run_migrations"),
            )
        })?;

        Ok(())
    }

    /// Execute a database operation with automatic retry for transient failures.
    ///
    /// Retries up to `max_retries` times when the error is retryable
    /// (connection errors, serialization failures), doubling the delay each time.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static + Clone,
    {
        let pool = self.pool.clone();
        let max_retries = self.config.max_retries;
        let retry_delay_ms = self.config.retry_delay_ms;

        task::spawn_blocking(move || {
            let mut last_error = None;
            let mut retry_delay = Duration::from_millis(retry_delay_ms);

            for attempt in 0..=max_retries {
                if attempt > 0 {
                    log::debug!("Retrying database operation (attempt {})", attempt + 1);
                    std::thread::sleep(retry_delay);
                    retry_delay *= 2;
                }

                let mut conn = match pool.get() {
                    Ok(c) => c,
                    Err(e) => {
                        let err = RepositoryError::connection_with_context(
                            e.to_string(),
                            ErrorContext::new("get_connection")
                                .with_details(format!("attempt={}", attempt + 1)),
                        );
                        if attempt < max_retries {
                            last_error = Some(err);
                            continue;
                        }
                        return Err(err);
                    }
                };

                match f.clone()(&mut conn) {
                    Ok(result) => return Ok(result),
                    Err(e) if e.is_retryable() && attempt < max_retries => {
                        last_error = Some(e);
                        continue;
                    }
                    Err(e) => return Err(e),
                }
            }

            Err(last_error.unwrap_or_else(|| {
                RepositoryError::internal("Max retries exceeded with no error captured")
            }))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }
}

fn map_diesel_error(err: diesel::result::Error) -> RepositoryError {
    RepositoryError::from(err)
}

#[async_trait]
impl QuestionRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(map_diesel_error)
        })
        .await
        .map_err(|e| e.with_operation("health_check"))
    }

    async fn list_questions(&self) -> RepositoryResult<Vec<Question>> {
        self.with_conn(|conn| {
            let rows = questions::table
                .order(questions::id.asc())
                .select(QuestionRow::as_select())
                .load(conn)
                .map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(Question::from).collect())
        })
        .await
        .map_err(|e| e.with_operation("list_questions"))
    }

    async fn list_questions_by_category(
        &self,
        category_id: CategoryId,
    ) -> RepositoryResult<Vec<Question>> {
        let category = category_id.value();
        self.with_conn(move |conn| {
            let rows = questions::table
                .filter(questions::category.eq(category))
                .order(questions::id.asc())
                .select(QuestionRow::as_select())
                .load(conn)
                .map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(Question::from).collect())
        })
        .await
        .map_err(|e| e.with_operation("list_questions_by_category"))
    }

    async fn get_question(&self, question_id: QuestionId) -> RepositoryResult<Option<Question>> {
        let id = question_id.value();
        self.with_conn(move |conn| {
            let row = questions::table
                .find(id)
                .select(QuestionRow::as_select())
                .first(conn)
                .optional()
                .map_err(map_diesel_error)?;
            Ok(row.map(Question::from))
        })
        .await
        .map_err(|e| e.with_operation("get_question"))
    }

    async fn insert_question(&self, question: &NewQuestion) -> RepositoryResult<Question> {
        let row = NewQuestionRow::from(question);
        self.with_conn(move |conn| {
            let stored = diesel::insert_into(questions::table)
                .values(&row)
                .returning(QuestionRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;
            Ok(Question::from(stored))
        })
        .await
        .map_err(|e| e.with_operation("insert_question"))
    }

    async fn delete_question(&self, question_id: QuestionId) -> RepositoryResult<()> {
        let id = question_id.value();
        self.with_conn(move |conn| {
            let deleted = diesel::delete(questions::table.find(id))
                .execute(conn)
                .map_err(map_diesel_error)?;
            if deleted == 0 {
                return Err(RepositoryError::not_found_with_context(
                    "Question not found",
                    ErrorContext::new("delete_question")
                        .with_entity("question")
                        .with_entity_id(id),
                ));
            }
            Ok(())
        })
        .await
        .map_err(|e| e.with_operation("delete_question"))
    }
}

#[async_trait]
impl CategoryRepository for PostgresRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.with_conn(|conn| {
            let rows = categories::table
                .order(categories::id.asc())
                .select(CategoryRow::as_select())
                .load(conn)
                .map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(Category::from).collect())
        })
        .await
        .map_err(|e| e.with_operation("list_categories"))
    }

    async fn get_category(&self, category_id: CategoryId) -> RepositoryResult<Option<Category>> {
        let id = category_id.value();
        self.with_conn(move |conn| {
            let row = categories::table
                .find(id)
                .select(CategoryRow::as_select())
                .first(conn)
                .optional()
                .map_err(map_diesel_error)?;
            Ok(row.map(Category::from))
        })
        .await
        .map_err(|e| e.with_operation("get_category"))
    }
}
