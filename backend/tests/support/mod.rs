#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use trivia_api::db::{LocalRepository, QuestionRepository};
use trivia_api::models::{CategoryId, NewQuestion, Question};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Env vars read by `AppConfig::apply_env_overrides`, all cleared.
pub const CLEARED_CONFIG_ENV: &[(&str, Option<&str>)] = &[
    ("TRIVIA_CONFIG", None),
    ("HOST", None),
    ("PORT", None),
    ("QUESTIONS_PER_PAGE", None),
    ("REPOSITORY_TYPE", None),
    ("DATABASE_URL", None),
    ("PG_DATABASE_URL", None),
];

/// Store a question with generated answer and difficulty.
pub async fn seed_question(repo: &LocalRepository, text: &str, category: i64) -> Question {
    repo.insert_question(&NewQuestion {
        question: text.to_string(),
        answer: format!("answer: {}", text),
        category: CategoryId(category),
        difficulty: 2,
    })
    .await
    .unwrap()
}

/// Store with the default categories and `count` questions in `category`,
/// numbered "Question 1" upwards.
pub async fn repo_with_questions(count: usize, category: i64) -> LocalRepository {
    let repo = LocalRepository::with_default_categories();
    for i in 1..=count {
        seed_question(&repo, &format!("Question {}", i), category).await;
    }
    repo
}
