//! Shared test helpers for `PostgreSQL` integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::postgres::PostgresBoardRepository,
    domain::{Board, BoardDetails},
};
use taskboard::identity::domain::UserEmail;
use taskboard::store::{apply_schema, connect};
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Environment variable naming the test database.
pub const DATABASE_URL_VAR: &str = "TASKBOARD_TEST_DATABASE_URL";

/// Repositories connected to the test database.
pub struct PgContext {
    /// Board repository under test.
    pub boards: PostgresBoardRepository,
    /// Task repository under test.
    pub tasks: PostgresTaskRepository,
    /// Runtime driving the async repository calls.
    pub rt: Runtime,
}

/// Connects to the test database and applies the schema, or returns `None`
/// when no database is configured.
#[fixture]
pub fn pg_context() -> Option<PgContext> {
    let url = std::env::var(DATABASE_URL_VAR).ok()?;
    let pool = connect(&url, 2).expect("connect to test database");
    apply_schema(&pool).expect("apply schema");
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    Some(PgContext {
        boards: PostgresBoardRepository::new(pool.clone()),
        tasks: PostgresTaskRepository::new(pool),
        rt,
    })
}

/// Returns an address unique to this test run.
pub fn unique_email(local: &str) -> UserEmail {
    UserEmail::new(format!("{local}+{}@example.com", Uuid::new_v4().simple()))
        .expect("valid email")
}

/// Builds an unsaved board owned by `creator`.
pub fn new_board(creator: &UserEmail, name: &str) -> Board {
    Board::new(
        creator.clone(),
        BoardDetails::new(name, "integration"),
        &DefaultClock,
    )
}
