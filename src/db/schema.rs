use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users(
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(150) UNIQUE NOT NULL,
        age INT,
        phone VARCHAR(15),
        address TEXT,
        created_at TIMESTAMP DEFAULT NOW(),
        updated_at TIMESTAMP DEFAULT NOW()
    )
"#;

const CREATE_TODOS: &str = r#"
    CREATE TABLE IF NOT EXISTS todos(
        id SERIAL PRIMARY KEY,
        user_id INT REFERENCES users(id) ON DELETE CASCADE,
        title VARCHAR(200) NOT NULL,
        description TEXT,
        completed BOOLEAN DEFAULT false,
        due_date DATE,
        created_at TIMESTAMP DEFAULT NOW(),
        updated_at TIMESTAMP DEFAULT NOW()
    )
"#;

/// Key for the advisory lock held while the tables are created.
const SCHEMA_LOCK_KEY: i64 = 0x746f_646f_6170_69;

/// Creates the `users` and `todos` tables when they are missing.
///
/// Safe to run on every start: existing tables and their rows are left alone.
/// Concurrent callers are serialized on a transaction-scoped advisory lock.
/// `todos` references `users`, so the order of the two statements matters.
pub async fn initialize(pool: &PgPool) -> Result<(), DatabaseError> {
    let mut transaction = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *transaction)
        .await?;
    sqlx::query(CREATE_USERS).execute(&mut *transaction).await?;
    sqlx::query(CREATE_TODOS).execute(&mut *transaction).await?;

    // the lock is released on commit
    transaction.commit().await?;

    info!("Database schema ready");
    Ok(())
}
