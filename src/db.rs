pub mod appointment_repo;
pub use appointment_repo::AppointmentRepository;
pub mod pet_repo;
pub use pet_repo::PetRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod service_repo;
pub use service_repo::ServiceRepository;
pub mod tutor_repo;
pub use tutor_repo::TutorRepository;
pub mod user_repo;
pub use user_repo::UserRepository;

use std::{str::FromStr, time::Duration};

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool, Transaction,
};

// Abre a pool do SQLite. Cria o arquivo se ainda não existir.
//
// As FKs ficam declaradas no esquema mas não são verificadas pelo SQLite:
// apagar um tutor ou pet não é bloqueado nem propagado. As referências
// são conferidas pelos serviços na hora da escrita.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Banco em memória já migrado, usado pelos testes.
///
/// Cada conexão `:memory:` é um banco separado, por isso a pool tem uma única
/// conexão que nunca expira.
pub async fn memory_pool() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Transação para "confere e depois grava".
///
/// `BEGIN IMMEDIATE` pega o lock de escrita logo no início: um escritor
/// concorrente espera o busy timeout em vez de receber SQLITE_BUSY ao
/// promover a leitura para escrita.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}
