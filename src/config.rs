// src/config.rs

use std::{env, str::FromStr};

use anyhow::Context;
use sqlx::SqlitePool;

use crate::{
    db::{
        self, AppointmentRepository, PetRepository, ProductRepository, ServiceRepository,
        TutorRepository, UserRepository,
    },
    services::{AppointmentService, AuthService, PetService},
};

// Configuração lida do ambiente (.env é opcional)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub jwt_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://petclinic.db".to_string()),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5)?,
            jwt_ttl_hours: env_or("JWT_TTL_HOURS", 24 * 7)?,
            bcrypt_cost: env_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} tem um valor inválido: {raw}")),
        Err(_) => Ok(default),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub auth_service: AuthService,
    pub tutor_repo: TutorRepository,
    pub service_repo: ServiceRepository,
    pub product_repo: ProductRepository,
    pub pet_service: PetService,
    pub appointment_service: AppointmentService,
}

impl AppState {
    // Abre a pool uma única vez; ela é fechada pelo main no desligamento
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db_pool = db::connect(&config.database_url, config.max_connections)
            .await
            .with_context(|| format!("Falha ao conectar em {}", config.database_url))?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, config))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: SqlitePool, config: &AppConfig) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let auth_service = AuthService::new(
            user_repo,
            config.jwt_secret.clone(),
            chrono::Duration::hours(config.jwt_ttl_hours),
            config.bcrypt_cost,
        );

        Self {
            db_pool,
            auth_service,
            tutor_repo: TutorRepository::new(),
            service_repo: ServiceRepository::new(),
            product_repo: ProductRepository::new(),
            pet_service: PetService::new(PetRepository::new(), TutorRepository::new()),
            appointment_service: AppointmentService::new(
                AppointmentRepository::new(),
                PetRepository::new(),
                ServiceRepository::new(),
            ),
        }
    }
}
