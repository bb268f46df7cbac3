// src/models/appointment.rs

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Guardado como TEXT, com CHECK no banco.
// Nenhuma transição é bloqueada: qualquer status pode sobrescrever qualquer outro.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: i64,

    /// Sempre o tutor do pet no momento da escrita, nunca enviado pelo cliente.
    pub tutor_id: Option<i64>,
    pub pet_id: i64,
    pub service_id: i64,

    /// Horário em UTC, sem fuso: `YYYY-MM-DDTHH:MM:SS`.
    #[schema(value_type = String, example = "2024-01-01T10:00:00")]
    pub date: NaiveDateTime,
    pub status: AppointmentStatus,
}

// Linha da listagem do painel, com os nomes já resolvidos.
// LEFT JOIN: referências órfãs aparecem com nome nulo.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AppointmentDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub appointment: Appointment,

    pub tutor_name: Option<String>,
    pub pet_name: Option<String>,
    pub service_name: Option<String>,
}

// Não existe campo de tutor aqui: ele é derivado do pet.
// Um `tutor_id` enviado no corpo é simplesmente ignorado.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AppointmentPayload {
    #[schema(example = 10)]
    pub pet_id: i64,

    #[schema(example = 1)]
    pub service_id: i64,

    /// RFC 3339 (`2024-01-01T13:00:00.000Z`, `2024-01-01T10:00:00-03:00`)
    /// ou sem fuso (`2024-01-01T10:00:00`).
    #[serde(deserialize_with = "deserialize_date")]
    #[schema(value_type = String, example = "2024-01-01T13:00:00.000Z")]
    pub date: NaiveDateTime,

    #[serde(default)]
    pub status: AppointmentStatus,
}

// O painel manda `JSON.stringify(new Date(...))`, isto é, RFC 3339 em UTC.
// Datas com fuso são convertidas para UTC; sem fuso são guardadas como vieram.
fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(date.naive_utc());
    }
    raw.parse::<NaiveDateTime>().map_err(|_| {
        serde::de::Error::custom(format!(
            "data inválida '{raw}': use RFC 3339 ou YYYY-MM-DDTHH:MM:SS"
        ))
    })
}
