// src/services/appointment_service.rs

use sqlx::{SqliteConnection, SqlitePool};

use crate::{
    common::error::AppError,
    db::{self, AppointmentRepository, PetRepository, ServiceRepository},
    models::appointment::{Appointment, AppointmentDetail, AppointmentPayload},
};

// O tutor de um agendamento nunca vem do cliente: é sempre o tutor do pet.
// A regra vale igual para criação e atualização.
#[derive(Clone)]
pub struct AppointmentService {
    repo: AppointmentRepository,
    pet_repo: PetRepository,
    service_repo: ServiceRepository,
}

impl AppointmentService {
    pub fn new(
        repo: AppointmentRepository,
        pet_repo: PetRepository,
        service_repo: ServiceRepository,
    ) -> Self {
        Self { repo, pet_repo, service_repo }
    }

    pub async fn find_by_id(&self, pool: &SqlitePool, id: i64) -> Result<Appointment, AppError> {
        self.repo.find_by_id(pool, id).await
    }

    pub async fn list(&self, pool: &SqlitePool) -> Result<Vec<AppointmentDetail>, AppError> {
        self.repo.list_detailed(pool).await
    }

    pub async fn create(
        &self,
        pool: &SqlitePool,
        payload: &AppointmentPayload,
    ) -> Result<Appointment, AppError> {
        let mut tx = db::begin_write(pool).await?;

        let tutor_id = self.derive_tutor(&mut tx, payload).await?;
        let appointment = self.repo.create(&mut *tx, payload, tutor_id).await?;

        tx.commit().await?;
        Ok(appointment)
    }

    pub async fn update(
        &self,
        pool: &SqlitePool,
        id: i64,
        payload: &AppointmentPayload,
    ) -> Result<(), AppError> {
        let mut tx = db::begin_write(pool).await?;

        let tutor_id = self.derive_tutor(&mut tx, payload).await?;
        self.repo.update(&mut *tx, id, payload, tutor_id).await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        self.repo.delete(pool, id).await
    }

    // Pet inexistente é erro de validação do campo `pet_id`;
    // serviço inexistente é referência inválida.
    async fn derive_tutor(
        &self,
        conn: &mut SqliteConnection,
        payload: &AppointmentPayload,
    ) -> Result<Option<i64>, AppError> {
        let pet = match self.pet_repo.find_by_id(&mut *conn, payload.pet_id).await {
            Ok(pet) => pet,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::invalid_field("pet_id", "not_found", "Pet não encontrado."));
            }
            Err(e) => return Err(e),
        };

        match self.service_repo.find_by_id(&mut *conn, payload.service_id).await {
            Ok(_) => {}
            Err(AppError::NotFound(_)) => {
                return Err(AppError::ForeignKeyViolation(format!(
                    "Serviço {} não existe.",
                    payload.service_id
                )));
            }
            Err(e) => return Err(e),
        }

        Ok(pet.tutor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{memory_pool, TutorRepository},
        models::{
            appointment::AppointmentStatus,
            pet::PetPayload,
            service::ServicePayload,
            tutor::TutorPayload,
        },
    };
    use chrono::NaiveDate;

    struct Fixture {
        pool: SqlitePool,
        appointments: AppointmentService,
        tutor_id: i64,
        pet_id: i64,
        service_id: i64,
    }

    async fn fixture() -> Fixture {
        let pool = memory_pool().await.unwrap();

        let tutor = TutorRepository::new()
            .create(
                &pool,
                &TutorPayload {
                    name: "Maria".into(),
                    contact: Some("81-1234".into()),
                    address: Some("Rua A".into()),
                },
            )
            .await
            .unwrap();
        let pet = PetRepository::new()
            .create(
                &pool,
                &PetPayload {
                    name: "Rex".into(),
                    species: Some("Dog".into()),
                    breed: None,
                    age: None,
                    gender: None,
                    color: None,
                    tutor_id: Some(tutor.id),
                },
            )
            .await
            .unwrap();
        let service = ServiceRepository::new()
            .create(
                &pool,
                &ServicePayload {
                    name: "Consulta".into(),
                    description: None,
                    price: 120.0,
                },
            )
            .await
            .unwrap();

        let appointments = AppointmentService::new(
            AppointmentRepository::new(),
            PetRepository::new(),
            ServiceRepository::new(),
        );

        Fixture {
            pool,
            appointments,
            tutor_id: tutor.id,
            pet_id: pet.id,
            service_id: service.id,
        }
    }

    fn payload(pet_id: i64, service_id: i64, status: AppointmentStatus) -> AppointmentPayload {
        AppointmentPayload {
            pet_id,
            service_id,
            date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            status,
        }
    }

    #[tokio::test]
    async fn tutor_is_derived_from_the_pet() {
        let f = fixture().await;

        let created = f
            .appointments
            .create(&f.pool, &payload(f.pet_id, f.service_id, AppointmentStatus::Pending))
            .await
            .unwrap();

        assert_eq!(created.tutor_id, Some(f.tutor_id));
        let stored = f.appointments.find_by_id(&f.pool, created.id).await.unwrap();
        assert_eq!(stored.tutor_id, Some(f.tutor_id));
    }

    #[tokio::test]
    async fn unknown_pet_is_a_validation_error_and_nothing_is_written() {
        let f = fixture().await;

        let result = f
            .appointments
            .create(&f.pool, &payload(999, f.service_id, AppointmentStatus::Pending))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(f.appointments.list(&f.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_service_is_a_foreign_key_error() {
        let f = fixture().await;

        let result = f
            .appointments
            .create(&f.pool, &payload(f.pet_id, 999, AppointmentStatus::Pending))
            .await;

        assert!(matches!(result, Err(AppError::ForeignKeyViolation(_))));
    }

    #[tokio::test]
    async fn update_rederives_the_tutor_from_the_new_pet() {
        let f = fixture().await;
        let created = f
            .appointments
            .create(&f.pool, &payload(f.pet_id, f.service_id, AppointmentStatus::Pending))
            .await
            .unwrap();

        let joao = TutorRepository::new()
            .create(
                &f.pool,
                &TutorPayload {
                    name: "João".into(),
                    contact: None,
                    address: None,
                },
            )
            .await
            .unwrap();
        let mia = PetRepository::new()
            .create(
                &f.pool,
                &PetPayload {
                    name: "Mia".into(),
                    species: Some("Cat".into()),
                    breed: None,
                    age: None,
                    gender: None,
                    color: None,
                    tutor_id: Some(joao.id),
                },
            )
            .await
            .unwrap();

        f.appointments
            .update(
                &f.pool,
                created.id,
                &payload(mia.id, f.service_id, AppointmentStatus::Confirmed),
            )
            .await
            .unwrap();

        let stored = f.appointments.find_by_id(&f.pool, created.id).await.unwrap();
        assert_eq!(stored.pet_id, mia.id);
        assert_eq!(stored.tutor_id, Some(joao.id));
        assert_eq!(stored.status, AppointmentStatus::Confirmed);
    }

    #[tokio::test]
    async fn updating_to_an_unknown_pet_is_a_validation_error_and_keeps_the_row() {
        let f = fixture().await;
        let created = f
            .appointments
            .create(&f.pool, &payload(f.pet_id, f.service_id, AppointmentStatus::Pending))
            .await
            .unwrap();

        let result = f
            .appointments
            .update(&f.pool, created.id, &payload(999, f.service_id, AppointmentStatus::Confirmed))
            .await;

        let errors = match result {
            Err(AppError::ValidationError(errors)) => errors,
            other => panic!("esperava ValidationError, veio {other:?}"),
        };
        assert!(errors.field_errors().contains_key("pet_id"));

        let stored = f.appointments.find_by_id(&f.pool, created.id).await.unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn updating_to_an_unknown_service_is_a_foreign_key_error_and_keeps_the_row() {
        let f = fixture().await;
        let created = f
            .appointments
            .create(&f.pool, &payload(f.pet_id, f.service_id, AppointmentStatus::Pending))
            .await
            .unwrap();

        let result = f
            .appointments
            .update(&f.pool, created.id, &payload(f.pet_id, 999, AppointmentStatus::Canceled))
            .await;

        assert!(matches!(result, Err(AppError::ForeignKeyViolation(_))));
        let stored = f.appointments.find_by_id(&f.pool, created.id).await.unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn any_status_can_overwrite_any_other() {
        let f = fixture().await;
        let created = f
            .appointments
            .create(&f.pool, &payload(f.pet_id, f.service_id, AppointmentStatus::Canceled))
            .await
            .unwrap();

        f.appointments
            .update(
                &f.pool,
                created.id,
                &payload(f.pet_id, f.service_id, AppointmentStatus::Confirmed),
            )
            .await
            .unwrap();

        let stored = f.appointments.find_by_id(&f.pool, created.id).await.unwrap();
        assert_eq!(stored.status, AppointmentStatus::Confirmed);
    }

    #[tokio::test]
    async fn updating_a_missing_appointment_is_not_found() {
        let f = fixture().await;
        let result = f
            .appointments
            .update(&f.pool, 4242, &payload(f.pet_id, f.service_id, AppointmentStatus::Pending))
            .await;
        assert!(matches!(result, Err(AppError::NotFound("Agendamento"))));
    }

    #[tokio::test]
    async fn listing_resolves_names() {
        let f = fixture().await;
        f.appointments
            .create(&f.pool, &payload(f.pet_id, f.service_id, AppointmentStatus::Pending))
            .await
            .unwrap();

        let rows = f.appointments.list(&f.pool).await.unwrap();
        assert_eq!(rows[0].tutor_name.as_deref(), Some("Maria"));
        assert_eq!(rows[0].pet_name.as_deref(), Some("Rex"));
        assert_eq!(rows[0].service_name.as_deref(), Some("Consulta"));
    }
}
