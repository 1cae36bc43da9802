use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::leases::models::{Lease, LeaseRow, LeaseStatus, PropertyStatus};

/// Persistence used by lease activation.
///
/// Each update is a single statement. Lease updates only apply from an
/// expected status; property updates return the status they replaced.
#[async_trait]
pub trait LeaseRepository: Send + Sync {
    async fn find_by_id(&self, lease_id: Uuid) -> Result<Option<Lease>>;

    /// Move a lease from `from` to `to`.
    ///
    /// `NotFound` if the lease does not exist, `Conflict` if it is no longer
    /// in `from` (e.g. a concurrent activation got there first).
    async fn transition_lease_status(
        &self,
        lease_id: Uuid,
        from: LeaseStatus,
        to: LeaseStatus,
    ) -> Result<()>;

    /// Set the property status, returning the previous one
    async fn update_property_status(
        &self,
        property_id: Uuid,
        status: PropertyStatus,
    ) -> Result<PropertyStatus>;
}

/// Postgres implementation over the `leases` and `properties` tables
pub struct PgLeaseRepository {
    pool: PgPool,
}

impl PgLeaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeaseRepository for PgLeaseRepository {
    async fn find_by_id(&self, lease_id: Uuid) -> Result<Option<Lease>> {
        let row = sqlx::query_as::<_, LeaseRow>(
            r#"
            SELECT id, property_id, status, updated_at
            FROM leases
            WHERE id = $1
            "#,
        )
        .bind(lease_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Lease::try_from).transpose()
    }

    async fn transition_lease_status(
        &self,
        lease_id: Uuid,
        from: LeaseStatus,
        to: LeaseStatus,
    ) -> Result<()> {
        let updated: Option<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE leases
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING id
            "#,
        )
        .bind(lease_id)
        .bind(from.as_str())
        .bind(to.as_str())
        .fetch_optional(&self.pool)
        .await?;

        if updated.is_some() {
            return Ok(());
        }

        match self.find_by_id(lease_id).await? {
            None => Err(AppError::not_found(format!("Lease {}", lease_id))),
            Some(lease) => Err(AppError::conflict(format!(
                "Lease {} is {}, expected {}",
                lease_id, lease.status, from
            ))),
        }
    }

    async fn update_property_status(
        &self,
        property_id: Uuid,
        status: PropertyStatus,
    ) -> Result<PropertyStatus> {
        let previous: Option<String> = sqlx::query_scalar(
            r#"
            UPDATE properties AS p
            SET status = $2, updated_at = NOW()
            FROM (SELECT id, status FROM properties WHERE id = $1 FOR UPDATE) AS previous
            WHERE p.id = previous.id
            RETURNING previous.status
            "#,
        )
        .bind(property_id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        previous
            .ok_or_else(|| AppError::not_found(format!("Property {}", property_id)))?
            .parse()
    }
}
