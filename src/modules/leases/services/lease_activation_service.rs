use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::core::saga::{Saga, SagaOutcome, SagaStep};
use crate::core::{AppError, Result};
use crate::modules::leases::models::{LeaseStatus, PropertyStatus, StatusTransition};
use crate::modules::leases::repositories::LeaseRepository;

/// Context shared by the activation steps
pub type LeaseContext = Arc<dyn LeaseRepository>;

const ACTIVATE_LEASE_STEP: &str = "activate_lease";

/// Activates a fully signed lease and marks its property as rented.
///
/// The two status updates are separate statements, so they run as a saga: if
/// the property update fails, the lease goes back to its previous status.
pub struct LeaseActivationService {
    repository: LeaseContext,
}

impl LeaseActivationService {
    pub fn new(repository: LeaseContext) -> Self {
        Self { repository }
    }

    /// Activate a lease once every party has signed.
    ///
    /// Precondition failures (unknown lease, lease not awaiting signature) are
    /// returned as errors. The status is checked again by the conditional
    /// update in the first step, so a concurrent activation that wins the
    /// race also surfaces as `Conflict`. Otherwise the saga outcome is
    /// returned as-is and callers must check `success`.
    pub async fn activate(&self, lease_id: Uuid) -> Result<SagaOutcome<StatusTransition>> {
        let lease = self
            .repository
            .find_by_id(lease_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Lease {}", lease_id)))?;

        if !lease.status.can_activate() {
            return Err(AppError::conflict(format!(
                "Lease {} is {}, only a lease pending signature can be activated",
                lease_id, lease.status
            )));
        }

        let outcome = Self::activation_saga(lease.id, lease.property_id)
            .execute(self.repository.clone())
            .await;

        if outcome.failed_step.as_deref() == Some(ACTIVATE_LEASE_STEP) {
            if let Some(current) = self.repository.find_by_id(lease_id).await? {
                if !current.status.can_activate() {
                    return Err(AppError::conflict(format!(
                        "Lease {} was moved to {} while activating",
                        lease_id, current.status
                    )));
                }
            }
        }

        if outcome.success {
            info!(%lease_id, property_id = %lease.property_id, "Lease activated");
        } else {
            warn!(
                %lease_id,
                failed_step = ?outcome.failed_step,
                compensated = outcome.compensated,
                "Lease activation rolled back"
            );
        }

        Ok(outcome)
    }

    /// Steps: `activate_lease` then `mark_property_rented`, each undoable
    pub fn activation_saga(lease_id: Uuid, property_id: Uuid) -> Saga<LeaseContext, StatusTransition> {
        Saga::new("lease_activation")
            .step(
                SagaStep::new(ACTIVATE_LEASE_STEP, move |repo: LeaseContext| async move {
                    repo.transition_lease_status(
                        lease_id,
                        LeaseStatus::PendingSignature,
                        LeaseStatus::Active,
                    )
                    .await?;
                    Ok(StatusTransition::Lease {
                        id: lease_id,
                        from: LeaseStatus::PendingSignature,
                        to: LeaseStatus::Active,
                    })
                })
                .with_compensation(revert_transition),
            )
            .step(
                SagaStep::new("mark_property_rented", move |repo: LeaseContext| async move {
                    let from = repo
                        .update_property_status(property_id, PropertyStatus::Rented)
                        .await?;
                    Ok(StatusTransition::Property {
                        id: property_id,
                        from,
                        to: PropertyStatus::Rented,
                    })
                })
                .with_compensation(revert_transition),
            )
    }
}

/// Put an entity back in the status it had before a step ran
async fn revert_transition(repo: LeaseContext, transition: StatusTransition) -> anyhow::Result<()> {
    match transition {
        StatusTransition::Lease { id, from, to } => {
            repo.transition_lease_status(id, to, from).await?;
        }
        StatusTransition::Property { id, from, .. } => {
            repo.update_property_status(id, from).await?;
        }
    }
    Ok(())
}
