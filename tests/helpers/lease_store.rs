use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use gerance::core::{AppError, Result};
use gerance::leases::{Lease, LeaseRepository, LeaseStatus, PropertyStatus};
use uuid::Uuid;

/// In-memory lease store with per-status failure injection.
///
/// Every update is recorded in `calls` as `lease:<id>:<status>` or
/// `property:<id>:<status>`, in call order.
#[derive(Default)]
pub struct InMemoryLeaseRepository {
    leases: Mutex<HashMap<Uuid, Lease>>,
    properties: Mutex<HashMap<Uuid, PropertyStatus>>,
    failing_lease_statuses: Mutex<HashSet<&'static str>>,
    failing_property_statuses: Mutex<HashSet<&'static str>>,
    calls: Mutex<Vec<String>>,
    yield_after_lookup: AtomicBool,
}

impl InMemoryLeaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vacant property and a lease on it, returning the lease
    pub fn seed_lease(&self, status: LeaseStatus) -> Lease {
        let lease = Lease {
            id: Uuid::new_v4(),
            property_id: Uuid::new_v4(),
            status,
            updated_at: Utc::now(),
        };
        self.properties
            .lock()
            .unwrap()
            .insert(lease.property_id, PropertyStatus::Vacant);
        self.leases.lock().unwrap().insert(lease.id, lease.clone());
        lease
    }

    /// Make every update of a lease to `status` fail
    pub fn fail_lease_updates_to(&self, status: LeaseStatus) {
        self.failing_lease_statuses
            .lock()
            .unwrap()
            .insert(status.as_str());
    }

    /// Make every update of a property to `status` fail
    pub fn fail_property_updates_to(&self, status: PropertyStatus) {
        self.failing_property_statuses
            .lock()
            .unwrap()
            .insert(status.as_str());
    }

    /// Yield to the runtime after every lookup, so that concurrent
    /// activations interleave between their read and their write
    pub fn yield_after_lookup(&self) {
        self.yield_after_lookup.store(true, Ordering::SeqCst);
    }

    /// Remove the property row so updates on it hit "not found"
    pub fn remove_property(&self, property_id: Uuid) {
        self.properties.lock().unwrap().remove(&property_id);
    }

    pub fn lease_status(&self, lease_id: Uuid) -> Option<LeaseStatus> {
        self.leases.lock().unwrap().get(&lease_id).map(|l| l.status)
    }

    pub fn property_status(&self, property_id: Uuid) -> Option<PropertyStatus> {
        self.properties.lock().unwrap().get(&property_id).copied()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeaseRepository for InMemoryLeaseRepository {
    async fn find_by_id(&self, lease_id: Uuid) -> Result<Option<Lease>> {
        let lease = self.leases.lock().unwrap().get(&lease_id).cloned();
        if self.yield_after_lookup.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
        Ok(lease)
    }

    async fn transition_lease_status(
        &self,
        lease_id: Uuid,
        from: LeaseStatus,
        to: LeaseStatus,
    ) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("lease:{}:{}", lease_id, to));

        if self.failing_lease_statuses.lock().unwrap().contains(to.as_str()) {
            return Err(AppError::internal(format!(
                "connection reset while setting lease {} to {}",
                lease_id, to
            )));
        }

        let mut leases = self.leases.lock().unwrap();
        let lease = leases
            .get_mut(&lease_id)
            .ok_or_else(|| AppError::not_found(format!("Lease {}", lease_id)))?;
        if lease.status != from {
            return Err(AppError::conflict(format!(
                "Lease {} is {}, expected {}",
                lease_id, lease.status, from
            )));
        }
        lease.status = to;
        lease.updated_at = Utc::now();
        Ok(())
    }

    async fn update_property_status(
        &self,
        property_id: Uuid,
        status: PropertyStatus,
    ) -> Result<PropertyStatus> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("property:{}:{}", property_id, status));

        if self
            .failing_property_statuses
            .lock()
            .unwrap()
            .contains(status.as_str())
        {
            return Err(AppError::internal(format!(
                "connection reset while setting property {} to {}",
                property_id, status
            )));
        }

        let mut properties = self.properties.lock().unwrap();
        let current = properties
            .get_mut(&property_id)
            .ok_or_else(|| AppError::not_found(format!("Property {}", property_id)))?;
        let previous = *current;
        *current = status;
        Ok(previous)
    }
}
