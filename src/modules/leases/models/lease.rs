use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::core::AppError;

/// Lease lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseStatus {
    /// Being drafted by the owner
    #[default]
    Draft,
    /// Sent for e-signature, waiting for every party to sign
    PendingSignature,
    /// Signed by all parties and in force
    Active,
    /// Ended (notice given or lease expired)
    Terminated,
}

impl LeaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaseStatus::Draft => "draft",
            LeaseStatus::PendingSignature => "pending_signature",
            LeaseStatus::Active => "active",
            LeaseStatus::Terminated => "terminated",
        }
    }

    /// Only a lease awaiting signatures can become active
    pub fn can_activate(&self) -> bool {
        matches!(self, LeaseStatus::PendingSignature)
    }
}

impl fmt::Display for LeaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaseStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(LeaseStatus::Draft),
            "pending_signature" => Ok(LeaseStatus::PendingSignature),
            "active" => Ok(LeaseStatus::Active),
            "terminated" => Ok(LeaseStatus::Terminated),
            other => Err(AppError::internal(format!("Unknown lease status: {}", other))),
        }
    }
}

/// Occupancy status of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Vacant,
    Rented,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Vacant => "vacant",
            PropertyStatus::Rented => "rented",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vacant" => Ok(PropertyStatus::Vacant),
            "rented" => Ok(PropertyStatus::Rented),
            other => Err(AppError::internal(format!("Unknown property status: {}", other))),
        }
    }
}

/// A status change applied by one activation step, kept so it can be undone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum StatusTransition {
    Lease {
        id: Uuid,
        from: LeaseStatus,
        to: LeaseStatus,
    },
    Property {
        id: Uuid,
        from: PropertyStatus,
        to: PropertyStatus,
    },
}

/// Lease as read from the `leases` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    pub id: Uuid,
    pub property_id: Uuid,
    pub status: LeaseStatus,
    pub updated_at: DateTime<Utc>,
}

/// Raw row; statuses are stored as text
#[derive(Debug, Clone, FromRow)]
pub struct LeaseRow {
    pub id: Uuid,
    pub property_id: Uuid,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<LeaseRow> for Lease {
    type Error = AppError;

    fn try_from(row: LeaseRow) -> Result<Self, Self::Error> {
        Ok(Lease {
            id: row.id,
            property_id: row.property_id,
            status: row.status.parse()?,
            updated_at: row.updated_at,
        })
    }
}
