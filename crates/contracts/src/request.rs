use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Claim of `qty` units against one deposit line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetail {
    pub detail_setor_id: i64,
    pub qty: u32,
}

/// A user-initiated bundle of deposit line items routed to one admin for
/// approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSetor {
    pub id: i64,
    pub user_id: i64,
    pub admin_id: i64,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub details: Vec<RequestDetail>,
}

impl RequestSetor {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

/// Body of `POST /requests`: a new deposit-approval request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestSetor {
    pub admin_id: i64,
    pub details: Vec<RequestDetail>,
}

impl CreateRequestSetor {
    /// Client-side validation before the request is ever sent.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.admin_id <= 0 {
            anyhow::bail!("Pilih admin tujuan setor");
        }
        if self.details.is_empty() {
            anyhow::bail!("Pilih minimal satu barang untuk disetor");
        }
        if self.details.iter().any(|d| d.qty == 0) {
            anyhow::bail!("Jumlah setor harus lebih dari 0");
        }
        Ok(())
    }
}
