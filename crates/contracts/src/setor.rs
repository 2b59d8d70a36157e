use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::User;

/// Settlement status of one take record, derived from its line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmbilStatus {
    BelumSetor,
    SebagianSetor,
    Lunas,
}

/// Per-user settlement status for one reporting scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SetorStatus {
    SudahSetor,
    BelumSetor,
    BelumAmbil,
}

impl SetorStatus {
    /// Sort priority, "most resolved first".
    pub fn priority(&self) -> u8 {
        match self {
            SetorStatus::SudahSetor => 0,
            SetorStatus::BelumSetor => 1,
            SetorStatus::BelumAmbil => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SetorStatus::SudahSetor => "Sudah Setor",
            SetorStatus::BelumSetor => "Belum Setor",
            SetorStatus::BelumAmbil => "Belum Ambil",
        }
    }

    pub fn all() -> [SetorStatus; 3] {
        [
            SetorStatus::SudahSetor,
            SetorStatus::BelumSetor,
            SetorStatus::BelumAmbil,
        ]
    }
}

/// One quantity of one stock lot taken in a take record, independently
/// settleable. `tanggal_setor == None` means not yet deposited.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailSetor {
    pub id: i64,
    pub stok_harian_id: i64,
    pub barang_id: i64,
    pub nama_barang: String,
    pub qty: u32,
    /// qty x unit price at time of take, whole rupiah.
    pub total_harga: i64,
    pub tanggal_setor: Option<DateTime<Utc>>,
}

impl DetailSetor {
    pub fn sudah_setor(&self) -> bool {
        self.tanggal_setor.is_some()
    }
}

/// One act of a user taking stock lots at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbilBarang {
    pub id: i64,
    pub user_id: i64,
    pub tanggal_ambil: DateTime<Utc>,
    pub details: Vec<DetailSetor>,
}

impl AmbilBarang {
    /// Aggregate state is fully determined by the line items.
    pub fn status(&self) -> AmbilStatus {
        let total = self.details.len();
        let disetor = self.details.iter().filter(|d| d.sudah_setor()).count();
        if disetor == 0 {
            AmbilStatus::BelumSetor
        } else if disetor < total {
            AmbilStatus::SebagianSetor
        } else {
            AmbilStatus::Lunas
        }
    }
}

/// Per-item slice of a user's takes within the scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarangRingkas {
    pub barang_id: i64,
    pub nama: String,
    pub qty: u32,
}

/// A user enriched with their settlement status for one reporting scope.
/// Computed fresh per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithStatus {
    #[serde(flatten)]
    pub user: User,
    pub status: SetorStatus,
    pub total_ambil: u32,
    pub total_setor: u32,
    /// Amount still owed: sum of totalHarga over unsettled line items.
    pub total_harus_setor: i64,
    pub barang_list: Vec<BarangRingkas>,
}
