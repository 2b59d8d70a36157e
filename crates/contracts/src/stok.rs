use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's published batch of one item at one price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StokHarian {
    pub id: i64,
    pub barang_id: i64,
    pub nama_barang: String,
    /// Unit price in whole rupiah.
    pub harga: i64,
    /// Remaining quantity, never negative.
    pub stok: u32,
    /// Capital invested in this lot.
    pub modal: i64,
    pub jumlah_ambil: u32,
    pub jumlah_setor: u32,
    pub tanggal_edar: NaiveDate,
    pub keterangan: Option<String>,
}

impl StokHarian {
    /// A lot is still takeable while quantity remains.
    pub fn tersedia(&self) -> bool {
        self.stok > 0
    }
}
