use contracts::setor::{AmbilBarang, BarangRingkas, DetailSetor, UserWithStatus};
use contracts::users::User;

use crate::status::classify;

/// Aggregate one user's line items (already restricted to the reporting
/// scope) into a `UserWithStatus`.
pub fn summarize<'a, I>(user: &User, details: I) -> UserWithStatus
where
    I: IntoIterator<Item = &'a DetailSetor>,
{
    let mut total_ambil: u32 = 0;
    let mut total_setor: u32 = 0;
    let mut total_harus_setor: i64 = 0;
    let mut barang_list: Vec<BarangRingkas> = Vec::new();

    for d in details {
        total_ambil += d.qty;
        if d.sudah_setor() {
            total_setor += d.qty;
        } else {
            total_harus_setor += d.total_harga;
        }

        // Per-item breakdown, first appearance keeps its slot.
        match barang_list.iter_mut().find(|b| b.barang_id == d.barang_id) {
            Some(entry) => entry.qty += d.qty,
            None => barang_list.push(BarangRingkas {
                barang_id: d.barang_id,
                nama: d.nama_barang.clone(),
                qty: d.qty,
            }),
        }
    }

    UserWithStatus {
        user: user.clone(),
        status: classify(total_ambil, total_setor),
        total_ambil,
        total_setor,
        total_harus_setor,
        barang_list,
    }
}

/// Join users with their take records for the scope. Every user appears
/// exactly once, in input order; users without records come out BELUM_AMBIL
/// with zeroed totals.
pub fn summarize_all(users: &[User], records: &[AmbilBarang]) -> Vec<UserWithStatus> {
    users
        .iter()
        .map(|user| {
            let details = records
                .iter()
                .filter(|r| r.user_id == user.id)
                .flat_map(|r| r.details.iter());
            summarize(user, details)
        })
        .collect()
}
