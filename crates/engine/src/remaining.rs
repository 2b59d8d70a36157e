//! Remaining-quantity computation for deposit requests.
//!
//! The server enforces the real invariant; the client must compute the same
//! numbers so open request modals cannot double-claim the same units.

use contracts::request::RequestSetor;
use contracts::setor::DetailSetor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Jumlah setor harus lebih dari 0")]
    ZeroQty,
    #[error("Barang ini sudah disetor")]
    AlreadySettled,
    #[error("Jumlah melebihi sisa yang bisa disetor ({remaining} tersisa, diminta {requested})")]
    ExceedsRemaining { requested: u32, remaining: u32 },
}

/// Units of one line item already claimed by the user's own PENDING requests.
pub fn pending_qty(requests: &[RequestSetor], detail_setor_id: i64) -> u32 {
    requests
        .iter()
        .filter(|r| r.is_pending())
        .flat_map(|r| r.details.iter())
        .filter(|d| d.detail_setor_id == detail_setor_id)
        .map(|d| d.qty)
        .sum()
}

/// How many units of this line item can still be requested.
pub fn remaining_qty(item: &DetailSetor, requests: &[RequestSetor]) -> u32 {
    item.qty.saturating_sub(pending_qty(requests, item.id))
}

/// Line items a new request may claim: unsettled and with remaining > 0,
/// paired with that remaining quantity.
pub fn requestable_items<'a>(
    items: &'a [DetailSetor],
    requests: &[RequestSetor],
) -> Vec<(&'a DetailSetor, u32)> {
    items
        .iter()
        .filter(|item| !item.sudah_setor())
        .filter_map(|item| {
            let remaining = remaining_qty(item, requests);
            (remaining > 0).then_some((item, remaining))
        })
        .collect()
}

/// Guard a claim before it is ever sent to the server.
pub fn validate_claim(
    item: &DetailSetor,
    requests: &[RequestSetor],
    qty: u32,
) -> Result<(), ClaimError> {
    if qty == 0 {
        return Err(ClaimError::ZeroQty);
    }
    if item.sudah_setor() {
        return Err(ClaimError::AlreadySettled);
    }
    let remaining = remaining_qty(item, requests);
    if qty > remaining {
        return Err(ClaimError::ExceedsRemaining {
            requested: qty,
            remaining,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::request::{RequestDetail, RequestStatus};

    fn item(id: i64, qty: u32, disetor: bool) -> DetailSetor {
        DetailSetor {
            id,
            stok_harian_id: id,
            barang_id: 1,
            nama_barang: "Pastel".into(),
            qty,
            total_harga: qty as i64 * 2500,
            tanggal_setor: disetor.then(|| "2024-01-01T09:00:00Z".parse().unwrap()),
        }
    }

    fn request(status: RequestStatus, claims: &[(i64, u32)]) -> RequestSetor {
        RequestSetor {
            id: 1,
            user_id: 1,
            admin_id: 2,
            status,
            created_at: "2024-01-01T07:00:00Z".parse().unwrap(),
            details: claims
                .iter()
                .map(|&(detail_setor_id, qty)| RequestDetail {
                    detail_setor_id,
                    qty,
                })
                .collect(),
        }
    }

    #[test]
    fn test_pending_qty_only_counts_pending() {
        let requests = vec![
            request(RequestStatus::Pending, &[(10, 2)]),
            request(RequestStatus::Approved, &[(10, 1)]),
            request(RequestStatus::Rejected, &[(10, 4)]),
            request(RequestStatus::Pending, &[(11, 3)]),
        ];
        assert_eq!(pending_qty(&requests, 10), 2);
        assert_eq!(pending_qty(&requests, 11), 3);
        assert_eq!(pending_qty(&requests, 12), 0);
    }

    #[test]
    fn test_remaining_never_negative_and_bounded() {
        let it = item(10, 5, false);
        let over = vec![request(RequestStatus::Pending, &[(10, 9)])];
        assert_eq!(remaining_qty(&it, &over), 0);
        assert_eq!(remaining_qty(&it, &[]), 5);
        for claimed in 0..10u32 {
            let reqs = vec![request(RequestStatus::Pending, &[(10, claimed)])];
            let rem = remaining_qty(&it, &reqs);
            assert!(rem <= it.qty);
        }
    }

    #[test]
    fn test_requestable_excludes_settled_and_exhausted() {
        let items = vec![item(10, 5, false), item(11, 2, true), item(12, 3, false)];
        let requests = vec![request(RequestStatus::Pending, &[(12, 3)])];
        let offered = requestable_items(&items, &requests);
        assert_eq!(offered.len(), 1);
        assert_eq!(offered[0].0.id, 10);
        assert_eq!(offered[0].1, 5);
    }

    #[test]
    fn test_second_claim_rejected_past_remaining() {
        // qty=5, one PENDING request already claims 2 -> 3 remaining.
        let it = item(10, 5, false);
        let requests = vec![request(RequestStatus::Pending, &[(10, 2)])];
        assert_eq!(remaining_qty(&it, &requests), 3);
        assert!(validate_claim(&it, &requests, 3).is_ok());
        assert_eq!(
            validate_claim(&it, &requests, 4),
            Err(ClaimError::ExceedsRemaining {
                requested: 4,
                remaining: 3
            })
        );
    }

    #[test]
    fn test_claim_guards() {
        let it = item(10, 5, false);
        assert_eq!(validate_claim(&it, &[], 0), Err(ClaimError::ZeroQty));
        let settled = item(11, 5, true);
        assert_eq!(
            validate_claim(&settled, &[], 1),
            Err(ClaimError::AlreadySettled)
        );
    }
}
