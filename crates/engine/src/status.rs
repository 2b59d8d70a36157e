use contracts::setor::SetorStatus;

/// Classify a user's settlement status from their totals within the scope.
///
/// Equality counts as fully settled. The comparison is `>=` rather than `==`
/// so a totalSetor that transiently overshoots totalAmbil (concurrent edits,
/// double-counted deposits) still lands on the settled side instead of
/// flipping back to outstanding.
pub fn classify(total_ambil: u32, total_setor: u32) -> SetorStatus {
    if total_ambil == 0 {
        return SetorStatus::BelumAmbil;
    }
    if total_setor > total_ambil {
        tracing::warn!(
            total_ambil,
            total_setor,
            "totalSetor melebihi totalAmbil, dinormalisasi ke SUDAH_SETOR"
        );
    }
    if total_setor >= total_ambil {
        SetorStatus::SudahSetor
    } else {
        SetorStatus::BelumSetor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ambil_is_belum_ambil() {
        assert_eq!(classify(0, 0), SetorStatus::BelumAmbil);
        // Nothing taken wins even over stray deposit counts.
        assert_eq!(classify(0, 3), SetorStatus::BelumAmbil);
    }

    #[test]
    fn test_partial_is_belum_setor() {
        assert_eq!(classify(5, 0), SetorStatus::BelumSetor);
        assert_eq!(classify(5, 4), SetorStatus::BelumSetor);
    }

    #[test]
    fn test_equality_counts_as_settled() {
        assert_eq!(classify(5, 5), SetorStatus::SudahSetor);
    }

    #[test]
    fn test_overshoot_normalizes_to_settled() {
        assert_eq!(classify(5, 7), SetorStatus::SudahSetor);
    }

    #[test]
    fn test_every_pair_reaches_exactly_one_status() {
        for ambil in 0..20u32 {
            for setor in 0..20u32 {
                let status = classify(ambil, setor);
                if ambil == 0 {
                    assert_eq!(status, SetorStatus::BelumAmbil);
                } else if setor >= ambil {
                    assert_eq!(status, SetorStatus::SudahSetor);
                } else {
                    assert_eq!(status, SetorStatus::BelumSetor);
                }
            }
        }
    }
}
