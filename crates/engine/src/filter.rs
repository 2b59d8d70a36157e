//! Search, multi-criterion filtering and the status-priority sort.

use std::collections::HashSet;

use contracts::setor::{SetorStatus, UserWithStatus};

/// Filter inputs for the user list. `status: None` is the "all" sentinel;
/// an empty `barang_ids` set disables the item filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub status: Option<SetorStatus>,
    pub barang_ids: HashSet<i64>,
}

impl UserFilter {
    pub fn matches(&self, u: &UserWithStatus) -> bool {
        self.matches_search(u) && self.matches_status(u) && self.matches_barang(u)
    }

    fn matches_search(&self, u: &UserWithStatus) -> bool {
        let q = self.search.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        u.user.nama_lengkap.to_lowercase().contains(&q)
            || u.user.username.to_lowercase().contains(&q)
            || u.user
                .nomor_telepon
                .as_deref()
                .map(|t| t.to_lowercase().contains(&q))
                .unwrap_or(false)
    }

    fn matches_status(&self, u: &UserWithStatus) -> bool {
        self.status.map(|s| s == u.status).unwrap_or(true)
    }

    /// OR semantics: any overlap between the user's items and the selected
    /// set is a match.
    fn matches_barang(&self, u: &UserWithStatus) -> bool {
        if self.barang_ids.is_empty() {
            return true;
        }
        u.barang_list
            .iter()
            .any(|b| self.barang_ids.contains(&b.barang_id))
    }
}

/// Filter the list, preserving input order.
pub fn filter_users(users: &[UserWithStatus], filter: &UserFilter) -> Vec<UserWithStatus> {
    users
        .iter()
        .filter(|u| filter.matches(u))
        .cloned()
        .collect()
}

/// Stable sort by status priority, most resolved first. Ties keep the
/// server-supplied order; there is no secondary key.
pub fn sort_by_status(users: &mut [UserWithStatus]) {
    users.sort_by_key(|u| u.status.priority());
}
