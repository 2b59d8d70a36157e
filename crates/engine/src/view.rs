//! The pure pipeline: `(users, filter, page) -> ViewModel`.
//!
//! The surrounding screen recomputes this wholesale whenever any input
//! changes; there is no incremental state to get stale.

use std::collections::HashSet;

use contracts::setor::{SetorStatus, UserWithStatus};
use serde::Serialize;

use crate::filter::{filter_users, sort_by_status, UserFilter};
use crate::page::{clamp_page, page_slice, total_pages};

/// Filter + requested page. The `with_*` builders reset the page to 1,
/// matching the screen behavior of any filter change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub filter: UserFilter,
    pub page: usize,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self {
            filter: UserFilter::default(),
            page: 1,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.filter.search = search.into();
        self.page = 1;
        self
    }

    pub fn with_status(mut self, status: Option<SetorStatus>) -> Self {
        self.filter.status = status;
        self.page = 1;
        self
    }

    pub fn with_barang_ids(mut self, barang_ids: HashSet<i64>) -> Self {
        self.filter.barang_ids = barang_ids;
        self.page = 1;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// Per-status tally over the filtered set, for the chip badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub sudah_setor: usize,
    pub belum_setor: usize,
    pub belum_ambil: usize,
}

impl StatusCounts {
    fn tally(users: &[UserWithStatus]) -> Self {
        let mut counts = StatusCounts::default();
        for u in users {
            match u.status {
                SetorStatus::SudahSetor => counts.sudah_setor += 1,
                SetorStatus::BelumSetor => counts.belum_setor += 1,
                SetorStatus::BelumAmbil => counts.belum_ambil += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.sudah_setor + self.belum_setor + self.belum_ambil
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub visible: Vec<UserWithStatus>,
    /// The page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Size of the filtered set, before pagination.
    pub total_count: usize,
    pub counts: StatusCounts,
}

impl ViewModel {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filter, sort, count and paginate in one pass. Total over any input,
/// including the empty list.
pub fn compute_view(users: &[UserWithStatus], query: &ViewQuery) -> ViewModel {
    let mut filtered = filter_users(users, &query.filter);
    sort_by_status(&mut filtered);

    let counts = StatusCounts::tally(&filtered);
    let total_count = filtered.len();
    let total_pages = total_pages(total_count);
    let page = clamp_page(query.page, total_pages);
    let visible = page_slice(&filtered, page).to_vec();

    ViewModel {
        visible,
        page,
        total_pages,
        total_count,
        counts,
    }
}
