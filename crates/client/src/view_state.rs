//! Screen state for the user list: the last good data snapshot plus the
//! current query, recomputed through `engine::compute_view` on every change.

use std::collections::HashSet;

use contracts::setor::{SetorStatus, UserWithStatus};
use engine::{compute_view, ViewModel, ViewQuery};

use crate::api::DanusApi;
use crate::error::ApiError;

/// Which reporting scope the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMode {
    /// Today's stock lots.
    HariIni,
    /// Users still holding un-deposited items, any date.
    PendingSetor,
}

#[derive(Default)]
pub struct UserListScreen {
    users: Vec<UserWithStatus>,
    query: ViewQuery,
    last_error: Option<String>,
}

impl UserListScreen {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            query: ViewQuery::new(),
            last_error: None,
        }
    }

    /// Fold a fetch result in. On failure the prior snapshot stays visible
    /// and only the error surface changes.
    pub fn apply_fetch(&mut self, fetched: Result<Vec<UserWithStatus>, ApiError>) {
        match fetched {
            Ok(users) => {
                self.users = users;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "gagal memuat daftar user, data lama dipertahankan");
                self.last_error = Some(e.user_message());
            }
        }
    }

    pub async fn refresh(&mut self, api: &DanusApi, mode: ScopeMode) {
        let fetched = match mode {
            ScopeMode::HariIni => api.users_with_today_status().await,
            ScopeMode::PendingSetor => api.users_with_pending_deposits().await,
        };
        self.apply_fetch(fetched);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // Every filter mutation resets to page 1 via the query builders.

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query = self.query.clone().with_search(search);
    }

    pub fn set_status_filter(&mut self, status: Option<SetorStatus>) {
        self.query = self.query.clone().with_status(status);
    }

    pub fn set_barang_filter(&mut self, barang_ids: HashSet<i64>) {
        self.query = self.query.clone().with_barang_ids(barang_ids);
    }

    pub fn next_page(&mut self) {
        let vm = self.view();
        if vm.has_next() {
            self.query.page = vm.page + 1;
        }
    }

    pub fn prev_page(&mut self) {
        let vm = self.view();
        if vm.has_prev() {
            self.query.page = vm.page - 1;
        }
    }

    pub fn view(&self) -> ViewModel {
        compute_view(&self.users, &self.query)
    }
}
