//! Admin approval inbox.
//!
//! Approve/reject removes the entry optimistically but keeps a rollback
//! snapshot (entry plus original index); if the server call fails the entry
//! is restored in place and the error surfaces as a message string.

use async_trait::async_trait;

use contracts::request::RequestSetor;

use crate::api::DanusApi;
use crate::error::ApiError;

/// The two mutations the inbox performs. A trait seam so tests can stand in
/// for the server.
#[async_trait]
pub trait ApprovalApi {
    async fn approve(&self, id: i64) -> Result<(), ApiError>;
    async fn reject(&self, id: i64) -> Result<(), ApiError>;
}

#[async_trait]
impl ApprovalApi for DanusApi {
    async fn approve(&self, id: i64) -> Result<(), ApiError> {
        self.approve_request(id).await.map(|_| ())
    }

    async fn reject(&self, id: i64) -> Result<(), ApiError> {
        self.reject_request(id).await.map(|_| ())
    }
}

enum Decision {
    Approve,
    Reject,
}

pub struct RequestInbox<A: ApprovalApi> {
    api: A,
    items: Vec<RequestSetor>,
}

impl<A: ApprovalApi> RequestInbox<A> {
    pub fn new(api: A, items: Vec<RequestSetor>) -> Self {
        Self { api, items }
    }

    pub fn items(&self) -> &[RequestSetor] {
        &self.items
    }

    /// Replace the list wholesale after a re-fetch.
    pub fn replace(&mut self, items: Vec<RequestSetor>) {
        self.items = items;
    }

    pub async fn approve(&mut self, id: i64) -> Result<(), ApiError> {
        self.resolve(id, Decision::Approve).await
    }

    pub async fn reject(&mut self, id: i64) -> Result<(), ApiError> {
        self.resolve(id, Decision::Reject).await
    }

    async fn resolve(&mut self, id: i64, decision: Decision) -> Result<(), ApiError> {
        let Some(index) = self.items.iter().position(|r| r.id == id) else {
            tracing::warn!(id, "request tidak ada di daftar, mungkin sudah diproses");
            return Ok(());
        };

        // Optimistic removal with a rollback snapshot.
        let snapshot = self.items.remove(index);

        let result = match decision {
            Decision::Approve => self.api.approve(id).await,
            Decision::Reject => self.api.reject(id).await,
        };

        if let Err(e) = result {
            let at = index.min(self.items.len());
            self.items.insert(at, snapshot);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::request::{RequestDetail, RequestStatus};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct FakeApi {
        fail: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ApprovalApi for FakeApi {
        async fn approve(&self, _id: i64) -> Result<(), ApiError> {
            if self.fail.load(Ordering::SeqCst) {
                Err(ApiError::Server {
                    message: "Request sudah diproses admin lain".into(),
                })
            } else {
                Ok(())
            }
        }

        async fn reject(&self, id: i64) -> Result<(), ApiError> {
            self.approve(id).await
        }
    }

    fn request(id: i64) -> RequestSetor {
        RequestSetor {
            id,
            user_id: 1,
            admin_id: 2,
            status: RequestStatus::Pending,
            created_at: "2024-01-01T07:00:00Z".parse().unwrap(),
            details: vec![RequestDetail {
                detail_setor_id: id * 10,
                qty: 1,
            }],
        }
    }

    fn inbox(fail: bool) -> RequestInbox<FakeApi> {
        let api = FakeApi {
            fail: Arc::new(AtomicBool::new(fail)),
        };
        RequestInbox::new(api, vec![request(1), request(2), request(3)])
    }

    #[tokio::test]
    async fn test_successful_approve_removes_entry() {
        let mut inbox = inbox(false);
        inbox.approve(2).await.unwrap();
        let ids: Vec<i64> = inbox.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_failed_approve_restores_entry_in_place() {
        let mut inbox = inbox(true);
        let err = inbox.approve(2).await.unwrap_err();
        assert_eq!(err.user_message(), "Request sudah diproses admin lain");
        let ids: Vec<i64> = inbox.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_a_no_op() {
        let mut inbox = inbox(false);
        inbox.reject(99).await.unwrap();
        assert_eq!(inbox.items().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_reject_of_last_entry() {
        let mut inbox = inbox(true);
        inbox.reject(3).await.unwrap_err();
        let ids: Vec<i64> = inbox.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
