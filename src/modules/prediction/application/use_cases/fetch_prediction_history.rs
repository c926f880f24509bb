use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::prediction::application::domain::entities::PredictionRecord;
use crate::modules::prediction::application::ports::outgoing::PredictionQuery;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// One page of an owner's history plus everything the client needs to
/// render a pager without a second round-trip.
#[derive(Debug, Clone)]
pub struct HistoryPage {
    pub records: Vec<PredictionRecord>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

#[derive(Debug, Clone)]
pub enum FetchHistoryError {
    InvalidPage,
    InvalidPageSize,
    QueryError(String),
}

impl std::fmt::Display for FetchHistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchHistoryError::InvalidPage => write!(f, "Page must be at least 1"),
            FetchHistoryError::InvalidPageSize => {
                write!(f, "Page size must be between 1 and {}", MAX_PAGE_SIZE)
            }
            FetchHistoryError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchHistoryError {}

#[async_trait]
pub trait IFetchHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        owner_id: Uuid,
        page: u64,
        page_size: u64,
    ) -> Result<HistoryPage, FetchHistoryError>;
}

#[derive(Debug, Clone)]
pub struct FetchHistoryUseCase<Q>
where
    Q: PredictionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchHistoryUseCase<Q>
where
    Q: PredictionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchHistoryUseCase for FetchHistoryUseCase<Q>
where
    Q: PredictionQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner_id: Uuid,
        page: u64,
        page_size: u64,
    ) -> Result<HistoryPage, FetchHistoryError> {
        if page < 1 {
            return Err(FetchHistoryError::InvalidPage);
        }
        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(FetchHistoryError::InvalidPageSize);
        }

        let (records, total_count) = self
            .query
            .list_for_owner(owner_id, page, page_size)
            .await
            .map_err(|e| FetchHistoryError::QueryError(e.to_string()))?;

        let total_pages = total_count.div_ceil(page_size);

        Ok(HistoryPage {
            records,
            total_count,
            page,
            page_size,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1 && total_count > 0,
        })
    }
}
