use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use log::debug;
use shared::{endpoints, ClientError, PageQuery, Transaction, TransactionDraft};

/// Calls the transaction list needs from the ledger backend.
#[async_trait(?Send)]
pub trait TransactionApi {
    async fn list_transactions(&self, query: &PageQuery) -> Result<Vec<Transaction>, ClientError>;
    async fn count_transactions(&self) -> Result<u64, ClientError>;
    async fn get_transaction(&self, id: &str) -> Result<Transaction, ClientError>;
    async fn create_transaction(&self, draft: &TransactionDraft) -> Result<(), ClientError>;
    async fn update_transaction(&self, id: &str, draft: &TransactionDraft) -> Result<(), ClientError>;
    async fn delete_transaction(&self, id: &str) -> Result<(), ClientError>;
}

/// API client for communicating with the ledger backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client talking to the origin that served the page
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(request: Request) -> Result<Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if response.ok() {
            Ok(response)
        } else {
            Err(ClientError::Http {
                status: response.status(),
            })
        }
    }

    async fn get(&self, path: &str) -> Result<Response, ClientError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let request = Request::get(&url)
            .build()
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        Self::send(request).await
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl TransactionApi for ApiClient {
    async fn list_transactions(&self, query: &PageQuery) -> Result<Vec<Transaction>, ClientError> {
        let response = self.get(&endpoints::list(query)).await?;
        decode(response).await
    }

    async fn count_transactions(&self) -> Result<u64, ClientError> {
        let response = self.get(endpoints::COUNT).await?;
        decode(response).await
    }

    async fn get_transaction(&self, id: &str) -> Result<Transaction, ClientError> {
        let response = self.get(&endpoints::transaction(id)).await?;
        decode(response).await
    }

    async fn create_transaction(&self, draft: &TransactionDraft) -> Result<(), ClientError> {
        let url = self.url(endpoints::TRANSACTIONS);
        debug!("POST {}", url);
        let request = Request::post(&url)
            .json(draft)
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        Self::send(request).await.map(|_| ())
    }

    async fn update_transaction(&self, id: &str, draft: &TransactionDraft) -> Result<(), ClientError> {
        let url = self.url(&endpoints::transaction(id));
        debug!("PUT {}", url);
        let request = Request::put(&url)
            .json(draft)
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        Self::send(request).await.map(|_| ())
    }

    async fn delete_transaction(&self, id: &str) -> Result<(), ClientError> {
        let url = self.url(&endpoints::transaction(id));
        debug!("DELETE {}", url);
        let request = Request::delete(&url)
            .build()
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        Self::send(request).await.map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
