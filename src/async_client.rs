//! Async wrapper around [`MetaClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all client operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free of the
//! blocking HTTP and file I/O.
//!
//! # Example
//!
//! ```no_run
//! use hs_meta::{AsyncMetaClient, MetaClient};
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! rt.block_on(async {
//!     let client = AsyncMetaClient::build(MetaClient::builder()).await.unwrap();
//!     let report = client.report().await.unwrap();
//!     println!("{:?}", report.announcement());
//!     client.close().await.unwrap();
//! });
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{MetaError, Result};
use crate::{MetaClient, MetaClientBuilder, MetaReport};

/// Async wrapper around [`MetaClient`].
///
/// The underlying client is protected by a [`Mutex`] since runs mutate its
/// cache and lazily built HTTP client.
pub struct AsyncMetaClient {
    inner: Arc<Mutex<MetaClient>>,
}

impl AsyncMetaClient {
    /// Build the client on the blocking thread pool.
    pub async fn build(builder: MetaClientBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || {
            let client = builder.build()?;
            Ok(AsyncMetaClient {
                inner: Arc::new(Mutex::new(client)),
            })
        })
        .await
        .map_err(|e| MetaError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut MetaClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = client
                .lock()
                .map_err(|_| MetaError::InvalidArgument("client lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| MetaError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch, sync snapshots and build the report asynchronously.
    pub async fn report(&self) -> Result<MetaReport> {
        self.run(|c| c.report()).await
    }

    /// Remove all cached snapshots asynchronously.
    pub async fn clear_cache(&self) -> Result<()> {
        self.run(|c| c.clear_cache()).await
    }

    /// Drop the client on the blocking pool, where its HTTP client may be
    /// released safely.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let client = self
                .inner
                .lock()
                .map_err(|_| MetaError::InvalidArgument("client lock poisoned".into()))?;
            drop(client);
            Ok(())
        })
        .await
        .map_err(|e| MetaError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
