//! Storage layer
//!
//! Firestore over REST when credentials are available, process memory
//! otherwise. The choice is made once at startup.

pub mod credentials;
pub mod firestore;
pub mod value;

pub use credentials::{Credentials, TokenSource};
pub use firestore::FirestoreClient;

use crate::settings::Settings;
use reqwest::Client;
use simr_core::{LocalStore, RecordStore, RemoteStore, Result, SimrError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Pick the record store for the lifetime of the process. Never fails: any
/// problem setting up Firestore selects the local store instead.
pub async fn initialize(settings: &Settings) -> Arc<dyn RecordStore> {
    match connect(settings).await {
        Ok(client) => {
            info!(
                "Firestore initialized for project {}",
                settings.google_cloud_project
            );
            Arc::new(RemoteStore::new(Arc::new(client)))
        }
        Err(e) => {
            warn!(
                "Firestore could not be initialized, using in-memory store: {}",
                e
            );
            Arc::new(LocalStore::new())
        }
    }
}

async fn connect(settings: &Settings) -> Result<FirestoreClient> {
    let http = Client::builder()
        .timeout(Duration::from_secs(settings.firestore_timeout_secs))
        .build()
        .map_err(|e| SimrError::Transport(format!("cannot build HTTP client: {}", e)))?;

    let credentials = Credentials::discover(settings).await?;
    let client = FirestoreClient::new(http.clone(), TokenSource::new(http, credentials), settings)?;

    // Minting the first token proves the credentials work
    client.tokens().token().await?;

    Ok(client)
}
