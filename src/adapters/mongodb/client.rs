//! MongoDB client wrapper
//!
//! Establishes and holds a handle to one collection within one database.
//! There is no retry and no health check: a failed connection surfaces
//! immediately as a store error to the caller of any operation.

use crate::adapters::mongodb::models::ApplicantDocument;
use crate::config::StoreConfig;
use crate::domain::{Result, StoreError};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

/// Wrapper around the MongoDB driver holding one collection handle
pub struct MongoStoreClient {
    collection: Collection<ApplicantDocument>,
    collection_name: String,
}

impl MongoStoreClient {
    /// Connect to MongoDB using the given store configuration
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConnectionFailed` if the connection string cannot
    /// be parsed or the client cannot be constructed.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let uri = config.connection_uri();

        tracing::debug!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            collection = %config.collection,
            "Connecting to MongoDB"
        );

        let options = ClientOptions::parse(&uri)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
        let client =
            Client::with_options(options).map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Ok(Self::from_client(client, &config.database, &config.collection))
    }

    /// Build a client wrapper around an externally supplied connection
    pub fn from_client(client: Client, database: &str, collection: &str) -> Self {
        let coll = client
            .database(database)
            .collection::<ApplicantDocument>(collection);

        Self {
            collection: coll,
            collection_name: collection.to_string(),
        }
    }

    /// Get the typed collection handle
    pub fn collection(&self) -> &Collection<ApplicantDocument> {
        &self.collection
    }

    /// Get the collection name
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }
}
