// Catalog store: cache-aside refresh from the channel directory.
//
// The catalog is refreshed wholesale -- each refresh builds a brand-new
// snapshot that atomically replaces the previous one. Readers hold cheap
// `Catalog` clones and are never blocked by a refresh in progress on
// another snapshot.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use livebox_api::DirectoryClient;

use crate::error::CoreError;
use crate::model::{Catalog, ChannelEntry};

/// How often the directory is re-fetched unless forced.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

struct CacheState {
    last_refreshed: Instant,
    snapshot: Catalog,
}

/// Cache-aside store for the channel catalog.
pub struct CatalogStore {
    directory: DirectoryClient,
    refresh_interval: Duration,
    state: Mutex<Option<CacheState>>,
}

impl CatalogStore {
    pub fn new(directory: DirectoryClient, refresh_interval: Duration) -> Self {
        Self {
            directory,
            refresh_interval,
            state: Mutex::new(None),
        }
    }

    /// Return the current catalog, refreshing it first when there is no
    /// previous fetch, the caller forces it, or the refresh interval has
    /// elapsed. Within the interval the cached snapshot is returned
    /// verbatim and the directory is not contacted.
    ///
    /// On refresh failure the previous snapshot is retained and served
    /// stale; only the very first fetch propagates `UpstreamUnavailable`.
    pub async fn get(&self, force: bool) -> Result<Catalog, CoreError> {
        let mut state = self.state.lock().await;

        let needs_refresh = force
            || state
                .as_ref()
                .is_none_or(|s| s.last_refreshed.elapsed() >= self.refresh_interval);

        if needs_refresh {
            match self.fetch().await {
                Ok(snapshot) => {
                    debug!(channels = snapshot.len(), "catalog refreshed");
                    *state = Some(CacheState {
                        last_refreshed: Instant::now(),
                        snapshot,
                    });
                }
                Err(err) => match state.as_ref() {
                    Some(previous) => {
                        warn!(error = %err, "directory refresh failed, serving stale catalog");
                        return Ok(previous.snapshot.clone());
                    }
                    None => return Err(err),
                },
            }
        }

        Ok(state
            .as_ref()
            .map(|s| s.snapshot.clone())
            .unwrap_or_default())
    }

    async fn fetch(&self) -> Result<Catalog, CoreError> {
        let records = self
            .directory
            .fetch_channels()
            .await
            .map_err(|e| CoreError::upstream(&e))?;

        let entries: Vec<ChannelEntry> = records
            .into_iter()
            .filter_map(|r| {
                let epg_id = r.epg_id?;
                Some(ChannelEntry {
                    name: r.name,
                    index: r.tv_index.unwrap_or_default(),
                    epg_id,
                })
            })
            .collect();
        Ok(Catalog::new(entries))
    }
}
