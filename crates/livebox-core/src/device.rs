// ── Device facade ──
//
// Composes the resolver, tuning command builder, and catalog store with
// the raw remote-control client. Every operation is a single blocking
// round-trip from the caller's perspective; failures surface immediately
// with no local retries.

use std::time::Duration;

use tracing::{debug, info};

use livebox_api::{
    DeviceStatus, DirectoryClient, KeyPressMode, RemoteClient, RemoteKey, TransportConfig,
};

use crate::catalog::CatalogStore;
use crate::config::DeviceConfig;
use crate::error::CoreError;
use crate::model::{Catalog, MatchKind, MOSAIC_EPG_ID, ResolvedChannel, UNKNOWN_CHANNEL_NAME};
use crate::resolver;
use crate::tuner::TuneCommand;

/// Pause between POWER and the confirming OK press when waking the box.
const POWER_CONFIRM_DELAY: Duration = Duration::from_millis(800);

/// Media states reported in `playedMediaState`.
const MEDIA_STATE_PLAY: &str = "PLAY";
const MEDIA_STATE_PAUSE: &str = "PAUSE";

/// The main entry point for consumers: one set-top box on the LAN.
pub struct SetTopBox {
    remote: RemoteClient,
    catalog: CatalogStore,
}

impl SetTopBox {
    /// Build the facade from a [`DeviceConfig`]. Does not touch the
    /// network -- the catalog is fetched lazily on first use.
    pub fn new(config: &DeviceConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let remote = RemoteClient::new(&config.hostname, config.port, &transport)?;
        let directory = DirectoryClient::new(config.directory_url.clone(), &transport)?;
        let catalog = CatalogStore::new(directory, config.refresh_interval);
        Ok(Self { remote, catalog })
    }

    /// Build the facade from pre-built clients (tests).
    pub fn with_clients(remote: RemoteClient, catalog: CatalogStore) -> Self {
        Self { remote, catalog }
    }

    // ── Channel operations ───────────────────────────────────────────

    /// Tune to a channel by name, `#index`, or approximate name.
    ///
    /// Returns the resolved entry so callers can report what was
    /// actually tuned to (fuzzy matches in particular).
    pub async fn set_channel(&self, token: &str) -> Result<ResolvedChannel, CoreError> {
        let catalog = self.catalog.get(false).await?;
        let resolved =
            resolver::resolve(token, &catalog).ok_or_else(|| CoreError::ChannelNotFound {
                token: token.to_owned(),
            })?;

        let command = TuneCommand::build(&resolved.entry.epg_id);
        info!(channel = %resolved.entry.name, wire = %command, "tuning");
        self.remote.tune(command.as_str()).await?;
        Ok(resolved)
    }

    /// The name of the channel currently on screen, if determinable.
    ///
    /// When the played-media identifier is absent, unknown, or resolves
    /// to the `"N/A"` sentinel, the OSD context is consulted: `VOD`
    /// reports as `"VOD"`, `AdvPlayer` as `"Replay"`, anything else as
    /// `None`.
    pub async fn current_channel_name(&self) -> Result<Option<String>, CoreError> {
        let status = self.remote.status().await?;

        let resolved = match status.played_media_id.as_deref() {
            Some(id) => self.resolve_current_id(id).await?,
            None => None,
        };

        match resolved {
            Some(r) if r.entry.name != UNKNOWN_CHANNEL_NAME => Ok(Some(r.entry.name)),
            _ => Ok(osd_fallback(status.osd_context.as_deref())),
        }
    }

    /// The currently played catalog entry, if the device reports one.
    pub async fn current_channel(&self) -> Result<Option<ResolvedChannel>, CoreError> {
        let status = self.remote.status().await?;
        match status.played_media_id.as_deref() {
            Some(id) => self.resolve_current_id(id).await,
            None => Ok(None),
        }
    }

    /// All channel names known to the catalog, in display order.
    pub async fn channel_names(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.catalog.get(false).await?.names())
    }

    /// The current catalog snapshot (refreshed per the cache policy).
    pub async fn catalog(&self, force: bool) -> Result<Catalog, CoreError> {
        self.catalog.get(force).await
    }

    async fn resolve_current_id(&self, id: &str) -> Result<Option<ResolvedChannel>, CoreError> {
        let catalog = self.catalog.get(false).await?;
        let kind = if id == MOSAIC_EPG_ID {
            MatchKind::Special
        } else {
            MatchKind::Exact
        };
        Ok(catalog
            .lookup_by_id(id)
            .map(|entry| ResolvedChannel { entry, kind }))
    }

    // ── Power ────────────────────────────────────────────────────────

    /// Device status snapshot.
    pub async fn status(&self) -> Result<DeviceStatus, CoreError> {
        Ok(self.remote.status().await?)
    }

    /// Whether the box is awake.
    pub async fn is_on(&self) -> Result<bool, CoreError> {
        Ok(self.status().await?.is_on())
    }

    /// Wake the box. POWER alone lands on a confirmation screen, so a
    /// second OK press follows after a short pause. No-op when already on.
    pub async fn turn_on(&self) -> Result<(), CoreError> {
        if self.is_on().await? {
            debug!("already on");
            return Ok(());
        }
        self.remote
            .press_key(RemoteKey::Power, KeyPressMode::Single)
            .await?;
        tokio::time::sleep(POWER_CONFIRM_DELAY).await;
        self.remote
            .press_key(RemoteKey::Ok, KeyPressMode::Single)
            .await?;
        Ok(())
    }

    /// Put the box in standby. No-op when already off.
    pub async fn turn_off(&self) -> Result<(), CoreError> {
        if self.is_on().await? {
            self.remote
                .press_key(RemoteKey::Power, KeyPressMode::Single)
                .await?;
        } else {
            debug!("already in standby");
        }
        Ok(())
    }

    // ── Keys ─────────────────────────────────────────────────────────

    /// Press a key on the virtual remote.
    pub async fn press_key(&self, key: RemoteKey, mode: KeyPressMode) -> Result<(), CoreError> {
        Ok(self.remote.press_key(key, mode).await?)
    }

    pub async fn volume_up(&self) -> Result<(), CoreError> {
        self.press_key(RemoteKey::VolumeUp, KeyPressMode::Single).await
    }

    pub async fn volume_down(&self) -> Result<(), CoreError> {
        self.press_key(RemoteKey::VolumeDown, KeyPressMode::Single).await
    }

    pub async fn mute(&self) -> Result<(), CoreError> {
        self.press_key(RemoteKey::Mute, KeyPressMode::Single).await
    }

    pub async fn channel_up(&self) -> Result<(), CoreError> {
        self.press_key(RemoteKey::ChannelUp, KeyPressMode::Single).await
    }

    pub async fn channel_down(&self) -> Result<(), CoreError> {
        self.press_key(RemoteKey::ChannelDown, KeyPressMode::Single).await
    }

    pub async fn play_pause(&self) -> Result<(), CoreError> {
        self.press_key(RemoteKey::PlayPause, KeyPressMode::Single).await
    }

    /// Resume playback; no-op unless the media is paused.
    pub async fn play(&self) -> Result<(), CoreError> {
        if self.status().await?.played_media_state.as_deref() == Some(MEDIA_STATE_PAUSE) {
            return self.play_pause().await;
        }
        debug!("media is already playing");
        Ok(())
    }

    /// Pause playback; no-op unless the media is playing.
    pub async fn pause(&self) -> Result<(), CoreError> {
        if self.status().await?.played_media_state.as_deref() == Some(MEDIA_STATE_PLAY) {
            return self.play_pause().await;
        }
        debug!("media is already paused");
        Ok(())
    }

    // ── Debug passthroughs ───────────────────────────────────────────

    /// Send a raw remote-control operation and return the `data` payload.
    pub async fn raw_operation(&self, operation: &str) -> Result<serde_json::Value, CoreError> {
        Ok(self.remote.operation(operation, &[]).await?)
    }

    /// Block until the appliance reports its next event.
    pub async fn event_notify(&self) -> Result<serde_json::Value, CoreError> {
        Ok(self.remote.event_notify().await?)
    }
}

fn osd_fallback(osd_context: Option<&str>) -> Option<String> {
    match osd_context {
        Some("VOD") => Some("VOD".to_owned()),
        Some("AdvPlayer") => Some("Replay".to_owned()),
        _ => None,
    }
}
