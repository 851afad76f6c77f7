pub mod echo;
pub mod inspect;
pub mod respond;

pub use echo::{echo, EchoArgs};
pub use inspect::{inspect, InspectArgs};
pub use respond::{respond, RespondArgs};

use anyhow::{Context, Result};
use std::path::Path;
use wavebridge_common::BridgeConfig;
use wavebridge_editor::BundleAssembler;
use wavebridge_model::EventRecord;

/// Read and decode an event bundle file
pub(crate) fn open_bundle<'c>(
    path: &Path,
    config: &'c BridgeConfig,
) -> Result<(BundleAssembler<'c>, Vec<EventRecord>)> {
    let bytes = std::fs::read(path).with_context(|| format!("Cannot read {}", path.display()))?;

    BundleAssembler::decode(config, &bytes)
        .map_err(|err| {
            tracing::warn!("Rejected bundle {}: {}", path.display(), err);
            err
        })
        .with_context(|| format!("Cannot decode {}", path.display()))
}

/// Emit an encoded operation bundle, to `output` or stdout
pub(crate) fn emit(mut bytes: Vec<u8>, output: Option<&Path>, pretty: bool) -> Result<()> {
    if pretty {
        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        bytes = serde_json::to_vec_pretty(&value)?;
    }

    match output {
        Some(path) => {
            std::fs::write(path, &bytes).with_context(|| format!("Cannot write {}", path.display()))?;
        }
        None => println!("{}", String::from_utf8(bytes)?),
    }

    Ok(())
}

/// Millisecond timestamp as UTC text
pub(crate) fn format_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{millis}ms"))
}
