//! # Document Tree Model
//!
//! Local mirror of the remote snapshot plus the log of mutations made on it.
//!
//! Reads go straight to the mirror. Writes go through the handles
//! ([`Wavelet`], [`Blip`], [`crate::TextView`], [`crate::FormView`]); each write updates the
//! mirror and appends exactly one operation record, so a read right after a
//! write observes the new state.
//!
//! ## Context trimming
//!
//! ```text
//! b1 ── children: [b2, b3]
//!        b2 present in bundle  → Resolved::Available
//!        b3 trimmed remotely   → Resolved::Unavailable("b3")
//!        index 2               → Resolved::Missing
//! ```

use crate::blip::Blip;
use crate::errors::EditorError;
use crate::id_generator::PlaceholderIds;
use crate::recorder::OperationLog;
use crate::wavelet::Wavelet;
use std::collections::{BTreeMap, HashSet};
use wavebridge_model::{BlipData, EventMessageBundle, EventRecord, OperationRecord, WaveletData, WaveletKey};

/// Outcome of following a parent/child reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// Referenced and materialized locally
    Available(&'a BlipData),
    /// Referenced but not carried by this bundle
    Unavailable(&'a str),
    /// No such reference
    Missing,
}

impl<'a> Resolved<'a> {
    pub fn is_available(&self) -> bool {
        matches!(self, Resolved::Available(_))
    }

    pub fn blip(&self) -> Option<&'a BlipData> {
        match self {
            Resolved::Available(blip) => Some(blip),
            _ => None,
        }
    }

    /// Id of the referenced blip, whether materialized or not
    pub fn id(&self) -> Option<&'a str> {
        match self {
            Resolved::Available(blip) => Some(blip.blip_id.as_str()),
            Resolved::Unavailable(id) => Some(id),
            Resolved::Missing => None,
        }
    }
}

/// Mirror of one bundle's wavelets and blips
#[derive(Debug)]
pub struct WaveModel {
    /// Snapshot wavelet first, then wavelets created locally
    pub(crate) wavelets: Vec<WaveletData>,
    pub(crate) blips: BTreeMap<String, BlipData>,
    pub(crate) log: OperationLog,
    pub(crate) ids: PlaceholderIds,
    pub(crate) root_wavelet_id: String,
}

impl WaveModel {
    /// Materialize the mirror of a decoded bundle; events are left to the caller
    pub fn from_snapshot(
        wavelet: WaveletData,
        blips: BTreeMap<String, BlipData>,
        placeholder_prefix: &str,
        root_wavelet_id: &str,
    ) -> Self {
        let reserved = known_ids(&wavelet, &blips);

        Self {
            wavelets: vec![wavelet],
            blips,
            log: OperationLog::new(),
            ids: PlaceholderIds::with_reserved(placeholder_prefix, reserved),
            root_wavelet_id: root_wavelet_id.to_string(),
        }
    }

    /// Split a bundle into its mirror and its events
    pub fn from_bundle(
        bundle: EventMessageBundle,
        placeholder_prefix: &str,
        root_wavelet_id: &str,
    ) -> (Self, Vec<EventRecord>) {
        let EventMessageBundle { events, wavelet, blips } = bundle;
        (
            Self::from_snapshot(wavelet, blips, placeholder_prefix, root_wavelet_id),
            events,
        )
    }

    // Reads

    /// The wavelet the bundle was delivered for
    pub fn wavelet_data(&self) -> &WaveletData {
        &self.wavelets[0]
    }

    pub fn find_wavelet(&self, key: &WaveletKey) -> Option<&WaveletData> {
        self.wavelets.iter().find(|w| w.wave_id == key.wave_id && w.wavelet_id == key.wavelet_id)
    }

    pub fn wavelet_keys(&self) -> Vec<WaveletKey> {
        self.wavelets.iter().map(WaveletData::key).collect()
    }

    pub fn get_title(&self) -> &str {
        &self.wavelet_data().title
    }

    pub fn get_participants(&self) -> &[String] {
        &self.wavelet_data().participants
    }

    pub fn get_data_document(&self, name: &str) -> Option<&str> {
        self.wavelet_data().data_document(name)
    }

    pub fn get_blip(&self, blip_id: &str) -> Option<&BlipData> {
        self.blips.get(blip_id)
    }

    pub fn get_root_blip(&self) -> Resolved<'_> {
        self.resolve(Some(self.wavelet_data().root_blip_id.as_str()))
    }

    pub fn blips(&self) -> impl Iterator<Item = &BlipData> {
        self.blips.values()
    }

    /// Materialized children of a blip, in child order
    pub fn get_children(&self, blip_id: &str) -> Vec<&BlipData> {
        match self.blips.get(blip_id) {
            Some(blip) => blip
                .child_blip_ids
                .iter()
                .filter_map(|id| self.blips.get(id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Nth child of a blip; bounds-checked, trimmed children are `Unavailable`
    pub fn get_child(&self, blip_id: &str, index: usize) -> Resolved<'_> {
        let child = self
            .blips
            .get(blip_id)
            .and_then(|blip| blip.child_blip_ids.get(index));
        self.resolve(child.map(String::as_str))
    }

    pub fn is_child_available(&self, blip_id: &str, index: usize) -> bool {
        self.get_child(blip_id, index).is_available()
    }

    pub fn get_parent(&self, blip_id: &str) -> Resolved<'_> {
        let parent = self
            .blips
            .get(blip_id)
            .and_then(|blip| blip.parent_blip_id.as_deref());
        self.resolve(parent)
    }

    pub fn is_parent_available(&self, blip_id: &str) -> bool {
        self.get_parent(blip_id).is_available()
    }

    /// Records appended so far, oldest first
    pub fn pending_operations(&self) -> &[OperationRecord] {
        self.log.records()
    }

    /// Take the operation log, leaving it empty
    pub fn drain(&mut self) -> Vec<OperationRecord> {
        self.log.drain()
    }

    // Handles

    pub fn wavelet(&mut self) -> Wavelet<'_> {
        Wavelet::new(self, 0)
    }

    pub fn wavelet_at(&mut self, key: &WaveletKey) -> Result<Wavelet<'_>, EditorError> {
        let index = self
            .wavelets
            .iter()
            .position(|w| w.wave_id == key.wave_id && w.wavelet_id == key.wavelet_id)
            .ok_or_else(|| EditorError::UnknownWavelet(key.to_string()))?;
        Ok(Wavelet::new(self, index))
    }

    /// Edit handle for a materialized blip
    pub fn blip(&mut self, blip_id: &str) -> Result<Blip<'_>, EditorError> {
        if !self.blips.contains_key(blip_id) {
            return Err(EditorError::UnknownBlip(blip_id.to_string()));
        }
        Ok(Blip::new(self, blip_id.to_string()))
    }

    /// `id` must be borrowed from the mirror itself
    pub(crate) fn resolve<'a>(&'a self, id: Option<&'a str>) -> Resolved<'a> {
        match id {
            None => Resolved::Missing,
            Some("") => Resolved::Missing,
            Some(id) => match self.blips.get(id) {
                Some(blip) => Resolved::Available(blip),
                None => Resolved::Unavailable(id),
            },
        }
    }

    pub(crate) fn record(&mut self, operation: OperationRecord) {
        self.log.record(operation);
    }

    pub(crate) fn new_id(&mut self) -> String {
        self.ids.new_id()
    }
}

/// Every id mentioned by the snapshot, materialized or not
fn known_ids(wavelet: &WaveletData, blips: &BTreeMap<String, BlipData>) -> HashSet<String> {
    let mut ids = HashSet::new();
    ids.insert(wavelet.wave_id.clone());
    ids.insert(wavelet.wavelet_id.clone());
    ids.insert(wavelet.root_blip_id.clone());

    for (key, blip) in blips {
        ids.insert(key.clone());
        ids.insert(blip.blip_id.clone());
        ids.extend(blip.child_blip_ids.iter().cloned());
        ids.extend(blip.parent_blip_id.iter().cloned());
    }

    ids
}
