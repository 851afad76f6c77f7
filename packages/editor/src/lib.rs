//! # Wavebridge Editor
//!
//! Local mirror of a remote wavelet plus the log of every mutation made on it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ codec: event bundle bytes → model types     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mirror + operation log              │
//! │  - BundleAssembler opens/closes one cycle   │
//! │  - Wavelet/Blip/TextView/FormView handles   │
//! │  - every write → one OperationRecord        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ codec: operation bundle → wire bytes        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Remote is authoritative**: the mirror is a projection, the log is what counts
//! 2. **One call, one record**: no merging, no deduplication, no reordering
//! 3. **Trimming is normal**: references to blips outside the bundle resolve to
//!    [`Resolved::Unavailable`], never to an error
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wavebridge_common::BridgeConfig;
//! use wavebridge_editor::BundleAssembler;
//!
//! let config = BridgeConfig::default();
//! let (mut assembler, events) = BundleAssembler::decode(&config, &bytes)?;
//!
//! let mut wavelet = assembler.model_mut().wavelet();
//! let reply = wavelet.append_blip();
//! wavelet.set_title("Hi");
//!
//! let out = assembler.close_to_bytes()?;
//! ```

mod assembler;
mod blip;
mod document;
mod errors;
mod form_view;
mod id_generator;
mod recorder;
mod text_view;
mod wavelet;

pub use assembler::{process, BundleAssembler};
pub use blip::Blip;
pub use document::{Resolved, WaveModel};
pub use errors::EditorError;
pub use form_view::FormView;
pub use id_generator::PlaceholderIds;
pub use recorder::OperationLog;
pub use text_view::TextView;
pub use wavelet::Wavelet;
