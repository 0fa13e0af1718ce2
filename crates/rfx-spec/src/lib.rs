//! rfx Sound Parameter Library
//!
//! This crate provides the parameter types consumed by the rfx synthesizer and
//! the codecs for the parameter file formats that surround it.
//!
//! # Overview
//!
//! A sound effect is fully described by a [`ParameterSet`]: a flat record of
//! normalized controls for the envelope, pitch, vibrato, arpeggio, duty cycle,
//! repeat, phaser, and filters. The synthesizer turns a parameter set into a
//! rendered buffer; this crate only describes and (de)serializes it.
//!
//! # Example
//!
//! ```
//! use rfx_spec::{ParameterSet, Waveform, ExportFormat};
//! use rfx_spec::format::{rfx, sfs};
//!
//! let params = ParameterSet {
//!     waveform: Waveform::Sawtooth,
//!     start_frequency: 0.45,
//!     slide: -0.2,
//!     ..ParameterSet::default()
//! };
//!
//! let bytes = rfx::to_bytes(&params, &ExportFormat::default());
//! let file = rfx::from_bytes(&bytes).unwrap();
//! assert_eq!(file.params, params);
//!
//! let legacy = sfs::to_bytes(&params);
//! assert_eq!(sfs::from_bytes(&legacy).unwrap(), params);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Parse and validation errors
//! - [`params`]: The parameter set, waveform selector, and clamping
//! - [`export`]: Export format (sample rate, bit depth, channels)
//! - [`format`]: File codecs (`.sfs`, `.rfx`, JSON)

pub mod error;
pub mod export;
pub mod format;
pub mod params;

// Re-export commonly used types at the crate root
pub use error::{SpecError, SpecResult};
pub use export::ExportFormat;
pub use format::{ParamsFileKind, RfxFile};
pub use params::{ParameterSet, Waveform};
