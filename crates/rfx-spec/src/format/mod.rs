//! Parameter file codecs.
//!
//! Three on-disk renditions of a [`ParameterSet`] are supported:
//!
//! - [`sfs`] - the legacy versioned binary layout (versions 100, 101, 102)
//! - [`rfx`] - the signed `rFX ` layout carrying an export format header
//! - JSON - the serde rendition of [`ParameterSet`]
//!
//! Decoders are all-or-nothing: on error nothing is returned, so a caller's
//! current parameter set is never partially overwritten.

pub mod rfx;
pub mod sfs;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecResult;
use crate::export::ExportFormat;
use crate::params::ParameterSet;

pub use rfx::RfxFile;

/// Parameter file flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamsFileKind {
    /// Legacy versioned binary.
    Sfs,
    /// `rFX ` signed binary.
    Rfx,
    /// serde JSON.
    Json,
}

impl ParamsFileKind {
    /// Returns the file extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            ParamsFileKind::Sfs => "sfs",
            ParamsFileKind::Rfx => "rfx",
            ParamsFileKind::Json => "json",
        }
    }

    /// Picks a kind from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "sfs" => Some(ParamsFileKind::Sfs),
            "rfx" => Some(ParamsFileKind::Rfx),
            "json" => Some(ParamsFileKind::Json),
            _ => None,
        }
    }

    /// Guesses a kind from file contents.
    ///
    /// The `rFX ` signature wins, a leading `{` means JSON, anything else is
    /// treated as legacy binary (whose version check then decides).
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&rfx::SIGNATURE) {
            ParamsFileKind::Rfx
        } else if bytes
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|&b| b == b'{')
        {
            ParamsFileKind::Json
        } else {
            ParamsFileKind::Sfs
        }
    }
}

impl std::fmt::Display for ParamsFileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// A decoded parameter file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadedParams {
    /// Which codec decoded the file.
    pub kind: ParamsFileKind,
    /// The parameter set.
    pub params: ParameterSet,
    /// Export format stored in the file, if the format carries one.
    pub export: Option<ExportFormat>,
}

/// Decodes parameter bytes of the given kind.
pub fn decode(bytes: &[u8], kind: ParamsFileKind) -> SpecResult<LoadedParams> {
    let loaded = match kind {
        ParamsFileKind::Sfs => LoadedParams {
            kind,
            params: sfs::from_bytes(bytes)?,
            export: None,
        },
        ParamsFileKind::Rfx => {
            let file = rfx::from_bytes(bytes)?;
            LoadedParams {
                kind,
                params: file.params,
                export: Some(file.format),
            }
        }
        ParamsFileKind::Json => LoadedParams {
            kind,
            params: serde_json::from_slice(bytes)?,
            export: None,
        },
    };
    tracing::debug!(
        kind = %loaded.kind,
        waveform = %loaded.params.waveform,
        "decoded parameter file"
    );
    Ok(loaded)
}

/// Encodes a parameter set as the given kind.
///
/// `export` is only stored by `.rfx`; other kinds ignore it.
pub fn encode(
    params: &ParameterSet,
    export: &ExportFormat,
    kind: ParamsFileKind,
) -> SpecResult<Vec<u8>> {
    match kind {
        ParamsFileKind::Sfs => Ok(sfs::to_bytes(params)),
        ParamsFileKind::Rfx => Ok(rfx::to_bytes(params, export)),
        ParamsFileKind::Json => Ok(params.to_json_pretty()?.into_bytes()),
    }
}

/// Reads a parameter file, choosing the codec from the extension and falling
/// back to content sniffing.
pub fn read_file(path: &Path) -> SpecResult<LoadedParams> {
    let bytes = std::fs::read(path)?;
    let kind =
        ParamsFileKind::from_path(path).unwrap_or_else(|| ParamsFileKind::sniff(&bytes));
    decode(&bytes, kind)
}
