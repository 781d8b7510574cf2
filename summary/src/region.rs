use std::fs::File;
use std::path::Path;

use memmap2::{Mmap, MmapOptions};
use tracing::debug;

use crate::error::{Result, SummaryError};

/// The whole input file as one read-only byte slice.
///
/// Empty files are never mapped; they read as an empty slice.
pub struct MappedRegion {
    map: Option<Mmap>,
}

impl MappedRegion {
    pub fn open(path: &Path) -> Result<Self> {
        let io_err = |source| SummaryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        if len == 0 {
            debug!(path = %path.display(), "empty input, skipping mmap");
            return Ok(Self { map: None });
        }

        // SAFETY: the mapping is read-only and lives as long as `self`; the
        // input is not expected to change underneath a run.
        let map = unsafe { MmapOptions::new().map(&file) }.map_err(io_err)?;
        debug!(path = %path.display(), len, "mapped input");
        Ok(Self { map: Some(map) })
    }

    pub fn bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}
