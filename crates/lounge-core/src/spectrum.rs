//! Fixed-length spectrum snapshots from the host analysis node.

/// A live frequency analysis node owned by the host audio subsystem.
///
/// Implementations copy the most recent byte magnitudes into `out` and never
/// block waiting for a fresh buffer.
pub trait SpectrumSource {
    fn bin_count(&self) -> usize;
    fn read_bytes(&mut self, out: &mut [u8]);
}

/// Fixed-length view into the current spectrum. Returns zeros until a source
/// has been attached.
pub struct SpectrumSampler<S> {
    source: Option<S>,
    bins: Vec<u8>,
}

impl<S: SpectrumSource> SpectrumSampler<S> {
    pub fn new(frequency_bin_count: usize) -> Self {
        Self {
            source: None,
            bins: vec![0; frequency_bin_count],
        }
    }

    /// Attach the one analysis source for this session. A second attach is
    /// rejected and the original source is kept.
    pub fn attach(&mut self, source: S) -> bool {
        if self.source.is_some() {
            log::error!("[spectrum] analysis source already attached; ignoring");
            return false;
        }
        if source.bin_count() != self.bins.len() {
            log::warn!(
                "[spectrum] source reports {} bins, sampler is fixed at {}",
                source.bin_count(),
                self.bins.len()
            );
        }
        self.source = Some(source);
        true
    }

    pub fn is_attached(&self) -> bool {
        self.source.is_some()
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn sample(&mut self) -> &[u8] {
        match &mut self.source {
            Some(src) => src.read_bytes(&mut self.bins),
            None => self.bins.fill(0),
        }
        &self.bins
    }
}
