/// Collapses a spectrum into a single loudness figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriveSignalReducer {
    normalization: f32,
}

impl DriveSignalReducer {
    pub fn new(normalization: f32) -> Self {
        Self { normalization }
    }

    pub fn normalization(&self) -> f32 {
        self.normalization
    }

    /// Mean bin level divided by the normalization constant.
    ///
    /// Range is `[0, 255 / normalization]`. Empty input, a non-positive
    /// constant or a non-finite result all give 0.
    pub fn reduce(&self, spectrum: &[u8]) -> f32 {
        if spectrum.is_empty() || self.normalization.is_nan() || self.normalization <= 0.0 {
            return 0.0;
        }
        let sum: u64 = spectrum.iter().map(|&b| b as u64).sum();
        let mean = sum as f64 / spectrum.len() as f64;
        let drive = (mean / self.normalization as f64) as f32;
        if drive.is_finite() {
            drive
        } else {
            0.0
        }
    }
}
