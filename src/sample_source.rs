use crate::traits::TemperatureSource;

/// Built-in demonstration readings, one per second of the default feed.
pub const SAMPLE_TEMPERATURES: [f64; 10] =
    [100.0, 105.0, 110.0, 115.0, 120.0, 125.0, 130.0, 135.0, 140.0, 145.0];

/// A fixed list of readings played back in order, then exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSource {
    values: Vec<f64>,
    index: usize,
}

impl SampleSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new(SAMPLE_TEMPERATURES.to_vec())
    }
}

impl TemperatureSource for SampleSource {
    fn next_value(&mut self) -> Option<f64> {
        let value = self.values.get(self.index).copied()?;
        self.index += 1;
        Some(value)
    }

    fn is_exhausted(&self) -> bool {
        self.index >= self.values.len()
    }

    fn name(&self) -> &str {
        "Sample"
    }
}
