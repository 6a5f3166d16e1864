/// Trait for anything that can feed temperature readings to the chart.
///
/// A source hands out one reading per call, in order. Finite sources report
/// exhaustion so the feed can stop without asking for a value that is not there.
///
/// The chart never looks behind this trait, so a live sensor, a simulator or a
/// recording can be swapped in without touching rendering code.
pub trait TemperatureSource {
    /// Returns the next reading in °C, or `None` once the source has run dry
    fn next_value(&mut self) -> Option<f64>;

    /// Returns true when no further readings will be produced
    fn is_exhausted(&self) -> bool {
        false
    }

    /// Short human-readable name shown in the status bar
    fn name(&self) -> &str;
}

/// Trait for loading a temperature source from a file
pub trait SourceReader {
    /// Opens and decodes a recording, returning a ready-to-play source
    fn read(&self, file_path: &str) -> anyhow::Result<DynSource>;
}

/// Enum dispatch over the built-in sources.
///
/// Kept as an enum rather than `Box<dyn TemperatureSource>` so the source can be
/// moved across the loader thread boundary and matched on by the UI.
#[derive(Debug, Clone)]
pub enum DynSource {
    Sample(crate::sample_source::SampleSource),
    Simulated(crate::simulated_source::SimulatedSource),
    Recorded(crate::recorded_source::RecordedSource),
}

impl Default for DynSource {
    fn default() -> Self {
        DynSource::Sample(crate::sample_source::SampleSource::default())
    }
}

impl TemperatureSource for DynSource {
    #[inline]
    fn next_value(&mut self) -> Option<f64> {
        match self {
            DynSource::Sample(s) => s.next_value(),
            DynSource::Simulated(s) => s.next_value(),
            DynSource::Recorded(s) => s.next_value(),
        }
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        match self {
            DynSource::Sample(s) => s.is_exhausted(),
            DynSource::Simulated(s) => s.is_exhausted(),
            DynSource::Recorded(s) => s.is_exhausted(),
        }
    }

    #[inline]
    fn name(&self) -> &str {
        match self {
            DynSource::Sample(s) => s.name(),
            DynSource::Simulated(s) => s.name(),
            DynSource::Recorded(s) => s.name(),
        }
    }
}
