/// One plotted reading: its wall-clock label and temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// The chart's single data series.
///
/// Append-only and unbounded; points are never evicted. Labels may repeat when
/// two points land in the same wall-clock second.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    name: String,
    points: Vec<ChartPoint>,
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self::new("Current Temperature")
    }
}

impl ChartSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, point: ChartPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&ChartPoint> {
        self.points.last()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }
}
