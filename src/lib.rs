pub mod traits;
pub mod error;
pub mod sample_source;
pub mod simulated_source;
pub mod recorded_source;
pub mod time_label;
pub mod series;
pub mod feed;
pub mod profile;
pub mod mode;
pub mod power;
pub mod config;
pub mod controller;
pub mod theme;

// Export source traits
pub use traits::{TemperatureSource, SourceReader, DynSource};

// Export source implementations
pub use sample_source::{SampleSource, SAMPLE_TEMPERATURES};
pub use simulated_source::SimulatedSource;
pub use recorded_source::{RecordedSource, RecordedSourceReader, parse_recording};
pub use error::SourceError;

// Export feed and chart model
pub use time_label::{format_minute_second, format_axis_tick, wall_clock_label};
pub use series::{ChartSeries, ChartPoint};
pub use feed::{ChartFeed, FeedState};

// Export panel model
pub use profile::{ProfileGrid, ProfilePoint, PROFILE_POINT_COUNT};
pub use mode::{UiMode, ModeSwitch};
pub use power::{PowerButton, PowerState, ButtonStyle};
pub use config::{PanelConfig, AxisConfig};
pub use controller::PanelController;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
