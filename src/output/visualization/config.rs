//! Plot configuration for error convergence charts

use plotters::prelude::*;

/// Default chart title, naming both compared methods
pub const DEFAULT_TITLE: &str =
    "Error between exact and numerical solution (Euler method, Runge-Kutta method)";

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `series_colors`: Optional colors, one per milestone (shared by both methods)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `marker_size`: Marker radius in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use conv_rs::output::visualization::PlotConfig;
///
/// let mut config = PlotConfig::error_convergence("Arctan model");
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 800)
    pub width: u32,

    /// Image height in pixels (default: 600)
    pub height: u32,

    /// Plot title
    pub title: String,

    /// X-axis label (default: "grid spacing (Δx)")
    pub xlabel: String,

    /// Y-axis label (default: "error")
    pub ylabel: String,

    /// Optional colors, one per milestone in configuration order
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Marker size in pixels (default: 6)
    pub marker_size: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: DEFAULT_TITLE.to_string(),
            xlabel: "grid spacing (Δx)".to_string(),
            ylabel: "error".to_string(),
            series_colors: None,
            background: WHITE,
            line_width: 2,
            marker_size: 6,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for error convergence charts with optional custom title
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::error_convergence("Arctan model");
    /// let config = PlotConfig::error_convergence(NO_TITLE);
    /// ```
    pub fn error_convergence(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Create config with custom series colors
    pub fn with_series_colors(colors: Vec<RGBColor>) -> Self {
        Self {
            series_colors: Some(colors),
            ..Self::default()
        }
    }

    /// Get color for the milestone at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors
            && series_index < colors.len()
        {
            return colors[series_index];
        }

        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),  // Orange
            RGBColor(128, 0, 128),  // Purple
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
