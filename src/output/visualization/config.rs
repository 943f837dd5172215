//! Plot configuration
//!
//! Shared by every plotting function of the visualization module.

use plotters::prelude::*;

use crate::solver::SchemeKind;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Caption of the solution panel
/// - `xlabel`, `ylabel`: Axis labels of the solution panel
/// - `error_title`, `error_ylabel`: Caption and y label of the error panel
/// - `exact_color`: Color of the exact solution
/// - `scheme_colors`: Optional colors, one per scheme in [`SchemeKind::ALL`] order
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use rashevsky_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.title = "h = 0.5".to_string();
/// config.scheme_colors = Some(vec![MAGENTA, CYAN, BLACK]);
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1100)
    pub width: u32,

    /// Image height in pixels (default: 900)
    pub height: u32,

    /// Solution panel caption
    pub title: String,

    /// X-axis label (default: "Tiempo t (años)")
    pub xlabel: String,

    /// Y-axis label of the solution panel
    pub ylabel: String,

    /// Error panel caption
    pub error_title: String,

    /// Y-axis label of the error panel
    pub error_ylabel: String,

    /// Exact solution color (default: BLACK)
    pub exact_color: RGBColor,

    /// Optional scheme colors
    ///
    /// If None, uses the default palette: [BLUE, RED, GREEN]
    pub scheme_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 900,
            title: "Modelo de Rashevsky: comparacion de metodos numericos".to_string(),
            xlabel: "Tiempo t (años)".to_string(),
            ylabel: "p(t), proporcion de inconformistas".to_string(),
            error_title: "Evolucion del error absoluto por metodo".to_string(),
            error_ylabel: "|p_n - p(t_n)| (log)".to_string(),
            exact_color: BLACK,
            scheme_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Builder pattern: set caption of the solution panel
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Color of the given scheme
    ///
    /// Uses custom colors if provided, otherwise falls back to the default
    /// palette
    pub(crate) fn scheme_color(&self, kind: SchemeKind) -> RGBColor {
        let index = SchemeKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();

        if let Some(colors) = &self.scheme_colors
            && index < colors.len()
        {
            return colors[index];
        }

        [BLUE, RED, GREEN][index]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
