//! Hours-vs-growth scatter chart and correlation readout.
//!
//! Rendered as inline SVG. The chart has no state of its own; it is
//! recomputed from the records on every change.

use growth::{correlation_lines, format_value, Correlation, ScatterPoint};
use leptos::*;

use crate::{CHART_HEIGHT, CHART_MARGIN, CHART_WIDTH, POINT_COLOR, POINT_RADIUS};

/// Maps data coordinates onto the SVG viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub min_hours: f64,
    pub max_hours: f64,
    pub min_growth: f64,
    pub max_growth: f64,
}

impl ChartScale {
    /// Bounding box of `points`, widened so that neither axis is empty.
    /// The hours axis always starts at zero or below.
    pub fn fit(points: &[ScatterPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut scale = ChartScale {
            min_hours: first.hours.min(0.0),
            max_hours: first.hours,
            min_growth: first.growth,
            max_growth: first.growth,
        };
        for p in &points[1..] {
            scale.min_hours = scale.min_hours.min(p.hours);
            scale.max_hours = scale.max_hours.max(p.hours);
            scale.min_growth = scale.min_growth.min(p.growth);
            scale.max_growth = scale.max_growth.max(p.growth);
        }
        if scale.max_hours <= scale.min_hours {
            scale.max_hours = scale.min_hours + 1.0;
        }
        if scale.max_growth <= scale.min_growth {
            scale.min_growth -= 1.0;
            scale.max_growth += 1.0;
        }
        Some(scale)
    }

    /// SVG `(x, y)` of a point. Larger growth is drawn higher.
    pub fn project(&self, point: &ScatterPoint) -> (f64, f64) {
        let plot_w = CHART_WIDTH - 2.0 * CHART_MARGIN;
        let plot_h = CHART_HEIGHT - 2.0 * CHART_MARGIN;
        let tx = (point.hours - self.min_hours) / (self.max_hours - self.min_hours);
        let ty = (point.growth - self.min_growth) / (self.max_growth - self.min_growth);
        (CHART_MARGIN + tx * plot_w, CHART_HEIGHT - CHART_MARGIN - ty * plot_h)
    }
}

#[component]
pub fn GrowthChart(points: Memo<Vec<ScatterPoint>>, correlation: Memo<Correlation>) -> impl IntoView {
    let scale = move || points.with(|p| ChartScale::fit(p));
    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);
    let axis_x = CHART_HEIGHT - CHART_MARGIN;
    let axis_end = CHART_WIDTH - CHART_MARGIN;

    let dots = move || {
        let Some(scale) = scale() else {
            return Vec::new();
        };
        points
            .get()
            .iter()
            .map(|p| {
                let (cx, cy) = scale.project(p);
                view! {
                    <circle
                        cx=cx
                        cy=cy
                        r=POINT_RADIUS
                        fill=POINT_COLOR
                        data-label={format!("{} hours, growth {}", format_value(p.hours), format_value(p.growth))}
                    />
                }
            })
            .collect::<Vec<_>>()
    };

    let range_label = move || {
        scale().map(|s| {
            format!(
                "Hours {} to {}, growth {} to {}",
                format_value(s.min_hours),
                format_value(s.max_hours),
                format_value(s.min_growth),
                format_value(s.max_growth)
            )
        })
    };

    view! {
        <div class="chart-section">
            <h2>"Hours vs Growth"</h2>
            <svg viewBox=view_box class="growth-chart">
                <line x1=CHART_MARGIN y1=axis_x x2=axis_end y2=axis_x stroke="#6b7280"/>
                <line x1=CHART_MARGIN y1=CHART_MARGIN x2=CHART_MARGIN y2=axis_x stroke="#6b7280"/>
                <text x=axis_end y={CHART_HEIGHT - 10.0} text-anchor="end">"Hours Spent"</text>
                <text x=10.0 y={CHART_MARGIN - 10.0}>"Growth"</text>
                {dots}
            </svg>
            <div class="upload-hint">{range_label}</div>

            {move || match correlation_lines(&correlation.get()) {
                Some((headline, detail)) => view! {
                    <div class="correlation">
                        <p class="correlation-value">{headline}</p>
                        <p class="correlation-label">{detail}</p>
                    </div>
                }
                .into_view(),
                None => ().into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(hours: f64, growth: f64) -> ScatterPoint {
        ScatterPoint { hours, growth }
    }

    #[test]
    fn test_fit_empty() {
        assert_eq!(ChartScale::fit(&[]), None);
    }

    #[test]
    fn test_fit_widens_flat_axes() {
        let scale = ChartScale::fit(&[point(0.0, 5.0)]).unwrap();
        assert_eq!(scale.max_hours, 1.0);
        assert_eq!((scale.min_growth, scale.max_growth), (4.0, 6.0));
    }

    #[test]
    fn test_project_corners() {
        let scale = ChartScale::fit(&[point(0.0, -10.0), point(10.0, 10.0)]).unwrap();
        assert_eq!(scale.project(&point(0.0, -10.0)), (CHART_MARGIN, CHART_HEIGHT - CHART_MARGIN));
        assert_eq!(scale.project(&point(10.0, 10.0)), (CHART_WIDTH - CHART_MARGIN, CHART_MARGIN));
    }

    #[test]
    fn test_hours_axis_starts_at_zero() {
        let scale = ChartScale::fit(&[point(3.0, 1.0), point(5.0, 2.0)]).unwrap();
        assert_eq!(scale.min_hours, 0.0);
    }
}
