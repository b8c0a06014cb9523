const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 150.0;

/// Value range covered by the y axis; always includes zero.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Range {
    lo: f64,
    hi: f64,
}

impl Range {
    fn of(values: &[f64]) -> Self {
        let lo = values.iter().copied().fold(0.0_f64, f64::min);
        let mut hi = values.iter().copied().fold(0.0_f64, f64::max);
        if hi - lo < f64::EPSILON {
            hi = lo + 1.0;
        }
        Range { lo, hi }
    }

    fn y(&self, value: f64) -> f64 {
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + (self.hi - value) / (self.hi - self.lo) * plot_height
    }
}

/// Renders a labelled bar chart as inline SVG. Labels must already be escaped.
pub fn bar_chart(title: &str, y_label: &str, bars: &[(&str, f64)]) -> String {
    let values: Vec<f64> = bars.iter().map(|(_, v)| *v).collect();
    let range = Range::of(&values);
    let zero = range.y(0.0);
    let slot = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / bars.len().max(1) as f64;
    let bar_width = slot * 0.6;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{title}">"#
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="24" text-anchor="middle" class="chart-title">{title}</text>"#,
        WIDTH / 2.0
    ));
    svg.push_str(&format!(
        r#"<text x="16" y="{y}" transform="rotate(-90 16 {y})" text-anchor="middle">{y_label}</text>"#,
        y = (MARGIN_TOP + HEIGHT - MARGIN_BOTTOM) / 2.0
    ));
    svg.push_str(&format!(
        r#"<line x1="{MARGIN_LEFT}" y1="{zero:.1}" x2="{}" y2="{zero:.1}" class="axis"/>"#,
        WIDTH - MARGIN_RIGHT
    ));

    for (i, (label, value)) in bars.iter().enumerate() {
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let top = range.y(value.max(0.0));
        let bottom = range.y(value.min(0.0));
        let center = x + bar_width / 2.0;
        let label_y = HEIGHT - MARGIN_BOTTOM + 16.0;

        svg.push_str(&format!(
            r#"<rect class="bar" x="{x:.1}" y="{top:.1}" width="{bar_width:.1}" height="{:.1}"/>"#,
            bottom - top
        ));
        svg.push_str(&format!(
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle" class="value">{value:.2}</text>"#,
            top - 4.0
        ));
        svg.push_str(&format!(
            r#"<text x="{center:.1}" y="{label_y:.1}" transform="rotate(45 {center:.1} {label_y:.1})">{label}</text>"#
        ));
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_always_contains_zero() {
        assert_eq!(Range::of(&[5.0, 10.0]), Range { lo: 0.0, hi: 10.0 });
        assert_eq!(Range::of(&[-20.0, 10.0]), Range { lo: -20.0, hi: 10.0 });
        assert_eq!(Range::of(&[0.0, 0.0]), Range { lo: 0.0, hi: 1.0 });
        assert_eq!(Range::of(&[]), Range { lo: 0.0, hi: 1.0 });
    }

    #[test]
    fn larger_values_sit_higher() {
        let range = Range::of(&[0.0, 100.0]);
        assert!(range.y(100.0) < range.y(50.0));
        assert_eq!(range.y(100.0), MARGIN_TOP);
        assert_eq!(range.y(0.0), HEIGHT - MARGIN_BOTTOM);
    }

    #[test]
    fn draws_one_bar_per_value() {
        let svg = bar_chart("Scores", "Score", &[("A", 1.0), ("B", -2.5), ("C", 3.0)]);
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("-2.50"));
        assert!(svg.starts_with("<svg") && svg.ends_with("</svg>"));
    }
}
