use strum::{Display as StrumDisplay, EnumIter};

/// Top-level sections of the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter)]
pub enum DashboardSection {
    #[strum(serialize = "Dashboard")]
    Dashboard,
    #[strum(serialize = "Crypto News")]
    News,
}

/// Format a USD price for display. Sub-dollar tokens get the full eight
/// decimals the exchange quotes them with, everything else two.
pub fn format_usd(price: f64) -> String {
    if price < 1.0 {
        format!("${price:.8}")
    } else {
        format!("${price:.2}")
    }
}

/// Format a 24h percent change with an explicit sign.
pub fn format_change(percent: f64) -> String {
    format!("{percent:+.2}%")
}

/// Build an SVG `points` attribute for a polyline, skipping gaps.
///
/// `series` values are mapped into a `width` x `height` viewport with
/// `min..max` as the vertical range; index 0 lands on the left edge.
pub fn polyline_points(
    series: &[Option<f64>],
    width: f64,
    height: f64,
    min: f64,
    max: f64,
) -> String {
    if series.len() < 2 {
        return String::new();
    }
    let span = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };
    let step = width / (series.len() - 1) as f64;

    series
        .iter()
        .enumerate()
        .filter_map(|(i, value)| {
            value.map(|v| {
                let x = i as f64 * step;
                let y = height - (v - min) / span * height;
                format!("{x:.1},{y:.1}")
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
