// crates/worldfacets-core/src/aggregate/chart.rs
use super::ContinentStat;
use serde::Serialize;

/// Fixed bar/pie colours, cycled when there are more than ten rows.
pub const CHART_PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9",
];

/// One bar of the "countries per continent" chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentBar {
    pub continent: String,
    pub country_count: usize,
    pub color: &'static str,
}

/// Chart rows in the order of `stats`.
pub fn continent_chart_data(stats: &[ContinentStat]) -> Vec<ContinentBar> {
    stats
        .iter()
        .zip(CHART_PALETTE.iter().cycle())
        .map(|(stat, color)| ContinentBar {
            continent: stat.continent.name.clone(),
            country_count: stat.country_count,
            color: *color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Continent;

    fn stat(code: &str, count: usize) -> ContinentStat {
        ContinentStat {
            continent: Continent::new(code, format!("{code} name")),
            country_count: count,
            languages: vec![],
            unique_languages: 0,
            currencies: vec![],
            unique_currencies: 0,
        }
    }

    #[test]
    fn colours_cycle_through_palette() {
        let stats: Vec<ContinentStat> = (0..12).map(|i| stat(&format!("C{i}"), 12 - i)).collect();
        let bars = continent_chart_data(&stats);
        assert_eq!(bars.len(), 12);
        assert_eq!(bars[0].continent, "C0 name");
        assert_eq!(bars[0].color, CHART_PALETTE[0]);
        assert_eq!(bars[10].color, CHART_PALETTE[0]);
        assert_eq!(bars[11].country_count, 1);
    }
}
