//! Projection Generator - profit and cost trajectories for the plan horizon.

use serde::Serialize;

use crate::domain::foundation::round_to_tenth;

/// Points per series.
pub const POINTS_PER_SERIES: usize = 5;

/// One week on a projected trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub week: String,
    /// Present only for the first half of the series.
    pub actual: Option<f64>,
    pub projected: f64,
}

/// Profit growth and cost index trajectories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projections {
    pub profit: Vec<ProjectionPoint>,
    pub cost: Vec<ProjectionPoint>,
}

pub struct ProjectionGenerator;

impl ProjectionGenerator {
    pub fn generate(target_percentage: f64, timeline_weeks: u32) -> Projections {
        let labels = week_labels(timeline_weeks);
        let mut profit = Vec::with_capacity(POINTS_PER_SERIES);
        let mut cost = Vec::with_capacity(POINTS_PER_SERIES);

        for (i, week) in labels.into_iter().enumerate() {
            let progress = (i + 1) as f64 / POINTS_PER_SERIES as f64;
            let observed = (i as f64) < POINTS_PER_SERIES as f64 / 2.0;

            let profit_projected = target_percentage * progress * 0.9;
            let cost_projected = 100.0 - target_percentage * 0.15 * progress;

            profit.push(ProjectionPoint {
                week: week.clone(),
                actual: observed.then(|| round_to_tenth(profit_projected * 0.85)),
                projected: round_to_tenth(profit_projected),
            });
            cost.push(ProjectionPoint {
                week,
                actual: observed.then(|| round_to_tenth(cost_projected + 0.5)),
                projected: round_to_tenth(cost_projected),
            });
        }

        Projections { profit, cost }
    }
}

/// Week labels for a timeline; the last label is always the timeline itself.
pub fn week_labels(timeline_weeks: u32) -> [String; POINTS_PER_SERIES] {
    let leading: [u32; 4] = if timeline_weeks <= 8 {
        [1, 2, 4, 6]
    } else if timeline_weeks <= 12 {
        [1, 3, 6, 9]
    } else {
        [1, 4, 8, 12]
    };
    let [a, b, c, d] = leading;
    [a, b, c, d, timeline_weeks].map(|week| format!("W{}", week))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_timeline_buckets() {
        assert_eq!(week_labels(8), ["W1", "W2", "W4", "W6", "W8"]);
        assert_eq!(week_labels(12), ["W1", "W3", "W6", "W9", "W12"]);
        assert_eq!(week_labels(10), ["W1", "W3", "W6", "W9", "W10"]);
        assert_eq!(week_labels(26), ["W1", "W4", "W8", "W12", "W26"]);
    }

    #[test]
    fn profit_series_for_twenty_percent() {
        let projections = ProjectionGenerator::generate(20.0, 12);
        let projected: Vec<_> = projections.profit.iter().map(|p| p.projected).collect();
        assert_eq!(projected, vec![3.6, 7.2, 10.8, 14.4, 18.0]);
        assert_eq!(projections.profit[0].actual, Some(3.1));
        assert_eq!(projections.profit[2].actual, Some(9.2));
        assert_eq!(projections.profit[3].actual, None);
    }

    #[test]
    fn cost_series_starts_near_hundred_and_falls() {
        let projections = ProjectionGenerator::generate(20.0, 12);
        let projected: Vec<_> = projections.cost.iter().map(|p| p.projected).collect();
        assert_eq!(projected, vec![99.4, 98.8, 98.2, 97.6, 97.0]);
        assert_eq!(projections.cost[0].actual, Some(99.9));
        assert_eq!(projections.cost[4].actual, None);
    }

    #[test]
    fn actuals_only_in_first_half() {
        let projections = ProjectionGenerator::generate(15.0, 6);
        for series in [&projections.profit, &projections.cost] {
            assert_eq!(series.len(), POINTS_PER_SERIES);
            for (i, point) in series.iter().enumerate() {
                assert_eq!(point.actual.is_some(), i < 3);
            }
        }
    }

    #[test]
    fn zero_target_keeps_zero_actuals() {
        let projections = ProjectionGenerator::generate(0.0, 12);
        assert_eq!(projections.profit[0].actual, Some(0.0));
        assert_eq!(projections.cost[0].projected, 100.0);
    }
}
