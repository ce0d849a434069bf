//! Headline metrics and chart series for the dashboard.

use chrono::Datelike;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

use super::date;
use super::financials::percentage;
use super::inventory::BirdType;
use crate::choice::Choice;

/// Percentage change since the previous period.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Trend {
    pub percent: f64,
    /// Whether the change is good news, which decides the arrow colour.
    pub positive: bool,
}

impl Trend {
    pub const fn new(percent: f64, positive: bool) -> Self {
        Self { percent, positive }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DashboardMetrics {
    pub total_birds: u32,
    /// Eggs collected today.
    pub egg_production: u32,
    /// Percent.
    pub mortality_rate: f64,
    pub feed_consumption_kg: u32,
    pub total_birds_trend: Trend,
    pub egg_production_trend: Trend,
    pub mortality_trend: Trend,
    pub feed_trend: Trend,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            total_birds: 5280,
            egg_production: 4350,
            mortality_rate: 0.5,
            feed_consumption_kg: 450,
            total_birds_trend: Trend::new(2.5, true),
            egg_production_trend: Trend::new(3.2, true),
            mortality_trend: Trend::new(0.2, false),
            feed_trend: Trend::new(1.8, false),
        }
    }
}

/// Deaths as a percentage of the population, 0 for an empty population.
pub fn mortality_rate(deaths: u32, population: u32) -> f64 {
    percentage(f64::from(deaths), f64::from(population))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ProductionPoint {
    pub date: NaiveDate,
    pub production: u32,
    pub target: u32,
}

impl ProductionPoint {
    pub fn met_target(&self) -> bool {
        self.production >= self.target
    }
}

pub fn sample_production() -> Vec<ProductionPoint> {
    [120, 130, 125, 140, 135, 150, 145, 160, 155, 170]
        .into_iter()
        .zip(1..)
        .map(|(production, day)| ProductionPoint {
            date: date(2023, 1, day),
            production,
            target: 100,
        })
        .collect()
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CoupMortality {
    pub coup: String,
    pub rate: f64,
    pub count: u32,
}

pub fn sample_mortality() -> Vec<CoupMortality> {
    [
        ("Coup A", 2.3, 5),
        ("Coup B", 1.8, 3),
        ("Coup C", 3.2, 7),
        ("Coup D", 0.9, 2),
        ("Coup E", 1.5, 4),
    ]
    .into_iter()
    .map(|(coup, rate, count)| CoupMortality {
        coup: coup.to_string(),
        rate,
        count,
    })
    .collect()
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FeedPoint {
    pub date: NaiveDate,
    pub kg: u32,
    pub coup: String,
}

pub fn sample_feed() -> Vec<FeedPoint> {
    let per_coup: [(&str, [u32; 7]); 3] = [
        ("Coup A", [50, 55, 60, 58, 62, 65, 63]),
        ("Coup B", [40, 45, 48, 50, 52, 55, 53]),
        ("Coup C", [30, 32, 35, 38, 40, 42, 45]),
    ];
    per_coup
        .into_iter()
        .flat_map(|(coup, amounts)| {
            amounts.into_iter().zip(1..).map(move |(kg, day)| FeedPoint {
                date: date(2023, 1, day),
                kg,
                coup: coup.to_string(),
            })
        })
        .collect()
}

/// Bucket size of the feed chart.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIter)]
pub enum FeedView {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Choice for FeedView {
    fn value(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl FeedView {
    /// First day of the bucket containing `date`.
    fn bucket(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Weekly => date - chrono::Days::new(u64::from(date.weekday().num_days_from_monday())),
            Self::Monthly => date.with_day(1).unwrap_or(date),
        }
    }
}

/// Sums feed per coup and bucket, ordered by coup then bucket start.
pub fn aggregate_feed(points: &[FeedPoint], view: FeedView) -> Vec<FeedPoint> {
    points
        .iter()
        .map(|p| ((p.coup.clone(), view.bucket(p.date)), p.kg))
        .into_grouping_map()
        .sum()
        .into_iter()
        .sorted()
        .map(|((coup, date), kg)| FeedPoint { date, kg, coup })
        .collect()
}

/// Dashboard filter bar state. `None` means "all".
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DashboardFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub coup: Option<String>,
    pub bird_type: Option<BirdType>,
}

impl DashboardFilter {
    /// Both ends inclusive.
    pub fn in_range(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    pub fn matches_coup(&self, coup: &str) -> bool {
        self.coup
            .as_deref()
            .is_none_or(|wanted| wanted.eq_ignore_ascii_case(coup) || wanted == coup_value(coup))
    }

    pub fn production<'a>(&self, points: &'a [ProductionPoint]) -> Vec<&'a ProductionPoint> {
        points.iter().filter(|p| self.in_range(p.date)).collect()
    }

    pub fn mortality<'a>(&self, rows: &'a [CoupMortality]) -> Vec<&'a CoupMortality> {
        rows.iter().filter(|m| self.matches_coup(&m.coup)).collect()
    }

    pub fn feed(&self, points: &[FeedPoint]) -> Vec<FeedPoint> {
        points
            .iter()
            .filter(|p| self.in_range(p.date) && self.matches_coup(&p.coup))
            .cloned()
            .collect()
    }

    /// Chart subtitle for the coup selection.
    pub fn coup_label(&self) -> String {
        self.coup.clone().unwrap_or_else(|| "All Coups".to_string())
    }
}

fn coup_value(coup: &str) -> String {
    coup.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics() {
        let metrics = DashboardMetrics::default();
        assert_eq!(metrics.total_birds, 5280);
        assert_eq!(metrics.egg_production, 4350);
        assert!(metrics.total_birds_trend.positive);
        assert!(!metrics.mortality_trend.positive);
    }

    #[test]
    fn mortality_rate_percentages() {
        assert_eq!(mortality_rate(0, 0), 0.0);
        assert_eq!(mortality_rate(5, 1000), 0.5);
        assert_eq!(mortality_rate(3, 300), 1.0);
    }

    #[test]
    fn sample_production_beats_target_every_day() {
        let points = sample_production();
        assert_eq!(points.len(), 10);
        assert_eq!(points[9].date, date(2023, 1, 10));
        assert!(points.iter().all(ProductionPoint::met_target));
    }

    #[test]
    fn filter_by_date_range_is_inclusive() {
        let filter = DashboardFilter {
            from: Some(date(2023, 1, 3)),
            to: Some(date(2023, 1, 5)),
            ..Default::default()
        };
        let production: Vec<u32> = filter.production(&sample_production()).iter().map(|p| p.production).collect();
        assert_eq!(production, vec![125, 140, 135]);
    }

    #[test]
    fn filter_by_coup_accepts_name_or_value() {
        let rows = sample_mortality();
        for wanted in ["Coup C", "coup-c"] {
            let filter = DashboardFilter {
                coup: Some(wanted.to_string()),
                ..Default::default()
            };
            let kept = filter.mortality(&rows);
            assert_eq!(kept.len(), 1);
            assert_eq!(kept[0].count, 7);
        }
        assert_eq!(DashboardFilter::default().mortality(&rows).len(), 5);
    }

    #[test]
    fn feed_aggregates_by_view() {
        let feed = sample_feed();
        assert_eq!(aggregate_feed(&feed, FeedView::Daily).len(), 21);

        let monthly = aggregate_feed(&feed, FeedView::Monthly);
        assert_eq!(monthly.len(), 3);
        assert_eq!(monthly[0].coup, "Coup A");
        assert_eq!(monthly[0].kg, 413);
        assert_eq!(monthly[0].date, date(2023, 1, 1));

        // 2023-01-01 is a Sunday, so the week splits 1 + 6 days.
        let weekly = aggregate_feed(&feed, FeedView::Weekly);
        let coup_a: Vec<u32> = weekly.iter().filter(|p| p.coup == "Coup A").map(|p| p.kg).collect();
        assert_eq!(coup_a, vec![50, 363]);
    }
}
