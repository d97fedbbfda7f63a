//! Fixture data provider
//!
//! Every call builds a fresh collection; nothing is cached, so callers must not
//! rely on reference stability between calls. The only non-deterministic piece
//! is the risk trend, which takes the random source as a parameter.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::Serialize;

/// Risk classification shared by assets and intelligence events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Critical => "CRITICAL",
            RiskTier::High => "HIGH",
            RiskTier::Medium => "MEDIUM",
            RiskTier::Low => "LOW",
        }
    }

    /// Marker color name used by the map.
    pub fn color_name(&self) -> &'static str {
        match self {
            RiskTier::Critical => "red",
            RiskTier::High => "orange",
            RiskTier::Medium => "yellow",
            RiskTier::Low => "green",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Header metrics for the War Room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMetrics {
    pub global_index: f64,
    pub critical_assets: u32,
    pub watchlist: u32,
    pub uptime: String,
    pub last_scan: String,
}

/// A monitored location on the operational theater map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub kind: String,
    pub risk: RiskTier,
    pub confidence: u8,
}

/// One item in the intelligence stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntelEvent {
    pub id: String,
    pub title: String,
    pub location: String,
    pub severity: RiskTier,
    pub category: String,
    pub age: String,
    pub confidence: u8,
}

/// One row of the system audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditLogEntry {
    pub timestamp: String,
    pub user: String,
    pub action: String,
    pub ip: String,
}

/// One day of the risk velocity series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: f64,
}

/// Number of daily points in the risk trend.
pub const TREND_DAYS: usize = 30;

/// Score axis bounds used by the analytics chart.
pub const TREND_MIN: f64 = 40.0;
pub const TREND_MAX: f64 = 100.0;

const TREND_START_SCORE: f64 = 70.0;
const TREND_STEP_STD_DEV: f64 = 5.0;

/// Source of demo datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProvider;

impl FixtureProvider {
    pub fn new() -> Self {
        Self
    }

    /// Header metrics stamped with the current clock.
    pub fn risk_metrics(&self) -> RiskMetrics {
        self.risk_metrics_at(Utc::now())
    }

    pub fn risk_metrics_at(&self, now: DateTime<Utc>) -> RiskMetrics {
        RiskMetrics {
            global_index: 72.4,
            critical_assets: 4,
            watchlist: 12,
            uptime: "99.998%".to_string(),
            last_scan: now.format("%H:%M:%S UTC").to_string(),
        }
    }

    pub fn assets(&self) -> Vec<Asset> {
        [
            ("Strait of Malacca", 4.2105, 101.9758, "Choke Point", RiskTier::Critical, 98),
            ("Taiwan Strait", 23.9037, 119.6763, "Conflict Zone", RiskTier::High, 92),
            ("Suez Canal", 30.5852, 32.3999, "Choke Point", RiskTier::Medium, 89),
            ("Rotterdam Hub", 51.9225, 4.47917, "Port", RiskTier::Low, 99),
            ("Panama Canal", 9.1012, -79.6955, "Chokepoint", RiskTier::Low, 95),
            ("Gulf of Aden", 12.8, 45.0, "Trade Route", RiskTier::High, 88),
        ]
        .into_iter()
        .map(|(name, lat, lon, kind, risk, confidence)| Asset {
            name: name.to_string(),
            lat,
            lon,
            kind: kind.to_string(),
            risk,
            confidence,
        })
        .collect()
    }

    pub fn intel_feed(&self) -> Vec<IntelEvent> {
        [
            ("EVT-902", "Unverified Drone Activity", "Red Sea Sector 4", RiskTier::Critical, "Conflict", "14m ago", 94),
            ("EVT-901", "Typhoon Beryl Formation", "Philippine Sea", RiskTier::High, "Weather", "42m ago", 88),
            ("EVT-899", "Port Labor Strike Notice", "Hamburg Terminal", RiskTier::Medium, "Labor", "2h ago", 76),
            ("EVT-898", "New Sanctions List Issued", "Global / OFAC", RiskTier::Low, "Regulatory", "5h ago", 100),
        ]
        .into_iter()
        .map(|(id, title, location, severity, category, age, confidence)| IntelEvent {
            id: id.to_string(),
            title: title.to_string(),
            location: location.to_string(),
            severity,
            category: category.to_string(),
            age: age.to_string(),
            confidence,
        })
        .collect()
    }

    pub fn audit_logs(&self) -> Vec<AuditLogEntry> {
        [
            ("14:12:01", "ADMIN_SEC", "ACCESS_WAR_ROOM", "10.2.4.12"),
            ("14:08:45", "SYSTEM", "AUTO_SCALING_EVENT", "INTERNAL"),
            ("13:55:22", "ANALYST_04", "OVERRIDE_CONFIDENCE", "10.2.5.99"),
        ]
        .into_iter()
        .map(|(timestamp, user, action, ip)| AuditLogEntry {
            timestamp: timestamp.to_string(),
            user: user.to_string(),
            action: action.to_string(),
            ip: ip.to_string(),
        })
        .collect()
    }

    /// 30-day random walk starting 2024-01-01.
    ///
    /// Steps are drawn from N(0, 5) and the score is held inside the chart's
    /// 40..=100 band.
    pub fn risk_trend<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<TrendPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        let mut score = TREND_START_SCORE;

        (0..TREND_DAYS)
            .map(|day| {
                if day > 0 {
                    let step: f64 = StandardNormal.sample(rng);
                    score = (score + step * TREND_STEP_STD_DEV).clamp(TREND_MIN, TREND_MAX);
                }
                TrendPoint {
                    date: start + Duration::days(day as i64),
                    score,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_risk_metrics_uses_clock() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 14, 5, 9).unwrap();
        let metrics = FixtureProvider::new().risk_metrics_at(now);
        assert_eq!(metrics.last_scan, "14:05:09 UTC");
        assert_eq!(metrics.global_index, 72.4);
        assert_eq!(metrics.critical_assets, 4);
        assert_eq!(metrics.uptime, "99.998%");
    }

    #[test]
    fn test_assets_fixture() {
        let assets = FixtureProvider::new().assets();
        assert_eq!(assets.len(), 6);
        assert_eq!(assets[0].name, "Strait of Malacca");
        assert_eq!(assets[0].risk, RiskTier::Critical);
        assert_eq!(
            assets.iter().filter(|a| a.risk == RiskTier::Critical).count(),
            1
        );
    }

    #[test]
    fn test_intel_feed_fixture() {
        let feed = FixtureProvider::new().intel_feed();
        let ids: Vec<_> = feed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["EVT-902", "EVT-901", "EVT-899", "EVT-898"]);
    }

    #[test]
    fn test_audit_logs_has_three_rows() {
        let logs = FixtureProvider::new().audit_logs();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].action, "ACCESS_WAR_ROOM");
        assert_eq!(logs[2].user, "ANALYST_04");
    }

    #[test]
    fn test_fixtures_are_fresh_but_equal() {
        let provider = FixtureProvider::new();
        assert_eq!(provider.assets(), provider.assets());
        assert_eq!(provider.audit_logs(), provider.audit_logs());
    }

    #[test]
    fn test_risk_trend_is_reproducible_with_seed() {
        let provider = FixtureProvider::new();
        let a = provider.risk_trend(&mut StdRng::seed_from_u64(7));
        let b = provider.risk_trend(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_risk_trend_shape() {
        let trend = FixtureProvider::new().risk_trend(&mut StdRng::seed_from_u64(42));
        assert_eq!(trend.len(), TREND_DAYS);
        assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(trend[29].date, NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
        assert_eq!(trend[0].score, 70.0);
        assert!(trend
            .iter()
            .all(|p| (TREND_MIN..=TREND_MAX).contains(&p.score)));
    }

    #[test]
    fn test_risk_tier_colors() {
        assert_eq!(RiskTier::Critical.color_name(), "red");
        assert_eq!(RiskTier::High.color_name(), "orange");
        assert_eq!(RiskTier::Medium.color_name(), "yellow");
        assert_eq!(RiskTier::Low.color_name(), "green");
    }
}
