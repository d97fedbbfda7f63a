//! Marker lists for the operational theater map

use serde::Serialize;

use crate::fixtures::{Asset, RiskTier};

/// Radius of an asset marker.
pub const MARKER_RADIUS: f64 = 6.0;

/// Radius of the pulse halo drawn under critical assets.
pub const PULSE_RADIUS: f64 = 20.0;

/// Center of the theater view as (lat, lon).
pub const MAP_CENTER: (f64, f64) = (20.0, 10.0);

/// Degrees of (lat, lon) visible around [`MAP_CENTER`].
pub const MAP_SPAN: (f64, f64) = (140.0, 300.0);

/// Visible region of the theater map, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub lat_bounds: [f64; 2],
    pub lon_bounds: [f64; 2],
}

impl MapViewport {
    /// World view centered on [`MAP_CENTER`].
    pub fn theater() -> Self {
        let (lat, lon) = MAP_CENTER;
        let (lat_span, lon_span) = MAP_SPAN;
        Self {
            lat_bounds: [lat - lat_span / 2.0, lat + lat_span / 2.0],
            lon_bounds: [lon - lon_span / 2.0, lon + lon_span / 2.0],
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_bounds[0]..=self.lat_bounds[1]).contains(&lat)
            && (self.lon_bounds[0]..=self.lon_bounds[1]).contains(&lon)
    }
}

/// A circle to draw on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub tier: RiskTier,
    /// Translucent halo rather than a solid marker.
    pub pulse: bool,
    /// Popup text; `None` for halos.
    pub popup: Option<String>,
}

/// Build the marker list for a set of assets.
///
/// Critical assets get a halo emitted before their solid marker so the
/// marker draws on top.
pub fn markers_for(assets: &[Asset]) -> Vec<MapMarker> {
    let mut markers = Vec::with_capacity(assets.len() + 1);

    for asset in assets {
        if asset.risk == RiskTier::Critical {
            markers.push(MapMarker {
                lat: asset.lat,
                lon: asset.lon,
                radius: PULSE_RADIUS,
                tier: asset.risk,
                pulse: true,
                popup: None,
            });
        }

        markers.push(MapMarker {
            lat: asset.lat,
            lon: asset.lon,
            radius: MARKER_RADIUS,
            tier: asset.risk,
            pulse: false,
            popup: Some(popup_text(asset)),
        });
    }

    markers
}

fn popup_text(asset: &Asset) -> String {
    format!(
        "{} / Risk: {} / Conf: {}%",
        asset.name, asset.risk, asset.confidence
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureProvider;

    #[test]
    fn test_one_marker_per_asset_plus_halo_per_critical() {
        let assets = FixtureProvider::new().assets();
        let markers = markers_for(&assets);
        let critical = assets
            .iter()
            .filter(|a| a.risk == RiskTier::Critical)
            .count();
        assert_eq!(markers.len(), assets.len() + critical);
        assert_eq!(markers.iter().filter(|m| m.pulse).count(), critical);
    }

    #[test]
    fn test_halo_precedes_marker() {
        let assets = FixtureProvider::new().assets();
        let markers = markers_for(&assets);
        // Strait of Malacca is the first (and only) critical asset
        assert!(markers[0].pulse);
        assert_eq!(markers[0].radius, PULSE_RADIUS);
        assert!(!markers[1].pulse);
        assert_eq!(markers[1].lat, markers[0].lat);
    }

    #[test]
    fn test_popup_text() {
        let assets = FixtureProvider::new().assets();
        let markers = markers_for(&assets);
        assert_eq!(
            markers[1].popup.as_deref(),
            Some("Strait of Malacca / Risk: CRITICAL / Conf: 98%")
        );
    }

    #[test]
    fn test_empty_assets() {
        assert!(markers_for(&[]).is_empty());
    }

    #[test]
    fn test_theater_viewport_is_centered_and_holds_every_asset() {
        let viewport = MapViewport::theater();
        assert_eq!(viewport.lat_bounds, [-50.0, 90.0]);
        assert_eq!(viewport.lon_bounds, [-140.0, 160.0]);

        for asset in FixtureProvider::new().assets() {
            assert!(viewport.contains(asset.lat, asset.lon), "{}", asset.name);
        }
    }
}
