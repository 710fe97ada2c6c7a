//! Geodesic Operations サンプル

use crate::catalog::SampleCandidate;
use crate::error::Result;
use crate::sample::{SampleContext, SampleFactory, SampleMetadata, SampleView};

const NAMESPACE: &str = "samples::GeometryEngine";

/// 地球の平均半径 (km)
const EARTH_RADIUS_KM: f64 = 6371.0088;

pub fn candidate() -> SampleCandidate {
    SampleCandidate::new(NAMESPACE, SampleFactory::of::<GeodesicOperations>())
        .with_metadata(
            SampleMetadata::new(
                "Geodesic Operations",
                "Calculate a geodesic path between two points and measure its distance.",
                "The path starts at New York City. Each destination shows the great-circle \
                 distance and the intermediate points along the path.",
            )
            .with_tags(["GeometryEngine", "densify", "distance", "geodesic", "great circle"]),
        )
        .with_path(file!())
}

/// 経緯度（度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

const NEW_YORK: LatLon = LatLon::new(40.7128, -74.0060);

const DESTINATIONS: [(&str, LatLon); 3] = [
    ("London", LatLon::new(51.5074, -0.1278)),
    ("Tokyo", LatLon::new(35.6762, 139.6503)),
    ("Sydney", LatLon::new(-33.8688, 151.2093)),
];

/// 2 点間の中心角（ラジアン、haversine）
fn central_angle(a: LatLon, b: LatLon) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * h.sqrt().min(1.0).asin()
}

/// 大圏距離 (km)
pub fn geodesic_distance_km(a: LatLon, b: LatLon) -> f64 {
    EARTH_RADIUS_KM * central_angle(a, b)
}

/// 大圏上を `segments` 等分した点列（始点・終点を含む）
pub fn geodesic_path(a: LatLon, b: LatLon, segments: usize) -> Vec<LatLon> {
    let delta = central_angle(a, b);
    if segments == 0 || delta == 0.0 {
        return vec![a, b];
    }

    let to_vec = |p: LatLon| {
        let (lat, lon) = (p.lat.to_radians(), p.lon.to_radians());
        (lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    };
    let (ax, ay, az) = to_vec(a);
    let (bx, by, bz) = to_vec(b);

    (0..=segments)
        .map(|i| {
            let f = i as f64 / segments as f64;
            let wa = ((1.0 - f) * delta).sin() / delta.sin();
            let wb = (f * delta).sin() / delta.sin();
            let (x, y, z) = (wa * ax + wb * bx, wa * ay + wb * by, wa * az + wb * bz);
            LatLon::new(
                z.atan2((x * x + y * y).sqrt()).to_degrees(),
                y.atan2(x).to_degrees(),
            )
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct GeodesicOperations;

impl SampleView for GeodesicOperations {
    fn title(&self) -> &str {
        "Geodesic Operations"
    }

    fn render(&self, _ctx: &SampleContext) -> Result<Vec<String>> {
        let mut lines = vec![format!(
            "Start: New York ({:.4}, {:.4})",
            NEW_YORK.lat, NEW_YORK.lon
        )];

        for (name, destination) in DESTINATIONS {
            lines.push(format!(
                "{}: {:.0} km",
                name,
                geodesic_distance_km(NEW_YORK, destination)
            ));
            let path = geodesic_path(NEW_YORK, destination, 4);
            let points: Vec<String> = path
                .iter()
                .map(|p| format!("({:.1}, {:.1})", p.lat, p.lon))
                .collect();
            lines.push(format!("  path: {}", points.join(" -> ")));
        }
        Ok(lines)
    }
}
