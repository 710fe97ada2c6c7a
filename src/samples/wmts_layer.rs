//! WMTS Layer サンプル

use crate::catalog::SampleCandidate;
use crate::error::{GalleryError, Result};
use crate::sample::{SampleContext, SampleFactory, SampleMetadata, SampleView};
use reqwest::Url;

const NAMESPACE: &str = "samples::Layers";

const SERVICE_URL: &str =
    "https://sampleserver6.arcgisonline.com/arcgis/rest/services/WorldTimeZones/MapServer/WMTS";
const LAYER: &str = "WorldTimeZones";
const TILE_MATRIX_SET: &str = "GoogleMapsCompatible";
/// タイルマトリクスセットの最大ズームレベル
pub const MAX_ZOOM: u8 = 23;

pub fn candidate() -> SampleCandidate {
    SampleCandidate::new(NAMESPACE, SampleFactory::of::<WmtsLayer>())
        .with_metadata(
            SampleMetadata::new(
                "WMTS Layer",
                "Display a layer from a Web Map Tile Service.",
                "The tiles covering a few well-known places are requested from the \
                 WorldTimeZones service with KVP GetTile requests.",
            )
            .with_tags(["Layers", "OGC", "WMTS", "tiled", "web map tile service"]),
        )
        .with_path(file!())
        .with_image("wmts_layer.jpg")
}

/// Web メルカトルのタイル座標
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    pub zoom: u8,
    pub row: u32,
    pub col: u32,
}

/// 経緯度を含むタイルを計算
///
/// `zoom` は `MAX_ZOOM` までに丸める。
pub fn tile_for(lat: f64, lon: f64, zoom: u8) -> TileCoord {
    let zoom = zoom.min(MAX_ZOOM);
    let n = f64::from(1u32 << zoom);
    // Web メルカトルの有効範囲
    let lat = lat.clamp(-85.051_128_78, 85.051_128_78).to_radians();
    let x = (lon + 180.0) / 360.0 * n;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * n;
    let max = (1u32 << zoom) - 1;
    TileCoord {
        zoom,
        row: (y.floor().max(0.0) as u32).min(max),
        col: (x.floor().max(0.0) as u32).min(max),
    }
}

/// GetCapabilities リクエスト URL
pub fn capabilities_url() -> Result<Url> {
    Url::parse_with_params(
        SERVICE_URL,
        &[
            ("SERVICE", "WMTS"),
            ("REQUEST", "GetCapabilities"),
            ("VERSION", "1.0.0"),
        ],
    )
    .map_err(|e| invalid_url(e.to_string()))
}

/// KVP 形式の GetTile リクエスト URL
pub fn get_tile_url(tile: TileCoord) -> Result<Url> {
    let (zoom, row, col) = (tile.zoom.to_string(), tile.row.to_string(), tile.col.to_string());
    Url::parse_with_params(
        SERVICE_URL,
        &[
            ("SERVICE", "WMTS"),
            ("REQUEST", "GetTile"),
            ("VERSION", "1.0.0"),
            ("LAYER", LAYER),
            ("STYLE", "default"),
            ("FORMAT", "image/png"),
            ("TILEMATRIXSET", TILE_MATRIX_SET),
            ("TILEMATRIX", zoom.as_str()),
            ("TILEROW", row.as_str()),
            ("TILECOL", col.as_str()),
        ],
    )
    .map_err(|e| invalid_url(e.to_string()))
}

fn invalid_url(message: String) -> GalleryError {
    GalleryError::Activation {
        sample: "WMTS Layer".to_string(),
        message,
    }
}

const PLACES: [(&str, f64, f64); 3] = [
    ("Redlands", 34.0556, -117.1825),
    ("Edinburgh", 55.9533, -3.1883),
    ("Wellington", -41.2866, 174.7756),
];

#[derive(Debug, Default)]
pub struct WmtsLayer;

impl SampleView for WmtsLayer {
    fn title(&self) -> &str {
        "WMTS Layer"
    }

    fn render(&self, _ctx: &SampleContext) -> Result<Vec<String>> {
        let mut lines = vec![
            format!("Layer: {} ({})", LAYER, TILE_MATRIX_SET),
            format!("Capabilities: {}", capabilities_url()?),
        ];
        for (place, lat, lon) in PLACES {
            let tile = tile_for(lat, lon, 4);
            lines.push(format!(
                "{} z{}/{}/{}: {}",
                place,
                tile.zoom,
                tile.row,
                tile.col,
                get_tile_url(tile)?
            ));
        }
        Ok(lines)
    }
}
