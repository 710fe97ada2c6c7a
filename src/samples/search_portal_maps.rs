//! Search Portal Maps サンプル

mod query;

use crate::catalog::SampleCandidate;
use crate::config::DEFAULT_PORTAL_URL;
use crate::error::Result;
use crate::sample::{AuxiliaryFileKind, SampleContext, SampleFactory, SampleMetadata, SampleView};
use query::PortalQuery;

const NAMESPACE: &str = "samples::Map";

pub fn candidate() -> SampleCandidate {
    SampleCandidate::new(NAMESPACE, SampleFactory::of::<SearchPortalMaps>())
        .with_metadata(
            SampleMetadata::new(
                "Search Portal Maps",
                "Find web maps shared on a portal by keyword.",
                "Each keyword is turned into a portal search request restricted to \
                 web map items, sorted by number of views.",
            )
            .with_tags(["Map", "portal", "search", "web map"]),
        )
        .with_auxiliary_files(AuxiliaryFileKind::Class, ["query.rs"])
        .with_path(file!())
}

const KEYWORDS: [&str; 3] = ["san diego", "wildfire", "transit"];

#[derive(Debug, Default)]
pub struct SearchPortalMaps;

impl SampleView for SearchPortalMaps {
    fn title(&self) -> &str {
        "Search Portal Maps"
    }

    fn render(&self, _ctx: &SampleContext) -> Result<Vec<String>> {
        let mut lines = vec![format!("Portal: {}", DEFAULT_PORTAL_URL)];
        for keyword in KEYWORDS {
            let query = PortalQuery::web_maps(keyword).with_limit(10);
            lines.push(format!("\"{}\"", keyword));
            lines.push(format!("  {}", query.search_url(DEFAULT_PORTAL_URL)?));
        }
        Ok(lines)
    }
}
