//! Static assets embedded at compile time.
//!
//! D3.js itself is loaded from its CDN; the chart and wiring scripts are
//! plain globals (no ES modules) served from `/assets/<name>`.

static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static DASHBOARD_JS: &str = include_str!("../assets/js/dashboard.js");
static DASHBOARD_CSS: &str = include_str!("../assets/css/dashboard.css");

/// D3.js v7 bundle.
pub const D3_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// URL prefix under which [`ASSETS`] are served.
pub const ASSET_PREFIX: &str = "/assets";

/// One embedded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub name: &'static str,
    pub content_type: &'static str,
    pub body: &'static str,
}

impl Asset {
    /// Path the page links to.
    pub fn url(&self) -> String {
        format!("{}/{}", ASSET_PREFIX, self.name)
    }
}

pub static ASSETS: &[Asset] = &[
    Asset {
        name: "line-chart.js",
        content_type: "text/javascript; charset=utf-8",
        body: LINE_CHART_JS,
    },
    Asset {
        name: "dashboard.js",
        content_type: "text/javascript; charset=utf-8",
        body: DASHBOARD_JS,
    },
    Asset {
        name: "dashboard.css",
        content_type: "text/css; charset=utf-8",
        body: DASHBOARD_CSS,
    },
];

/// Look up an asset by file name.
pub fn find(name: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_are_embedded() {
        for asset in ASSETS {
            assert!(!asset.body.is_empty(), "{} should not be empty", asset.name);
        }
        assert!(find("line-chart.js").unwrap().body.contains("renderLineChart"));
        assert!(find("dashboard.js").unwrap().body.contains("/api/dashboard"));
        assert_eq!(find("dashboard.css").unwrap().url(), "/assets/dashboard.css");
        assert!(find("missing.js").is_none());
    }
}
