use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// Landing page content
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LandingResponse {
    pub brand: String,
    pub headline: String,
    pub tagline: String,
    pub features: Vec<Feature>,
    pub navigation: Vec<NavLink>,
}
