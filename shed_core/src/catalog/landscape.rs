//! Landscape props that can be placed around the building.

use serde::Serialize;

/// A drawable landscape asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NatureAsset {
    pub id: &'static str,
    pub name: &'static str,
    /// Fill colour in 3D mode
    pub color: &'static str,
    /// Vector path, in the prop's local coordinates
    pub path: &'static str,
}

pub const NATURE_ASSETS: [NatureAsset; 2] = [
    NatureAsset {
        id: "tree-1",
        name: "Pine",
        color: "#064e3b",
        path: "M0 0 L-10 20 L10 20 Z M-8 15 L-15 35 L15 35 L8 15 Z",
    },
    NatureAsset {
        id: "bush-1",
        name: "Shrub",
        color: "#166534",
        path: "M0 10 Q10 0 20 10 Q30 20 20 30 Q10 40 0 30 Q-10 20 0 10",
    },
];

/// Look up an asset by id
pub fn find_asset(id: &str) -> Option<&'static NatureAsset> {
    NATURE_ASSETS.iter().find(|a| a.id == id)
}
