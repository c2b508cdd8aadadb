use serde::{Deserialize, Serialize};

/// Paint layers of a floating bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Axis,
    Bars,
}

/// Layers bottom to top: panel, grid lines, axis labels, bars.
#[must_use]
pub fn canonical_layer_order() -> [CanvasLayerKind; 4] {
    [
        CanvasLayerKind::Background,
        CanvasLayerKind::Grid,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Bars,
    ]
}
