use serde::{Deserialize, Serialize};

/// Paint layers of a sparkline, listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Axis,
    Grid,
    Series,
    Markers,
    Hover,
    Captions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    /// Axes under gridlines, data above, hover overlay and captions on top.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Axis,
                CanvasLayerKind::Grid,
                CanvasLayerKind::Series,
                CanvasLayerKind::Markers,
                CanvasLayerKind::Hover,
                CanvasLayerKind::Captions,
            ],
        }
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasLayerKind, LayerStack};

    #[test]
    fn layer_stack_keeps_hover_above_series() {
        let stack = LayerStack::canonical();
        let position = |kind: CanvasLayerKind| stack.layers.iter().position(|layer| *layer == kind);
        assert!(position(CanvasLayerKind::Series) < position(CanvasLayerKind::Markers));
        assert!(position(CanvasLayerKind::Markers) < position(CanvasLayerKind::Hover));
        assert_eq!(stack.layers.last(), Some(&CanvasLayerKind::Captions));
    }
}
