use super::{CanvasLayerKind, DrawCommand, LayerStack};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerCommands {
    pub kind: CanvasLayerKind,
    pub commands: Vec<DrawCommand>,
}

/// Commands bucketed by paint layer while a frame is being assembled.
///
/// Builders may push in any order; `flatten` emits the canonical paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredCommands {
    pub layers: Vec<LayerCommands>,
}

impl LayeredCommands {
    #[must_use]
    pub fn from_stack(stack: LayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(|kind| LayerCommands {
                kind,
                commands: Vec::new(),
            })
            .collect();
        Self { layers }
    }

    pub fn push(&mut self, kind: CanvasLayerKind, command: impl Into<DrawCommand>) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.commands.push(command.into());
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerCommands> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn flatten(self) -> Vec<DrawCommand> {
        self.layers
            .into_iter()
            .flat_map(|layer| layer.commands)
            .collect()
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerCommands> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}

impl Default for LayeredCommands {
    fn default() -> Self {
        Self::from_stack(LayerStack::canonical())
    }
}
