use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawCommand, FilterDef};

/// Role and label announced to assistive technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityMeta {
    pub role: String,
    pub label: String,
}

impl Default for AccessibilityMeta {
    fn default() -> Self {
        Self {
            role: "img".to_owned(),
            label: "Metric trend chart".to_owned(),
        }
    }
}

/// Per-kind primitive totals, counting group children rather than groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandCounts {
    pub lines: usize,
    pub polylines: usize,
    pub circles: usize,
    pub rects: usize,
    pub texts: usize,
    pub groups: usize,
}

/// Backend-agnostic drawing description for one sparkline render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub accessibility: AccessibilityMeta,
    pub defs: Vec<FilterDef>,
    pub commands: Vec<DrawCommand>,
    /// Set instead of commands when there is no data to chart.
    pub empty_state: Option<String>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            accessibility: AccessibilityMeta::default(),
            defs: Vec::new(),
            commands: Vec::new(),
            empty_state: None,
        }
    }

    #[must_use]
    pub fn empty_state(viewport: Viewport, message: impl Into<String>) -> Self {
        Self {
            empty_state: Some(message.into()),
            ..Self::new(viewport)
        }
    }

    #[must_use]
    pub fn with_def(mut self, def: FilterDef) -> Self {
        self.defs.push(def);
        self
    }

    #[must_use]
    pub fn with_command(mut self, command: impl Into<DrawCommand>) -> Self {
        self.commands.push(command.into());
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.empty_state.is_some() && !self.commands.is_empty() {
            return Err(ChartError::InvalidData(
                "empty-state frame must not carry draw commands".to_owned(),
            ));
        }
        for def in &self.defs {
            def.validate()?;
        }
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.empty_state.is_some()
    }

    #[must_use]
    pub fn counts(&self) -> CommandCounts {
        let mut counts = CommandCounts::default();
        tally(&self.commands, &mut counts);
        counts
    }
}

fn tally(commands: &[DrawCommand], counts: &mut CommandCounts) {
    for command in commands {
        match command {
            DrawCommand::Line(_) => counts.lines += 1,
            DrawCommand::Polyline(_) => counts.polylines += 1,
            DrawCommand::Circle(_) => counts.circles += 1,
            DrawCommand::Rect(_) => counts.rects += 1,
            DrawCommand::Text(_) => counts.texts += 1,
            DrawCommand::Group(group) => {
                counts.groups += 1;
                tally(&group.commands, counts);
            }
        }
    }
}
