use std::fmt::{self, Write};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawCommand, FilterDef, LineCap, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const EMPTY_STATE_FONT_SIZE_PX: f64 = 10.0;

/// Serializes frames into standalone SVG documents.
///
/// The last document is kept so hosts can embed it or write it to disk.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    #[must_use]
    pub fn take_document(&mut self) -> Option<String> {
        self.last_document.take()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.last_document = Some(frame_to_svg(frame)?);
        Ok(())
    }
}

/// Renders one validated frame to SVG markup.
pub fn frame_to_svg(frame: &RenderFrame) -> ChartResult<String> {
    frame.validate()?;
    let mut out = String::new();
    write_document(&mut out, frame)
        .map_err(|err| ChartError::InvalidData(format!("failed to write svg document: {err}")))?;
    Ok(out)
}

fn write_document(out: &mut String, frame: &RenderFrame) -> fmt::Result {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" preserveAspectRatio="none" role="{}" aria-label="{}">"#,
        escape(&frame.accessibility.role),
        escape(&frame.accessibility.label),
    )?;

    if let Some(message) = &frame.empty_state {
        write!(
            out,
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="{EMPTY_STATE_FONT_SIZE_PX}">{}</text>"#,
            f64::from(width) / 2.0,
            f64::from(height) / 2.0,
            escape(message),
        )?;
        return out.write_str("</svg>");
    }

    if !frame.defs.is_empty() {
        out.write_str("<defs>")?;
        for def in &frame.defs {
            write_filter(out, def)?;
        }
        out.write_str("</defs>")?;
    }
    for command in &frame.commands {
        write_command(out, command)?;
    }
    out.write_str("</svg>")
}

fn write_filter(out: &mut String, def: &FilterDef) -> fmt::Result {
    write!(
        out,
        r#"<filter id="{}" x="-10%" y="-10%" width="120%" height="120%"><feGaussianBlur stdDeviation="{}" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
        escape(&def.id),
        def.blur_std_deviation,
    )
}

fn write_command(out: &mut String, command: &DrawCommand) -> fmt::Result {
    match command {
        DrawCommand::Line(line) => {
            write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.color.to_hex(),
                line.stroke_width,
            )?;
            write_opacity(out, "stroke-opacity", line.color)?;
            if line.line_cap == LineCap::Round {
                out.write_str(r#" stroke-linecap="round""#)?;
            }
            write_filter_ref(out, line.filter.as_deref())?;
            out.write_str("/>")
        }
        DrawCommand::Polyline(polyline) => {
            out.write_str(r#"<polyline fill="none" points=""#)?;
            for (index, point) in polyline.points.iter().enumerate() {
                if index > 0 {
                    out.write_char(' ')?;
                }
                write!(out, "{},{}", point.x, point.y)?;
            }
            write!(
                out,
                r#"" stroke="{}" stroke-width="{}""#,
                polyline.color.to_hex(),
                polyline.stroke_width,
            )?;
            write_opacity(out, "stroke-opacity", polyline.color)?;
            write_filter_ref(out, polyline.filter.as_deref())?;
            out.write_str("/>")
        }
        DrawCommand::Circle(circle) => {
            write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                circle.cx,
                circle.cy,
                circle.radius,
                circle.fill_color.to_hex(),
            )?;
            write_opacity(out, "fill-opacity", circle.fill_color)?;
            out.write_str("/>")
        }
        DrawCommand::Rect(rect) => {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                rect.x, rect.y, rect.width, rect.height,
            )?;
            if rect.corner_radius > 0.0 {
                write!(out, r#" rx="{}""#, rect.corner_radius)?;
            }
            write!(out, r#" fill="{}""#, rect.fill_color.to_hex())?;
            write_opacity(out, "fill-opacity", rect.fill_color)?;
            out.write_str("/>")
        }
        DrawCommand::Text(text) => write_text(out, text),
        DrawCommand::Group(group) => {
            write!(out, r#"<g data-key="{}">"#, escape(&group.key))?;
            for child in &group.commands {
                write_command(out, child)?;
            }
            out.write_str("</g>")
        }
    }
}

fn write_text(out: &mut String, text: &TextPrimitive) -> fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"<text x="{}" y="{}" text-anchor="{anchor}" font-size="{}" fill="{}""#,
        text.x,
        text.y,
        text.font_size_px,
        text.color.to_hex(),
    )?;
    write_opacity(out, "fill-opacity", text.color)?;
    if text.rotation_deg != 0.0 {
        write!(
            out,
            r#" transform="rotate({} {} {})""#,
            text.rotation_deg, text.x, text.y
        )?;
    }
    write!(out, ">{}</text>", escape(&text.text))
}

fn write_opacity(out: &mut String, attribute: &str, color: Color) -> fmt::Result {
    if color.alpha < 1.0 {
        write!(out, r#" {attribute}="{}""#, color.alpha)?;
    }
    Ok(())
}

fn write_filter_ref(out: &mut String, filter: Option<&str>) -> fmt::Result {
    if let Some(id) = filter {
        write!(out, r#" filter="url(#{})""#, escape(id))?;
    }
    Ok(())
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
