//! Per-draw paint style.
//!
//! Every draw call receives its own [`PaintStyle`]; nothing carries over
//! from one path to the next.

use crate::path::DrawingPath;
use crate::tools::{BrushType, ToolKind, ToolSettings, clamp_size};
use kurbo::{Cap, Join};
use peniko::{Color, Compose};

/// Opacity applied by the marker brush.
pub const MARKER_OPACITY: f32 = 0.7;

/// Everything a surface needs to stroke or fill one path.
#[derive(Debug, Clone)]
pub struct PaintStyle {
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f64,
    pub cap: Cap,
    pub join: Join,
    /// Extra opacity multiplied into the color alpha.
    pub opacity: f32,
    /// Glow radius drawn beneath the stroke (0 = none).
    pub blur: f64,
    /// How new pixels combine with existing ones.
    pub compose: Compose,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(0, 0, 0, 255),
            width: 1.0,
            cap: Cap::Round,
            join: Join::Round,
            opacity: 1.0,
            blur: 0.0,
            compose: Compose::SrcOver,
        }
    }
}

impl PaintStyle {
    /// Style for a tool, color, width and brush variant.
    pub fn new(tool: ToolKind, color: &str, width: f64, brush: BrushType) -> Self {
        let brush = if tool.is_freehand() { brush } else { BrushType::Round };
        let mut style = Self {
            color: parse_color(color),
            width,
            compose: if tool == ToolKind::Eraser { Compose::DestOut } else { Compose::SrcOver },
            ..Self::default()
        };
        match brush {
            BrushType::Round => {}
            BrushType::Soft => style.blur = width / 2.0,
            BrushType::Pencil => style.cap = Cap::Square,
            BrushType::Marker => style.opacity = MARKER_OPACITY,
            BrushType::Airbrush => style.blur = width,
        }
        style
    }

    /// Style a committed path was drawn with.
    ///
    /// The stored size is clamped again, since imported documents may hold
    /// any value.
    pub fn for_path(path: &DrawingPath) -> Self {
        Self::new(path.tool, &path.color, clamp_size(path.size), path.effective_brush())
    }

    /// Style of the live tool settings.
    pub fn for_settings(settings: &ToolSettings) -> Self {
        Self::new(settings.tool(), settings.color(), settings.size(), settings.brush_type())
    }

    /// Solid fill in a single color.
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Color with the style opacity folded into alpha, as RGBA8.
    pub fn rgba8(&self) -> [u8; 4] {
        let rgba = self.color.to_rgba8();
        let alpha = (rgba.a as f32 * self.opacity.clamp(0.0, 1.0)).round() as u8;
        [rgba.r, rgba.g, rgba.b, alpha]
    }

    /// Whether this style removes pixels instead of painting them.
    pub fn is_erase(&self) -> bool {
        self.compose == Compose::DestOut
    }
}

impl PartialEq for PaintStyle {
    fn eq(&self, other: &Self) -> bool {
        self.rgba8() == other.rgba8()
            && self.width == other.width
            && self.cap == other.cap
            && self.join == other.join
            && self.opacity == other.opacity
            && self.blur == other.blur
            && self.compose == other.compose
    }
}

/// Parse a host color string.
///
/// Accepts CSS color syntax: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, the
/// other CSS color functions and every CSS named color. Anything else falls
/// back to black.
pub fn parse_color(color: &str) -> Color {
    match peniko::color::parse_color(&color.trim().to_ascii_lowercase()) {
        Ok(parsed) => parsed.to_alpha_color(),
        Err(e) => {
            log::warn!("Unrecognized color {color:?} ({e}), using black");
            Color::from_rgba8(0, 0, 0, 255)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn rgba(color: &str) -> [u8; 4] {
        PaintStyle::solid(parse_color(color)).rgba8()
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(rgba("#FF0000"), [255, 0, 0, 255]);
        assert_eq!(rgba("#0f8"), [0, 255, 136, 255]);
        assert_eq!(rgba("#11223344"), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_functional_and_named_colors() {
        assert_eq!(rgba("rgb(10, 20, 30)"), [10, 20, 30, 255]);
        let translucent = rgba("rgba(10,20,30,0.5)");
        assert_eq!(translucent[..3], [10, 20, 30]);
        assert!((127..=128).contains(&translucent[3]));
        assert_eq!(rgba("White"), [255, 255, 255, 255]);
        assert_eq!(rgba("transparent"), [0, 0, 0, 0]);
    }

    #[test]
    fn test_full_css_color_set() {
        assert_eq!(rgba("coral"), [255, 127, 80, 255]);
        assert_eq!(rgba("RebeccaPurple"), [102, 51, 153, 255]);
        let [r, g, b, a] = rgba("hsl(0, 100%, 50%)");
        assert!(r >= 254 && g <= 1 && b <= 1, "got {:?}", [r, g, b]);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_bad_color_is_black() {
        assert_eq!(rgba("#12"), [0, 0, 0, 255]);
        assert_eq!(rgba("chartreuse-ish"), [0, 0, 0, 255]);
        assert_eq!(rgba("#ééé"), [0, 0, 0, 255]);
    }

    #[test]
    fn test_brush_variants() {
        let soft = PaintStyle::new(ToolKind::Brush, "#000", 10.0, BrushType::Soft);
        assert_eq!(soft.blur, 5.0);
        assert_eq!(soft.cap, Cap::Round);

        let airbrush = PaintStyle::new(ToolKind::Brush, "#000", 10.0, BrushType::Airbrush);
        assert_eq!(airbrush.blur, 10.0);

        let pencil = PaintStyle::new(ToolKind::Brush, "#000", 10.0, BrushType::Pencil);
        assert_eq!(pencil.cap, Cap::Square);
        assert_eq!(pencil.blur, 0.0);

        let marker = PaintStyle::new(ToolKind::Brush, "#000000", 10.0, BrushType::Marker);
        assert_eq!(marker.opacity, MARKER_OPACITY);
        assert!((178..=179).contains(&marker.rgba8()[3]));

        let round = PaintStyle::new(ToolKind::Brush, "#000", 10.0, BrushType::Round);
        assert_eq!(round, PaintStyle { width: 10.0, ..PaintStyle::default() });
    }

    #[test]
    fn test_eraser_composes_destination_out() {
        let eraser = PaintStyle::new(ToolKind::Eraser, "#FF0000", 8.0, BrushType::Round);
        assert!(eraser.is_erase());
        let brush = PaintStyle::new(ToolKind::Brush, "#FF0000", 8.0, BrushType::Round);
        assert!(!brush.is_erase());
    }

    #[test]
    fn test_shapes_ignore_brush_variant() {
        let style = PaintStyle::new(ToolKind::Circle, "#000", 4.0, BrushType::Marker);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.blur, 0.0);
    }

    #[test]
    fn test_path_style_is_its_own() {
        let mut settings = ToolSettings::new();
        settings.set_color("#00FF00");
        settings.set_size(7.0);
        let path = DrawingPath::start(&settings, Point::ZERO);

        settings.set_color("#0000FF");
        settings.set_size(30.0);
        let style = PaintStyle::for_path(&path);
        assert_eq!(style.rgba8(), [0, 255, 0, 255]);
        assert_eq!(style.width, 7.0);
        assert_ne!(style, PaintStyle::for_settings(&settings));
    }

    #[test]
    fn test_imported_size_is_clamped() {
        let mut path = DrawingPath::start(&ToolSettings::new(), Point::ZERO);
        path.brush_type = Some(BrushType::Airbrush);
        path.size = 1500.0;
        let style = PaintStyle::for_path(&path);
        assert_eq!(style.width, 50.0);
        assert_eq!(style.blur, 50.0);
        // The record itself is untouched
        assert_eq!(path.size, 1500.0);

        path.size = f64::NAN;
        assert_eq!(PaintStyle::for_path(&path).width, 1.0);
    }
}
