//! SVG assembly for badges.

use quick_xml::escape::{escape, minimal_escape};

use super::layout::{BadgeLayout, HEIGHT, ICON_WIDTH, ICON_X, ICON_Y};
use super::logo::MODRINTH_LOGO_HREF;
use super::BadgeRequest;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const LABEL_BACKGROUND: &str = "#000000";
pub const CONTENT_BACKGROUND: &str = "#1bd96a";
pub const FONT_FAMILY: &str = "Verdana,Geneva,DejaVu Sans,sans-serif";
pub const FONT_SIZE: &str = "110";
pub const CORNER_RADIUS: &str = "3";

/// Minimal streaming SVG writer.
///
/// Attribute values are fully XML-escaped. Text only has `<` and `&` escaped
/// (plus the `>` of a `]]>` run), so quotes and `>` pass through untouched.
/// Numbers are written with no fractional digits.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    buf: String,
}

/// An element whose start tag is still being written.
#[must_use = "an element must be finished with `open` or `empty`"]
pub struct Element<'a> {
    buf: &'a mut String,
}

impl SvgBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Begin a start tag for `name`.
    pub fn element(&mut self, name: &str) -> Element<'_> {
        self.buf.push('<');
        self.buf.push_str(name);
        Element { buf: &mut self.buf }
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        let escaped = minimal_escape(text);
        if escaped.contains("]]>") {
            self.buf.push_str(&escaped.replace("]]>", "]]&gt;"));
        } else {
            self.buf.push_str(&escaped);
        }
        self
    }

    pub fn close(&mut self, name: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push('>');
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl Element<'_> {
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&escape(value));
        self.buf.push('"');
        self
    }

    pub fn num(self, name: &str, value: f64) -> Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str(&format!("=\"{value:.0}\""));
        self
    }

    /// Finish as `<name ...>`; the caller closes it.
    pub fn open(self) {
        self.buf.push('>');
    }

    /// Finish as `<name .../>`.
    pub fn empty(self) {
        self.buf.push_str("/>");
    }
}

/// Write the complete badge document for `request` laid out as `layout`.
pub fn render_document(request: &BadgeRequest, layout: &BadgeLayout) -> String {
    let title = request.title();
    let mut svg = SvgBuilder::with_capacity(if layout.logo { 4096 } else { 1024 });

    svg.element("svg")
        .attr("xmlns", SVG_NAMESPACE)
        .num("width", layout.total_width)
        .num("height", HEIGHT)
        .attr("role", "img")
        .attr("aria-label", &title)
        .open();
    svg.element("title").open();
    svg.text(&title).close("title");

    // glossy overlay + rounded corners
    svg.element("linearGradient")
        .attr("id", "s")
        .attr("x2", "0")
        .attr("y2", "100%")
        .open();
    svg.element("stop")
        .attr("offset", "0")
        .attr("stop-color", "#bbb")
        .attr("stop-opacity", ".1")
        .empty();
    svg.element("stop")
        .attr("offset", "1")
        .attr("stop-opacity", ".1")
        .empty();
    svg.close("linearGradient");

    svg.element("clipPath").attr("id", "r").open();
    svg.element("rect")
        .num("width", layout.total_width)
        .num("height", HEIGHT)
        .attr("rx", CORNER_RADIUS)
        .attr("fill", "#fff")
        .empty();
    svg.close("clipPath");

    svg.element("g").attr("clip-path", "url(#r)").open();
    if layout.left_width > 0.0 {
        svg.element("rect")
            .num("width", layout.left_width)
            .num("height", HEIGHT)
            .attr("fill", LABEL_BACKGROUND)
            .empty();
    }
    if layout.content_x.is_some() {
        svg.element("rect")
            .num("x", layout.left_width)
            .num("width", layout.right_width)
            .num("height", HEIGHT)
            .attr("fill", CONTENT_BACKGROUND)
            .empty();
    }
    svg.element("rect")
        .num("width", layout.total_width)
        .num("height", HEIGHT)
        .attr("fill", "url(#s)")
        .empty();
    svg.close("g");

    svg.element("g")
        .attr("fill", "#fff")
        .attr("text-anchor", "middle")
        .attr("font-family", FONT_FAMILY)
        .attr("text-rendering", "geometricPrecision")
        .attr("font-size", FONT_SIZE)
        .open();

    if layout.logo {
        svg.element("image")
            .num("x", ICON_X)
            .num("y", ICON_Y)
            .num("width", ICON_WIDTH)
            .num("height", ICON_WIDTH)
            .attr("href", &MODRINTH_LOGO_HREF)
            .empty();
    }
    if let Some(x) = layout.label_x {
        write_text_pair(&mut svg, x, layout.label_text_width, &request.label);
    }
    if let Some(x) = layout.content_x {
        write_text_pair(&mut svg, x, layout.content_text_width, &request.content);
    }

    svg.close("g").close("svg");
    svg.finish()
}

/// Drop shadow followed by the visible run, both pinned to `text_length`.
fn write_text_pair(svg: &mut SvgBuilder, x: f64, text_length: f64, text: &str) {
    svg.element("text")
        .attr("aria-hidden", "true")
        .num("x", x)
        .attr("y", "150")
        .attr("fill", "#010101")
        .attr("fill-opacity", ".3")
        .attr("transform", "scale(.1)")
        .num("textLength", text_length)
        .open();
    svg.text(text).close("text");

    svg.element("text")
        .num("x", x)
        .attr("y", "140")
        .attr("transform", "scale(.1)")
        .attr("fill", "#fff")
        .num("textLength", text_length)
        .open();
    svg.text(text).close("text");
}
