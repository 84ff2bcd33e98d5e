//! Scene is a list of shapes with an optional clip window
//!
//! Scene is a plain value owned by the caller. Every operation recomputes its
//! result from scratch and returns a new value instead of mutating the scene.
use crate::{
    AssociationPolicy, ClipRect, Error, FloodFill, Grid, PixelSet, Point, RasterOptions,
    Rasterize, ScanlineFill, Shape, StackFill, Transformation, clip_line, clip_polygon,
    rasterize::polygon_outline_into, shape::closed_edges,
};
use std::{fmt, str::FromStr};

/// Tool selected in the editor
///
/// Scene only records it, the only thing it affects is the default fill engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    #[default]
    Pixel,
    Line,
    Circle,
    Ellipse,
    Bezier,
    Polyline,
    Polygon,
    StackFill,
    ScanlineFill,
    LineClip,
    PolygonClip,
    Transform,
}

impl Mode {
    const ALL: [Mode; 12] = [
        Mode::Pixel,
        Mode::Line,
        Mode::Circle,
        Mode::Ellipse,
        Mode::Bezier,
        Mode::Polyline,
        Mode::Polygon,
        Mode::StackFill,
        Mode::ScanlineFill,
        Mode::LineClip,
        Mode::PolygonClip,
        Mode::Transform,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Pixel => "pixel",
            Mode::Line => "line",
            Mode::Circle => "circle",
            Mode::Ellipse => "ellipse",
            Mode::Bezier => "bezier",
            Mode::Polyline => "polyline",
            Mode::Polygon => "polygon",
            Mode::StackFill => "stack_fill",
            Mode::ScanlineFill => "scanline_fill",
            Mode::LineClip => "line_clip",
            Mode::PolygonClip => "polygon_clip",
            Mode::Transform => "transform",
        }
    }

    /// Fill engine used when the scene is filled in this mode
    pub fn fill_engine(&self) -> Box<dyn FloodFill> {
        match self {
            Mode::ScanlineFill => Box::new(ScanlineFill),
            _ => Box::new(StackFill),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let name = text.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| Error::parse(format!("unknown mode {:?}", name), 0))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub shapes: Vec<Shape>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub clip: Option<ClipRect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: Mode,
}

impl Scene {
    pub fn new(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self {
            shapes: shapes.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_clip(self, clip: Option<ClipRect>) -> Self {
        Self { clip, ..self }
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Scene with additional shapes appended
    pub fn with_shapes(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        self.shapes.extend(shapes);
        self
    }

    /// Compose all shapes into a single pixel set
    ///
    /// With a clip window lines and polyline segments are clipped with
    /// Cohen-Sutherland and polygons with Sutherland-Hodgman. Pixels, circles,
    /// ellipses and bezier curves have no clipper and are drawn as is.
    pub fn render(&self, options: &RasterOptions) -> PixelSet {
        tracing::debug_span!("[render]", shapes = self.shapes.len()).in_scope(|| {
            let mut pixels = PixelSet::new();
            for shape in self.shapes.iter() {
                match self.clip {
                    None => shape.rasterize_into(*options, &mut pixels),
                    Some(rect) => render_clipped(shape, rect, options, &mut pixels),
                }
            }
            tracing::debug!("[render:pixels] {}", pixels.len());
            pixels
        })
    }

    /// Flood fill the rendered scene starting from `seed`
    ///
    /// Shapes are rasterized ignoring the clip window, the region containing
    /// the seed is toggled and the result replaces all shapes with pixels.
    pub fn flood_fill(
        &self,
        seed: Point,
        engine: &dyn FloodFill,
        options: &RasterOptions,
    ) -> Scene {
        tracing::debug_span!("[flood_fill]", engine = engine.name()).in_scope(|| {
            let mut pixels = PixelSet::new();
            for shape in self.shapes.iter() {
                shape.rasterize_into(*options, &mut pixels);
            }
            let filled = engine.fill(seed, &pixels, options.grid);
            Scene {
                shapes: filled.sorted().into_iter().map(Shape::Pixel).collect(),
                clip: self.clip,
                mode: self.mode,
            }
        })
    }

    /// Transform shape at `index` together with loose pixels associated with it
    ///
    /// Pivot and fixed point default to the anchor of the selected shape, and
    /// associated pixels are transformed around the same point.
    pub fn transform_shape(
        &self,
        index: usize,
        op: Transformation,
        policy: &dyn AssociationPolicy,
    ) -> Result<Scene, Error> {
        let target = self
            .shapes
            .get(index)
            .ok_or(Error::InvalidShapeIndex(index))?;
        let op = op.resolve(target.anchor());
        let _span =
            tracing::debug_span!("[transform]", kind = target.kind(), policy = policy.name())
                .entered();

        let mut moved = 0;
        let shapes = self
            .shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| match shape {
                _ if i == index => shape.transform(op),
                Shape::Pixel(point) if policy.is_associated(target, *point) => {
                    moved += 1;
                    Shape::Pixel(op.apply(*point))
                }
                _ => shape.clone(),
            })
            .collect();
        tracing::debug!("[transform:associated] {}", moved);
        Ok(Scene {
            shapes,
            clip: self.clip,
            mode: self.mode,
        })
    }

    /// Add pixel if there is no pixel at `point`, remove it otherwise
    ///
    /// Points outside of the grid leave the scene unchanged.
    pub fn toggle_pixel(&self, point: Point, grid: Grid) -> Scene {
        let mut scene = self.clone();
        if !grid.contains(point) {
            return scene;
        }
        let count = scene.shapes.len();
        scene
            .shapes
            .retain(|shape| !matches!(shape, Shape::Pixel(pixel) if *pixel == point));
        if scene.shapes.len() == count {
            scene.shapes.push(Shape::Pixel(point));
        }
        scene
    }

    /// Load scene from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(reader: impl std::io::Read) -> Result<Scene, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Save scene as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, writer: impl std::io::Write) -> Result<(), Error> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }
}

fn render_clipped(shape: &Shape, rect: ClipRect, options: &RasterOptions, out: &mut PixelSet) {
    match shape {
        Shape::Line(line) => {
            if let Some(line) = clip_line(*line, rect) {
                line.rasterize_into(*options, out);
            }
        }
        Shape::Polyline(polyline) => {
            for segment in closed_edges(&polyline.points) {
                if let Some(line) = clip_line(segment, rect) {
                    line.rasterize_into(*options, out);
                }
            }
        }
        Shape::Polygon(polygon) => {
            let clipped = clip_polygon(&polygon.points, rect);
            polygon_outline_into(&clipped, options.grid, out);
        }
        Shape::Pixel(_) | Shape::Circle(_) | Shape::Ellipse(_) | Shape::Bezier(_) => {
            shape.rasterize_into(*options, out)
        }
    }
}
