//! Raster graphics sandbox on a grid of discrete cells.
//!
//! Main features:
//!  - Scan conversion of lines, circles, ellipses and bezier curves
//!  - Cohen-Sutherland line and Sutherland-Hodgman polygon clipping
//!  - Stack and scanline flood fills
//!  - Affine transformations of shapes together with associated pixels
//!  - Illustrative 3D projections of wireframes
//!
#![deny(warnings)]

mod association;
mod clip;
mod color;
mod curve;
mod ellipse;
mod error;
mod fill;
mod geometry;
mod image;
mod pixels;
mod projection;
mod rasterize;
mod scene;
mod shape;
mod transform;
mod utils;

pub use association::{
    AssociationPolicy, DEFAULT_BBOX_PADDING, DEFAULT_LINE_TOLERANCE, NoAssociation,
    ProximityAssociation,
};
pub use clip::{clip_line, clip_polygon};
pub use color::{ColorError, RGBA};
pub use curve::{BezierIter, bezier_at, evaluate_bezier};
pub use ellipse::rasterize_ellipse;
pub use error::Error;
pub use fill::{FloodFill, ScanlineFill, StackFill, fill_engines};
pub use geometry::{
    BBox, ClipRect, DEFAULT_GRID_SIZE, EPSILON, Grid, PI, Point, Scalar, Transform,
};
pub use image::{Image, ImageIter, ImageMut, ImageOwned, ImageStyle, Layout};
pub use pixels::{AsciiGrid, PixelSet};
pub use projection::{
    CUBE_EDGES, Cavalier, Cube, Orthographic, Perspective, Point3, Projection, Pyramid,
    VanishingPoints, Wireframe, projections,
};
pub use rasterize::{
    DEFAULT_BEZIER_STEPS, LineIter, RasterOptions, Rasterize, line_points, rasterize_circle,
    rasterize_line,
};
pub use scene::{Mode, Scene};
pub use shape::{Bezier, Circle, Ellipse, Line, Polygon, Polyline, Shape};
pub use transform::{
    Transformation, is_inside_circle, is_inside_ellipse, is_inside_polygon, is_near_line,
    rotate_point, scale_point, translate_point,
};
