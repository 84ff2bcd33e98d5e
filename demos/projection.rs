//! Print wireframes projected with every available projection as ASCII grids
#![deny(warnings)]

use rasterlab::*;
use std::{env, io::Write};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

#[derive(Debug)]
struct Args {
    grid: Grid,
    size: Scalar,
    pyramid: bool,
    filter: Option<String>,
}

impl Args {
    fn parse() -> Result<Args, Error> {
        let mut result = Args {
            grid: Grid(32),
            size: 12.0,
            pyramid: false,
            filter: None,
        };
        let mut args = env::args();
        let cmd = args.next().unwrap_or_default();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-g" => {
                    result.grid = args.next().ok_or("-g requires argument")?.parse()?;
                }
                "-s" => {
                    result.size = args.next().ok_or("-s requires argument")?.parse()?;
                }
                "-p" => {
                    result.pyramid = true;
                }
                "-n" => {
                    result.filter = Some(args.next().ok_or("-n requires argument")?);
                }
                _ => {
                    eprintln!("Print wireframes projected with every projection as ASCII grids");
                    eprintln!("\nUSAGE:");
                    eprintln!("    {} [-g <size>] [-s <size>] [-p] [-n <name>]", cmd);
                    eprintln!("\nARGS:");
                    eprintln!("    -g <size>          grid size in cells (default 32)");
                    eprintln!("    -s <size>          size of the wireframe (default 12)");
                    eprintln!("    -p                 project square pyramid instead of cube");
                    eprintln!("    -n <name>          only use projections containing name");
                    std::process::exit(1);
                }
            }
        }
        Ok(result)
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse()?;
    let wireframe: Box<dyn Wireframe> = if args.pyramid {
        Box::new(Pyramid::square(
            Point3::new(0.0, args.size / 2.0, 0.0),
            args.size,
            args.size,
        ))
    } else {
        Box::new(Cube {
            center: Point3::default(),
            size: args.size,
        })
    };
    // wireframes are centered at the origin, move them to the middle of the grid
    let half = args.grid.size() / 2;
    let center = Transformation::Translate { dx: half, dy: half };
    let options = RasterOptions {
        grid: args.grid,
        ..RasterOptions::default()
    };

    let mut out = std::io::stdout().lock();
    for projection in projections() {
        let name = projection.name();
        if let Some(filter) = &args.filter {
            if !name.contains(filter.as_str()) {
                continue;
            }
        }
        let span = tracing::debug_span!("[project]", projection = name.as_str());
        let shapes: Vec<Shape> = span.in_scope(|| {
            wireframe
                .project_shapes(projection.as_ref())
                .iter()
                .map(|shape| shape.transform(center))
                .collect()
        });
        let pixels = Scene::new(shapes).render(&options);
        writeln!(out, "{}:", name)?;
        write!(out, "{}", pixels.ascii(args.grid))?;
        writeln!(out)?;
    }
    Ok(())
}
