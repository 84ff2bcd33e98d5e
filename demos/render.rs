//! Very simple tool that renders JSON scene to an image or ASCII grid
#![deny(warnings)]

use rasterlab::*;
use std::{
    env,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

#[derive(Debug)]
struct Args {
    input_file: String,
    output_file: String,
    options: RasterOptions,
    clip: Option<ClipRect>,
    seed: Option<Point>,
    engine: Option<String>,
    style: ImageStyle,
    ascii: bool,
    save_scene: bool,
}

impl Args {
    fn get_engine(&self, scene: &Scene) -> Result<Box<dyn FloodFill>, Error> {
        match self.engine.as_deref() {
            None => Ok(scene.mode.fill_engine()),
            Some(name) => fill_engines()
                .find(|engine| engine.name() == name)
                .ok_or_else(|| format!("unknown fill engine: {}", name).into()),
        }
    }

    fn parse() -> Result<Args, Error> {
        let mut result = Args {
            input_file: String::new(),
            output_file: String::new(),
            options: RasterOptions::default(),
            clip: None,
            seed: None,
            engine: None,
            style: ImageStyle::default(),
            ascii: false,
            save_scene: false,
        };
        let mut positional = 0;
        let mut args = env::args();
        let cmd = args.next().unwrap_or_default();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" => {
                    positional = 0;
                    break;
                }
                "-g" => {
                    result.options.grid = args.next().ok_or("-g requires argument")?.parse()?;
                }
                "-s" => {
                    let steps = args.next().ok_or("-s requires argument")?;
                    result.options.steps = steps.parse()?;
                }
                "-c" => {
                    let clip = args.next().ok_or("-c requires argument")?;
                    result.clip = Some(clip.parse()?);
                }
                "-f" => {
                    let seed = args.next().ok_or("-f requires argument")?;
                    result.seed = Some(seed.parse()?);
                }
                "-e" => {
                    result.engine = Some(args.next().ok_or("-e requires argument")?);
                }
                "-z" => {
                    let size = args.next().ok_or("-z requires argument")?;
                    result.style.cell_size = size.parse()?;
                }
                "-n" => {
                    result.style.grid_lines = None;
                }
                "-fg" => {
                    let fg = args
                        .next()
                        .ok_or("-fg requres color #rrggbb(aa) argument")?
                        .parse()?;
                    result.style.foreground = fg;
                }
                "-bg" => {
                    let bg = args
                        .next()
                        .ok_or("-bg requres color #rrggbb(aa) argument")?
                        .parse()?;
                    result.style.background = bg;
                }
                "-a" => {
                    result.ascii = true;
                }
                "-j" => {
                    result.save_scene = true;
                }
                _ => {
                    positional += 1;
                    match positional {
                        1 => result.input_file = arg,
                        2 => result.output_file = arg,
                        _ => return Err("unexpected positional argment".into()),
                    }
                }
            }
        }
        if positional < 2 {
            eprintln!("Very simple tool that renders JSON scene to an image or ASCII grid");
            eprintln!("\nUSAGE:");
            eprintln!(
                "    {} [-g <size>] [-s <steps>] [-c <clip>] [-f <seed>] [-e <engine>] [-z <cell>] [-n] [-fg <color>] [-bg <color>] [-a] [-j] <scene.json> <output>",
                cmd
            );
            eprintln!("\nARGS:");
            eprintln!("    -g <size>          grid size in cells (default 20)");
            eprintln!("    -s <steps>         number of samples along bezier curves (default 100)");
            eprintln!("    -c <clip>          clip window xmin,ymin,xmax,ymax (overrides scene)");
            eprintln!("    -f <seed>          flood fill region containing x,y before rendering");
            eprintln!("    -e <engine>        fill engine: stack or scanline (default from scene mode)");
            eprintln!("    -z <cell>          cell size in image pixels");
            eprintln!("    -n                 do not draw grid lines");
            eprintln!("    -fg <color>        filled cell color");
            eprintln!("    -bg <color>        empty cell color");
            eprintln!("    -a                 write ASCII grid instead of an image");
            eprintln!("    -j                 write resulting scene as JSON instead of an image");
            eprintln!("    <scene.json>       scene in JSON format ('-' means stdin)");
            eprintln!(
                "    <output>           image in the BMP (or PNG with `png` feature) format ('-' means stdout)"
            );
            std::process::exit(1);
        }
        Ok(result)
    }
}

/// Load scene from the file
fn scene_load(path: &str) -> Result<Scene, Error> {
    let scene = tracing::debug_span!("[parse]").in_scope(|| {
        if path != "-" {
            Scene::from_json(BufReader::new(File::open(path)?))
        } else {
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents)?;
            Scene::from_json(contents.as_bytes())
        }
    })?;
    Ok(scene)
}

fn output(path: &str) -> Result<Box<dyn Write>, Error> {
    if path != "-" {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    } else {
        Ok(Box::new(std::io::stdout()))
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse()?;
    let mut scene = scene_load(&args.input_file)?;
    tracing::debug!("[scene:shapes_count] {}", scene.shapes.len());
    if args.clip.is_some() {
        scene.clip = args.clip;
    }
    if let Some(seed) = args.seed {
        let engine = args.get_engine(&scene)?;
        scene = scene.flood_fill(seed, engine.as_ref(), &args.options);
    }

    let mut out = output(&args.output_file)?;
    if args.save_scene {
        scene.to_json(&mut out)?;
        return Ok(());
    }

    let pixels = scene.render(&args.options);
    if args.ascii {
        write!(out, "{}", pixels.ascii(args.options.grid))?;
        return Ok(());
    }

    let image = tracing::debug_span!("[image]")
        .in_scope(|| pixels.to_image(args.options.grid, &args.style));
    let save = tracing::debug_span!("[save]");
    {
        let _guard = save.enter();
        #[cfg(feature = "png")]
        if args.output_file.ends_with(".png") {
            image.write_png(out)?;
            return Ok(());
        }
        image.write_bmp(out)?;
    }

    Ok(())
}
