use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use simplog::SimpleLogger;
use std::str::FromStr;

use fractal_canvas::core::data::complex::Complex;
use fractal_canvas::{
    CliController, ExplorerSession, FractalKind, FractalParams, PixelGrid, PpmFilePresenter,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = get_matches();

    SimpleLogger::init_prefix_timestamp(
        matches.get_one::<String>("verbosity").map(|s| s.as_str()),
        true,
        false,
    );

    let kind = FractalKind::from_str(
        matches
            .get_one::<String>("fractal")
            .expect("fractal has a default"),
    )?;
    let width = *matches.get_one::<u32>("width").expect("width has a default");
    let height = *matches
        .get_one::<u32>("height")
        .expect("height has a default");
    let max_iterations = *matches
        .get_one::<u32>("max-iterations")
        .expect("max-iterations has a default");

    let grid = PixelGrid::new(width, height)?;
    let mut params = FractalParams::new(kind, max_iterations)?;

    if let Some(pair) = matches.get_one::<String>("julia-constant") {
        let (real, imag) = parse_pair::<f64>(pair, ',')
            .ok_or_else(|| format!("invalid julia constant '{}', expected RE,IM", pair))?;
        params = params.with_julia_constant(Complex { real, imag })?;
    }

    if let Some(scale) = matches.get_one::<f64>("mandelbox-scale") {
        params = params.with_mandelbox_scale(*scale)?;
    }

    let mut session = ExplorerSession::new(grid, params);

    if let Some(clicks) = matches.get_many::<String>("zoom-at") {
        for click in clicks {
            let (px, py) = parse_pair::<u32>(click, ',')
                .ok_or_else(|| format!("invalid zoom point '{}', expected PX,PY", click))?;
            session.zoom_in_at(px, py)?;
        }
    }

    let output = matches
        .get_one::<String>("output")
        .expect("output has a default");

    if let Some(parent) = std::path::Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut controller = CliController::new(PpmFilePresenter::new());
    controller.generate(&session)?;
    controller.write(output)?;

    Ok(())
}

fn get_matches() -> ArgMatches {
    command().get_matches()
}

fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders escape-time fractals to a PPM image")
        .arg(
            Arg::new("fractal")
                .short('f')
                .long("fractal")
                .value_parser(["mandelbrot", "julia", "burningship", "mandelbox"])
                .default_value("mandelbrot")
                .help("Which fractal to render"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_parser(value_parser!(u32))
                .default_value("800")
                .help("Image width in pixels"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_parser(value_parser!(u32))
                .default_value("600")
                .help("Image height in pixels"),
        )
        .arg(
            Arg::new("max-iterations")
                .short('i')
                .long("max-iterations")
                .value_parser(value_parser!(u32))
                .default_value("1000")
                .help("Iteration cap classifying a point as interior"),
        )
        .arg(
            Arg::new("julia-constant")
                .long("julia-constant")
                .value_name("RE,IM")
                .help("Julia seed constant (default -0.4,0.6)"),
        )
        .arg(
            Arg::new("mandelbox-scale")
                .long("mandelbox-scale")
                .value_parser(value_parser!(f64))
                .help("Mandelbox scale factor (default 2)"),
        )
        .arg(
            Arg::new("zoom-at")
                .long("zoom-at")
                .value_name("PX,PY")
                .action(ArgAction::Append)
                .help("Zoom in (factor 0.5) at a pixel; may be repeated"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("output/fractal.ppm")
                .help("Output PPM path"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .value_name("LEVEL")
                .help("Log level: error, warn, info, debug or trace"),
        )
}

fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let index = s.find(separator)?;

    match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
        (Ok(left), Ok(right)) => Some((left, right)),
        _ => None,
    }
}
