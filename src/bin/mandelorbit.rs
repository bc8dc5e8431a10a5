extern crate clap;
extern crate mandelorbit;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelorbit::{segments, trace, Controls, Renderer};
use num::Complex;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const WIDTH: &str = "width";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const SEED: &str = "seed";
const BUDGET: &str = "budget";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandelorbit")
        .version("0.1.0")
        .about("Escape-time raster with an orbit overlay trace")
        .arg(
            Arg::with_name(WIDTH)
                .required(false)
                .long(WIDTH)
                .short("w")
                .takes_value(true)
                .default_value("1500")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        20_000,
                        "Could not parse image width",
                        "Image width must be between 1 and 20000",
                    )
                })
                .help("Width of the image in pixels; height follows the aspect ratio"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .default_value("-2,-1")
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the complex region"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .default_value("1,1")
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the complex region"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("0")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        512,
                        "Could not parse thread count",
                        "Thread count must be between 0 and 512",
                    )
                })
                .help("Number of render workers; 0 means one per core"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("200")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Escape iteration limit for the background raster"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .short("s")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<i64>(&s, ',', "Could not parse seed point"))
                .help("Seed screen point for the orbit trace; defaults to the canvas center"),
        )
        .arg(
            Arg::with_name(BUDGET)
                .required(false)
                .long(BUDGET)
                .short("b")
                .takes_value(true)
                .default_value("25")
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        100,
                        "Could not parse orbit budget",
                        "Orbit budget must be between 0 and 100",
                    )
                })
                .help("Iteration budget for the orbit trace"),
        )
        .get_matches()
}

fn main() {
    let matches = args();
    let width =
        usize::from_str(matches.value_of(WIDTH).unwrap()).expect("Could not parse image width.");
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap())
        .expect("Error parsing left lower point");
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap())
        .expect("Error parsing right upper point");
    let iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count.");
    let threads = if threads == 0 { num_cpus::get() } else { threads };
    let budget =
        usize::from_str(matches.value_of(BUDGET).unwrap()).expect("Could not parse orbit budget.");

    let renderer = match Renderer::new(width, leftlower, rightupper, iterations) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(renderer) => renderer,
    };

    let buffer = renderer.render(threads);
    println!(
        "rendered {}x{} ({} iterations, {} threads)",
        buffer.width(),
        buffer.height(),
        iterations,
        threads
    );

    let mut controls = Controls::centered(&renderer.plane);
    controls.set_budget(budget);
    if let Some(s) = matches.value_of(SEED) {
        let (x, y) = parse_pair::<i64>(s, ',').expect("Error parsing seed point");
        controls.set_seed(x, y);
    }

    let points = trace(controls.seed(), controls.budget(), &renderer.plane);
    let segs = segments(&points);
    println!(
        "orbit from ({},{}): {} points, {} segments",
        controls.seed().0,
        controls.seed().1,
        points.len(),
        segs.len()
    );
    for seg in &segs {
        println!(
            "#{:02x}0000 ({},{}) -> ({},{})",
            seg.color[0], seg.start.x, seg.start.y, seg.end.x, seg.end.y
        );
    }
}
