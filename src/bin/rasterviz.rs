//! rasterviz - rasterize a line or circle and display the result.
//!
//! Usage:
//!
//! ```text
//! rasterviz <algorithm> <args...> [--png <path>]
//!
//! rasterviz line-naive      <x0> <y0> <x1> <y1>
//! rasterviz line-dda        <x0> <y0> <x1> <y1>
//! rasterviz line-bresenham  <x0> <y0> <x1> <y1>
//! rasterviz circle-bresenham <cx> <cy> <r>
//! ```

use rasterviz::geometry::{Point, Rect};
use rasterviz::grid::OccupancyGrid;
use rasterviz::output::{PngEncoder, TerminalEncoder};
use rasterviz::raster::{bresenham_circle, bresenham_line, dda_line, naive_line};
use std::process::ExitCode;
use std::time::Instant;

const USAGE: &str = "\
usage: rasterviz <algorithm> <args...> [--png <path>]

algorithms:
  line-naive       <x0> <y0> <x1> <y1>   slope/intercept stepping
  line-dda         <x0> <y0> <x1> <y1>   digital differential analyzer
  line-bresenham   <x0> <y0> <x1> <y1>   integer error-term line
  circle-bresenham <cx> <cy> <r>         midpoint circle

options:
  --png <path>     write the grid as a grayscale PNG instead of
                   rendering to the terminal";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("rasterviz: {msg}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let png_path = take_png_option(&mut args)?;

    let (algorithm, rest) = args.split_first().ok_or("missing algorithm name")?;
    let ints = parse_ints(rest)?;

    let start = Instant::now();
    let (points, rect): (Vec<Point>, Rect) = match algorithm.as_str() {
        "line-naive" => {
            let [x0, y0, x1, y1] = line_args(&ints)?;
            (naive_line(x0, y0, x1, y1).collect(), Rect::from_endpoints(x0, y0, x1, y1))
        }
        "line-dda" => {
            let [x0, y0, x1, y1] = line_args(&ints)?;
            (dda_line(x0, y0, x1, y1).collect(), Rect::from_endpoints(x0, y0, x1, y1))
        }
        "line-bresenham" => {
            let [x0, y0, x1, y1] = line_args(&ints)?;
            (bresenham_line(x0, y0, x1, y1).collect(), Rect::from_endpoints(x0, y0, x1, y1))
        }
        "circle-bresenham" => {
            let [cx, cy, r] = circle_args(&ints)?;
            (bresenham_circle(cx, cy, r).collect(), Rect::around_center(cx, cy, r))
        }
        other => return Err(format!("unknown algorithm '{other}'")),
    };
    let elapsed = start.elapsed();
    println!("Time: {elapsed:?}");

    let grid = OccupancyGrid::from_pixels(points, rect).map_err(|e| e.to_string())?;

    if let Some(path) = png_path {
        PngEncoder::new().write_to_file(&grid, &path).map_err(|e| e.to_string())?;
        println!("wrote {path}");
    } else {
        print!("{}", TerminalEncoder::new().render(&grid));
    }

    Ok(())
}

/// Remove a trailing `--png <path>` pair from the argument list.
fn take_png_option(args: &mut Vec<String>) -> Result<Option<String>, String> {
    match args.iter().position(|a| a == "--png") {
        None => Ok(None),
        Some(idx) => {
            if idx + 1 >= args.len() {
                return Err("--png requires a path".to_string());
            }
            let path = args.remove(idx + 1);
            args.remove(idx);
            Ok(Some(path))
        }
    }
}

fn parse_ints(args: &[String]) -> Result<Vec<i32>, String> {
    args.iter()
        .map(|s| s.parse::<i32>().map_err(|_| format!("invalid integer argument '{s}'")))
        .collect()
}

fn line_args(ints: &[i32]) -> Result<[i32; 4], String> {
    <[i32; 4]>::try_from(ints)
        .map_err(|_| format!("lines take 4 integer arguments, got {}", ints.len()))
}

fn circle_args(ints: &[i32]) -> Result<[i32; 3], String> {
    let [cx, cy, r] = <[i32; 3]>::try_from(ints)
        .map_err(|_| format!("circles take 3 integer arguments, got {}", ints.len()))?;
    if r < 0 {
        return Err(format!("radius must be non-negative, got {r}"));
    }
    Ok([cx, cy, r])
}
