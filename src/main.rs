use std::collections::HashMap;
use std::env;
use std::f64::consts::FRAC_PI_2;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use workbench::collections::{fill, get_or_default, map};
use workbench::format::{Vertex, map_as_string};
use workbench::sequence::Fibonacci;
use workbench::shape::{Rectangle, Triangle, describe_polygon};
use workbench::triangle::Orientation;
use workbench::vector::Vector2D;

/// Demos for each of the workbench utilities.
#[derive(Parser)]
#[command(name = "workbench")]
#[command(about = "Runs the demo for one of the workbench utilities", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Demo,
}

#[derive(Subcommand)]
enum Demo {
    /// Draw ASCII triangles
    Triangle {
        /// Orientation to draw (right, left, up or down), defaults to all of them
        #[arg(short, long)]
        orientation: Option<Orientation>,

        /// Character used to fill the triangle
        #[arg(short, long, default_value_t = '$')]
        symbol: char,

        /// Size of the triangle, must be odd
        #[arg(short = 'n', long, default_value_t = 9)]
        size: usize,
    },
    /// Look up the current OS name and print some powers of two
    Collection,
    /// Print the start of the Fibonacci sequence
    Sequence {
        /// Number of terms to print
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
    /// Describe a couple of polygons
    Shape,
    /// Format a map of named coordinates
    Format,
    /// Run through some 2D vector operations
    Vector,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Demo::Triangle { orientation, symbol, size } => triangle_demo(orientation, symbol, size),
        Demo::Collection => {
            collection_demo();
            ExitCode::SUCCESS
        },
        Demo::Sequence { count } => {
            sequence_demo(count);
            ExitCode::SUCCESS
        },
        Demo::Shape => {
            shape_demo();
            ExitCode::SUCCESS
        },
        Demo::Format => {
            format_demo();
            ExitCode::SUCCESS
        },
        Demo::Vector => {
            vector_demo();
            ExitCode::SUCCESS
        },
    }
}

fn triangle_demo(orientation: Option<Orientation>, symbol: char, size: usize) -> ExitCode {
    let orientations = match orientation {
        Some(orientation) => vec![orientation],
        None => Orientation::ALL.to_vec(),
    };

    let (report, all_drawn) = triangle_report(&orientations, symbol, size);
    println!("{report}");
    if all_drawn { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Draws each orientation under its own heading, reporting errors in place of the triangle.
/// Returns the report and whether every triangle was drawn.
fn triangle_report(orientations: &[Orientation], symbol: char, size: usize) -> (String, bool) {
    let mut all_drawn = true;
    let sections: Vec<String> = orientations
        .iter()
        .map(|orientation| {
            let body = match orientation.draw_fn()(symbol, size) {
                Ok(triangle) => triangle,
                Err(error) => {
                    all_drawn = false;
                    format!("error: {error}")
                },
            };
            format!("{} triangle (size {size}):\n{body}", capitalize(orientation.name()))
        })
        .collect();
    (sections.join("\n\n"), all_drawn)
}

fn collection_demo() {
    let os_names = HashMap::from([("macos", "macOS"), ("linux", "Linux"), ("windows", "Windows")]);
    println!("You are running on {}", get_or_default(&os_names, env::consts::OS, env::consts::OS));

    let input = fill(8, |i| i as u32);
    for (i, value) in map(&input, |i| 1_u32 << i).into_iter().enumerate() {
        println!("2**{i} = {value}");
    }
}

fn sequence_demo(count: usize) {
    let terms: Vec<u64> = Fibonacci::new().take(count).collect();
    for term in &terms {
        println!("{term}");
    }
    if terms.len() < count {
        log::warn!(
            "only {} of {count} Fibonacci numbers fit in a u64",
            terms.len()
        );
    }
}

fn shape_demo() {
    let rect = Rectangle::new(0.0, 0.0, 10.0, 20.0);
    let triangle = Triangle::new(0.0, 0.0, 10.0, 0.0, 5.0, 8.0);

    println!("{}", describe_polygon(&rect));
    println!("{}", describe_polygon(&triangle));
}

fn format_demo() {
    let labs = HashMap::from([
        ("Bell Labs", Vertex::new(40.68433, -74.39967)),
        ("Google", Vertex::new(37.42202, -122.08408)),
    ]);
    println!("{}", map_as_string(&labs, Vertex::to_string));
}

fn vector_demo() {
    let a = Vector2D::new(3.0, 4.0);
    let b = Vector2D::new(1.0, 2.0);

    println!("a = {a}, b = {b}");
    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a . b = {:.2}", a.dot(b));
    println!("|a| = {:.2}", a.magnitude());
    println!("a normalized = {}", a.normalize());
    println!("a rotated 90 degrees = {}", a.rotate(FRAC_PI_2));
    println!("angle between a and b = {:.4} rad", a.angle(b));
    println!("a projected onto b = {}", a.project(b));
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_report_continues_after_errors() {
        let (report, all_drawn) = triangle_report(&Orientation::ALL, '*', 4);
        assert!(!all_drawn, "An even size should be reported as a failure.");
        assert_eq!(
            report.matches("error: size must be an odd number").count(),
            4,
            "Every orientation should report its own error."
        );
        assert!(report.contains("Down triangle (size 4):"));
    }

    #[test]
    fn test_triangle_report() {
        let (report, all_drawn) = triangle_report(&[Orientation::Up, Orientation::Right], '*', 3);
        assert!(all_drawn);
        assert_eq!(report, "Up triangle (size 3):\n *\n***\n\nRight triangle (size 3):\n*\n**\n*");
    }

    #[test]
    fn test_cli_parses_orientation() {
        let cli = Cli::try_parse_from(["workbench", "triangle", "-o", "left", "-n", "5"]).unwrap();
        assert!(matches!(
            cli.command,
            Demo::Triangle { orientation: Some(Orientation::Left), symbol: '$', size: 5 }
        ));
        assert!(Cli::try_parse_from(["workbench", "triangle", "-o", "sideways"]).is_err());
    }
}
