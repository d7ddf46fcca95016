use std::{error::Error, io::Write, path::PathBuf, time::Duration};

use clap::Parser;
use env_logger::TimestampPrecision;
use log::{info, LevelFilter};

use rubick::prelude::*;

/// Rubik's Cube solver written in Rust
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Layout files to solve (6 lines of 9 color symbols each)
	files: Vec<PathBuf>,

	/// Solve a random scramble of this many moves
	#[arg(long)]
	scramble: Option<usize>,

	/// Use a sequence to apply on the solved cube, e.g. "U R' F"
	#[arg(short, long)]
	sequence: Option<String>,

	/// Output the solution in short notation rather than descriptions
	#[arg(short, long, default_value_t = false)]
	notation: bool,

	/// Output length of the solution
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Abort a search after expanding this many nodes
	#[arg(long)]
	max_nodes: Option<u64>,

	/// Abort a search after this many seconds
	#[arg(long)]
	timeout: Option<f64>,

	/// Don't visit the most promising successors first
	#[arg(long, default_value_t = false)]
	unordered: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Increase logging verbosity (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

/// Write a single solution in the requested format
fn write_solution(out: &mut dyn Write, solution: &Solution, args: &Args) -> std::io::Result<()> {
	if args.notation {
		writeln!(out, "{}", solution.notation())?;
	} else if solution.is_empty() {
		writeln!(out, "The cube is already solved")?;
	} else {
		write!(out, "{}", solution)?;
	}

	if args.length {
		writeln!(out, "(len={})", solution.len())?;
	}
	Ok(())
}

/// The search settings given on the command line
fn solver_config(args: &Args) -> Result<SolverConfig, String> {
	let time_limit = args
		.timeout
		.map(Duration::try_from_secs_f64)
		.transpose()
		.map_err(|e| format!("Invalid timeout: {}", e))?;

	Ok(SolverConfig {
		max_nodes: args.max_nodes,
		time_limit,
		order_successors: !args.unordered,
	})
}

fn main() -> Result<(), Box<dyn Error>> {
	#[cfg(debug_assertions)]
	std::env::set_var("RUST_BACKTRACE", "1");

	let args = Args::parse();

	env_logger::Builder::new()
		.filter_level(match args.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		})
		.format_timestamp(Some(TimestampPrecision::Millis))
		.init();

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = match &args.output {
		Some(path) => Box::new(std::fs::File::create(path)?),
		None => Box::new(std::io::stdout()),
	};

	let config = solver_config(&args)?;

	// Every cube to solve, with a name to report it by
	let mut cubes: Vec<(String, CubeState)> = vec![];

	if let Some(len) = args.scramble {
		let moves = random_sequence(len);
		let mut cube = CubeState::solved();
		cube.apply_moves(moves.iter().copied());

		writeln!(out, "Scramble: {}", format_moves(&moves))?;
		write!(out, "{}", cube.to_layout())?;
		cubes.push(("scramble".to_string(), cube));
	}

	if let Some(sequence) = &args.sequence {
		let mut cube = CubeState::solved();
		cube.apply_moves(parse_moves(sequence)?);
		cubes.push((sequence.clone(), cube));
	}

	for path in args.files.iter() {
		let name = path.display().to_string();
		let layout = Layout::read(path).map_err(|e| format!("{}: {}", name, e))?;
		let cube = CubeState::from_layout(&layout).map_err(|e| format!("{}: {}", name, e))?;
		cubes.push((name, cube));
	}

	if cubes.is_empty() {
		return Err("Nothing to solve: give layout files, --scramble or --sequence".into());
	}

	info!("Solving {} cube(s)", cubes.len());
	let states: Vec<CubeState> = cubes.iter().map(|(_, cube)| cube.clone()).collect();
	let results = solve_all(&states, &config);

	let mut failed = 0;
	for ((name, _), result) in cubes.iter().zip(results) {
		if cubes.len() > 1 {
			writeln!(out, "{}:", name)?;
		}
		match result {
			Ok(solution) => write_solution(out.as_mut(), &solution, &args)?,
			Err(e) => {
				eprintln!("{}: {}", name, e);
				failed += 1;
			}
		}
	}

	if failed > 0 {
		return Err(format!("Could not solve {} of {} cube(s)", failed, cubes.len()).into());
	}

	Ok(())
}
