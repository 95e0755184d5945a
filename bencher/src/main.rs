extern crate chain;
extern crate sighash;
extern crate primitives;
extern crate logs;
#[macro_use]
extern crate log;
#[macro_use]
extern crate clap;
extern crate time;

mod midstate;

use std::process;
use clap::{App, Arg};
use time::{PreciseTime, Duration};

const DEFAULT_INPUTS: &'static [usize] = &[10, 100, 1000, 5000];

#[derive(Default)]
pub struct Benchmark {
	start: Option<PreciseTime>,
	end: Option<PreciseTime>,
	samples: Option<usize>,
}

impl Benchmark {
	pub fn start(&mut self) {
		self.start = Some(PreciseTime::now());
	}

	pub fn stop(&mut self) {
		self.end = Some(PreciseTime::now());
	}

	pub fn samples(&mut self, samples: usize) {
		self.samples = Some(samples);
	}

	fn evaluate(&self) -> Option<Duration> {
		match (self.start, self.end) {
			(Some(start), Some(end)) => Some(start.to(end)),
			_ => None,
		}
	}
}

fn decimal_mark(s: String) -> String {
	let mut result = String::new();
	let len = s.len();
	for (i, c) in s.chars().enumerate() {
		if i > 0 && (len - i) % 3 == 0 {
			result.push(',');
		}
		result.push(c);
	}
	result
}

fn nanos_per_sample(micros: i64, samples: usize) -> i64 {
	micros.saturating_mul(1000) / samples as i64
}

fn run_benchmark<F>(name: &str, f: F) where F: FnOnce(&mut Benchmark) {
	let mut benchmark = Benchmark::default();
	f(&mut benchmark);

	let duration = match benchmark.evaluate() {
		Some(duration) => duration,
		None => {
			warn!(target: "bencher", "{}: benchmark was not started and stopped", name);
			return;
		},
	};

	let micros = duration.num_microseconds().unwrap_or(i64::max_value());
	match benchmark.samples {
		Some(samples) if samples > 0 => info!(target: "bencher", "{}: {} µs total, {} ns/input",
			name,
			decimal_mark(micros.to_string()),
			decimal_mark(nanos_per_sample(micros, samples).to_string())),
		_ => info!(target: "bencher", "{}: {} µs total", name, decimal_mark(micros.to_string())),
	}
}

fn input_counts() -> Result<Vec<usize>, String> {
	let matches = App::new("bencher")
		.about("Compares cached sighash midstates against per-input rebuilds")
		.version(crate_version!())
		.arg(Arg::with_name("inputs")
			.help("Number of transaction inputs to benchmark with")
			.multiple(true))
		.get_matches();

	match matches.values_of("inputs") {
		Some(values) => values
			.map(|v| v.parse::<usize>().map_err(|_| format!("invalid input count: {}", v)))
			.collect(),
		None => Ok(DEFAULT_INPUTS.to_vec()),
	}
}

fn main() {
	logs::init("bencher=info", logs::DateAndColorLogFormatter);

	let counts = match input_counts() {
		Ok(counts) => counts,
		Err(err) => {
			error!(target: "bencher", "{}", err);
			process::exit(1);
		},
	};

	for inputs in counts {
		run_benchmark(&format!("cached midstate, {} inputs", inputs), |b| midstate::cached(b, inputs));
		run_benchmark(&format!("rebuilt per input, {} inputs", inputs), |b| midstate::rebuilt(b, inputs));
	}
}

#[cfg(test)]
mod tests {
	use super::{decimal_mark, nanos_per_sample};

	#[test]
	fn test_decimal_mark() {
		assert_eq!(decimal_mark("1234567".to_owned()), "1,234,567");
		assert_eq!(decimal_mark("123".to_owned()), "123");
	}

	#[test]
	fn test_nanos_per_sample_saturates() {
		assert_eq!(nanos_per_sample(3, 2), 1500);
		assert_eq!(nanos_per_sample(i64::max_value(), 1), i64::max_value());
	}
}
