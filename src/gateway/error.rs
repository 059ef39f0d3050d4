//! Failure modes of an `op` invocation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
	/// The tool could not be started at all.
	#[error("failed to run `{program}`: {source}")]
	Spawn {
		program: String,
		#[source]
		source: std::io::Error,
	},

	/// The tool ran but exited non-zero.
	#[error("`{command}` exited with {}: {stderr}", describe_code(.code))]
	Exit {
		command: String,
		code: Option<i32>,
		stderr: String,
	},

	/// The tool succeeded but its output was not the JSON we expected.
	#[error("`{command}` returned malformed JSON: {source}")]
	MalformedJson {
		command: String,
		#[source]
		source: serde_json::Error,
	},
}

fn describe_code(code: &Option<i32>) -> String {
	match code {
		Some(c) => format!("status {}", c),
		None => "a signal".to_string(),
	}
}
