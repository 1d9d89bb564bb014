use crate::RootKind;
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

// Option handling for env-setup. Long options follow getopt rules: unique
// prefixes are accepted, parsing stops at `--` or the first positional
// argument, and none of the options takes a value. Arguments need not be
// UTF-8; option names are ASCII, so a lossy view is enough to match them.

pub const LONG_OPTIONS: &[&str] = &["benchmarks", "sniper", "sim"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionError {
    NotRecognized(String),
    NotUniquePrefix(String),
    UnexpectedArgument(String),
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::NotRecognized(opt) => write!(f, "option {opt} not recognized"),
            OptionError::NotUniquePrefix(opt) => write!(f, "option {opt} not a unique prefix"),
            OptionError::UnexpectedArgument(opt) => {
                write!(f, "option {opt} must not have an argument")
            }
        }
    }
}

impl std::error::Error for OptionError {}

/// Parse the arguments after the program name into root requests, in the
/// order they were given. An empty result means "print the status record".
pub fn parse_requests<I, S>(args: I) -> Result<Vec<RootKind>, OptionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut requests = Vec::new();
    for arg in args {
        let lossy = arg.as_ref().to_string_lossy();
        let arg: &str = &lossy;
        if arg == "--" {
            break;
        }
        if let Some(long) = arg.strip_prefix("--") {
            requests.push(parse_long(long)?);
        } else if let Some(short) = arg.strip_prefix('-').filter(|s| !s.is_empty()) {
            let first = short.chars().next().unwrap_or_default();
            return Err(OptionError::NotRecognized(format!("-{first}")));
        } else {
            break;
        }
    }
    Ok(requests)
}

fn parse_long(raw: &str) -> Result<RootKind, OptionError> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (raw, None),
    };

    let option = match_long_option(name)?;
    if value.is_some() {
        return Err(OptionError::UnexpectedArgument(format!("--{option}")));
    }
    Ok(match option {
        "benchmarks" => RootKind::Benchmarks,
        _ => RootKind::Simulator,
    })
}

fn match_long_option(name: &str) -> Result<&'static str, OptionError> {
    if let Some(exact) = LONG_OPTIONS.iter().copied().find(|opt| *opt == name) {
        return Ok(exact);
    }
    let mut matches = LONG_OPTIONS.iter().copied().filter(|opt| opt.starts_with(name));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only),
        (None, _) => Err(OptionError::NotRecognized(format!("--{name}"))),
        (Some(_), Some(_)) => Err(OptionError::NotUniquePrefix(format!("--{name}"))),
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Determine variable values, using the environment or directory names as appropriate\n \
         Usage:\n  \
         {program} [--benchmarks | --sniper | --sim ]\n \
         Returns the benchmarks, or Sniper root path. Otherwise, returns a JSON object\n \
         with the detailed information.\n"
    )
}

/// Status record printed when no option is given.
///
/// Both simulator keys carry the same value; an empty string means the
/// simulator root could not be resolved. JSON strings are UTF-8, so paths
/// with other bytes are rendered lossily here; the bare-path options print
/// them verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RootsRecord {
    #[serde(rename = "SNIPER_ROOT")]
    pub sniper_root: String,
    #[serde(rename = "GRAPHITE_ROOT")]
    pub graphite_root: String,
    #[serde(rename = "BENCHMARKS_ROOT")]
    pub benchmarks_root: String,
}

impl RootsRecord {
    pub fn new(benchmarks: &Path, simulator: Option<&Path>) -> Self {
        let simulator = simulator
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            sniper_root: simulator.clone(),
            graphite_root: simulator,
            benchmarks_root: benchmarks.to_string_lossy().into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_requests_record() {
        assert_eq!(parse_requests(Vec::<String>::new()).unwrap(), Vec::<RootKind>::new());
    }

    #[test]
    fn requests_keep_argument_order() {
        let requests = parse_requests(["--sim", "--benchmarks", "--sniper", "--sim"]).unwrap();
        assert_eq!(
            requests,
            vec![
                RootKind::Simulator,
                RootKind::Benchmarks,
                RootKind::Simulator,
                RootKind::Simulator,
            ]
        );
    }

    #[test]
    fn unique_prefixes_are_accepted() {
        assert_eq!(parse_requests(["--bench"]).unwrap(), vec![RootKind::Benchmarks]);
        assert_eq!(parse_requests(["--sn"]).unwrap(), vec![RootKind::Simulator]);
        assert_eq!(parse_requests(["--si"]).unwrap(), vec![RootKind::Simulator]);
    }

    #[test]
    fn ambiguous_prefix_is_rejected() {
        let err = parse_requests(["--s"]).unwrap_err();
        assert_eq!(err.to_string(), "option --s not a unique prefix");
    }

    #[test]
    fn unknown_options_are_rejected() {
        let err = parse_requests(["--help"]).unwrap_err();
        assert_eq!(err.to_string(), "option --help not recognized");

        let err = parse_requests(["-vx"]).unwrap_err();
        assert_eq!(err.to_string(), "option -v not recognized");
    }

    #[test]
    fn options_take_no_argument() {
        let err = parse_requests(["--bench=/tmp"]).unwrap_err();
        assert_eq!(err.to_string(), "option --benchmarks must not have an argument");
    }

    #[test]
    fn parsing_stops_at_positional_or_terminator() {
        assert_eq!(
            parse_requests(["--sim", "extra", "--bogus"]).unwrap(),
            vec![RootKind::Simulator]
        );
        assert_eq!(
            parse_requests(["--benchmarks", "--", "--bogus"]).unwrap(),
            vec![RootKind::Benchmarks]
        );
        assert_eq!(parse_requests(["-"]).unwrap(), Vec::<RootKind>::new());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_arguments_are_handled() {
        use std::os::unix::ffi::OsStrExt;

        let positional = OsStr::from_bytes(b"\xff");
        assert_eq!(
            parse_requests([OsStr::new("--benchmarks"), positional]).unwrap(),
            vec![RootKind::Benchmarks]
        );

        let option = OsStr::from_bytes(b"--sim\xff");
        let err = parse_requests([option]).unwrap_err();
        assert!(matches!(err, OptionError::NotRecognized(_)));
    }

    #[test]
    fn record_serializes_in_fixed_key_order() {
        let record = RootsRecord::new(Path::new("/srv/bench"), Some(Path::new("/srv/sniper")));
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"SNIPER_ROOT":"/srv/sniper","GRAPHITE_ROOT":"/srv/sniper","BENCHMARKS_ROOT":"/srv/bench"}"#
        );
    }

    #[test]
    fn record_blanks_missing_simulator() {
        let record = RootsRecord::new(Path::new("/srv/bench"), None);
        assert_eq!(record.sniper_root, "");
        assert_eq!(record.graphite_root, "");
        assert_eq!(record.benchmarks_root, "/srv/bench");
    }

    #[test]
    fn usage_names_program_and_options() {
        let text = usage("env-setup");
        assert!(text.contains("env-setup [--benchmarks | --sniper | --sim ]"));
    }
}
