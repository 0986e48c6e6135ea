//! Output formatting for argument maps.

use std::fmt::Write;

use crate::error::OutputError;
use crate::result::{ResultMap, write_quoted};

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// `{'utility': [('curl',)], '-s': [()]}`
    #[default]
    Tuple,
    Json,
    Yaml,
}

/// Formats an argument map in the requested output format.
///
/// `pretty` puts one key per line for tuple notation and indents JSON. YAML
/// output is always block style.
///
/// # Examples
///
/// ```
/// use argmap_core::{LimitOverrides, OutputFormat, format_result, parse_command};
///
/// let map = parse_command("curl -P 8080 host", &LimitOverrides::default()).unwrap();
/// assert_eq!(
///     format_result(&map, OutputFormat::Tuple, false).unwrap(),
///     "{'utility': [('curl',)], '-P': [('8080',)], 'operands': [('host',)]}"
/// );
/// ```
pub fn format_result(
    map: &ResultMap,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Tuple => Ok(result_to_tuples(map, pretty)),
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(map)?),
        OutputFormat::Json => Ok(serde_json::to_string(map)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(map)?),
    }
}

fn result_to_tuples(map: &ResultMap, pretty: bool) -> String {
    let mut out = String::from("{");
    let (separator, indent) = if pretty { (",\n", "  ") } else { (", ", "") };
    if pretty {
        out.push('\n');
    }

    for (idx, (key, groups)) in map.iter().enumerate() {
        if idx > 0 {
            out.push_str(separator);
        }
        out.push_str(indent);
        // Writing into a String cannot fail.
        let _ = write_quoted(&mut out, key);
        out.push_str(": [");
        for (group_idx, group) in groups.iter().enumerate() {
            if group_idx > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{group}");
        }
        out.push(']');
    }

    if pretty {
        out.push('\n');
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LimitOverrides, parse_command};

    fn sample() -> ResultMap {
        let limits = LimitOverrides::from_json(r#"{"-s": 2}"#).expect("valid limits");
        parse_command("sips -s format jpeg infile --out outfile --quiet", &limits)
            .expect("command parses")
    }

    #[test]
    fn test_format_tuple_compact() {
        let out = format_result(&sample(), OutputFormat::Tuple, false).expect("format");
        assert_eq!(
            out,
            "{'utility': [('sips',)], '-s': [('format', 'jpeg')], 'operands': [('infile',)], \
             '--out': [('outfile',)], '--quiet': [()]}"
        );
    }

    #[test]
    fn test_format_tuple_pretty() {
        let out = format_result(&sample(), OutputFormat::Tuple, true).expect("format");
        assert_eq!(
            out,
            "{\n  'utility': [('sips',)],\n  '-s': [('format', 'jpeg')],\n  \
             'operands': [('infile',)],\n  '--out': [('outfile',)],\n  '--quiet': [()]\n}"
        );
    }

    #[test]
    fn test_format_json() {
        let out = format_result(&sample(), OutputFormat::Json, false).expect("format");
        assert!(out.starts_with(r#"{"utility":[["sips"]],"-s":[["format","jpeg"]]"#));

        let pretty = format_result(&sample(), OutputFormat::Json, true).expect("format");
        assert!(pretty.contains("\"--quiet\": [\n    []\n  ]"));
        let back: ResultMap = serde_json::from_str(&pretty).expect("valid JSON");
        assert_eq!(back, sample());
    }

    #[test]
    fn test_format_yaml() {
        let out = format_result(&sample(), OutputFormat::Yaml, false).expect("format");
        assert!(out.starts_with("utility:"));
        let back: ResultMap = serde_yaml::from_str(&out).expect("valid YAML");
        assert_eq!(back, sample());
        let keys: Vec<&str> = back.keys().collect();
        assert_eq!(keys, ["utility", "-s", "operands", "--out", "--quiet"]);
    }
}
