use anyhow::{Context, Result};
use std::{fs, path::Path};
use wfd_feature_extraction::Real;

/// Loads a digitized trace from a text file, one sample per line or comma
/// separated, blank lines ignored.
pub(crate) fn load_trace_file(path: &Path) -> Result<Vec<Real>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read trace file {}", path.display()))?;
    parse_trace(&content).with_context(|| format!("cannot parse trace file {}", path.display()))
}

fn parse_trace(content: &str) -> Result<Vec<Real>> {
    content
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Real>()
                .with_context(|| format!("invalid sample value '{token}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_sample_per_line() {
        let trace = parse_trace("8000\n7999\n7321\n").expect("trace should parse");
        assert_eq!(trace, vec![8000.0, 7999.0, 7321.0]);
    }

    #[test]
    fn comma_separated_samples() {
        let trace = parse_trace("1.5, 2.5,3.0\n\n4.0\n").expect("trace should parse");
        assert_eq!(trace, vec![1.5, 2.5, 3.0, 4.0]);
    }

    #[test]
    fn malformed_samples_are_rejected() {
        assert!(parse_trace("1.0\nnot-a-number\n").is_err());
    }
}
