use std::fmt;
use std::fs;
use std::path::Path;

use chumsky::prelude::*;
use glam::I64Vec3;
use itertools::Itertools;
use miette::{NamedSource, SourceSpan};

use crate::error::JunctionError;

/// A junction box hanging somewhere in the playground, addressed by its integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Junction {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Junction {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line (Euclidean) distance between two junctions.
    pub fn distance(self, other: Self) -> f64 {
        // Widen before subtracting, far apart coordinates overflow i64.
        (I64Vec3::from(self).as_dvec3() - I64Vec3::from(other).as_dvec3()).length()
    }
}

impl From<Junction> for I64Vec3 {
    fn from(junction: Junction) -> Self {
        I64Vec3::new(junction.x, junction.y, junction.z)
    }
}

impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Junction, extra::Err<Rich<'a, char>>> {
    let coord = one_of("+-")
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, e))
        });

    coord
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| Junction::new(x, y, z))
}

/// Parses one junction per non-empty line, keeping input order and duplicates.
pub fn parse(input: &str) -> Result<Vec<Junction>, JunctionError> {
    parse_named("input", input)
}

/// Reads and parses a junction list from disk.
#[tracing::instrument]
pub fn load(path: &Path) -> Result<Vec<Junction>, JunctionError> {
    let input = fs::read_to_string(path).map_err(|source| JunctionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_named(&path.display().to_string(), &input)
}

fn parse_named(name: &str, input: &str) -> Result<Vec<Junction>, JunctionError> {
    let parser = parser();
    let mut junctions = Vec::new();
    let mut offset = 0;

    for (number, raw) in input.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw.len();

        let text = raw.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            continue;
        }

        match parser.parse(text).into_result() {
            Ok(junction) => junctions.push(junction),
            Err(errors) => {
                let (reason, start, end) = errors
                    .first()
                    .map(|e| (e.to_string(), e.span().start, e.span().end))
                    .unwrap_or_else(|| ("invalid junction".to_string(), 0, text.len()));

                return Err(JunctionError::Parse {
                    line: number + 1,
                    text: text.to_string(),
                    reason,
                    src: NamedSource::new(name, input.to_string()),
                    span: SourceSpan::from((line_start + start, end - start)),
                });
            }
        }
    }

    tracing::debug!(junctions = junctions.len(), "parsed junctions");
    Ok(junctions)
}

/// Drops repeated coordinates, keeping the first occurrence of each junction.
pub fn unique(junctions: impl IntoIterator<Item = Junction>) -> Vec<Junction> {
    junctions.into_iter().unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn parses_one_junction_per_line_in_order() -> miette::Result<()> {
        let input = "162,817,812\n57,618,57\n906,360,560\n";
        let junctions = parse(input)?;
        assert_eq!(
            junctions,
            vec![
                Junction::new(162, 817, 812),
                Junction::new(57, 618, 57),
                Junction::new(906, 360, 560),
            ]
        );
        Ok(())
    }

    #[test]
    fn skips_blank_lines_and_tolerates_crlf() -> miette::Result<()> {
        let input = "1,2,3\r\n\r\n\n-4,+5,6\r\n";
        let junctions = parse(input)?;
        assert_eq!(
            junctions,
            vec![Junction::new(1, 2, 3), Junction::new(-4, 5, 6)]
        );
        Ok(())
    }

    #[rstest]
    #[case::padded_fields(" 1 , +2 ,3 \n")]
    #[case::space_after_comma("1, 2,3")]
    #[case::trailing_space("1,2,3 ")]
    #[case::whitespace_only_line("1,2,3\n   \n4,5,6")]
    fn rejects_whitespace_inside_a_line(#[case] input: &str) {
        assert!(matches!(parse(input), Err(JunctionError::Parse { .. })));
    }

    #[test]
    fn keeps_duplicates_until_made_unique() -> miette::Result<()> {
        let junctions = parse("1,1,1\n2,2,2\n1,1,1")?;
        assert_eq!(junctions.len(), 3);
        assert_eq!(
            unique(junctions),
            vec![Junction::new(1, 1, 1), Junction::new(2, 2, 2)]
        );
        Ok(())
    }

    #[rstest]
    #[case::too_few_fields("1,2,3\n4,5", 2)]
    #[case::too_many_fields("1,2,3,4", 1)]
    #[case::not_a_number("1,2,3\n\n7,x,9", 3)]
    #[case::empty_field("1,,3", 1)]
    #[case::overflow("1,2,99999999999999999999", 1)]
    fn rejects_malformed_lines(#[case] input: &str, #[case] expected_line: usize) {
        match parse(input) {
            Err(JunctionError::Parse { line, span, .. }) => {
                assert_eq!(line, expected_line);
                assert!(span.offset() <= input.len());
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_names_the_line() {
        let err = parse("1,2").unwrap_err();
        assert!(err.to_string().starts_with("unable to parse line 1 \"1,2\""));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("definitely/not/here/input");
        match load(path) {
            Err(JunctionError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an io error, got {other:?}"),
        }
    }

    #[test]
    fn loads_from_disk() -> miette::Result<()> {
        let path = std::env::temp_dir().join(format!("aoc2025-day-8-{}.txt", std::process::id()));
        fs::write(&path, "0,0,0\n1,0,0\n").map_err(|e| miette::miette!("{e}"))?;
        let junctions = load(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(
            junctions?,
            vec![Junction::new(0, 0, 0), Junction::new(1, 0, 0)]
        );
        Ok(())
    }

    #[test]
    fn far_apart_coordinates_do_not_overflow() {
        let low = Junction::new(i64::MIN, 0, 0);
        let high = Junction::new(i64::MAX, 0, 0);
        let distance = low.distance(high);
        assert!(distance.is_finite());
        assert_eq!(distance, 2f64.powi(64));
    }

    #[rstest]
    #[case(Junction::new(0, 0, 0), Junction::new(1, 0, 0), 1.0)]
    #[case(Junction::new(0, 0, 0), Junction::new(3, 4, 0), 5.0)]
    #[case(Junction::new(-1, -2, -2), Junction::new(0, 0, 0), 3.0)]
    fn measures_straight_line_distance(#[case] a: Junction, #[case] b: Junction, #[case] expected: f64) {
        assert_eq!(a.distance(b), expected);
        assert_eq!(b.distance(a), expected);
    }
}
