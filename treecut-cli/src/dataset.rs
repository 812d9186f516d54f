//! Loader for labelled point datasets stored as whitespace-separated text.
//!
//! The format is a vertex count `V`, a dimension `d`, then `V` records made
//! of `d` coordinates followed by a label token. Tokens may be split across
//! lines arbitrarily.
//!
//! ```text
//! 4 2
//! 0.0 0.0 a
//! 0.0 1.0 a
//! 9.0 9.0 b
//! 9.0 8.0 b
//! ```

use std::io::{self, Read};
use std::str::SplitWhitespace;

use thiserror::Error;
use tracing::{debug, instrument};
use treecut_core::{LabeledDataset, PointSet, PointSetError};

/// Errors raised while parsing a dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    /// Reading the input failed.
    #[error("failed to read dataset: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
    /// The input ended before an expected token.
    #[error("unexpected end of input while reading {expected} (token {position})")]
    MissingToken {
        /// What the parser was looking for.
        expected: &'static str,
        /// Zero-based index of the missing token.
        position: usize,
    },
    /// A token could not be parsed as a number.
    #[error("token {position} (`{token}`) is not a valid {expected}")]
    MalformedNumber {
        /// What the parser was looking for.
        expected: &'static str,
        /// The offending token.
        token: String,
        /// Zero-based index of the token.
        position: usize,
    },
    /// The header declared a dimension of zero.
    #[error("dimension must be positive")]
    NonPositiveDimension,
    /// Tokens remained after the last record.
    #[error("{count} unexpected tokens after the last record")]
    TrailingTokens {
        /// Number of extra tokens.
        count: usize,
    },
    /// The coordinates did not form a valid point set.
    #[error("invalid coordinates: {source}")]
    InvalidCoordinates {
        /// Underlying point-set error.
        #[from]
        source: PointSetError,
    },
}

/// A parsed dataset: coordinates plus ground-truth labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    name: String,
    points: PointSet,
    labels: LabeledDataset,
}

impl Dataset {
    /// Parses a dataset from `reader`.
    ///
    /// # Examples
    /// ```
    /// use treecut_cli::dataset::Dataset;
    ///
    /// let input = "3 1\n0.0 a\n1.0 a\n5.0 b\n";
    /// let dataset = Dataset::try_from_reader("demo", input.as_bytes())?;
    /// assert_eq!(dataset.len(), 3);
    /// assert_eq!(dataset.labels().label_names(), &["a", "b"]);
    /// # Ok::<(), treecut_cli::dataset::DatasetError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`DatasetError`] when reading fails or the content does not
    /// follow the format described in the module documentation.
    #[instrument(name = "cli.dataset.parse", err, skip(name, reader), fields(name = name.as_ref()))]
    pub fn try_from_reader(
        name: impl AsRef<str>,
        mut reader: impl Read,
    ) -> Result<Self, DatasetError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let mut tokens = Tokens::new(&content);
        let vertex_count: usize = tokens.parse("vertex count")?;
        let dimension: usize = tokens.parse("dimension")?;
        if dimension == 0 {
            return Err(DatasetError::NonPositiveDimension);
        }

        // Every record needs at least two tokens, so the content bounds the
        // number of records that can actually be read.
        let capacity = vertex_count.min(content.len() / 2);
        let mut rows = Vec::with_capacity(capacity);
        let mut labels = Vec::with_capacity(capacity);
        for _ in 0..vertex_count {
            let row = (0..dimension)
                .map(|_| tokens.parse::<f64>("coordinate"))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
            labels.push(tokens.next("label")?);
        }

        let remaining = tokens.remaining();
        if remaining > 0 {
            return Err(DatasetError::TrailingTokens { count: remaining });
        }

        let points = PointSet::new(rows)?;
        let labels = LabeledDataset::from_labels(labels.as_slice());
        debug!(
            vertices = vertex_count,
            dimension,
            labels = labels.label_names().len(),
            "parsed dataset"
        );
        Ok(Self {
            name: name.as_ref().to_owned(),
            points,
            labels,
        })
    }

    /// Returns the dataset name.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the coordinates.
    #[must_use]
    #[rustfmt::skip]
    pub fn points(&self) -> &PointSet { &self.points }

    /// Returns the ground-truth labels.
    #[must_use]
    #[rustfmt::skip]
    pub fn labels(&self) -> &LabeledDataset { &self.labels }

    /// Returns the number of points.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.points.len() }

    /// Returns `true` when the dataset holds no points.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// Whitespace tokenizer tracking the index of the next token.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            inner: content.split_whitespace(),
            position: 0,
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str, DatasetError> {
        let token = self.inner.next().ok_or(DatasetError::MissingToken {
            expected,
            position: self.position,
        })?;
        self.position += 1;
        Ok(token)
    }

    fn parse<T: std::str::FromStr>(&mut self, expected: &'static str) -> Result<T, DatasetError> {
        let position = self.position;
        let token = self.next(expected)?;
        token.parse().map_err(|_| DatasetError::MalformedNumber {
            expected,
            token: token.to_owned(),
            position,
        })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn parse(input: &str) -> Result<Dataset, DatasetError> {
        Dataset::try_from_reader("test", input.as_bytes())
    }

    #[test]
    fn parses_records_across_arbitrary_line_breaks() {
        let dataset = parse("3 2 0.0 0.0 a\n1.0\n1.0 b 2.0 2.0\na").expect("valid dataset");
        assert_eq!(dataset.name(), "test");
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.points().dimension(), 2);
        assert_eq!(dataset.points().point(1), Some(&[1.0, 1.0][..]));
        assert_eq!(dataset.labels().label_names(), &["a", "b"]);
        assert_eq!(dataset.labels().groups(), &[vec![0, 2], vec![1]]);
    }

    #[test]
    fn accepts_zero_vertices() {
        let dataset = parse("0 3\n").expect("empty dataset is valid");
        assert!(dataset.is_empty());
        assert!(dataset.labels().label_names().is_empty());
    }

    #[rstest]
    #[case::empty("", "vertex count", 0)]
    #[case::no_dimension("2", "dimension", 1)]
    #[case::short_record("2 2\n0.0 0.0 a\n1.0", "coordinate", 6)]
    #[case::missing_label("1 2\n0.0 0.0", "label", 4)]
    #[case::oversized_count("18446744073709551615 1\n0.0 a\n", "coordinate", 4)]
    #[case::implausible_count("1000000000000 1\n0.0 a\n", "coordinate", 4)]
    fn reports_missing_tokens(
        #[case] input: &str,
        #[case] expected_kind: &str,
        #[case] expected_position: usize,
    ) {
        match parse(input).expect_err("input is truncated") {
            DatasetError::MissingToken { expected, position } => {
                assert_eq!(expected, expected_kind);
                assert_eq!(position, expected_position);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case::vertex_count("x 2", "vertex count", "x", 0)]
    #[case::negative_dimension("1 -2", "dimension", "-2", 1)]
    #[case::coordinate("1 2\n0.0 zero a", "coordinate", "zero", 3)]
    fn reports_malformed_numbers(
        #[case] input: &str,
        #[case] expected_kind: &str,
        #[case] expected_token: &str,
        #[case] expected_position: usize,
    ) {
        match parse(input).expect_err("input is malformed") {
            DatasetError::MalformedNumber {
                expected,
                token,
                position,
            } => {
                assert_eq!(expected, expected_kind);
                assert_eq!(token, expected_token);
                assert_eq!(position, expected_position);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_dimension() {
        let err = parse("2 0 a b").expect_err("dimension zero is invalid");
        assert!(matches!(err, DatasetError::NonPositiveDimension));
    }

    #[test]
    fn rejects_trailing_tokens() {
        let err = parse("1 1\n0.0 a\nextra tokens").expect_err("trailing tokens");
        assert!(matches!(err, DatasetError::TrailingTokens { count: 2 }));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let err = parse("2 1\n0.0 a\ninf b").expect_err("infinite coordinate");
        assert!(matches!(
            err,
            DatasetError::InvalidCoordinates {
                source: PointSetError::NonFinite { index: 1, axis: 0 }
            }
        ));
    }
}
