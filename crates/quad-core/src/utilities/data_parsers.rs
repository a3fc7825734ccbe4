//! Data parsing helpers.
//!
//! Reads sampled data written as two whitespace-separated columns,
//! `x` then `f(x)`, one sample per line.

use crate::{
    errors::{Error, Result},
    Real,
};

/// Parse a single numeric column value.
pub fn parse_real(s: &str) -> Option<Real> {
    s.trim().parse().ok()
}

/// Parse two-column `x y` text into separate abscissa and ordinate vectors.
///
/// Blank lines and lines starting with `#` are skipped. Every other line
/// must hold exactly two numbers; the first offending line aborts the whole
/// parse, so a partially read dataset is never returned.
///
/// # Errors
/// Returns [`Error::InvalidInput`] naming the 1-based line number.
pub fn parse_columns(text: &str) -> Result<(Vec<Real>, Vec<Real>)> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(Error::InvalidInput(format!(
                "line {}: expected 2 columns, found {}",
                idx + 1,
                fields.len()
            )));
        }
        let (Some(x), Some(y)) = (parse_real(fields[0]), parse_real(fields[1])) else {
            return Err(Error::InvalidInput(format!(
                "line {}: cannot parse `{line}` as numbers",
                idx + 1
            )));
        };
        xs.push(x);
        ys.push(y);
    }
    Ok((xs, ys))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_real(" 2.5 "), Some(2.5));
        assert_eq!(parse_real("-1e-3"), Some(-0.001));
        assert_eq!(parse_real("abc"), None);
    }

    #[test]
    fn test_parse_columns() {
        let text = "# t  q\n0 10\n0.5\t12.25\n\n1.0 14\n";
        let (xs, ys) = parse_columns(text).unwrap();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
        assert_eq!(ys, vec![10.0, 12.25, 14.0]);
    }

    #[test]
    fn test_parse_columns_rejects_bad_lines() {
        let err = parse_columns("0 1\n1 2 3\n").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput("line 2: expected 2 columns, found 3".into())
        );
        assert!(matches!(
            parse_columns("0 1\n1 x\n"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(parse_columns("7\n"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_columns_empty() {
        let (xs, ys) = parse_columns("\n# nothing here\n").unwrap();
        assert!(xs.is_empty() && ys.is_empty());
    }

    proptest::proptest! {
        #[test]
        fn parsed_columns_match_formatted_pairs(
            pairs in proptest::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..20)
        ) {
            let text: String = pairs.iter().map(|(x, y)| format!("{x} {y}\n")).collect();
            let (xs, ys) = parse_columns(&text).unwrap();
            proptest::prop_assert_eq!(xs.len(), pairs.len());
            for ((x, y), (px, py)) in xs.iter().zip(&ys).zip(&pairs) {
                proptest::prop_assert_eq!(x, px);
                proptest::prop_assert_eq!(y, py);
            }
        }
    }
}
