//! Plain-text integration report.
//!
//! Renders the rule, domain, interval count, fixed-point result and a
//! tab-separated table of the samples. Where the text ends up is the caller's business.

use std::fmt;

use quad_core::{
    utilities::{format_real, format_sample_row},
    Settings,
};

use crate::integrals::{sample_set::SampleSet, simpson::QuadratureResult};

/// A report over one integration.
#[derive(Debug, Clone)]
pub struct IntegrationReport<'a> {
    samples: &'a SampleSet,
    result: QuadratureResult,
    precision: usize,
}

impl<'a> IntegrationReport<'a> {
    /// Build a report using [`Settings::report_precision`] decimals.
    pub fn new(samples: &'a SampleSet, result: QuadratureResult) -> Self {
        Self {
            samples,
            result,
            precision: Settings::instance().report_precision(),
        }
    }

    /// Override the number of decimals.
    pub fn with_precision(mut self, decimals: usize) -> Self {
        self.precision = decimals;
        self
    }
}

impl fmt::Display for IntegrationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simpson's Rule Integration Results")?;
        writeln!(f, "==================================")?;
        writeln!(f, "Rule: {}", self.result.rule)?;
        writeln!(
            f,
            "Domain: [{}, {}]",
            format_real(self.samples.x_min(), self.precision),
            format_real(self.samples.x_max(), self.precision)
        )?;
        writeln!(f, "Number of intervals: {}", self.samples.interval_count())?;
        writeln!(
            f,
            "Integration result: {}",
            format_real(self.result.value, self.precision)
        )?;
        writeln!(f)?;
        writeln!(f, "Data points:")?;
        writeln!(f, "x\t\tf(x)")?;
        for (x, y) in self.samples.iter() {
            writeln!(f, "{}", format_sample_row(x, y, self.precision))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrals::simpson::integrate;

    #[test]
    fn renders_quadratic_example() {
        let s = SampleSet::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 5.0]).unwrap();
        let result = integrate(&s, None).unwrap();
        let text = IntegrationReport::new(&s, result).with_precision(2).to_string();
        let expected = "Simpson's Rule Integration Results\n\
                        ==================================\n\
                        Rule: Simpson's 1/3 Rule\n\
                        Domain: [0.00, 2.00]\n\
                        Number of intervals: 2\n\
                        Integration result: 4.67\n\
                        \n\
                        Data points:\n\
                        x\t\tf(x)\n\
                        0.00\t\t1.00\n\
                        1.00\t\t2.00\n\
                        2.00\t\t5.00\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn default_precision_comes_from_settings() {
        let s = SampleSet::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 5.0, 10.0, 17.0])
            .unwrap();
        let result = integrate(&s, None).unwrap();
        let text = IntegrationReport::new(&s, result).to_string();
        assert!(text.contains("Domain: [0.000000, 4.000000]\n"));
        assert!(text.contains("Number of intervals: 4\n"));
        assert!(text.contains("Integration result: 25.333333\n"));
        assert!(text.contains("4.000000\t\t17.000000\n"));
    }
}
