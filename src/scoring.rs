use crate::types::ExperimentResults;

/// Arithmetic mean of a pass/fail sequence. An empty slice yields NaN.
pub fn pass_rate(xs: &[bool]) -> f64 {
    xs.iter().filter(|x| **x).count() as f64 / xs.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentSummary { pub baseline_correctness: f64, pub debate_correctness: f64, pub style_pass_rate: f64 }

impl ExperimentSummary {
    pub fn from_results(r: &ExperimentResults) -> Self {
        Self {
            baseline_correctness: pass_rate(&r.baseline_correctness),
            debate_correctness: pass_rate(&r.debate_correctness),
            style_pass_rate: pass_rate(&r.style_check),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_booleans() {
        assert_eq!(pass_rate(&[true, false, true, true, false]), 0.6);
        assert_eq!(pass_rate(&[false]), 0.0);
        assert_eq!(pass_rate(&[true, true]), 1.0);
    }

    #[test]
    fn empty_sequence_is_nan() {
        assert!(pass_rate(&[]).is_nan());
    }

    #[test]
    fn summary_reads_each_sequence() {
        let r = ExperimentResults {
            baseline_correctness: vec![true, false],
            debate_correctness: vec![true, true],
            style_check: vec![false, false],
            ..Default::default()
        };
        let s = ExperimentSummary::from_results(&r);
        assert_eq!((s.baseline_correctness, s.debate_correctness, s.style_pass_rate), (0.5, 1.0, 0.0));
    }
}
