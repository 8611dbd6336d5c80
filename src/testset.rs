use crate::types::{TestCase, Verdict};

const CASES: [(&str, Verdict); 5] = [
    ("The Eiffel Tower is the tallest building in Paris.", Verdict::Refutes),
    ("The Great Wall of China is visible from space.", Verdict::Refutes),
    ("The capital of Australia is Sydney.", Verdict::Refutes),
    ("The Earth is the third planet from the Sun.", Verdict::Supports),
    ("The Mona Lisa was painted by Leonardo da Vinci.", Verdict::Supports),
];

pub fn generate_testset() -> Vec<TestCase> {
    CASES.iter()
        .map(|(claim, expected)| TestCase { claim: (*claim).to_string(), expected: *expected })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testset_is_fixed_and_ordered() {
        let a = generate_testset();
        assert_eq!(a.len(), 5);
        assert_eq!(a, generate_testset());
        assert_eq!(a[2].claim, "The capital of Australia is Sydney.");
        let labels: Vec<_> = a.iter().map(|c| c.expected).collect();
        assert_eq!(labels, vec![Verdict::Refutes, Verdict::Refutes, Verdict::Refutes, Verdict::Supports, Verdict::Supports]);
    }
}
