use allpairs_engine::solver::coverage::PairCoverageMatrix;
use allpairs_engine::solver::select::find_next;
use allpairs_engine::solver::TestCase;

/// Run the select/record loop to completion.
fn generate(domains: &[usize]) -> (Vec<TestCase>, PairCoverageMatrix) {
    let mut matrix = PairCoverageMatrix::new(domains);
    let mut cases = Vec::new();
    while matrix.has_uncovered() {
        let case = find_next(&matrix);
        matrix.record(&case, cases.len() + 1);
        cases.push(case);
    }
    (cases, matrix)
}

fn values(case: &TestCase) -> Vec<usize> {
    case.values.iter().map(|v| v.unwrap()).collect()
}

#[test]
fn test_every_pair_covered() {
    for domains in [
        vec![2, 2],
        vec![3, 2, 2],
        vec![4, 3, 3, 2],
        vec![5, 5, 5, 5, 5],
        vec![6, 4, 2, 2, 2, 1],
    ] {
        let (cases, matrix) = generate(&domains);
        assert!(!cases.is_empty());
        assert!(
            matrix.iter().all(|(_, cell)| cell.count() >= 1),
            "uncovered cell left for domains {domains:?}"
        );
    }
}

#[test]
fn test_no_case_after_completion() {
    // The loop stops on the case that fills the last zero cell.
    let (cases, _) = generate(&[4, 3, 3, 2]);
    let mut matrix = PairCoverageMatrix::new(&[4, 3, 3, 2]);
    for (i, case) in cases.iter().enumerate() {
        assert!(matrix.has_uncovered(), "case {} was redundant", i + 1);
        matrix.record(case, i + 1);
    }
    assert!(!matrix.has_uncovered());
}

#[test]
fn test_five_by_five_baseline() {
    let (cases, _) = generate(&[5, 5, 5, 5, 5]);
    assert_eq!(cases.len(), 33, "case count regressed from recorded baseline");
}

#[test]
fn test_ten_by_ten_baseline() {
    // 10^10 exhaustive combinations pack into 178 cases.
    let (cases, _) = generate(&[10; 10]);
    assert_eq!(cases.len(), 178);
}

#[test]
fn test_deterministic() {
    let (first, _) = generate(&[4, 3, 3, 2, 2]);
    let (second, _) = generate(&[4, 3, 3, 2, 2]);
    assert_eq!(first, second);
}

#[test]
fn test_two_by_two_tie_break() {
    let (cases, _) = generate(&[2, 2]);
    let chosen: Vec<Vec<usize>> = cases.iter().map(values).collect();
    assert_eq!(chosen, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
}

#[test]
fn test_three_by_two_scenario() {
    let (cases, matrix) = generate(&[3, 2]);

    // With two parameters every case covers exactly one new pair.
    assert_eq!(matrix.cell_total(), 6);
    assert_eq!(cases.len(), 6);
    assert_eq!(matrix.uncovered(), 0);
    assert_eq!(matrix.iter().filter(|(_, cell)| cell.count() == 1).count(), 6);

    let chosen: Vec<Vec<usize>> = cases.iter().map(values).collect();
    assert_eq!(
        chosen,
        vec![
            vec![0, 0],
            vec![0, 1],
            vec![1, 0],
            vec![1, 1],
            vec![2, 0],
            vec![2, 1],
        ]
    );
}

#[test]
fn test_three_three_two_sequence() {
    let (cases, matrix) = generate(&[3, 3, 2]);
    let chosen: Vec<Vec<usize>> = cases.iter().map(values).collect();
    assert_eq!(
        chosen,
        vec![
            vec![0, 0, 0],
            vec![0, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 0],
            vec![2, 2, 0],
            vec![2, 0, 1],
            vec![0, 2, 1],
            vec![1, 2, 0],
            vec![2, 1, 0],
        ]
    );

    // The last two cases only complete the (B, C) column.
    assert_eq!(cases[7].needed, vec![false, false, true]);
    assert_eq!(cases[8].needed, vec![false, false, true]);
    assert_eq!(matrix.cell_cases(0, 1, 2, 2), &[5]);
}

#[test]
fn test_case_numbers_recorded_in_order() {
    let (_, matrix) = generate(&[3, 3, 2]);
    for (_, cell) in matrix.iter() {
        assert!(cell.cases().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(cell.count() as usize, cell.cases().len());
    }
}

#[test]
fn test_trivial_inputs_generate_nothing() {
    assert!(generate(&[]).0.is_empty());
    assert!(generate(&[4]).0.is_empty());
    assert!(generate(&[0, 0]).0.is_empty());
}
