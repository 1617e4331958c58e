use proptest::prelude::*;
use transpose::matrix::check::first_mismatch;
use transpose::matrix::transpose::{transpose_in_place, transpose_into};
use transpose::threaded::transpose_mt::transpose_multi;
use transpose::{
    DEFAULT_SEED, Matrix, generate_matrix, is_transpose_of, partition_rows, transpose,
    transpose_parallel,
};

fn reference_transpose(m: &Matrix) -> Matrix {
    let n = m.dim();
    let mut dst = vec![0; n * n];
    transpose_into(m.as_slice(), &mut dst, n, n);
    Matrix::from_vec(n, dst).unwrap()
}

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(expected.dim(), actual.dim(), "{}: dimension mismatch", name);
    let n = expected.dim();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(
                expected.get(i, j),
                actual.get(i, j),
                "{}: mismatch at ({}, {})",
                name,
                i,
                j
            );
        }
    }
}

// ============================================================
// Known-answer scenarios
// ============================================================

#[test]
fn test_4x4_two_threads() {
    let orig = Matrix::from_rows(&[
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
        vec![13, 14, 15, 16],
    ])
    .unwrap();

    assert_eq!(partition_rows(4, 2), vec![0..2, 2..4]);

    let mut single = orig.clone();
    let mut multi = orig.clone();
    transpose_in_place(&mut single);
    transpose_multi(&mut multi, 2).unwrap();

    let expected = Matrix::from_rows(&[
        vec![1, 5, 9, 13],
        vec![2, 6, 10, 14],
        vec![3, 7, 11, 15],
        vec![4, 8, 12, 16],
    ])
    .unwrap();

    assert_matrices_equal(&expected, &single, "4x4 single");
    assert_matrices_equal(&single, &multi, "4x4 two threads");
    assert!(is_transpose_of(&orig, &single));
    assert!(is_transpose_of(&orig, &multi));
}

#[test]
fn test_1x1_is_noop() {
    let orig = Matrix::from_rows(&[vec![7]]).unwrap();

    let mut single = orig.clone();
    transpose(&mut single);
    assert_eq!(single, orig);

    let mut multi = orig.clone();
    transpose_multi(&mut multi, 4).unwrap();
    assert_eq!(multi, orig);

    assert!(is_transpose_of(&orig, &single));
}

#[test]
fn test_empty_matrix() {
    let mut m = generate_matrix(0, DEFAULT_SEED);
    transpose(&mut m);
    transpose_parallel(&mut m, 8).unwrap();
    assert!(m.is_empty());
}

// ============================================================
// Thread count edge cases
// ============================================================

#[test]
fn test_odd_sizes_many_thread_counts() {
    let test_sizes = [2, 3, 5, 7, 11, 13, 31, 63, 100];

    for n in test_sizes {
        let orig = generate_matrix(n, DEFAULT_SEED);
        let expected = reference_transpose(&orig);

        for threads in [1, 2, 3, 4, 8, 16, 32, 64, 128] {
            let mut m = orig.clone();
            transpose_parallel(&mut m, threads).unwrap();
            assert_matrices_equal(&expected, &m, &format!("n={}_threads={}", n, threads));
        }
    }
}

#[test]
fn test_zero_threads_rejected() {
    let mut m = generate_matrix(8, DEFAULT_SEED);
    assert!(transpose_parallel(&mut m, 0).is_err());
}

#[test]
fn test_single_thread_via_multi_path() {
    let orig = generate_matrix(37, DEFAULT_SEED);
    let mut via_multi = orig.clone();
    transpose_multi(&mut via_multi, 1).unwrap();
    assert_matrices_equal(&reference_transpose(&orig), &via_multi, "multi_t1");
}

// ============================================================
// Larger matrix, the kind the benchmark actually runs
// ============================================================

#[test]
fn test_parallel_matches_single_threaded_large() {
    let n = 1000;
    let orig = generate_matrix(n, DEFAULT_SEED);

    let mut single = orig.clone();
    transpose(&mut single);

    for threads in [4, 8, 16] {
        let mut multi = orig.clone();
        transpose_parallel(&mut multi, threads).unwrap();
        assert_eq!(single, multi, "threads={}", threads);
    }
    assert_eq!(first_mismatch(&orig, &single), None);
}

#[test]
fn test_generator_is_deterministic() {
    assert_eq!(generate_matrix(200, DEFAULT_SEED), generate_matrix(200, DEFAULT_SEED));
}

// ============================================================
// Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_partitions_cover_rows(n in 0usize..2000, threads in 1usize..200) {
        let parts = partition_rows(n, threads);
        prop_assert_eq!(parts.len(), threads);

        let mut next = 0;
        for p in &parts {
            prop_assert_eq!(p.start, next);
            prop_assert!(p.start <= p.end);
            next = p.end;
        }
        prop_assert_eq!(next, n);
        prop_assert_eq!(parts.iter().map(|p| p.len()).sum::<usize>(), n);
    }

    #[test]
    fn prop_partitions_balanced(n in 0usize..2000, threads in 1usize..200) {
        let sizes: Vec<usize> = partition_rows(n, threads).iter().map(|p| p.len()).collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(max - min <= 1);
    }

    #[test]
    fn prop_transpose_relation(n in 0usize..48, threads in 1usize..20, seed in any::<u64>()) {
        let orig = generate_matrix(n, seed);
        let mut m = orig.clone();
        transpose_parallel(&mut m, threads).unwrap();
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(m.get(j, i), orig.get(i, j));
            }
        }
        prop_assert!(is_transpose_of(&orig, &m));
    }

    #[test]
    fn prop_involution(n in 0usize..48, threads in 1usize..20, seed in any::<u64>()) {
        let orig = generate_matrix(n, seed);
        let mut m = orig.clone();
        transpose_parallel(&mut m, threads).unwrap();
        transpose_parallel(&mut m, threads).unwrap();
        prop_assert_eq!(m, orig);
    }
}
