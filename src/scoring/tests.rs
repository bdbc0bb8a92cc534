use super::*;

mod cosine_tests {
    use super::*;

    #[test]
    fn test_cosine_identical() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let zero = vec![0.0; 4];
        let v = vec![1.0, 2.0, 0.0, 3.0];
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_cosine_empty_and_mismatched() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_cosine_bounded_for_assorted_vectors() {
        let vectors: Vec<Vec<f32>> = vec![
            vec![1e-20, 3.0, -7.5],
            vec![1e6, -1e6, 0.5],
            vec![0.1, 0.1, 0.1],
            vec![-4.0, 2.0, 9.0],
            vec![3.0, 3.0, 3.0],
        ];

        for a in &vectors {
            for b in &vectors {
                let sim = cosine_similarity(a, b);
                assert!((-1.0..=1.0).contains(&sim), "{sim} out of range");
            }
        }
    }

    #[test]
    fn test_cosine_non_negative_counts_in_unit_interval() {
        let a = vec![2.0, 0.0, 1.0, 8.0];
        let b = vec![0.0, 1.0, 1.0, 5.0];
        let sim = cosine_similarity(&a, &b);
        assert!((0.0..=1.0).contains(&sim));
    }
}

mod overlap_tests {
    use super::*;

    #[test]
    fn test_overlap_identical_is_one() {
        let q = "Tell me about Thoughtful AI's Agents.";
        assert_eq!(token_overlap(q, q), 1.0);
    }

    #[test]
    fn test_overlap_case_and_punctuation_insensitive() {
        assert_eq!(token_overlap("What does EVA do?", "what does eva do"), 1.0);
    }

    #[test]
    fn test_overlap_counts_multiplicity() {
        // {the:2, cat:1} vs {the:1, cat:1}: min sum 2, max sum 3.
        let sim = token_overlap("the the cat", "the cat");
        assert!((sim - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_overlap_known_value() {
        // 4 shared tokens out of 8 distinct in the union.
        let sim = token_overlap(
            "What does EVA do?",
            "What does the eligibility verification agent (EVA) do?",
        );
        assert!((sim - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_overlap_disjoint_is_zero() {
        assert_eq!(token_overlap("alpha beta", "gamma delta"), 0.0);
    }

    #[test]
    fn test_overlap_both_empty_is_zero() {
        assert_eq!(token_overlap("", ""), 0.0);
        assert_eq!(token_overlap("  ", "?!"), 0.0);
    }

    #[test]
    fn test_overlap_one_empty_is_zero() {
        assert_eq!(token_overlap("", "payment posting"), 0.0);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let samples = [
            "What does EVA do?",
            "claims processing agent",
            "What color is the sky?",
            "the the the payment",
            "",
            "How does the payment posting agent (PHIL) work?",
        ];

        for a in samples {
            for b in samples {
                assert_eq!(token_overlap(a, b), token_overlap(b, a), "{a:?} vs {b:?}");
            }
        }
    }
}
