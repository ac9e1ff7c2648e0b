use std::num::NonZeroUsize;

use optalign_alignment_rs::pairwise::{align, Aligner, Error, Mode};

use super::*;

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    gap: Score,
    score: Score,
    alignments: Vec<(&'a str, &'a str)>,
}

fn ensure(w: Workload<'_>) -> eyre::Result<()> {
    let result = align(&w.seq1, &w.seq2, &textbook(), w.gap, Mode::Global)?;
    ensure_well_formed(&result);
    assert_eq!(*result.score(), w.score, "{} vs {}", w.seq1, w.seq2);
    assert_eq!(rows(&result), w.alignments, "{} vs {}", w.seq1, w.seq2);
    assert!(!result.truncated());

    for pair in &result {
        assert_eq!(ungapped(pair), (w.seq1.to_owned(), w.seq2.to_owned()));
        assert_eq!(pair.rescore(&textbook(), w.gap), Some(w.score));
    }
    Ok(())
}

#[test]
fn test_textbook_score() -> eyre::Result<()> {
    let result = align(&"GATTACA", &"GCATGCU", &textbook(), -1, Mode::Global)?;
    assert_eq!(*result.score(), 0);
    assert!(result.len() > 1);
    ensure_well_formed(&result);

    for pair in &result {
        assert_eq!(ungapped(pair), ("GATTACA".to_owned(), "GCATGCU".to_owned()));
        assert_eq!(pair.rescore(&textbook(), -1), Some(0));
    }
    assert_eq!(result.reported(), &result.pairs()[..1]);
    Ok(())
}

#[test]
fn test_unique_alignment() -> eyre::Result<()> {
    let result = align(&"AA", &"AA", &Equality::new(5, -4), -10, Mode::Global)?;
    assert_eq!(*result.score(), 10);
    assert_eq!(rows(&result), vec![("AA", "AA")]);
    assert_eq!(result.best().map(|x| x.rle()), Some("2=".to_owned()));
    Ok(())
}

#[test]
fn test_workloads() -> eyre::Result<()> {
    let workloads = vec![
        // Two co-optimal cells in a 2x2 matrix: the gaps go on either side
        Workload {
            seq1: "AC",
            seq2: "CA",
            gap: -1,
            score: -1,
            alignments: vec![("-AC", "CA-"), ("AC-", "-CA")],
        },
        Workload {
            seq1: "A",
            seq2: "AA",
            gap: -1,
            score: 0,
            alignments: vec![("-A", "AA"), ("A-", "AA")],
        },
        Workload {
            seq1: "ACGT",
            seq2: "ACGT",
            gap: -1,
            score: 4,
            alignments: vec![("ACGT", "ACGT")],
        },
        // Expensive gaps favour the mismatch
        Workload {
            seq1: "ACT",
            seq2: "AGT",
            gap: -5,
            score: 1,
            alignments: vec![("ACT", "AGT")],
        },
        // Free gaps: everything ties
        Workload {
            seq1: "A",
            seq2: "C",
            gap: 0,
            score: 0,
            alignments: vec![("-A", "C-"), ("A-", "-C")],
        },
        Workload {
            seq1: "",
            seq2: "",
            gap: -1,
            score: 0,
            alignments: vec![("", "")],
        },
        Workload {
            seq1: "ACG",
            seq2: "",
            gap: -2,
            score: -6,
            alignments: vec![("ACG", "---")],
        },
        Workload {
            seq1: "",
            seq2: "TT",
            gap: -3,
            score: -6,
            alignments: vec![("--", "TT")],
        },
    ];

    for w in workloads {
        ensure(w)?;
    }
    Ok(())
}

#[test]
fn test_swapped_sequences() -> eyre::Result<()> {
    for (seq1, seq2) in [
        ("GATTACA", "GCATGCU"),
        ("ACCGT", "ACGT"),
        ("TTT", "T"),
    ] {
        let forward = align(&seq1, &seq2, &textbook(), -1, Mode::Global)?;
        let backward = align(&seq2, &seq1, &textbook(), -1, Mode::Global)?;
        assert_eq!(forward.score(), backward.score());

        let mut swapped = backward
            .iter()
            .map(|x| (x.seq2().as_str(), x.seq1().as_str()))
            .collect::<Vec<_>>();
        swapped.sort();
        assert_eq!(rows(&forward), swapped);
    }
    Ok(())
}

#[test]
fn test_substitution_matrix() -> eyre::Result<()> {
    let matrix = dna()?;
    let result = align(&"ACGTTGCA", &"AGGTCA", &matrix, -6, Mode::Global)?;
    ensure_well_formed(&result);
    for pair in &result {
        assert_eq!(pair.rescore(&matrix, -6), Some(*result.score()));
        assert_eq!(ungapped(pair), ("ACGTTGCA".to_owned(), "AGGTCA".to_owned()));
    }

    let error = align(&"ACGU", &"ACGT", &matrix, -6, Mode::Global).unwrap_err();
    assert_eq!(
        error,
        Error::MissingSymbol {
            seq1: b'U',
            seq2: b'A'
        }
    );
    Ok(())
}

#[test]
fn test_determinism() -> eyre::Result<()> {
    let aligner = Aligner::new(textbook(), -1, Mode::Global)?;
    let first = aligner.align(&"GATTACAGATTACA", &"GCATGCUGCATGCU")?;
    for _ in 0..3 {
        assert_eq!(aligner.align(&"GATTACAGATTACA", &"GCATGCUGCATGCU")?, first);
    }
    Ok(())
}

#[test]
fn test_path_cap() -> eyre::Result<()> {
    let aligner = Aligner::new(textbook(), -1, Mode::Global)?;
    let all = aligner.align(&"AAAAAA", &"AAA")?;
    assert_eq!(all.len(), 20);
    assert!(!all.truncated());

    let capped = aligner
        .with_max_paths(NonZeroUsize::new(5))
        .align(&"AAAAAA", &"AAA")?;
    assert!(*capped.truncated());
    assert_eq!(capped.len(), 5);
    ensure_well_formed(&capped);
    assert!(capped.iter().all(|x| all.pairs().contains(x)));
    Ok(())
}

#[test]
fn test_narrow_scores() -> eyre::Result<()> {
    let scorer = Equality::new(1i16, -1);
    let long = "A".repeat(4000);
    let error = align(&long.as_str(), &"A", &scorer, -10, Mode::Global).unwrap_err();
    assert_eq!(error, Error::ScoreOverflow { row: 0, col: 3277 });

    let short = "A".repeat(3000);
    let result = align(&short.as_str(), &"A", &scorer, -10, Mode::Global)?;
    assert_eq!(*result.score(), -29989);
    assert_eq!(result.len(), 3000);
    Ok(())
}
