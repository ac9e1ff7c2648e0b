use optalign_alignment_rs::pairwise::{align, Aligner, Mode};

use super::*;

/// Best global score over every pair of substrings, empty ones included.
fn brute_force(seq1: &str, seq2: &str, gap: Score) -> eyre::Result<Score> {
    let aligner = Aligner::new(textbook(), gap, Mode::Global)?;
    let mut best = 0;
    for s1 in 0..seq1.len() {
        for e1 in s1 + 1..=seq1.len() {
            for s2 in 0..seq2.len() {
                for e2 in s2 + 1..=seq2.len() {
                    let result = aligner.align(&&seq1[s1..e1], &&seq2[s2..e2])?;
                    best = best.max(*result.score());
                }
            }
        }
    }
    Ok(best)
}

#[test]
fn test_flanked_substring() -> eyre::Result<()> {
    let result = align(&"xxGATTACAxx", &"yyyGATTACAzz", &textbook(), -1, Mode::Local)?;
    assert_eq!(*result.score(), 7);
    assert_eq!(rows(&result), vec![("GATTACA", "GATTACA")]);
    assert_eq!(result.reported().len(), 1);
    Ok(())
}

#[test]
fn test_maximum_score() -> eyre::Result<()> {
    for (seq1, seq2) in [
        ("ACGTTA", "CGTA"),
        ("GATTACA", "GCATGCU"),
        ("AAAA", "TTTT"),
        ("TGCA", "ATGCATG"),
    ] {
        let result = align(&seq1, &seq2, &textbook(), -1, Mode::Local)?;
        assert!(*result.score() >= 0);
        assert_eq!(*result.score(), brute_force(seq1, seq2, -1)?, "{seq1} vs {seq2}");

        ensure_well_formed(&result);
        let longest = result.iter().map(|x| x.len()).max();
        for pair in &result {
            assert_eq!(Some(pair.len()), longest);
            let (s1, s2) = ungapped(pair);
            assert!(seq1.contains(&s1), "{s1} is not a part of {seq1}");
            assert!(seq2.contains(&s2), "{s2} is not a part of {seq2}");
        }
    }
    Ok(())
}

#[test]
fn test_gapped_local() -> eyre::Result<()> {
    let result = align(&"xACGTx", &"yACTy", &Equality::new(2, -1), -1, Mode::Local)?;
    assert_eq!(*result.score(), 5);
    assert_eq!(rows(&result), vec![("ACGT", "AC-T")]);
    assert_eq!(result.best().map(|x| x.rle()), Some("2=1^1=".to_owned()));
    Ok(())
}

#[test]
fn test_longest_paths_dominate() -> eyre::Result<()> {
    // "AC" and "ACGT" vs "AC-T" both score 2, only the longer one is kept
    let result = align(&"ACGT", &"ACT", &textbook(), -1, Mode::Local)?;
    assert_eq!(*result.score(), 2);
    assert_eq!(rows(&result), vec![("ACGT", "AC-T")]);
    Ok(())
}

#[test]
fn test_repeated_entries() -> eyre::Result<()> {
    let result = align(&"zACxAC", &"yACy", &textbook(), -1, Mode::Local)?;
    assert_eq!(*result.score(), 2);
    assert_eq!(rows(&result), vec![("AC", "AC")]);
    Ok(())
}

#[test]
fn test_boundary_paths_are_gap_padded() -> eyre::Result<()> {
    // Paths that run into the first row or column are completed like global ones
    let result = align(&"xA", &"A", &textbook(), -1, Mode::Local)?;
    assert_eq!(*result.score(), 1);
    assert_eq!(rows(&result), vec![("xA", "-A")]);
    Ok(())
}

#[test]
fn test_no_similarity() -> eyre::Result<()> {
    for (seq1, seq2) in [("ACGT", ""), ("", "ACGT"), ("", ""), ("AAA", "CCC")] {
        let result = align(&seq1, &seq2, &textbook(), -1, Mode::Local)?;
        assert_eq!(*result.score(), 0);
        assert_eq!(rows(&result), vec![("", "")]);
    }
    Ok(())
}

#[test]
fn test_substitution_matrix() -> eyre::Result<()> {
    let matrix = dna()?;
    let result = align(&"TTGACGTAGG", &"CCGACCTACC", &matrix, -8, Mode::Local)?;
    ensure_well_formed(&result);
    assert!(*result.score() > 0);
    assert_eq!(result.reported().len(), result.len());
    Ok(())
}
