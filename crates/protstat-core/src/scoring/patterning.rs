use super::ScoringError;
use crate::models::group::Group;
use crate::models::sequence::Sequence;

/// Extra points awarded when a target residue is flanked on both sides and
/// `bonus_hug` is set.
const HUG_BONUS: i64 = 5;

/// Scores how well residues from `target` are flanked by residues from
/// `flanker`, normalized by the theoretical maximum for the sequence length
/// (see [`flanking_score_max`]).
///
/// Each target residue earns 1 point per single-side flanker neighbor; a
/// target flanked on both sides earns `1 + bonus` where the bonus is 5 when
/// `bonus_hug` is set and 1 otherwise (6 vs 2 points for a full hug). The
/// first and last positions only have one neighbor to check.
///
/// The normalized result is not guaranteed to stay below 1.0: when `target`
/// and `flanker` overlap, dense layouts can out-score the theoretical
/// maximum, which assumes alternating targets and flankers.
///
/// Fails with [`ScoringError::SequenceTooShort`] for sequences shorter than
/// 2 residues, where no flanking relation exists.
pub fn flanking_score(
    seq: &Sequence,
    target: Group,
    flanker: Group,
    bonus_hug: bool,
) -> Result<f64, ScoringError> {
    let max = flanking_score_max(seq.len(), bonus_hug)?;
    let bonus = if bonus_hug { HUG_BONUS } else { 1 };
    let residues = seq.residues();

    let mut score = 0i64;
    for (i, &aa) in residues.iter().enumerate() {
        if !target.contains(aa) {
            continue;
        }
        let left = i > 0 && flanker.contains(residues[i - 1]);
        let right = i + 1 < residues.len() && flanker.contains(residues[i + 1]);
        if left && right {
            score += 1 + bonus;
        } else if left || right {
            score += 1;
        }
    }

    Ok(score as f64 / max as f64)
}

/// The theoretical maximum flanking score for a sequence of `len` residues.
/// Depends only on the length and the `bonus_hug` flag, never on sequence
/// content.
///
/// With multiplier m = 6 if `bonus_hug` else 2 (integer division throughout):
/// even lengths give `(len/2 - 1) * m + 1`, odd lengths give `(len/2) * m`.
pub fn flanking_score_max(len: usize, bonus_hug: bool) -> Result<i64, ScoringError> {
    if len < 2 {
        return Err(ScoringError::SequenceTooShort { minimum: 2 });
    }
    let half = (len / 2) as i64;
    let multiplier: i64 = if bonus_hug { 6 } else { 2 };
    Ok(if len % 2 == 0 {
        (half - 1) * multiplier + 1
    } else {
        half * multiplier
    })
}

/// The largest index distance between two occurrences of `group` members,
/// minus 1 (so adjacent occurrences yield 0).
///
/// With `non_delin = false` the reference point advances to the most recent
/// occurrence, measuring the largest gap between consecutive occurrences.
/// With `non_delin = true` the reference point stays at the first occurrence,
/// measuring the overall span irrespective of intermediate matches.
///
/// Returns `None` when the group occurs fewer than twice.
pub fn max_residue_separation(seq: &Sequence, group: Group, non_delin: bool) -> Option<usize> {
    let mut anchor: Option<usize> = None;
    let mut best = 0usize;
    let mut occurrences = 0usize;

    for (i, &aa) in seq.iter().enumerate() {
        if !group.contains(aa) {
            continue;
        }
        occurrences += 1;
        match anchor {
            None => anchor = Some(i),
            Some(a) => {
                if i - a > best {
                    best = i - a;
                }
                if !non_delin {
                    anchor = Some(i);
                }
            }
        }
    }

    if occurrences < 2 { None } else { Some(best - 1) }
}

/// Counts alternations between `group1` and `group2` along the sequence.
///
/// Starting from the first residue belonging to either group, every residue
/// from the currently expected group flips the expectation and increments the
/// count. Residues belonging to neither group are skipped without resetting
/// the alternation. Returns 0 when neither group occurs.
pub fn patterning_switch_count(seq: &Sequence, group1: Group, group2: Group) -> usize {
    let residues = seq.residues();
    let Some(start) = residues
        .iter()
        .position(|&aa| group1.contains(aa) || group2.contains(aa))
    else {
        return 0;
    };

    // group1 takes precedence when the first residue belongs to both
    let (mut expected, mut other) = if group1.contains(residues[start]) {
        (group2, group1)
    } else {
        (group1, group2)
    };

    let mut switches = 0;
    for &aa in &residues[start + 1..] {
        if expected.contains(aa) {
            switches += 1;
            std::mem::swap(&mut expected, &mut other);
        }
    }
    switches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::groups::{NEGATIVE, POSITIVE};

    fn seq(s: &str) -> Sequence {
        Sequence::parse(s).unwrap()
    }

    fn group(s: &str) -> Group {
        s.parse().unwrap()
    }

    #[test]
    fn flanking_score_max_follows_the_even_length_formula() {
        assert_eq!(flanking_score_max(4, true).unwrap(), 7); // (2-1)*6 + 1
        assert_eq!(flanking_score_max(4, false).unwrap(), 3); // (2-1)*2 + 1
        assert_eq!(flanking_score_max(10, true).unwrap(), 25);
        assert_eq!(flanking_score_max(10, false).unwrap(), 9);
    }

    #[test]
    fn flanking_score_max_follows_the_odd_length_formula() {
        assert_eq!(flanking_score_max(5, true).unwrap(), 12); // 2*6
        assert_eq!(flanking_score_max(5, false).unwrap(), 4); // 2*2
        assert_eq!(flanking_score_max(11, true).unwrap(), 30);
        assert_eq!(flanking_score_max(11, false).unwrap(), 10);
    }

    #[test]
    fn flanking_score_max_ignores_sequence_content() {
        // every length-5 sequence shares one maximum
        for input in ["GGGGG", "ACACA", "KDKDK"] {
            let s = seq(input);
            assert_eq!(flanking_score_max(s.len(), true).unwrap(), 12);
        }
    }

    #[test]
    fn flanking_score_max_rejects_degenerate_lengths() {
        assert_eq!(
            flanking_score_max(0, true),
            Err(ScoringError::SequenceTooShort { minimum: 2 })
        );
        assert_eq!(
            flanking_score_max(1, false),
            Err(ScoringError::SequenceTooShort { minimum: 2 })
        );
    }

    #[test]
    fn fully_hugged_target_scores_six_points_with_bonus() {
        // CAC: the single A is flanked on both sides; max for length 3 is 6.
        let score = flanking_score(&seq("CAC"), group("A"), group("C"), true).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fully_hugged_target_scores_two_points_without_bonus() {
        // max for odd length 3 without bonus is 2, so CAC is again perfect
        let score = flanking_score(&seq("CAC"), group("A"), group("C"), false).unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn first_and_last_positions_check_only_their_single_neighbor() {
        // A at position 0 sees only its right neighbor: 1 point of max 1.
        let score = flanking_score(&seq("AC"), group("A"), group("C"), true).unwrap();
        assert!((score - 1.0).abs() < 1e-9);

        // A at the last position sees only its left neighbor.
        let score = flanking_score(&seq("CA"), group("A"), group("C"), true).unwrap();
        assert!((score - 1.0).abs() < 1e-9);

        // GGA: last-position A with a non-flanker neighbor scores nothing.
        let score = flanking_score(&seq("GGA"), group("A"), group("C"), true).unwrap();
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn unflanked_targets_score_zero() {
        let score = flanking_score(&seq("GAGAG"), group("A"), group("C"), true).unwrap();
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn overlapping_target_and_flanker_can_exceed_one() {
        // AAAA with target == flanker: 1 + 6 + 6 + 1 = 14 over a maximum of 7.
        let score = flanking_score(&seq("AAAA"), group("A"), group("A"), true).unwrap();
        assert!((score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn flanking_score_rejects_sequences_shorter_than_two() {
        assert_eq!(
            flanking_score(&seq("A"), group("A"), group("C"), true),
            Err(ScoringError::SequenceTooShort { minimum: 2 })
        );
    }

    #[test]
    fn separation_with_advancing_anchor_measures_consecutive_gaps() {
        assert_eq!(
            max_residue_separation(&seq("AGGGA"), group("A"), false),
            Some(3)
        );
        // gaps between consecutive As: 4, 2, 3 -> 4, minus 1
        assert_eq!(
            max_residue_separation(&seq("AGGGAGAGGAGG"), group("A"), false),
            Some(3)
        );
    }

    #[test]
    fn separation_with_fixed_anchor_measures_the_overall_span() {
        // first A at 0, last A at 9 -> 9, minus 1
        assert_eq!(
            max_residue_separation(&seq("AGGGAGAGGAGG"), group("A"), true),
            Some(8)
        );
    }

    #[test]
    fn adjacent_occurrences_yield_zero_separation() {
        assert_eq!(
            max_residue_separation(&seq("AAG"), group("A"), false),
            Some(0)
        );
        assert_eq!(
            max_residue_separation(&seq("GAA"), group("A"), true),
            Some(0)
        );
    }

    #[test]
    fn separation_is_undefined_below_two_occurrences() {
        assert_eq!(max_residue_separation(&seq("AGGG"), group("A"), false), None);
        assert_eq!(max_residue_separation(&seq("GGGG"), group("A"), true), None);
        assert_eq!(max_residue_separation(&seq(""), group("A"), false), None);
    }

    #[test]
    fn separation_counts_any_group_member_as_an_occurrence() {
        // D at 0, E at 4: span 4, minus 1
        assert_eq!(
            max_residue_separation(&seq("DGGGE"), NEGATIVE, false),
            Some(3)
        );
    }

    #[test]
    fn perfect_alternation_switches_length_minus_one_times() {
        assert_eq!(
            patterning_switch_count(&seq("DKDKDKDK"), NEGATIVE, POSITIVE),
            7
        );
        // starting in the other group changes nothing
        assert_eq!(
            patterning_switch_count(&seq("KDKDKDKD"), NEGATIVE, POSITIVE),
            7
        );
    }

    #[test]
    fn residues_in_neither_group_are_skipped_without_resetting() {
        assert_eq!(
            patterning_switch_count(&seq("DGGKGGDGGK"), NEGATIVE, POSITIVE),
            3
        );
    }

    #[test]
    fn repeated_members_of_one_group_do_not_switch() {
        assert_eq!(
            patterning_switch_count(&seq("DDDDK"), NEGATIVE, POSITIVE),
            1
        );
        assert_eq!(
            patterning_switch_count(&seq("DDDD"), NEGATIVE, POSITIVE),
            0
        );
    }

    #[test]
    fn no_member_of_either_group_counts_zero() {
        assert_eq!(
            patterning_switch_count(&seq("GAVLGAVL"), NEGATIVE, POSITIVE),
            0
        );
        assert_eq!(patterning_switch_count(&seq(""), NEGATIVE, POSITIVE), 0);
    }
}
