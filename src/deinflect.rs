//! Deinflection of Japanese verbs and adjectives.
//!
//! Given a run of text that may be an inflected surface form, the
//! engine produces every candidate plain form reachable through the
//! rule table, each annotated with the chain of transformations that
//! was undone and a mask of the word classes the candidate may belong
//! to. The caller is expected to look every candidate up in a
//! dictionary and keep only those whose mask intersects the classes
//! implied by the entry's part-of-speech tags.

use serde::Serialize;

use crate::reason::Reason;
use crate::rules::rule_groups;
use crate::word_type::{self, WordTypeMask};

/// A candidate plain form produced by [`deinflect`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CandidateWord {
    /// The candidate form to look up.
    pub word: String,
    /// Word classes the candidate may belong to. The raw input
    /// carries [`word_type::ALL`]; a lookup must intersect this mask
    /// with the classes of a dictionary entry before accepting the
    /// candidate.
    #[serde(rename = "type")]
    pub type_mask: WordTypeMask,
    /// One chain per derivation that reached this candidate, the most
    /// recently undone transformation first. Empty for the raw input.
    pub reasons: Vec<Vec<Reason>>,
}

/// Produce every candidate plain form for `word`.
///
/// The first candidate is always `word` itself, unconstrained and
/// with no reasons. The result may contain the same word twice when
/// distinct derivations imply distinct class masks; derivations that
/// agree on both word and mask are merged into one candidate with
/// several reason chains.
///
/// The function is total: any input, including nonsense, yields at
/// least the identity candidate.
pub fn deinflect(word: &str) -> Vec<CandidateWord> {
    let mut candidates = vec![CandidateWord {
        word: word.to_owned(),
        type_mask: word_type::ALL,
        reasons: Vec::new(),
    }];

    let mut index = 0;
    while index < candidates.len() {
        // A candidate that is nothing but a recovered stem already is
        // a dictionary form. Matching rules against it again would
        // re-inflect it, e.g. 食べ→食べる→食ぶ.
        if is_bare_stem(&candidates[index]) {
            index += 1;
            continue;
        }

        let word = candidates[index].word.clone();
        let type_mask = candidates[index].type_mask;

        for group in rule_groups() {
            if group.from_len > word.len() || !word.is_char_boundary(word.len() - group.from_len) {
                continue;
            }

            let ending = &word[word.len() - group.from_len..];

            for rule in &group.rules {
                if type_mask & rule.from_type() == 0 || ending != rule.from {
                    continue;
                }

                let mut new_word =
                    String::with_capacity(word.len() - rule.from.len() + rule.to.len());
                new_word.push_str(&word[..word.len() - rule.from.len()]);
                new_word.push_str(rule.to);

                // Single characters deinflect to almost anything, so
                // reductions this short are rejected as degenerate.
                if new_word.chars().count() <= 1 {
                    continue;
                }

                let to_type = rule.to_type();
                let reasons = derive_reasons(&candidates[index].reasons, rule.reason);

                match candidates
                    .iter_mut()
                    .find(|c| c.word == new_word && c.type_mask == to_type)
                {
                    Some(existing) => existing.reasons.extend(reasons),
                    None => candidates.push(CandidateWord {
                        word: new_word,
                        type_mask: to_type,
                        reasons,
                    }),
                }
            }
        }

        index += 1;
    }

    candidates
}

/// Reason chains for a candidate derived by applying `applied` to a
/// candidate with chains `reasons`.
fn derive_reasons(reasons: &[Vec<Reason>], applied: Reason) -> Vec<Vec<Reason>> {
    if reasons.is_empty() {
        return vec![vec![applied]];
    }

    let mut reasons = reasons.to_vec();
    let first = &mut reasons[0];

    // A causative on top of a potential/passive is lexically the
    // causative-passive, which dictionaries record as one category.
    if applied == Reason::Causative && first.first() == Some(&Reason::PotentialOrPassive) {
        first[0] = Reason::CausativePassive;
    } else {
        first.insert(0, applied);
    }

    reasons
}

fn is_bare_stem(candidate: &CandidateWord) -> bool {
    candidate.reasons.len() == 1
        && candidate.reasons[0].len() == 1
        && candidate.reasons[0][0] == Reason::MasuStem
}

#[cfg(test)]
mod tests {
    use super::{deinflect, CandidateWord};
    use crate::reason::Reason::*;
    use crate::word_type;

    fn candidates<'a>(result: &'a [CandidateWord], word: &str) -> Vec<&'a CandidateWord> {
        result.iter().filter(|c| c.word == word).collect()
    }

    /// Assert that deinflecting `input` yields `plain` with exactly
    /// the class mask `type_mask`, reached through `chain`.
    fn assert_deinflects(
        input: &str,
        plain: &str,
        type_mask: word_type::WordTypeMask,
        chain: &[crate::Reason],
    ) {
        let result = deinflect(input);
        let found = result
            .iter()
            .any(|c| c.word == plain && c.type_mask == type_mask && c.reasons.contains(&chain.to_vec()));

        assert!(
            found,
            "{} should deinflect to {} ({:?}), got {:?}",
            input, plain, chain, result
        );
    }

    #[test]
    fn identity_candidate_comes_first() {
        for input in &["走ります", "nonsense", "食べた", ""] {
            let result = deinflect(input);
            assert_eq!(result[0].word, *input);
            assert_eq!(result[0].type_mask, word_type::ALL);
            assert!(result[0].reasons.is_empty());
        }
    }

    #[test]
    fn empty_input_yields_only_identity() {
        assert_eq!(deinflect("").len(), 1);
    }

    #[test]
    fn polite() {
        assert_deinflects("走ります", "走る", word_type::GODAN_VERB, &[Polite]);
        assert_deinflects("食べます", "食べる", word_type::ICHIDAN_VERB, &[Polite]);
        assert_deinflects("きます", "くる", word_type::KURU_VERB, &[Polite]);
        assert_deinflects("します", "する", word_type::SURU_VERB, &[Polite]);
    }

    #[test]
    fn polite_past() {
        assert_deinflects("飲みました", "飲む", word_type::GODAN_VERB, &[PolitePast]);
    }

    #[test]
    fn polite_negative() {
        assert_deinflects("行きません", "行く", word_type::GODAN_VERB, &[PoliteNegative]);
        assert_deinflects("高くありません", "高い", word_type::I_ADJ, &[PoliteNegative]);
    }

    #[test]
    fn polite_past_negative() {
        assert_deinflects(
            "行きませんでした",
            "行く",
            word_type::GODAN_VERB,
            &[PolitePastNegative],
        );
        assert_deinflects(
            "高くありませんでした",
            "高い",
            word_type::I_ADJ,
            &[PolitePastNegative],
        );
    }

    #[test]
    fn polite_volitional() {
        assert_deinflects(
            "食べましょう",
            "食べる",
            word_type::ICHIDAN_VERB,
            &[PoliteVolitional],
        );
    }

    #[test]
    fn honorific_polite_stems() {
        assert_deinflects(
            "いらっしゃいます",
            "いらっしゃる",
            word_type::GODAN_VERB,
            &[Polite],
        );
        assert_deinflects(
            "おっしゃいませんでした",
            "おっしゃる",
            word_type::GODAN_VERB,
            &[PolitePastNegative],
        );
    }

    #[test]
    fn recursive_inflections_record_reasons_oldest_first() {
        assert_deinflects(
            "踊りたくなかった",
            "踊る",
            word_type::GODAN_VERB,
            &[Tai, Negative, Past],
        );
    }

    #[test]
    fn negative_nu_by_verb_class() {
        assert_deinflects("思わぬ", "思う", word_type::GODAN_VERB, &[Negative]);
        assert_deinflects("こぬ", "くる", word_type::KURU_VERB, &[Negative]);
        assert_deinflects("せぬ", "する", word_type::SURU_VERB, &[Negative]);
    }

    #[test]
    fn plain_negative() {
        assert_deinflects("飲まない", "飲む", word_type::GODAN_VERB, &[Negative]);
        assert_deinflects("食べない", "食べる", word_type::ICHIDAN_VERB, &[Negative]);
        assert_deinflects("高くない", "高い", word_type::I_ADJ, &[Negative]);
    }

    #[test]
    fn past() {
        assert_deinflects("食べた", "食べる", word_type::ICHIDAN_VERB, &[Past]);
        assert_deinflects("飲んだ", "飲む", word_type::GODAN_VERB, &[Past]);
        assert_deinflects("書いた", "書く", word_type::GODAN_VERB, &[Past]);
        assert_deinflects("行った", "行く", word_type::GODAN_VERB, &[Past]);
        assert_deinflects("高かった", "高い", word_type::I_ADJ, &[Past]);
    }

    #[test]
    fn te_form() {
        assert_deinflects("食べて", "食べる", word_type::ICHIDAN_VERB, &[Te]);
        assert_deinflects("走って", "走る", word_type::GODAN_VERB, &[Te]);
        assert_deinflects("行って", "行く", word_type::GODAN_VERB, &[Te]);
        assert_deinflects("高くて", "高い", word_type::I_ADJ, &[Te]);
    }

    #[test]
    fn continuous() {
        assert_deinflects("食べている", "食べる", word_type::ICHIDAN_VERB, &[Continuous]);
        assert_deinflects("走っている", "走る", word_type::GODAN_VERB, &[Continuous]);
        assert_deinflects("走ってる", "走る", word_type::GODAN_VERB, &[Continuous]);
        assert_deinflects("行っている", "行く", word_type::GODAN_VERB, &[Continuous]);
    }

    #[test]
    fn continuous_past_chains() {
        assert_deinflects(
            "飲んでいた",
            "飲む",
            word_type::GODAN_VERB,
            &[Continuous, Past],
        );
    }

    #[test]
    fn negative_continuous_chain() {
        assert_deinflects(
            "食べていない",
            "食べる",
            word_type::ICHIDAN_VERB,
            &[Continuous, Negative],
        );
    }

    #[test]
    fn conditionals() {
        assert_deinflects("飲んだら", "飲む", word_type::GODAN_VERB, &[Tara]);
        assert_deinflects("飲んだり", "飲む", word_type::GODAN_VERB, &[Tari]);
        assert_deinflects("高かったら", "高い", word_type::I_ADJ, &[Tara]);
        // れば leaves the verb class open; the dictionary narrows it.
        let any_verb = word_type::ICHIDAN_VERB
            | word_type::GODAN_VERB
            | word_type::KURU_VERB
            | word_type::SURU_VERB;
        assert_deinflects("食べれば", "食べる", any_verb, &[Ba]);
        assert_deinflects("飲めば", "飲む", word_type::GODAN_VERB, &[Ba]);
        assert_deinflects("くれば", "くる", any_verb, &[Ba]);
        assert_deinflects("高ければ", "高い", word_type::I_ADJ, &[Ba]);
    }

    #[test]
    fn volitional() {
        assert_deinflects("飲もう", "飲む", word_type::GODAN_VERB, &[Volitional]);
        assert_deinflects("食べよう", "食べる", word_type::ICHIDAN_VERB, &[Volitional]);
        assert_deinflects("しよう", "する", word_type::SURU_VERB, &[Volitional]);
    }

    #[test]
    fn imperatives() {
        assert_deinflects("飲め", "飲む", word_type::GODAN_VERB, &[Imperative]);
        assert_deinflects("食べろ", "食べる", word_type::ICHIDAN_VERB, &[Imperative]);
        assert_deinflects("こい", "くる", word_type::KURU_VERB, &[Imperative]);
        assert_deinflects("しろ", "する", word_type::SURU_VERB, &[Imperative]);
    }

    #[test]
    fn imperative_negative() {
        let all_verbs = word_type::ICHIDAN_VERB
            | word_type::GODAN_VERB
            | word_type::KURU_VERB
            | word_type::SURU_VERB;
        assert_deinflects("行くな", "行く", all_verbs, &[ImperativeNegative]);
    }

    #[test]
    fn tai() {
        assert_deinflects("飲みたい", "飲む", word_type::GODAN_VERB, &[Tai]);
        assert_deinflects("食べたい", "食べる", word_type::ICHIDAN_VERB, &[Tai]);
    }

    #[test]
    fn zu() {
        assert_deinflects("飲まず", "飲む", word_type::GODAN_VERB, &[Zu]);
        assert_deinflects("食べず", "食べる", word_type::ICHIDAN_VERB, &[Zu]);
        assert_deinflects("せず", "する", word_type::SURU_VERB, &[Zu]);
    }

    #[test]
    fn contractions() {
        assert_deinflects("食べちゃう", "食べる", word_type::ICHIDAN_VERB, &[Chau]);
        assert_deinflects("食べちゃった", "食べる", word_type::ICHIDAN_VERB, &[Chau, Past]);
        assert_deinflects("飲んどく", "飲む", word_type::GODAN_VERB, &[Toku]);
    }

    #[test]
    fn sugiru_and_sou() {
        assert_deinflects("飲みすぎる", "飲む", word_type::GODAN_VERB, &[Sugiru]);
        assert_deinflects("高すぎる", "高い", word_type::I_ADJ, &[Sugiru]);
        assert_deinflects("降りそう", "降りる", word_type::ICHIDAN_VERB, &[Sou]);
        assert_deinflects("降りそう", "降る", word_type::GODAN_VERB, &[Sou]);
        assert_deinflects("高そう", "高い", word_type::I_ADJ, &[Sou]);
    }

    #[test]
    fn nasai() {
        assert_deinflects("食べなさい", "食べる", word_type::ICHIDAN_VERB, &[Nasai]);
        assert_deinflects("飲みなさい", "飲む", word_type::GODAN_VERB, &[Nasai]);
    }

    #[test]
    fn adjective_one_offs() {
        assert_deinflects("高く", "高い", word_type::I_ADJ, &[Adv]);
        assert_deinflects("高さ", "高い", word_type::I_ADJ, &[Noun]);
        assert_deinflects("高き", "高い", word_type::I_ADJ, &[Ki]);
    }

    #[test]
    fn suru_noun() {
        assert_deinflects("勉強する", "勉強", word_type::NOUN_VS, &[SuruNoun]);
        assert_deinflects("勉強しました", "勉強", word_type::NOUN_VS, &[SuruNoun, PolitePast]);
    }

    #[test]
    fn causative() {
        assert_deinflects("食べさせる", "食べる", word_type::ICHIDAN_VERB, &[Causative]);
        assert_deinflects("行かせる", "行く", word_type::GODAN_VERB, &[Causative]);
    }

    #[test]
    fn potential_or_passive() {
        let result = deinflect("食べられる");
        assert!(result.iter().any(|c| c.word == "食べる"
            && c.type_mask == (word_type::ICHIDAN_VERB | word_type::GODAN_VERB)
            && c.reasons == vec![vec![PotentialOrPassive]]));

        assert_deinflects("飲まれる", "飲む", word_type::GODAN_VERB, &[PotentialOrPassive]);
        assert_deinflects("読める", "読む", word_type::GODAN_VERB, &[PotentialOrPassive]);
        assert_deinflects("こられる", "くる", word_type::KURU_VERB, &[PotentialOrPassive]);
    }

    #[test]
    fn causative_passive_collapses() {
        let result = deinflect("食べさせられる");

        assert!(result.iter().any(|c| c.word == "食べる"
            && c.type_mask == word_type::ICHIDAN_VERB
            && c.reasons.contains(&vec![CausativePassive])));

        // The collapse must replace the pair, not coexist with it.
        for candidate in &result {
            for chain in &candidate.reasons {
                assert!(!chain.windows(2).any(|w| w == [Causative, PotentialOrPassive]));
            }
        }
    }

    #[test]
    fn causative_passive_short_form() {
        assert_deinflects("行かされる", "行く", word_type::GODAN_VERB, &[CausativePassive]);
        assert_deinflects("待たされる", "待つ", word_type::GODAN_VERB, &[CausativePassive]);
    }

    #[test]
    fn causative_passive_collapse_within_longer_chain() {
        assert_deinflects(
            "食べさせられた",
            "食べる",
            word_type::ICHIDAN_VERB,
            &[CausativePassive, Past],
        );
    }

    #[test]
    fn masu_stem() {
        assert_deinflects("食べ", "食べる", word_type::ICHIDAN_VERB, &[MasuStem]);
        assert_deinflects("走り", "走る", word_type::GODAN_VERB, &[MasuStem]);
    }

    #[test]
    fn bare_stems_are_not_expanded_further() {
        // 食べ recovers 食べる as a stem; re-inflecting that candidate
        // (e.g. to 食ぶ through the potential rows) must not happen.
        for input in &["食べ", "走り", "見"] {
            for candidate in deinflect(input) {
                for chain in &candidate.reasons {
                    if chain.contains(&MasuStem) {
                        assert_eq!(chain, &vec![MasuStem]);
                    }
                }
            }
        }
    }

    #[test]
    fn same_word_with_distinct_masks_is_kept_twice() {
        // 来た reduces to 来る both as the ichidan reading (た→る) and
        // as the irregular 来る; the masks disagree so both stay.
        let result = deinflect("来た");
        let kuru = candidates(&result, "来る");

        assert_eq!(kuru.len(), 2);
        assert!(kuru.iter().any(|c| c.type_mask == word_type::KURU_VERB));
        assert!(kuru.iter().any(|c| c.type_mask == word_type::ICHIDAN_VERB));
        assert!(kuru.iter().all(|c| c.reasons == vec![vec![Past]]));
    }

    #[test]
    fn no_duplicate_word_and_mask_pairs() {
        for input in &[
            "走ります",
            "踊りたくなかった",
            "食べさせられる",
            "高くありませんでした",
            "飲んでいた",
            "来た",
        ] {
            let result = deinflect(input);
            for (i, a) in result.iter().enumerate() {
                assert!(
                    !result[i + 1..]
                        .iter()
                        .any(|b| a.word == b.word && a.type_mask == b.type_mask),
                    "duplicate candidate {:?} for {}",
                    a.word,
                    input
                );
            }
        }
    }

    #[test]
    fn no_degenerate_candidates() {
        for input in &["し", "来た", "食べ", "った", "高く", "な"] {
            for candidate in deinflect(input).iter().skip(1) {
                assert!(
                    candidate.word.chars().count() > 1,
                    "degenerate candidate {:?} for {}",
                    candidate.word,
                    input
                );
            }
        }
    }

    #[test]
    fn derived_candidates_have_reasons() {
        for candidate in deinflect("踊りたくなかった").iter().skip(1) {
            assert!(!candidate.reasons.is_empty());
            assert!(candidate.reasons.iter().all(|chain| !chain.is_empty()));
        }
    }

    #[test]
    fn calls_do_not_interfere() {
        let first = deinflect("食べさせられる");
        let _ = deinflect("踊りたくなかった");
        let second = deinflect("食べさせられる");

        assert_eq!(first, second);
    }
}
