//! Word class bit masks.
//!
//! The deinflector cannot know which class a word belongs to until a
//! candidate has been checked against a dictionary, so classes are
//! represented as bits in a mask and a candidate can carry several
//! class hypotheses at once. A candidate is only valid for a
//! dictionary entry when its mask intersects the classes implied by
//! the entry's part-of-speech tags.

/// A set of word class hypotheses, one bit per class.
pub type WordTypeMask = u16;

/// Ichidan (ru) verbs, such as 食べる.
pub const ICHIDAN_VERB: WordTypeMask = 1 << 0;

/// Godan (u) verbs, such as 走る.
pub const GODAN_VERB: WordTypeMask = 1 << 1;

/// I-adjectives, such as 高い.
pub const I_ADJ: WordTypeMask = 1 << 2;

/// The irregular verb 来る.
pub const KURU_VERB: WordTypeMask = 1 << 3;

/// The irregular verb する and verbs conjugating like it.
pub const SURU_VERB: WordTypeMask = 1 << 4;

/// Nouns that form a verb with する, such as 勉強.
pub const NOUN_VS: WordTypeMask = 1 << 5;

/// Set only in the mask of a word that has not been deinflected yet.
///
/// Rules whose surface pattern can only occur in raw input, such as
/// the polite endings, carry this bit alone as their from-type so
/// that they never fire on a derived candidate.
pub const INITIAL: WordTypeMask = 1 << 15;

/// The mask of the raw input word. Intersects the from-type of every
/// rule, so any rule may fire against it.
pub const ALL: WordTypeMask = 0xffff;

/// Bit width of a `WordTypeMask` within a packed type transition.
pub(crate) const WORD_TYPE_BITS: u32 = 16;

/// Pack a type transition into a single integer: the low half is the
/// from-type a rule fires against, the high half the type of the
/// candidate it produces.
pub(crate) const fn transition(from: WordTypeMask, to: WordTypeMask) -> u32 {
    ((to as u32) << WORD_TYPE_BITS) | from as u32
}

/// Map a dictionary part-of-speech tag to the word classes it implies.
///
/// This is the mapping a dictionary lookup uses to filter candidates:
/// an entry accepts a candidate when the mask of one of its tags
/// intersects the candidate's mask. Tags that do not describe a
/// deinflectable class map to an empty mask.
pub fn from_pos_tag(tag: &str) -> WordTypeMask {
    match tag {
        "v1" | "v1-s" => ICHIDAN_VERB,
        "vk" => KURU_VERB,
        "vs-i" | "vs-s" => SURU_VERB,
        "vs" => NOUN_VS,
        "adj-i" | "adj-ix" => I_ADJ,
        tag if tag.starts_with("v5") || tag.starts_with("v4") => GODAN_VERB,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_bits_are_disjoint() {
        let classes = [
            ICHIDAN_VERB,
            GODAN_VERB,
            I_ADJ,
            KURU_VERB,
            SURU_VERB,
            NOUN_VS,
            INITIAL,
        ];

        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_eq!(a & b, 0);
            }
        }
    }

    #[test]
    fn transition_round_trips() {
        let packed = transition(I_ADJ | INITIAL, GODAN_VERB);
        assert_eq!(packed as WordTypeMask, I_ADJ | INITIAL);
        assert_eq!((packed >> WORD_TYPE_BITS) as WordTypeMask, GODAN_VERB);
    }

    #[test]
    fn pos_tags_map_to_classes() {
        assert_eq!(from_pos_tag("v1"), ICHIDAN_VERB);
        assert_eq!(from_pos_tag("v5r"), GODAN_VERB);
        assert_eq!(from_pos_tag("v5k-s"), GODAN_VERB);
        assert_eq!(from_pos_tag("adj-i"), I_ADJ);
        assert_eq!(from_pos_tag("vk"), KURU_VERB);
        assert_eq!(from_pos_tag("vs-i"), SURU_VERB);
        assert_eq!(from_pos_tag("vs"), NOUN_VS);
        assert_eq!(from_pos_tag("n"), 0);
        assert_eq!(from_pos_tag("exp"), 0);
    }
}
