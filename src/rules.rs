//! The deinflection rule table.
//!
//! Each rule rewrites one inflected suffix to the corresponding
//! suffix of a more plain form and records the grammatical
//! transformation it undoes. The packed type transition gates which
//! candidates a rule may fire against and which word classes the
//! produced candidate may belong to; see [`crate::word_type`].
//!
//! The table deliberately overgenerates. Ambiguous endings produce a
//! candidate for every reading and nonsense candidates are expected
//! to be discarded by the dictionary lookup, so precision here is
//! traded for recall.

use lazy_static::lazy_static;

use crate::reason::Reason;
use crate::word_type::{self, WordTypeMask};

/// A single suffix rewriting rule.
#[derive(Clone, Copy, Debug)]
pub struct DeinflectRule {
    /// Suffix the candidate must end with. Never empty.
    pub from: &'static str,
    /// Replacement suffix. May be empty.
    pub to: &'static str,
    /// Packed type transition, see [`DeinflectRule::from_type`] and
    /// [`DeinflectRule::to_type`].
    pub type_mask: u32,
    /// The transformation this rule undoes.
    pub reason: Reason,
}

impl DeinflectRule {
    /// Word classes of a candidate this rule may fire against.
    pub fn from_type(&self) -> WordTypeMask {
        self.type_mask as WordTypeMask
    }

    /// Word classes the produced candidate may belong to.
    pub fn to_type(&self) -> WordTypeMask {
        (self.type_mask >> word_type::WORD_TYPE_BITS) as WordTypeMask
    }
}

/// Rules sharing one suffix length, so that the trailing substring of
/// a candidate is extracted once per group rather than once per rule.
#[derive(Debug)]
pub struct DeinflectRuleGroup {
    /// Byte length of `from` for every rule in the group.
    pub from_len: usize,
    pub rules: Vec<DeinflectRule>,
}

const IV: WordTypeMask = word_type::ICHIDAN_VERB;
const GV: WordTypeMask = word_type::GODAN_VERB;
const IA: WordTypeMask = word_type::I_ADJ;
const KV: WordTypeMask = word_type::KURU_VERB;
const SV: WordTypeMask = word_type::SURU_VERB;
const NV: WordTypeMask = word_type::NOUN_VS;
const INI: WordTypeMask = word_type::INITIAL;

const fn r(
    from: &'static str,
    to: &'static str,
    from_type: WordTypeMask,
    to_type: WordTypeMask,
    reason: Reason,
) -> DeinflectRule {
    DeinflectRule {
        from,
        to,
        type_mask: word_type::transition(from_type, to_type),
        reason,
    }
}

use Reason::*;

#[rustfmt::skip]
static RULES: &[DeinflectRule] = &[
    // Honorific godan-aru verbs take an い stem in the polite forms
    // (いらっしゃいます, not *いらっしゃります), so the regular polite
    // rows below never reach their dictionary form.
    r("いらっしゃいませんでした", "いらっしゃる", INI, GV, PolitePastNegative),
    r("おっしゃいませんでした", "おっしゃる", INI, GV, PolitePastNegative),
    r("いらっしゃいました", "いらっしゃる", INI, GV, PolitePast),
    r("おっしゃいました", "おっしゃる", INI, GV, PolitePast),
    r("いらっしゃいません", "いらっしゃる", INI, GV, PoliteNegative),
    r("おっしゃいません", "おっしゃる", INI, GV, PoliteNegative),
    r("いらっしゃいます", "いらっしゃる", INI, GV, Polite),
    r("おっしゃいます", "おっしゃる", INI, GV, Polite),
    r("いらっしゃい", "いらっしゃる", INI, GV, MasuStem),
    r("おっしゃい", "おっしゃる", INI, GV, MasuStem),

    // Polite past negative.
    r("くありませんでした", "い", INI, IA, PolitePastNegative),
    r("いませんでした", "う", INI, GV, PolitePastNegative),
    r("きませんでした", "く", INI, GV, PolitePastNegative),
    r("ぎませんでした", "ぐ", INI, GV, PolitePastNegative),
    r("しませんでした", "す", INI, GV, PolitePastNegative),
    r("ちませんでした", "つ", INI, GV, PolitePastNegative),
    r("にませんでした", "ぬ", INI, GV, PolitePastNegative),
    r("びませんでした", "ぶ", INI, GV, PolitePastNegative),
    r("みませんでした", "む", INI, GV, PolitePastNegative),
    r("りませんでした", "る", INI, GV, PolitePastNegative),
    r("ませんでした", "る", INI, IV, PolitePastNegative),
    r("きませんでした", "くる", INI, KV, PolitePastNegative),
    r("来ませんでした", "来る", INI, KV, PolitePastNegative),
    r("しませんでした", "する", INI, SV, PolitePastNegative),

    // Polite volitional.
    r("いましょう", "う", INI, GV, PoliteVolitional),
    r("きましょう", "く", INI, GV, PoliteVolitional),
    r("ぎましょう", "ぐ", INI, GV, PoliteVolitional),
    r("しましょう", "す", INI, GV, PoliteVolitional),
    r("ちましょう", "つ", INI, GV, PoliteVolitional),
    r("にましょう", "ぬ", INI, GV, PoliteVolitional),
    r("びましょう", "ぶ", INI, GV, PoliteVolitional),
    r("みましょう", "む", INI, GV, PoliteVolitional),
    r("りましょう", "る", INI, GV, PoliteVolitional),
    r("ましょう", "る", INI, IV, PoliteVolitional),
    r("きましょう", "くる", INI, KV, PoliteVolitional),
    r("来ましょう", "来る", INI, KV, PoliteVolitional),
    r("しましょう", "する", INI, SV, PoliteVolitional),

    // Polite negative.
    r("くありません", "い", INI, IA, PoliteNegative),
    r("いません", "う", INI, GV, PoliteNegative),
    r("きません", "く", INI, GV, PoliteNegative),
    r("ぎません", "ぐ", INI, GV, PoliteNegative),
    r("しません", "す", INI, GV, PoliteNegative),
    r("ちません", "つ", INI, GV, PoliteNegative),
    r("にません", "ぬ", INI, GV, PoliteNegative),
    r("びません", "ぶ", INI, GV, PoliteNegative),
    r("みません", "む", INI, GV, PoliteNegative),
    r("りません", "る", INI, GV, PoliteNegative),
    r("ません", "る", INI, IV, PoliteNegative),
    r("きません", "くる", INI, KV, PoliteNegative),
    r("来ません", "来る", INI, KV, PoliteNegative),
    r("しません", "する", INI, SV, PoliteNegative),

    // Polite past.
    r("いました", "う", INI, GV, PolitePast),
    r("きました", "く", INI, GV, PolitePast),
    r("ぎました", "ぐ", INI, GV, PolitePast),
    r("しました", "す", INI, GV, PolitePast),
    r("ちました", "つ", INI, GV, PolitePast),
    r("にました", "ぬ", INI, GV, PolitePast),
    r("びました", "ぶ", INI, GV, PolitePast),
    r("みました", "む", INI, GV, PolitePast),
    r("りました", "る", INI, GV, PolitePast),
    r("ました", "る", INI, IV, PolitePast),
    r("きました", "くる", INI, KV, PolitePast),
    r("来ました", "来る", INI, KV, PolitePast),
    r("しました", "する", INI, SV, PolitePast),

    // Polite.
    r("います", "う", INI, GV, Polite),
    r("きます", "く", INI, GV, Polite),
    r("ぎます", "ぐ", INI, GV, Polite),
    r("します", "す", INI, GV, Polite),
    r("ちます", "つ", INI, GV, Polite),
    r("にます", "ぬ", INI, GV, Polite),
    r("びます", "ぶ", INI, GV, Polite),
    r("みます", "む", INI, GV, Polite),
    r("ります", "る", INI, GV, Polite),
    r("ます", "る", INI, IV, Polite),
    r("きます", "くる", INI, KV, Polite),
    r("来ます", "来る", INI, KV, Polite),
    r("します", "する", INI, SV, Polite),

    // Causative passive, the short godan form (行かされる). The long
    // form させられる is recognized by collapsing a causative applied
    // on top of a potential/passive, not by a row here.
    r("わされる", "う", IV | INI, GV, CausativePassive),
    r("かされる", "く", IV | INI, GV, CausativePassive),
    r("がされる", "ぐ", IV | INI, GV, CausativePassive),
    r("たされる", "つ", IV | INI, GV, CausativePassive),
    r("なされる", "ぬ", IV | INI, GV, CausativePassive),
    r("ばされる", "ぶ", IV | INI, GV, CausativePassive),
    r("まされる", "む", IV | INI, GV, CausativePassive),
    r("らされる", "る", IV | INI, GV, CausativePassive),

    // Causative. The させる form conjugates as an ichidan verb.
    r("こさせる", "くる", IV | INI, KV, Causative),
    r("来させる", "来る", IV | INI, KV, Causative),
    r("させる", "る", IV | INI, IV, Causative),
    r("させる", "する", IV | INI, SV, Causative),
    r("わせる", "う", IV | INI, GV, Causative),
    r("かせる", "く", IV | INI, GV, Causative),
    r("がせる", "ぐ", IV | INI, GV, Causative),
    r("させる", "す", IV | INI, GV, Causative),
    r("たせる", "つ", IV | INI, GV, Causative),
    r("なせる", "ぬ", IV | INI, GV, Causative),
    r("ばせる", "ぶ", IV | INI, GV, Causative),
    r("ませる", "む", IV | INI, GV, Causative),
    r("らせる", "る", IV | INI, GV, Causative),

    // Potential and/or passive. られる covers the ichidan potential
    // and passive and the godan ら-row passive at once; a candidate
    // for each reading is produced and the dictionary decides.
    r("こられる", "くる", IV | INI, KV, PotentialOrPassive),
    r("来られる", "来る", IV | INI, KV, PotentialOrPassive),
    r("られる", "る", IV | INI, IV | GV, PotentialOrPassive),
    r("される", "する", IV | INI, SV, PotentialOrPassive),
    r("される", "す", IV | INI, GV, PotentialOrPassive),
    r("われる", "う", IV | INI, GV, PotentialOrPassive),
    r("かれる", "く", IV | INI, GV, PotentialOrPassive),
    r("がれる", "ぐ", IV | INI, GV, PotentialOrPassive),
    r("たれる", "つ", IV | INI, GV, PotentialOrPassive),
    r("なれる", "ぬ", IV | INI, GV, PotentialOrPassive),
    r("ばれる", "ぶ", IV | INI, GV, PotentialOrPassive),
    r("まれる", "む", IV | INI, GV, PotentialOrPassive),
    r("える", "う", IV | INI, GV, PotentialOrPassive),
    r("ける", "く", IV | INI, GV, PotentialOrPassive),
    r("げる", "ぐ", IV | INI, GV, PotentialOrPassive),
    r("せる", "す", IV | INI, GV, PotentialOrPassive),
    r("てる", "つ", IV | INI, GV, PotentialOrPassive),
    r("ねる", "ぬ", IV | INI, GV, PotentialOrPassive),
    r("べる", "ぶ", IV | INI, GV, PotentialOrPassive),
    r("める", "む", IV | INI, GV, PotentialOrPassive),
    r("れる", "る", IV | INI, GV, PotentialOrPassive),

    // -nasai.
    r("いなさい", "う", INI, GV, Nasai),
    r("きなさい", "く", INI, GV, Nasai),
    r("ぎなさい", "ぐ", INI, GV, Nasai),
    r("しなさい", "す", INI, GV, Nasai),
    r("ちなさい", "つ", INI, GV, Nasai),
    r("になさい", "ぬ", INI, GV, Nasai),
    r("びなさい", "ぶ", INI, GV, Nasai),
    r("みなさい", "む", INI, GV, Nasai),
    r("りなさい", "る", INI, GV, Nasai),
    r("なさい", "る", INI, IV, Nasai),
    r("きなさい", "くる", INI, KV, Nasai),
    r("来なさい", "来る", INI, KV, Nasai),
    r("しなさい", "する", INI, SV, Nasai),

    // Continuous ている and the contracted てる. Both conjugate as
    // the ichidan いる, so derived candidates fire these rows too.
    r("行っている", "行く", IV | INI, GV, Continuous),
    r("いっている", "いく", IV | INI, GV, Continuous),
    r("っている", "う", IV | INI, GV, Continuous),
    r("っている", "つ", IV | INI, GV, Continuous),
    r("っている", "る", IV | INI, GV, Continuous),
    r("いている", "く", IV | INI, GV, Continuous),
    r("いでいる", "ぐ", IV | INI, GV, Continuous),
    r("している", "す", IV | INI, GV, Continuous),
    r("んでいる", "ぬ", IV | INI, GV, Continuous),
    r("んでいる", "ぶ", IV | INI, GV, Continuous),
    r("んでいる", "む", IV | INI, GV, Continuous),
    r("ている", "る", IV | INI, IV, Continuous),
    r("きている", "くる", IV | INI, KV, Continuous),
    r("来ている", "来る", IV | INI, KV, Continuous),
    r("している", "する", IV | INI, SV, Continuous),
    r("行ってる", "行く", IV | INI, GV, Continuous),
    r("いってる", "いく", IV | INI, GV, Continuous),
    r("ってる", "う", IV | INI, GV, Continuous),
    r("ってる", "つ", IV | INI, GV, Continuous),
    r("ってる", "る", IV | INI, GV, Continuous),
    r("いてる", "く", IV | INI, GV, Continuous),
    r("いでる", "ぐ", IV | INI, GV, Continuous),
    r("してる", "す", IV | INI, GV, Continuous),
    r("んでる", "ぬ", IV | INI, GV, Continuous),
    r("んでる", "ぶ", IV | INI, GV, Continuous),
    r("んでる", "む", IV | INI, GV, Continuous),
    r("てる", "る", IV | INI, IV, Continuous),
    r("きてる", "くる", IV | INI, KV, Continuous),
    r("来てる", "来る", IV | INI, KV, Continuous),
    r("してる", "する", IV | INI, SV, Continuous),

    // -chau, contraction of てしまう. Conjugates as a godan verb.
    r("っちゃう", "う", GV | INI, GV, Chau),
    r("っちゃう", "つ", GV | INI, GV, Chau),
    r("っちゃう", "る", GV | INI, GV, Chau),
    r("いちゃう", "く", GV | INI, GV, Chau),
    r("いじゃう", "ぐ", GV | INI, GV, Chau),
    r("しちゃう", "す", GV | INI, GV, Chau),
    r("んじゃう", "ぬ", GV | INI, GV, Chau),
    r("んじゃう", "ぶ", GV | INI, GV, Chau),
    r("んじゃう", "む", GV | INI, GV, Chau),
    r("ちゃう", "る", GV | INI, IV, Chau),
    r("きちゃう", "くる", GV | INI, KV, Chau),
    r("来ちゃう", "来る", GV | INI, KV, Chau),
    r("しちゃう", "する", GV | INI, SV, Chau),

    // -toku, contraction of ておく. Conjugates as a godan verb.
    r("っとく", "う", GV | INI, GV, Toku),
    r("っとく", "つ", GV | INI, GV, Toku),
    r("っとく", "る", GV | INI, GV, Toku),
    r("いとく", "く", GV | INI, GV, Toku),
    r("いどく", "ぐ", GV | INI, GV, Toku),
    r("しとく", "す", GV | INI, GV, Toku),
    r("んどく", "ぬ", GV | INI, GV, Toku),
    r("んどく", "ぶ", GV | INI, GV, Toku),
    r("んどく", "む", GV | INI, GV, Toku),
    r("とく", "る", GV | INI, IV, Toku),
    r("きとく", "くる", GV | INI, KV, Toku),
    r("来とく", "来る", GV | INI, KV, Toku),
    r("しとく", "する", GV | INI, SV, Toku),

    // -sugiru. Attaches to the masu stem; conjugates as ichidan.
    r("いすぎる", "う", IV | INI, GV, Sugiru),
    r("きすぎる", "く", IV | INI, GV, Sugiru),
    r("ぎすぎる", "ぐ", IV | INI, GV, Sugiru),
    r("しすぎる", "す", IV | INI, GV, Sugiru),
    r("ちすぎる", "つ", IV | INI, GV, Sugiru),
    r("にすぎる", "ぬ", IV | INI, GV, Sugiru),
    r("びすぎる", "ぶ", IV | INI, GV, Sugiru),
    r("みすぎる", "む", IV | INI, GV, Sugiru),
    r("りすぎる", "る", IV | INI, GV, Sugiru),
    r("すぎる", "る", IV | INI, IV, Sugiru),
    r("すぎる", "い", IV | INI, IA, Sugiru),
    r("きすぎる", "くる", IV | INI, KV, Sugiru),
    r("来すぎる", "来る", IV | INI, KV, Sugiru),
    r("しすぎる", "する", IV | INI, SV, Sugiru),

    // -tara conditional.
    r("行ったら", "行く", INI, GV, Tara),
    r("いったら", "いく", INI, GV, Tara),
    r("かったら", "い", IA | INI, IA, Tara),
    r("ったら", "う", INI, GV, Tara),
    r("ったら", "つ", INI, GV, Tara),
    r("ったら", "る", INI, GV, Tara),
    r("いたら", "く", INI, GV, Tara),
    r("いだら", "ぐ", INI, GV, Tara),
    r("したら", "す", INI, GV, Tara),
    r("んだら", "ぬ", INI, GV, Tara),
    r("んだら", "ぶ", INI, GV, Tara),
    r("んだら", "む", INI, GV, Tara),
    r("たら", "る", INI, IV, Tara),
    r("きたら", "くる", INI, KV, Tara),
    r("来たら", "来る", INI, KV, Tara),
    r("したら", "する", INI, SV, Tara),

    // -tari representative.
    r("行ったり", "行く", INI, GV, Tari),
    r("いったり", "いく", INI, GV, Tari),
    r("かったり", "い", IA | INI, IA, Tari),
    r("ったり", "う", INI, GV, Tari),
    r("ったり", "つ", INI, GV, Tari),
    r("ったり", "る", INI, GV, Tari),
    r("いたり", "く", INI, GV, Tari),
    r("いだり", "ぐ", INI, GV, Tari),
    r("したり", "す", INI, GV, Tari),
    r("んだり", "ぬ", INI, GV, Tari),
    r("んだり", "ぶ", INI, GV, Tari),
    r("んだり", "む", INI, GV, Tari),
    r("たり", "る", INI, IV, Tari),
    r("きたり", "くる", INI, KV, Tari),
    r("来たり", "来る", INI, KV, Tari),
    r("したり", "する", INI, SV, Tari),

    // -tai. Attaches to the masu stem; conjugates as an i-adjective.
    r("いたい", "う", IA | INI, GV, Tai),
    r("きたい", "く", IA | INI, GV, Tai),
    r("ぎたい", "ぐ", IA | INI, GV, Tai),
    r("したい", "す", IA | INI, GV, Tai),
    r("ちたい", "つ", IA | INI, GV, Tai),
    r("にたい", "ぬ", IA | INI, GV, Tai),
    r("びたい", "ぶ", IA | INI, GV, Tai),
    r("みたい", "む", IA | INI, GV, Tai),
    r("りたい", "る", IA | INI, GV, Tai),
    r("たい", "る", IA | INI, IV, Tai),
    r("きたい", "くる", IA | INI, KV, Tai),
    r("来たい", "来る", IA | INI, KV, Tai),
    r("したい", "する", IA | INI, SV, Tai),

    // -sou appearance. 高そう drops the final い of the adjective.
    r("いそう", "う", INI, GV, Sou),
    r("きそう", "く", INI, GV, Sou),
    r("ぎそう", "ぐ", INI, GV, Sou),
    r("しそう", "す", INI, GV, Sou),
    r("ちそう", "つ", INI, GV, Sou),
    r("にそう", "ぬ", INI, GV, Sou),
    r("びそう", "ぶ", INI, GV, Sou),
    r("みそう", "む", INI, GV, Sou),
    r("りそう", "る", INI, GV, Sou),
    r("そう", "る", INI, IV, Sou),
    r("そう", "い", IA | INI, IA, Sou),
    r("きそう", "くる", INI, KV, Sou),
    r("来そう", "来る", INI, KV, Sou),
    r("しそう", "する", INI, SV, Sou),

    // Plain negative. ない conjugates as an i-adjective, which is how
    // chains such as 食べなかった→食べない→食べる resolve.
    r("わない", "う", IA | INI, GV, Negative),
    r("かない", "く", IA | INI, GV, Negative),
    r("がない", "ぐ", IA | INI, GV, Negative),
    r("さない", "す", IA | INI, GV, Negative),
    r("たない", "つ", IA | INI, GV, Negative),
    r("なない", "ぬ", IA | INI, GV, Negative),
    r("ばない", "ぶ", IA | INI, GV, Negative),
    r("まない", "む", IA | INI, GV, Negative),
    r("らない", "る", IA | INI, GV, Negative),
    r("ない", "る", IA | INI, IV, Negative),
    r("くない", "い", IA | INI, IA, Negative),
    r("こない", "くる", IA | INI, KV, Negative),
    r("来ない", "来る", IA | INI, KV, Negative),
    r("しない", "する", IA | INI, SV, Negative),

    // Archaic negative ぬ.
    r("わぬ", "う", INI, GV, Negative),
    r("かぬ", "く", INI, GV, Negative),
    r("がぬ", "ぐ", INI, GV, Negative),
    r("さぬ", "す", INI, GV, Negative),
    r("たぬ", "つ", INI, GV, Negative),
    r("なぬ", "ぬ", INI, GV, Negative),
    r("ばぬ", "ぶ", INI, GV, Negative),
    r("まぬ", "む", INI, GV, Negative),
    r("らぬ", "る", INI, GV, Negative),
    r("ぬ", "る", INI, IV, Negative),
    r("こぬ", "くる", INI, KV, Negative),
    r("来ぬ", "来る", INI, KV, Negative),
    r("せぬ", "する", INI, SV, Negative),

    // -zu.
    r("わず", "う", INI, GV, Zu),
    r("かず", "く", INI, GV, Zu),
    r("がず", "ぐ", INI, GV, Zu),
    r("さず", "す", INI, GV, Zu),
    r("たず", "つ", INI, GV, Zu),
    r("なず", "ぬ", INI, GV, Zu),
    r("ばず", "ぶ", INI, GV, Zu),
    r("まず", "む", INI, GV, Zu),
    r("らず", "る", INI, GV, Zu),
    r("ず", "る", INI, IV, Zu),
    r("こず", "くる", INI, KV, Zu),
    r("来ず", "来る", INI, KV, Zu),
    r("せず", "する", INI, SV, Zu),

    // Plain past.
    r("行った", "行く", INI, GV, Past),
    r("いった", "いく", INI, GV, Past),
    r("かった", "い", IA | INI, IA, Past),
    r("った", "う", INI, GV, Past),
    r("った", "つ", INI, GV, Past),
    r("った", "る", INI, GV, Past),
    r("いた", "く", INI, GV, Past),
    r("いだ", "ぐ", INI, GV, Past),
    r("した", "す", INI, GV, Past),
    r("んだ", "ぬ", INI, GV, Past),
    r("んだ", "ぶ", INI, GV, Past),
    r("んだ", "む", INI, GV, Past),
    r("た", "る", INI, IV, Past),
    r("きた", "くる", INI, KV, Past),
    r("来た", "来る", INI, KV, Past),
    r("した", "する", INI, SV, Past),

    // Te-form.
    r("行って", "行く", INI, GV, Te),
    r("いって", "いく", INI, GV, Te),
    r("くて", "い", IA | INI, IA, Te),
    r("って", "う", INI, GV, Te),
    r("って", "つ", INI, GV, Te),
    r("って", "る", INI, GV, Te),
    r("いて", "く", INI, GV, Te),
    r("いで", "ぐ", INI, GV, Te),
    r("して", "す", INI, GV, Te),
    r("んで", "ぬ", INI, GV, Te),
    r("んで", "ぶ", INI, GV, Te),
    r("んで", "む", INI, GV, Te),
    r("て", "る", INI, IV, Te),
    r("きて", "くる", INI, KV, Te),
    r("来て", "来る", INI, KV, Te),
    r("して", "する", INI, SV, Te),

    // -ba conditional. れば resolves every verb class at once:
    // 走れば, 食べれば, くれば and すれば all strip to ~る.
    r("ければ", "い", INI, IA, Ba),
    r("えば", "う", INI, GV, Ba),
    r("けば", "く", INI, GV, Ba),
    r("げば", "ぐ", INI, GV, Ba),
    r("せば", "す", INI, GV, Ba),
    r("てば", "つ", INI, GV, Ba),
    r("ねば", "ぬ", INI, GV, Ba),
    r("べば", "ぶ", INI, GV, Ba),
    r("めば", "む", INI, GV, Ba),
    r("れば", "る", INI, IV | GV | KV | SV, Ba),

    // Volitional.
    r("こよう", "くる", INI, KV, Volitional),
    r("来よう", "来る", INI, KV, Volitional),
    r("しよう", "する", INI, SV, Volitional),
    r("かろう", "い", INI, IA, Volitional),
    r("おう", "う", INI, GV, Volitional),
    r("こう", "く", INI, GV, Volitional),
    r("ごう", "ぐ", INI, GV, Volitional),
    r("そう", "す", INI, GV, Volitional),
    r("とう", "つ", INI, GV, Volitional),
    r("のう", "ぬ", INI, GV, Volitional),
    r("ぼう", "ぶ", INI, GV, Volitional),
    r("もう", "む", INI, GV, Volitional),
    r("ろう", "る", INI, GV, Volitional),
    r("よう", "る", INI, IV, Volitional),

    // Imperative.
    r("こい", "くる", INI, KV, Imperative),
    r("来い", "来る", INI, KV, Imperative),
    r("しろ", "する", INI, SV, Imperative),
    r("せよ", "する", INI, SV, Imperative),
    r("え", "う", INI, GV, Imperative),
    r("け", "く", INI, GV, Imperative),
    r("げ", "ぐ", INI, GV, Imperative),
    r("せ", "す", INI, GV, Imperative),
    r("て", "つ", INI, GV, Imperative),
    r("ね", "ぬ", INI, GV, Imperative),
    r("べ", "ぶ", INI, GV, Imperative),
    r("め", "む", INI, GV, Imperative),
    r("れ", "る", INI, GV, Imperative),
    r("ろ", "る", INI, IV, Imperative),
    r("よ", "る", INI, IV, Imperative),

    // Negative imperative and the する noun reduction.
    r("な", "", INI, IV | GV | KV | SV, ImperativeNegative),
    r("する", "", SV | INI, NV, SuruNoun),

    // Masu stem, godan rows and the irregular stems.
    r("い", "う", INI, GV, MasuStem),
    r("き", "く", INI, GV, MasuStem),
    r("ぎ", "ぐ", INI, GV, MasuStem),
    r("し", "す", INI, GV, MasuStem),
    r("ち", "つ", INI, GV, MasuStem),
    r("に", "ぬ", INI, GV, MasuStem),
    r("び", "ぶ", INI, GV, MasuStem),
    r("み", "む", INI, GV, MasuStem),
    r("り", "る", INI, GV, MasuStem),
    r("き", "くる", INI, KV, MasuStem),
    r("来", "来る", INI, KV, MasuStem),
    r("し", "する", INI, SV, MasuStem),

    // Masu stem of an ichidan verb is the word minus る, so any
    // i-row or e-row final kana may hide one.
    r("い", "いる", INI, IV, MasuStem),
    r("え", "える", INI, IV, MasuStem),
    r("き", "きる", INI, IV, MasuStem),
    r("け", "ける", INI, IV, MasuStem),
    r("ぎ", "ぎる", INI, IV, MasuStem),
    r("げ", "げる", INI, IV, MasuStem),
    r("し", "しる", INI, IV, MasuStem),
    r("せ", "せる", INI, IV, MasuStem),
    r("じ", "じる", INI, IV, MasuStem),
    r("ぜ", "ぜる", INI, IV, MasuStem),
    r("ち", "ちる", INI, IV, MasuStem),
    r("て", "てる", INI, IV, MasuStem),
    r("ぢ", "ぢる", INI, IV, MasuStem),
    r("で", "でる", INI, IV, MasuStem),
    r("に", "にる", INI, IV, MasuStem),
    r("ね", "ねる", INI, IV, MasuStem),
    r("ひ", "ひる", INI, IV, MasuStem),
    r("へ", "へる", INI, IV, MasuStem),
    r("び", "びる", INI, IV, MasuStem),
    r("べ", "べる", INI, IV, MasuStem),
    r("ぴ", "ぴる", INI, IV, MasuStem),
    r("ぺ", "ぺる", INI, IV, MasuStem),
    r("み", "みる", INI, IV, MasuStem),
    r("め", "める", INI, IV, MasuStem),
    r("り", "りる", INI, IV, MasuStem),
    r("れ", "れる", INI, IV, MasuStem),

    // Adjective one-offs: adverbial く, nominalizing さ and the
    // classical attributive き.
    r("く", "い", IA | INI, IA, Adv),
    r("さ", "い", IA | INI, IA, Noun),
    r("き", "い", IA | INI, IA, Ki),
];

lazy_static! {
    static ref RULE_GROUPS: Vec<DeinflectRuleGroup> = build_groups();
}

/// The rule table partitioned by suffix length.
///
/// Built once on first use and cached for the lifetime of the
/// process; repeated calls return the same structure. Groups appear
/// in the order their length is first encountered while scanning the
/// table.
pub fn rule_groups() -> &'static [DeinflectRuleGroup] {
    &RULE_GROUPS
}

fn build_groups() -> Vec<DeinflectRuleGroup> {
    let mut groups: Vec<DeinflectRuleGroup> = Vec::new();

    for rule in RULES {
        debug_assert!(!rule.from.is_empty());

        match groups.iter_mut().find(|g| g.from_len == rule.from.len()) {
            Some(group) => group.rules.push(*rule),
            None => groups.push(DeinflectRuleGroup {
                from_len: rule.from.len(),
                rules: vec![*rule],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_suffixes_are_never_empty() {
        assert!(RULES.iter().all(|rule| !rule.from.is_empty()));
    }

    #[test]
    fn universal_mask_matches_every_rule() {
        assert!(RULES
            .iter()
            .all(|rule| rule.from_type() & word_type::ALL != 0));
    }

    #[test]
    fn initial_bit_never_produced() {
        // Only the raw input may carry the unconstrained bit.
        assert!(RULES
            .iter()
            .all(|rule| rule.to_type() & word_type::INITIAL == 0));
    }

    #[test]
    fn to_types_are_never_empty() {
        assert!(RULES.iter().all(|rule| rule.to_type() != 0));
    }

    #[test]
    fn groups_are_uniform_and_complete() {
        let groups = rule_groups();

        let grouped: usize = groups.iter().map(|g| g.rules.len()).sum();
        assert_eq!(grouped, RULES.len());

        for group in groups {
            assert!(group
                .rules
                .iter()
                .all(|rule| rule.from.len() == group.from_len));
        }

        // Group lengths are distinct.
        for (i, group) in groups.iter().enumerate() {
            assert!(groups[i + 1..]
                .iter()
                .all(|other| other.from_len != group.from_len));
        }
    }

    #[test]
    fn grouping_is_built_once() {
        let first = rule_groups();
        let second = rule_groups();
        assert!(std::ptr::eq(first, second));
    }
}
