//! Grammatical transformations recognized by the deinflector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grammatical transformation undone by a deinflection rule.
///
/// Candidates record, for every derivation that reaches them, the
/// chain of transformations between the input and the candidate. The
/// engine only emits tags; turning a tag into a localized display
/// string is up to the presentation layer. `Display` renders the
/// customary English gloss.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    PolitePastNegative,
    PoliteNegative,
    PoliteVolitional,
    Chau,
    Sugiru,
    Nasai,
    PolitePast,
    Tara,
    Tari,
    Causative,
    PotentialOrPassive,
    Toku,
    Sou,
    Tai,
    Polite,
    Past,
    Negative,
    Ba,
    Volitional,
    CausativePassive,
    Te,
    Zu,
    Imperative,
    MasuStem,
    Adv,
    Noun,
    SuruNoun,
    ImperativeNegative,
    Continuous,
    Ki,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let gloss = match self {
            Reason::PolitePastNegative => "polite past negative",
            Reason::PoliteNegative => "polite negative",
            Reason::PoliteVolitional => "polite volitional",
            Reason::Chau => "-chau",
            Reason::Sugiru => "-sugiru",
            Reason::Nasai => "-nasai",
            Reason::PolitePast => "polite past",
            Reason::Tara => "-tara",
            Reason::Tari => "-tari",
            Reason::Causative => "causative",
            Reason::PotentialOrPassive => "potential or passive",
            Reason::Toku => "-te oku",
            Reason::Sou => "-sou",
            Reason::Tai => "-tai",
            Reason::Polite => "polite",
            Reason::Past => "past",
            Reason::Negative => "negative",
            Reason::Ba => "-ba",
            Reason::Volitional => "volitional",
            Reason::CausativePassive => "causative passive",
            Reason::Te => "-te",
            Reason::Zu => "-zu",
            Reason::Imperative => "imperative",
            Reason::MasuStem => "masu stem",
            Reason::Adv => "adv",
            Reason::Noun => "noun",
            Reason::SuruNoun => "suru noun",
            Reason::ImperativeNegative => "imperative negative",
            Reason::Continuous => "continuous",
            Reason::Ki => "-ki",
        };

        f.write_str(gloss)
    }
}
