use super::{Category, Shape};

/// Phonologische Bewusstheit: rhymes, syllables and sounds.
pub const CATEGORY: Category = Category {
    id: "phonologische_bewusstheit",
    label: "Phonologische Bewusstheit",
    result_key: "phonologische_bewusstheit",
    score_field: "pb_score",
    shape: Shape::Grid {
        flags: &[
            "reime",
            "silben",
            "anlaute",
            "endlaute",
            "lautsynthese",
            "lautanalyse",
        ],
    },
};
