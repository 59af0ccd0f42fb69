use super::{Category, Shape};

/// Sprachverständnis: understanding of spoken instructions and grammar.
/// Six tasks of rising difficulty, each passed or failed.
pub const CATEGORY: Category = Category {
    id: "sprachverstaendnis",
    label: "Sprachverständnis",
    result_key: "sprachverstaendnis",
    score_field: "sv_score",
    shape: Shape::Grid {
        flags: &[
            "einfache_anweisung",
            "doppelte_anweisung",
            "praepositionen",
            "plural",
            "negation",
            "w_fragen",
        ],
    },
};
