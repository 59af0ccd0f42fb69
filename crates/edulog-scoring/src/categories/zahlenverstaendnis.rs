use super::{Category, Shape};

/// Mengen- und Zahlenverständnis: counting, comparing and recognizing
/// quantities. Only four tasks, so the grid is shorter than the others.
pub const CATEGORY: Category = Category {
    id: "zahlenverstaendnis",
    label: "Mengen- und Zahlenverständnis",
    result_key: "zahlenverstaendnis",
    score_field: "zv_score",
    shape: Shape::Grid {
        flags: &[
            "zaehlen",
            "mengen_vergleichen",
            "ziffern_erkennen",
            "simultanerfassung",
        ],
    },
};
