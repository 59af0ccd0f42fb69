use super::{Category, Shape};

pub const CATEGORY: Category = Category {
    id: "feinmotorik",
    label: "Feinmotorik",
    result_key: "feinmotorik",
    score_field: "fm_score",
    shape: Shape::Grid {
        flags: &[
            "stifthaltung",
            "nachspuren",
            "schneiden",
            "falten",
            "faedeln",
            "kneten",
        ],
    },
};
