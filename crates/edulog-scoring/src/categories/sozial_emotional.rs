use super::{Category, Shape};

pub const CATEGORY: Category = Category {
    id: "sozial_emotional",
    label: "Sozial-emotionale Entwicklung",
    result_key: "sozial_emotional",
    score_field: "se_score",
    shape: Shape::Observation {
        observer_field: "beobachter",
        setting_field: "situation",
    },
};
