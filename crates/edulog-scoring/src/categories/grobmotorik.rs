use super::{Category, Shape};

/// Grobmotorik: no item grid; the worksheet prints balance time and the
/// number of jumps next to the score bar.
pub const CATEGORY: Category = Category {
    id: "grobmotorik",
    label: "Grobmotorik",
    result_key: "grobmotorik",
    score_field: "gm_score",
    shape: Shape::Motor {
        balance_field: "balancieren_sekunden",
        jumps_field: "hueftspruenge",
    },
};
