//! View-model assembly: demographics, company, score and grid merged into
//! one fully populated record per category.

use edulog_core::age::age;
use edulog_core::models::record::{BasicRecord, RawTestResult};
use edulog_core::models::session::Session;
use edulog_core::models::view_model::{
    CommonFields, GridViewModel, Labels, MotorViewModel, ObservationViewModel, SubBands,
    ViewModel,
};
use jiff::civil::Date;

use crate::categories::{Category, Shape};
use crate::classify::classify;
use crate::colorize::colorize_flags;
use crate::thresholds::{self, ResolvedScale};

/// Build the view-model for `category`.
///
/// Never fails: missing thresholds fall back to the unconfigured scale and
/// a missing test result leaves score, assessment and extras at their
/// defaults. `today` is the reference date for the age column.
pub fn assemble(
    category: &Category,
    basic: &BasicRecord,
    session: &Session,
    result: Option<&RawTestResult>,
    today: Date,
) -> ViewModel {
    let parameters = &session.parameters;
    let scale = thresholds::resolve(&parameters.thresholds, &parameters.colors, category.label)
        .unwrap_or_else(|e| {
            tracing::debug!(category = category.id, error = %e, "using unconfigured scale");
            ResolvedScale::unconfigured()
        });

    let (score, assessment) = match result {
        Some(result) => {
            let score = result.number(category.score_field);
            (score, classify(score, &scale.levels))
        }
        None => (0.0, String::new()),
    };

    let birthdate = basic.birthdate();
    let common = CommonFields {
        name: basic.full_name(),
        age: age(&birthdate, today),
        birthdate,
        language: basic.language(),
        since: basic.since(),
        date: basic.date(),
        teacher: basic.teacher(),
        company: session.company_name(),
        location: session.location(),
        min: scale.min,
        max: scale.max,
        score,
        colors: scale.colors,
        ranges: scale.ranges,
        assessment,
        labels: Labels::default(),
        sub_bands: SubBands::default(),
    };

    with_shape(category, common, result)
}

/// The empty record of `category`, with exactly the keys [`assemble`]
/// produces.
pub fn fallback(category: &Category) -> ViewModel {
    with_shape(category, CommonFields::default(), None)
}

fn with_shape(category: &Category, common: CommonFields, result: Option<&RawTestResult>) -> ViewModel {
    match category.shape {
        Shape::Grid { flags } => ViewModel::Grid(GridViewModel {
            common,
            items: colorize_flags(flags, result.and_then(RawTestResult::first_item)),
        }),
        Shape::Motor {
            balance_field,
            jumps_field,
        } => ViewModel::Motor(MotorViewModel {
            common,
            balance_seconds: result.map(|r| r.number(balance_field)).unwrap_or(0.0),
            jump_count: result.map(|r| r.number(jumps_field)).unwrap_or(0.0),
        }),
        Shape::Observation {
            observer_field,
            setting_field,
        } => ViewModel::Observation(ObservationViewModel {
            common,
            observer: result.map(|r| r.text(observer_field)).unwrap_or_default(),
            setting: result.map(|r| r.text(setting_field)).unwrap_or_default(),
        }),
    }
}
