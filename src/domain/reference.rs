//! Static reference data for the filter form: location list, gender
//! code/label pairs and plan labels. Inputs to the pipeline, not logic.

pub static LOCATIONS: &[&str] = &[
    "Berlin",
    "Frankfurt",
    "Hamburg",
    "Köln",
    "München",
    "Stuttgart",
];

/// Gender code -> display label, in display order. The empty code ("any")
/// is not listed; it is the default state, not an option.
pub static GENDERS: &[(&str, &str)] = &[("m", "Männlich"), ("w", "Weiblich")];

/// Plan labels. Selectable in the state but currently inert: not part of
/// the query and not a fetch trigger.
pub static PLANS: &[&str] = &[
    "Direktzusage",
    "Pensionskasse",
    "Unterstützungskasse",
];

pub fn gender_label(code: &str) -> Option<&'static str> {
    GENDERS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}
