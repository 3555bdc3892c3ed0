use crate::core::aggregate::distinct_countries;
use crate::domain::model::{Gender, MedalRecord};

/// Countries whose medalists are all `M` or all `W`, in first-seen order.
///
/// `X` and `O` medalists are ignored, so a country with only those has no
/// binary gender at all and is left out.
pub fn single_gender_countries(records: &[MedalRecord]) -> Vec<String> {
    distinct_countries(records)
        .into_iter()
        .filter(|country| binary_genders(records, country).len() == 1)
        .map(str::to_string)
        .collect()
}

fn binary_genders(records: &[MedalRecord], country: &str) -> Vec<Gender> {
    let mut genders = Vec::with_capacity(2);
    for record in records
        .iter()
        .filter(|r| r.country == country && r.gender.is_binary())
    {
        if !genders.contains(&record.gender) {
            genders.push(record.gender);
        }
    }
    genders
}
