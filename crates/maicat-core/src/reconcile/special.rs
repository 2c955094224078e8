use crate::catalog::ChartEntry;
use crate::profile::Profile;

/// Pass 1: overwrite ids (and, where configured, titles) of entries
/// whose image-derived id appears in the profile's special-case table.
pub fn apply_special_cases(catalog: &mut [ChartEntry], profile: &Profile) {
    for entry in catalog.iter_mut() {
        let Some(case) = profile
            .special_cases
            .iter()
            .find(|case| case.image_id == entry.id)
        else {
            continue;
        };

        entry.id = case.id.to_string();
        if let Some(title) = case.title {
            entry.title = title.to_string();
            entry.basic_info.title = title.to_string();
        }
    }
}
