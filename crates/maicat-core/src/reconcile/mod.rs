//! Identity reconciliation: four ordered passes over a freshly
//! normalized catalog.
//!
//! Pass order is part of the contract - later passes may override what
//! earlier ones wrote:
//! 1. special-case id/title overrides
//! 2. cached-catalog id (and, internationally, field) adoption
//! 3. community rating overrides (ratings only, never ids)
//! 4. standard/deluxe cross-id derivation

mod community;
mod cross_id;
mod origin;
mod special;

pub use community::{apply_community_ratings, CommunityEntry};
pub use cross_id::{derive_cross_ids, DELUXE_ID_OFFSET};
pub use origin::adopt_from_origin;
pub use special::apply_special_cases;

use crate::catalog::ChartEntry;
use crate::profile::Profile;

/// Run all four passes in order.
pub fn reconcile(
    catalog: &mut [ChartEntry],
    origin: &[ChartEntry],
    community: &[CommunityEntry],
    profile: &Profile,
) {
    apply_special_cases(catalog, profile);
    adopt_from_origin(catalog, origin, profile);
    apply_community_ratings(catalog, community, profile);
    derive_cross_ids(catalog);
}
