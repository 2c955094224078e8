pub mod catalog;
pub mod error;
pub mod feed;
pub mod normalize;
pub mod pipeline;
pub mod profile;
pub mod reconcile;
pub mod record;
pub mod store;
pub mod synth;
pub mod version;

pub use catalog::{BasicInfo, ChartEntry, ChartKind, SubChart};
pub use error::{Error, Result};
pub use feed::FeedClient;
pub use normalize::{normalize_song, parse_level_value};
pub use pipeline::{ChartIdCounter, Pipeline, PipelineSources};
pub use profile::{Profile, RatingScope};
pub use reconcile::{reconcile, CommunityEntry};
pub use record::RawSong;
pub use store::{load_catalog, load_community, load_version_map, save_catalog};
pub use synth::{backfill_versions, drop_delisted, synthesize_master};
pub use version::VersionMap;
