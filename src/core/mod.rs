pub mod frames;
pub mod normalize;
pub mod observation;
pub mod palette;
pub mod reindex;
pub mod series;

pub use frames::{DEFAULT_FRAME_LABEL_FORMAT, FrameSequence, frame_label};
pub use normalize::{NegativeCounts, NormalizeOptions, NormalizedData, normalize};
pub use observation::{
    AGGREGATE_CODE, AGGREGATE_ENTITY, DEFAULT_GROUP, EntityMeta, GroupLookup, Observation,
    PopulationTable, RawRecord, RawTable, display_name,
};
pub use palette::{TABLEAU_20, color_for_rank, group_color};
pub use reindex::{ReindexedSeries, reindex_series};
pub use series::{Basis, Metric, Series, SeriesVariable};
