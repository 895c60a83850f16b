mod exclusive_load;
mod exclusive_save;
pub mod file_header;
pub mod history_blob;
pub mod save_error;
mod save_plugin;
pub mod saveable_keys;
pub mod snapshot_codec;

#[cfg(test)]
mod file_header_tests;
#[cfg(test)]
mod save_plugin_tests;

pub use history_blob::{decode_history, encode_history};
pub use save_error::SaveError;
pub use save_plugin::{
    HostSaveData, LoadStatisticsEvent, SaveStatisticsEvent, StatisticsSavePlugin,
    HISTORY_SAVE_KEY,
};
pub use saveable_keys::EXPECTED_SAVEABLE_KEYS;
pub use snapshot_codec::{
    deserialize_snapshot, read_snapshot, serialize_snapshot, write_snapshot, SnapshotReader,
    SnapshotWriter, CURRENT_FORMAT_VERSION,
};
