//! Shared output formatting helpers for commands
//!
//! Records headers, JSON builders and human printers reused by the
//! show, similar and analyze commands.

pub mod human;
pub mod json;
pub mod records;

pub use human::{print_neighbors_human, print_prediction_human, print_profile_human};
pub use json::{neighbors_json, prediction_json, profile_json, track_json};
pub use records::{
    print_neighbor_records, print_prediction_records, print_profile_records, print_records_header,
    print_track_record,
};
