//! Step sequence execution.

pub mod sequence;

pub use sequence::{
    SequenceOptions, SequenceProgress, SequenceResult, Sequencer, FAILURE_SENTINEL,
};
