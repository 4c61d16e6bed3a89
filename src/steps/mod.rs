//! Step definitions and results.
//!
//! - [`Step`] - A command plus an optional working-directory override
//! - [`functional_sequence`] - The fixed build / list / functional-test steps
//! - [`StepResult`] - What happened when a step ran
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use stepseq::steps::functional_sequence;
//!
//! let steps = functional_sequence(Some("/tmp/ws"));
//! let ambient = Path::new("/home/ci");
//!
//! assert_eq!(steps[0].effective_dir(ambient), Path::new("/tmp/ws"));
//! assert_eq!(steps[1].effective_dir(ambient), ambient);
//! ```

pub mod result;
pub mod sequence;
pub mod step;

pub use result::{StepResult, StepStatus};
pub use sequence::{functional_sequence, BUILD_COMMAND, CONTAINERS_COMMAND, FUNCTIONAL_COMMAND};
pub use step::{check_working_dir, Step};
