//! The fixed functional-test sequence.

use super::step::Step;

/// Clean and rebuild the workspace.
pub const BUILD_COMMAND: &str = "make clean all";

/// List builder containers, for the log.
pub const CONTAINERS_COMMAND: &str = "docker ps -a -f 'name=bldr-*'";

/// Build and run the functional tests.
pub const FUNCTIONAL_COMMAND: &str = "make functional";

/// Build the functional sequence against `workspace`.
///
/// The build and functional steps run in the workspace; the container
/// listing runs wherever the caller is. A missing workspace becomes an
/// empty directory override, so those steps fail before spawning.
pub fn functional_sequence(workspace: Option<&str>) -> Vec<Step> {
    let workspace = workspace.unwrap_or_default();

    vec![
        Step::in_dir("build", BUILD_COMMAND, workspace),
        Step::new("containers", CONTAINERS_COMMAND),
        Step::in_dir("functional", FUNCTIONAL_COMMAND, workspace),
    ]
}
