//! Scenario: Fix a Broken Export and Release Again
//!
//! Journey: The first export fails halfway (kicad-cli crashes on the
//! pick-and-place step). The engineer fixes the cause and re-runs.
//!
//! Steps:
//! 1. A previous export succeeded and left a manifest
//! 2. `fabexport release` fails; the old manifest is gone and no zip is written
//! 3. The cause is fixed; `fabexport release` succeeds
//! 4. A second release yields the same archive bytes
//!
//! Success Criteria:
//! - A failed run never leaves a manifest claiming success
//! - Reruns converge on identical output

use crate::common::*;
use crate::{assert_exported, assert_failed, assert_not_exported, assert_succeeded};

#[test]
fn scenario_failed_export_then_successful_release() {
    let env = TestEnv::new();

    // Step 1
    assert_succeeded!(env.run(&[]));
    assert_exported!(env, "output/manifest.json");

    // Step 2
    let result = env.run_with_env(&["release"], &[("FAKE_KICAD_FAIL", "pos")]);
    assert_failed!(result);
    assert_not_exported!(env, "output/manifest.json");
    assert_not_exported!(env, "output/RPI_Cam3_RL_Gerbers.zip");

    // Step 3: fixed
    let result = env.run(&["release"]);
    assert_succeeded!(result);
    assert_exported!(env, "output/manifest.json");
    let first = std::fs::read(env.project_path("output/RPI_Cam3_RL_Gerbers.zip")).unwrap();

    // Step 4: converge
    assert_succeeded!(env.run(&["release"]));
    let second = std::fs::read(env.project_path("output/RPI_Cam3_RL_Gerbers.zip")).unwrap();
    assert_eq!(first, second);
}
