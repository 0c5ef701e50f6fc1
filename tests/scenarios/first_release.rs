//! Scenario: First Fabrication Release
//!
//! Journey: A hardware engineer finishes the RPI_Cam3_RL board and wants to
//! send it to the fab house.
//!
//! Steps:
//! 1. Runs `fabexport check` to confirm kicad-cli and the project are found
//! 2. Runs `fabexport` (or `make`) to export everything
//! 3. Reviews PDFs, BOM spreadsheet and renders in output/
//! 4. Runs `fabexport release` (or `make release`) to get the zip
//!
//! Success Criteria:
//! - Every documented artifact lands in the fixed layout
//! - The zip holds only the Gerber directory contents
//! - The README links resolve relative to the project directory

use std::path::Path;

use crate::common::*;
use crate::{assert_exported, assert_not_exported, assert_succeeded};

#[test]
fn scenario_first_release_complete_journey() {
    let env = TestEnv::new();

    // Step 1: preflight touches nothing
    let result = env.run(&["check"]);
    assert_succeeded!(result);
    assert_not_exported!(env, "output");

    // Step 2: export
    let result = env.run(&[]);
    assert_succeeded!(result);

    // Step 3: the fixed layout is in place
    let output = env.project_path("output");
    let gerbers = env.project_path("output/Gerbers");
    assert!(!files_with_extension(&gerbers, "gbr").is_empty());
    assert_eq!(files_with_extension(&gerbers, "drl"), vec!["RPI_Cam3_RL.drl"]);
    assert_eq!(
        files_with_extension(&output, "pdf"),
        vec![
            "RPI_Cam3_RL_Bottom_Assembly.pdf",
            "RPI_Cam3_RL_Top_Assembly.pdf",
            "RPI_Cam3_RL_schematic.pdf",
        ]
    );
    assert_eq!(files_with_extension(&output, "xlsx"), vec!["RPI_Cam3_RL_BOM.xlsx"]);
    assert_eq!(
        files_with_extension(&output, "png"),
        vec![
            "RPI_Cam3_RL_3D_bottom.png",
            "RPI_Cam3_RL_3D_perspective.png",
            "RPI_Cam3_RL_3D_top.png",
        ]
    );
    assert_exported!(env, "output/RPI_Cam3_RL_schematic_svg/RPI_Cam3_RL.svg");
    assert_exported!(env, "output/erc_report.txt");
    assert_exported!(env, "output/drc_report.txt");
    assert_not_exported!(env, "output/RPI_Cam3_RL_Gerbers.zip");

    let readme = env.read_project_file("README.md");
    assert!(readme.starts_with("# RPI_Cam3_RL\n"));
    assert!(readme.contains("![](output/RPI_Cam3_RL_3D_top.png)"));
    assert!(readme.contains("[RPI_Cam3_RL_BOM.xlsx](output/RPI_Cam3_RL_BOM.xlsx)"));

    let manifest: serde_json::Value =
        serde_json::from_str(&env.read_project_file("output/manifest.json")).unwrap();
    let listed: Vec<&str> = manifest["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["path"].as_str().unwrap())
        .collect();
    assert!(listed.contains(&"Gerbers/RPI_Cam3_RL.drl"));
    assert!(!listed.contains(&"manifest.json"));

    // Step 4: release
    let result = env.run(&["release"]);
    assert_succeeded!(result);

    let zip = gerbers.parent().unwrap().join("RPI_Cam3_RL_Gerbers.zip");
    assert!(zip.is_file());
    let mut expected: Vec<String> = list_all_files(&gerbers)
        .iter()
        .map(|p| {
            Path::new(p)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    expected.sort();
    assert_eq!(zip_entries(&zip), expected);
}
