//! Property tests for the output layout.

use std::path::PathBuf;

use proptest::prelude::*;

use fabexport::domain::layout::relative_slash_path;
use fabexport::OutputLayout;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every output path stays under the project's output/ directory,
    /// and the archive sits beside Gerbers/.
    #[test]
    fn outputs_stay_under_output_root(parent in segment(), dir in segment(), name in segment()) {
        let root = PathBuf::from("/").join(&parent).join(&dir);
        let layout = OutputLayout::new(&root, &name, &dir);
        let output = root.join("output");

        for path in [
            layout.gerbers_dir(),
            layout.schematic_pdf(),
            layout.bom_xlsx(),
            layout.top_assembly(),
            layout.render_perspective(),
            layout.drill_file(),
            layout.position_file(),
            layout.manifest(),
            layout.archive(),
        ] {
            prop_assert!(path.starts_with(&output), "{:?} escapes {:?}", path, output);
        }
        let archive = layout.archive();
        let gerbers_dir = layout.gerbers_dir();
        prop_assert_eq!(archive.parent(), gerbers_dir.parent());
    }

    /// PROPERTY: README links never contain the absolute project root.
    #[test]
    fn links_are_relative(dir in segment(), name in segment()) {
        let root = PathBuf::from("/work").join(&dir);
        let layout = OutputLayout::new(&root, &name, &dir);

        let link = layout.link(&layout.render_top());
        prop_assert!(!link.starts_with('/'));
        prop_assert_eq!(link, format!("output/{}_3D_top.png", name));
        prop_assert_eq!(relative_slash_path(&root, &root.join("a").join("b")), "a/b");
    }
}
