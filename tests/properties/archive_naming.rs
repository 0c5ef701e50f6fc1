//! Property tests for release archive naming.

use std::path::PathBuf;

use proptest::prelude::*;

use fabexport::{archive_file_name, OutputLayout};

fn dir_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9._ -]{0,31}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The archive name is the directory name plus `_Gerbers.zip`.
    #[test]
    fn archive_name_is_dir_name_with_suffix(dir in dir_name()) {
        let name = archive_file_name(&dir);
        prop_assert!(name.starts_with(&dir));
        prop_assert_eq!(&name[dir.len()..], "_Gerbers.zip");
    }

    /// PROPERTY: The archive depends on the directory name, never the project name.
    #[test]
    fn archive_ignores_project_name(dir in dir_name(), a in "[a-z]{1,12}", b in "[a-z]{1,12}") {
        let root = PathBuf::from("/boards").join(&dir);
        let first = OutputLayout::new(&root, &a, &dir).archive();
        let second = OutputLayout::new(&root, &b, &dir).archive();
        prop_assert_eq!(first, second);
    }
}
