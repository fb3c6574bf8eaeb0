//! Property tests for source discovery.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use pyseal::domain::services::SourceDiscovery;
use pyseal::{AllowList, MemoryFs};

const FILE_NAMES: &[&str] = &[
    "__init__.py",
    "__main__.py",
    "setup.py",
    "mod.py",
    "mod.c",
    "data.json",
    "x.pyc",
    "x.py.txt",
];

fn relative_file() -> impl Strategy<Value = PathBuf> {
    (
        proptest::collection::vec("[a-c]{1,2}", 0..=3),
        proptest::sample::select(FILE_NAMES),
    )
        .prop_map(|(dirs, name)| {
            let mut path: PathBuf = dirs.iter().collect();
            path.push(name);
            path
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: results are sorted, unique, `.py` only and never allow-listed.
    #[test]
    fn property_discovery_sorted_and_filtered(
        files in proptest::collection::btree_set(relative_file(), 0..24),
    ) {
        let root = Path::new("/r");
        let fs = MemoryFs::with_files(
            files.iter().map(|f| root.join(f)).chain([root.join("__init__.py")]),
        );
        let keep = AllowList::default();

        let found = SourceDiscovery::new(root, keep.clone())
            .discover(&fs, root)
            .unwrap();
        let relative: Vec<&Path> = found.iter().map(|m| m.relative()).collect();

        let mut sorted = relative.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&relative, &sorted);

        for path in &relative {
            prop_assert_eq!(path.extension().and_then(|e| e.to_str()), Some("py"));
            prop_assert!(!keep.keeps(path), "allow-listed {} discovered", path.display());
        }

        let expected = files
            .iter()
            .filter(|f| f.extension().is_some_and(|e| e == "py") && !keep.keeps(f))
            .count();
        prop_assert_eq!(relative.len(), expected);
    }
}
