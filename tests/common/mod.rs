#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use booktree::{Book, BookTree, Key};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

/// Compare a level render against `tests/snapshots/<name>`.
///
/// `BOOKTREE_UPDATE_SNAPSHOTS=1` rewrites the file instead.
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var_os("BOOKTREE_UPDATE_SNAPSHOTS").is_some() {
        fs::create_dir_all(snapshot_root()).expect("create snapshot directory");
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("missing snapshot {}", path.display()));
    if let Some((line, want, got)) = first_difference(&expected, actual) {
        panic!(
            "{name} differs at line {line}\n  expected: {want}\n  actual:   {got}\n\
             ({} expected lines, {} actual; BOOKTREE_UPDATE_SNAPSHOTS=1 regenerates)",
            expected.lines().count(),
            actual.lines().count(),
        );
    }
}

/// First 1-based line where two renders disagree, with both sides.
///
/// CRLF endings compare equal to LF. A missing line shows as `<none>`.
pub fn first_difference(expected: &str, actual: &str) -> Option<(usize, String, String)> {
    let mut want = expected.lines().map(|l| l.trim_end_matches('\r'));
    let mut got = actual.lines().map(|l| l.trim_end_matches('\r'));

    for line in 1.. {
        match (want.next(), got.next()) {
            (None, None) => return None,
            (w, g) if w == g => continue,
            (w, g) => {
                let show = |side: Option<&str>| side.unwrap_or("<none>").to_string();
                return Some((line, show(w), show(g)));
            }
        }
    }
    None
}

/// Build a tree by inserting `keys` in order.
pub fn tree_of(keys: &[Key]) -> BookTree {
    let mut tree = BookTree::new();
    tree.extend(keys.iter().copied().map(Book::keyed))
        .expect("insert succeeds");
    tree
}

/// ⌈log2(n + 1)⌉
pub fn balanced_height_bound(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}
