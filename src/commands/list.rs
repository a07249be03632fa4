// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use super::Command;
use crate::index::Index;
use crate::media::{locate, Medium};

use std::io::Write;
use std::path::PathBuf;

use log::{debug, warn};

/// Writes the URL of every artifact in a medium's index, one per line
///
/// The index is loaded before the medium is recognized, so a missing index
/// is reported even for an unknown medium.
#[derive(Debug)]
pub struct List<O: Write> {
    pub root: PathBuf,
    pub medium: String,
    pub output: O,
}

impl<O: Write> Command for List<O> {
    fn execute(self) -> anyhow::Result<()> {
        let path = locate(&self.root, &self.medium);
        let index = Index::load(&path)?;
        debug!("loaded {} sources from {:?}", index.len(), path);
        if index.is_empty() {
            warn!("no sources listed in {:?}", path);
        }

        let medium: Medium = self.medium.parse()?;
        debug!("expanding as {}", medium);

        let mut output = self.output;
        for url in medium.expand(&index) {
            writeln!(output, "{}", url)?;
        }

        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::List;
    use crate::commands::Command;
    use crate::failure::Failure;
    use crate::media::locate;

    use std::fs::{create_dir_all, write};
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const RPMS: &str = r#"
https://packages.example.com/repository:
  rpms:
    - el8/x86_64/foo-1.0.x86_64
    - el8/noarch/bar-2.0.noarch
"#;

    fn root(medium: &str, index: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join(medium);
        create_dir_all(&parent).unwrap();
        write(parent.join("index.yml"), index).unwrap();
        dir
    }

    fn run(root: &Path, medium: &str) -> anyhow::Result<String> {
        let mut output = Vec::new();

        List {
            root: root.into(),
            medium: medium.into(),
            output: &mut output,
        }
        .execute()?;

        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn rpm() {
        let dir = root("rpm/el8", RPMS);
        let output = run(dir.path(), "rpm/el8").unwrap();
        assert_eq!(
            output,
            "https://packages.example.com/repository/el8/x86_64/x86_64/foo-1.0.x86_64.rpm\n\
             https://packages.example.com/repository/el8/noarch/noarch/bar-2.0.noarch.rpm\n"
        );
    }

    #[test]
    fn docker() {
        let dir = root("docker", "http://h:\n  images:\n    app: [\"1.0\", latest]\n");
        let output = run(dir.path(), "docker").unwrap();
        assert_eq!(output, "http://h/app:1.0\nhttp://h/app:latest\n");
    }

    #[test]
    fn empty() {
        let dir = root("binaries", "http://h: {}\n");
        assert_eq!(run(dir.path(), "binaries").unwrap(), "");
    }

    #[test]
    fn idempotent() {
        let dir = root("rpm/el8", RPMS);
        let first = run(dir.path(), "rpm/el8").unwrap();
        let second = run(dir.path(), "rpm/el8").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn not_found() {
        let dir = root("docker", "http://h: {}\n");
        let err = run(dir.path(), "images").unwrap_err();
        assert_eq!(
            err.downcast_ref::<Failure>(),
            Some(&Failure::NotFound(locate(dir.path(), "images")))
        );
        assert_eq!(
            err.to_string(),
            format!("Failed to open index file: {}", dir.path().join("images/index.yml").display())
        );
    }

    #[test]
    fn unknown() {
        let dir = root("bogus", "http://h: {}\n");
        let err = run(dir.path(), "bogus").unwrap_err();
        assert_eq!(err.to_string(), "No case for bogus.");
    }

    #[test]
    fn unknown_without_index() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path(), "bogus").unwrap_err();
        assert_eq!(
            err.downcast_ref::<Failure>(),
            Some(&Failure::NotFound(dir.path().join("bogus").join("index.yml")))
        );
    }

    #[test]
    fn unknown_malformed() {
        let dir = root("bogus", "http://h: [not, a, mapping\n");
        let err = run(dir.path(), "bogus").unwrap_err();
        assert!(err.downcast_ref::<Failure>().is_none());
    }

    #[test]
    fn malformed() {
        let dir = root("images", "http://h:\n  artifacts: [not, a, mapping]\n");
        let err = run(dir.path(), "images").unwrap_err();
        assert!(err.downcast_ref::<Failure>().is_none());
    }
}
