// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use crate::failure::Failure;

use std::io::stdout;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use structopt::StructOpt;

mod list;

pub use self::list::List;

pub trait Command {
    fn execute(self) -> anyhow::Result<()>;
}

#[derive(StructOpt, Debug)]
#[structopt(about = "lists the artifact URLs described by a release index")]
pub struct Main {
    /// The directory holding the indexes [default: the program's directory]
    #[structopt(short, long, parse(from_os_str))]
    root: Option<PathBuf>,

    /// Type of manifest to load (binaries, docker, images or rpm/<name>)
    medium: Option<String>,
}

impl Main {
    fn root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }

        let exe = std::env::current_exe()?;
        match exe.parent() {
            Some(dir) => Ok(dir.into()),
            None => Err(anyhow!("no parent directory for {:?}", exe)),
        }
    }
}

impl Command for Main {
    fn execute(self) -> anyhow::Result<()> {
        let medium = self.medium.clone().ok_or(Failure::MissingMedium)?;

        let list = List {
            root: self.root()?,
            medium,
            output: stdout().lock(),
        };

        list.execute()
    }
}
