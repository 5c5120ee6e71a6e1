// Command-line client for an on-chain to-do list
//
// SPDX-License-Identifier: Apache-2.0
//
// Written in 2025 by the Todochain Contributors
//
// Copyright (C) 2025 Todochain Contributors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use amplify::Display;
use anyhow::{bail, Context};
use clap::ValueHint;
use todochain::{
    Config, ListInfo, NoWallet, ObjectId, RpcResolver, Todo, TodoBuilder, TodoRuntime,
    TransactionBlock, POLL_INTERVAL,
};

use crate::Opts;

#[derive(Parser, Clone, PartialEq, Eq, Debug, Display)]
#[display(lowercase)]
pub enum Command {
    /// Write a default configuration file
    Init,

    /// List all to-dos owned by the account
    List,

    /// Print summary statistics for the to-do list
    Stats,

    /// Poll the to-do list periodically, reprinting it on each tick
    #[display("watch")]
    Watch {
        /// Polling period in seconds
        #[clap(short, long, default_value_t = POLL_INTERVAL.as_secs())]
        interval: u64,
    },

    /// Build an unsigned transaction creating a new to-do
    #[display("create")]
    Create {
        /// Text of the new to-do item
        content: String,

        /// File to write the unsigned transaction to instead of stdout
        #[clap(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Build an unsigned transaction toggling completion of a to-do
    #[display("toggle")]
    Toggle {
        /// Id of the to-do object
        id: ObjectId,

        /// File to write the unsigned transaction to instead of stdout
        #[clap(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Build an unsigned transaction replacing the text of a to-do
    #[display("update")]
    Update {
        /// Id of the to-do object
        id: ObjectId,

        /// New text for the item
        content: String,

        /// File to write the unsigned transaction to instead of stdout
        #[clap(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Build an unsigned transaction destroying a to-do
    #[display("delete")]
    Delete {
        /// Id of the to-do object
        id: ObjectId,

        /// File to write the unsigned transaction to instead of stdout
        #[clap(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

impl Command {
    pub fn exec(&self, opts: &Opts) -> anyhow::Result<()> {
        let config = opts.load_config()?;
        match self {
            Command::Init => {
                let path = shellexpand::tilde(&opts.config).into_owned();
                let path = Path::new(&path);
                if path.exists() {
                    bail!("configuration file `{}` already exists", path.display());
                }
                if let Some(dir) = path.parent() {
                    fs::create_dir_all(dir)?;
                }
                config
                    .save(path)
                    .with_context(|| format!("Unable to write `{}`", path.display()))?;
                eprintln!("Configuration written to `{}`", path.display());
            }

            Command::List => {
                let todos = self.fetch(opts, &config)?;
                print_list(&todos);
            }

            Command::Stats => {
                let todos = self.fetch(opts, &config)?;
                let info = ListInfo::new(&todos);
                println!(
                    "{}",
                    serde_yaml::to_string(&info).context("Unable to generate YAML")?
                );
            }

            Command::Watch { interval } => {
                let owner = opts.owner()?;
                let runtime = self.runtime(opts, &config)?;
                let period = Duration::from_secs(*interval);
                loop {
                    match runtime.fetch(&owner) {
                        Ok(todos) => {
                            println!("---");
                            print_list(&todos);
                        }
                        Err(err) => eprintln!("Refresh failed: {err}"),
                    }
                    thread::sleep(period);
                }
            }

            Command::Create { content, output } => {
                let builder = self.builder(&config)?;
                emit(&builder.create(content), output.as_deref())?;
            }

            Command::Toggle { id, output } => {
                let builder = self.builder(&config)?;
                emit(&builder.toggle(id), output.as_deref())?;
            }

            Command::Update { id, content, output } => {
                let builder = self.builder(&config)?;
                emit(&builder.update(id, content), output.as_deref())?;
            }

            Command::Delete { id, output } => {
                let builder = self.builder(&config)?;
                emit(&builder.delete(id), output.as_deref())?;
            }
        }
        Ok(())
    }

    fn runtime(
        &self,
        opts: &Opts,
        config: &Config,
    ) -> anyhow::Result<TodoRuntime<NoWallet, RpcResolver>> {
        let owner = opts.owner()?;
        let resolver = RpcResolver::new(&config.rpc);
        Ok(TodoRuntime::with(config, NoWallet::with(owner), resolver))
    }

    fn fetch(&self, opts: &Opts, config: &Config) -> anyhow::Result<Vec<Todo>> {
        let owner = opts.owner()?;
        let runtime = self.runtime(opts, config)?;
        runtime
            .fetch(&owner)
            .context("Unable to fetch the to-do list")
    }

    fn builder(&self, config: &Config) -> anyhow::Result<TodoBuilder> {
        if !config.is_configured() {
            bail!(
                "the configured package id is still the placeholder; deploy the to-do package \
                 and update the configuration before mutating"
            );
        }
        Ok(TodoBuilder::new(config.package_id.clone()))
    }
}

fn print_list(todos: &[Todo]) {
    if todos.is_empty() {
        eprintln!("No to-dos found");
        return;
    }
    for todo in todos {
        let mark = if todo.completed { 'x' } else { ' ' };
        println!("[{mark}] {}\t{}", todo.id, todo.content);
    }
}

fn emit(tx: &TransactionBlock, output: Option<&Path>) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(tx).context("Unable to generate YAML")?;
    match output {
        Some(path) => {
            fs::write(path, yaml)
                .with_context(|| format!("Unable to write `{}`", path.display()))?;
            eprintln!("Unsigned transaction written to `{}`", path.display());
        }
        None => println!("{yaml}"),
    }
    Ok(())
}
