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

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

mod loglevel;
mod opts;
mod command;

use std::process::ExitCode;

use clap::Parser;

pub use crate::command::Command;
pub use crate::loglevel::LogLevel;
pub use crate::opts::Opts;

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run() -> anyhow::Result<()> {
    let opts = Opts::parse();
    LogLevel::from_verbosity_flag_count(opts.verbose).apply();
    trace!("Command-line arguments: {:#?}", &opts);

    debug!("Executing command: {}", opts.command);
    opts.command.exec(&opts)
}
