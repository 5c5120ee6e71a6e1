// Wallet runtime for an on-chain to-do list
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

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate serde;
#[macro_use]
extern crate log;

mod ids;
mod todo;
mod builder;
mod config;
mod wallet;
mod runtime;
mod info;
pub mod resolvers;

pub use builder::{CallArg, CallTarget, MoveCall, TodoBuilder, TransactionBlock};
pub use config::{Config, ConfigError, PACKAGE_ID_PLACEHOLDER};
pub use ids::{AccountAddress, IdParseError, ObjectId, StructTag};
pub use info::ListInfo;
pub use resolvers::{Resolver, ResolverError, RpcResolver};
pub use runtime::{TodoRuntime, MUTATION_REFRESH_DELAY, POLL_INTERVAL};
pub use todo::{OwnedObject, Todo, TODO_MODULE, TODO_TYPE_NAME};
pub use wallet::{ExecuteError, ExecuteOptions, ExecuteResponse, NoWallet, TxStatus, WalletProvider};
