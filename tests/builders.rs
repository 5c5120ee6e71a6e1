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

use rstest::rstest;
use todochain::{CallArg, ObjectId, TodoBuilder, TransactionBlock};

const PACKAGE: &str = "0x4701dd624a570585650108cb43973ea6";

fn builder() -> TodoBuilder { TodoBuilder::new(PACKAGE.parse().unwrap()) }

fn id(s: &str) -> ObjectId { s.parse().unwrap() }

fn single_call(tx: &TransactionBlock) -> &todochain::MoveCall {
    assert_eq!(tx.calls.len(), 1);
    &tx.calls[0]
}

#[rstest]
#[case("Buy milk")]
#[case("")]
#[case("  leading and trailing  ")]
#[case("multi\nline\ncontent")]
#[case("ünïcödé ✓")]
fn create_keeps_content_verbatim(#[case] content: &str) {
    let tx = builder().create(content);
    let call = single_call(&tx);
    assert_eq!(call.target.to_string(), format!("{PACKAGE}::todo::create_todo"));
    assert_eq!(call.arguments, vec![CallArg::Pure(content.to_owned())]);
}

#[rstest]
#[case("0x1")]
#[case("0xdeadbeef")]
#[case("0x00000000000000000000000000000001")]
fn object_ops_reference_exact_id(#[case] raw: &str) {
    let builder = builder();
    let id = id(raw);

    let toggle = builder.toggle(&id);
    let call = single_call(&toggle);
    assert_eq!(call.target.to_string(), format!("{PACKAGE}::todo::toggle_todo"));
    assert_eq!(call.arguments[0], CallArg::Object(id.clone()));

    let update = builder.update(&id, "rewritten");
    let call = single_call(&update);
    assert_eq!(call.target.to_string(), format!("{PACKAGE}::todo::update_todo"));
    assert_eq!(call.arguments, vec![
        CallArg::Object(id.clone()),
        CallArg::Pure("rewritten".to_owned())
    ]);

    let delete = builder.delete(&id);
    let call = single_call(&delete);
    assert_eq!(call.target.to_string(), format!("{PACKAGE}::todo::delete_todo"));
    assert_eq!(call.arguments, vec![CallArg::Object(id)]);
}

#[test]
fn builders_are_pure() {
    let builder = builder();
    assert_eq!(builder.create("same"), builder.create("same"));
    assert_eq!(builder.toggle(&id("0x1")), builder.toggle(&id("0x1")));
}

#[test]
fn type_filter_targets_deployment() {
    assert_eq!(builder().todo_type().to_string(), format!("{PACKAGE}::todo::Todo"));
}

#[test]
fn unsigned_block_serializes_for_external_signer() {
    let tx = builder().update(&id("0x1"), "Buy milk");
    let yaml = serde_yaml::to_string(&tx).unwrap();
    let restored: TransactionBlock = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(tx, restored);
}
