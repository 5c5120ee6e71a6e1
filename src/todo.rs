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

use indexmap::IndexMap;
use serde_json::Value;

use crate::{AccountAddress, ObjectId, StructTag};

/// Name of the on-chain module holding the to-do entry functions.
pub const TODO_MODULE: &str = "todo";
/// Name of the on-chain type representing a single to-do item.
pub const TODO_TYPE_NAME: &str = "Todo";

/// Raw owned object as reported by a node: an id, an optional type string
/// and an untyped field bag.
///
/// Field order is preserved exactly as received; the runtime imposes no
/// sorting or deduplication on query results.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObject {
    pub object_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default)]
    pub fields: IndexMap<String, Value>,
}

/// A single to-do item reconstructed from an on-chain object.
///
/// The chain is the only authority over these records: the runtime never
/// stores them, it only re-reads and re-decodes.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: ObjectId,
    pub content: String,
    pub completed: bool,
    pub owner: AccountAddress,
}

impl Todo {
    /// Decodes an untyped field bag into a typed record.
    ///
    /// Fails closed: any shape mismatch — a type string naming a different
    /// type, a missing field, or a field of the wrong kind — yields `None`
    /// instead of an error. An absent type string is accepted, since the
    /// node already applied the type filter server-side.
    pub fn decode(object: &OwnedObject, expected: &StructTag) -> Option<Todo> {
        if let Some(ty) = &object.object_type {
            if !expected.matches(ty) {
                return None;
            }
        }
        let content = object.fields.get("content")?.as_str()?.to_owned();
        let completed = object.fields.get("completed")?.as_bool()?;
        let owner = object.fields.get("owner")?.as_str()?.parse().ok()?;
        Some(Todo {
            id: object.object_id.clone(),
            content,
            completed,
            owner,
        })
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn todo_tag() -> StructTag {
        StructTag::with("0xdead".parse().unwrap(), TODO_MODULE, TODO_TYPE_NAME)
    }

    fn well_formed() -> OwnedObject {
        OwnedObject {
            object_id: "0x1".parse().unwrap(),
            object_type: Some(s!("0xdead::todo::Todo")),
            fields: indexmap::indexmap! {
                s!("content") => json!("Buy milk"),
                s!("completed") => json!(false),
                s!("owner") => json!("0xabc"),
            },
        }
    }

    #[test]
    fn decode_well_formed() {
        let todo = Todo::decode(&well_formed(), &todo_tag()).unwrap();
        assert_eq!(todo.id.as_str(), "0x1");
        assert_eq!(todo.content, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.owner.as_str(), "0xabc");
    }

    #[test]
    fn decode_accepts_untyped() {
        let mut object = well_formed();
        object.object_type = None;
        assert!(Todo::decode(&object, &todo_tag()).is_some());
    }

    #[test]
    fn decode_rejects_foreign_type() {
        let mut object = well_formed();
        object.object_type = Some(s!("0xdead::todo::Archive"));
        assert_eq!(Todo::decode(&object, &todo_tag()), None);
    }

    #[test]
    fn decode_rejects_missing_field() {
        let mut object = well_formed();
        object.fields.shift_remove("completed");
        assert_eq!(Todo::decode(&object, &todo_tag()), None);
    }

    #[test]
    fn decode_rejects_mistyped_field() {
        let mut object = well_formed();
        object.fields["completed"] = json!("yes");
        assert_eq!(Todo::decode(&object, &todo_tag()), None);

        let mut object = well_formed();
        object.fields["owner"] = json!("not-an-address");
        assert_eq!(Todo::decode(&object, &todo_tag()), None);
    }
}
