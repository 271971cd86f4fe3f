use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_with::skip_serializing_none;

use crate::pagination::impl_page;
use crate::PageMeta;

/// One property of a scope. On the wire this is a `{"name", "value"}` pair
/// where `name` selects the shape of `value`. Names this client does not know
/// are kept in [`ScopeProperty::Other`].
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(try_from = "RawScopeProperty")]
pub enum ScopeProperty {
    ScopeId(String),
    ScopeType(String),
    Exclusions(Vec<ScopeExclusion>),
    Other {
        name: String,
        value: serde_json::Value,
    },
}

impl ScopeProperty {
    pub fn name(&self) -> &str {
        match self {
            | ScopeProperty::ScopeId(_) => "scope_id",
            | ScopeProperty::ScopeType(_) => "scope_type",
            | ScopeProperty::Exclusions(_) => "exclusions",
            | ScopeProperty::Other { name, .. } => name,
        }
    }
}

#[derive(Deserialize)]
struct RawScopeProperty {
    name: String,
    #[serde(default)]
    value: serde_json::Value,
}

impl TryFrom<RawScopeProperty> for ScopeProperty {
    type Error = serde_json::Error;

    fn try_from(raw: RawScopeProperty) -> Result<Self, Self::Error> {
        let RawScopeProperty { name, value } = raw;
        Ok(match name.as_str() {
            | "scope_id" => {
                ScopeProperty::ScopeId(serde_json::from_value(value)?)
            }
            | "scope_type" => {
                ScopeProperty::ScopeType(serde_json::from_value(value)?)
            }
            | "exclusions" => {
                ScopeProperty::Exclusions(serde_json::from_value(value)?)
            }
            | _ => ScopeProperty::Other { name, value },
        })
    }
}

impl Serialize for ScopeProperty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ScopeProperty", 2)?;
        state.serialize_field("name", self.name())?;
        match self {
            | ScopeProperty::ScopeId(v) | ScopeProperty::ScopeType(v) => {
                state.serialize_field("value", v)?
            }
            | ScopeProperty::Exclusions(v) => {
                state.serialize_field("value", v)?
            }
            | ScopeProperty::Other { value, .. } => {
                state.serialize_field("value", value)?
            }
        }
        state.end()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScopeExclusion {
    pub scope_id: String,
    pub scope_type: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Scope {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub environment: Option<String>,
    pub properties: Option<Vec<ScopeProperty>>,
    pub account_id: Option<String>,
    pub instance_id: Option<String>,
    pub created_by: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_on: Option<DateTime<Utc>>,
    pub attachment_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubScope {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub environment: Option<String>,
    pub properties: Option<Vec<ScopeProperty>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScopePrototype {
    pub name: String,
    pub description: Option<String>,
    pub environment: String,
    pub properties: Vec<ScopeProperty>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScopePatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScopeCollection {
    #[serde(flatten)]
    pub meta: PageMeta,
    #[serde(default)]
    pub scopes: Vec<Scope>,
}

impl_page!(ScopeCollection, scopes, Scope);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubScopeCollection {
    #[serde(flatten)]
    pub meta: PageMeta,
    #[serde(default)]
    pub subscopes: Vec<SubScope>,
}

impl_page!(SubScopeCollection, subscopes, SubScope);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListScopesOptions {
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSubScopesOptions {
    pub scope_id: String,
    pub start: Option<String>,
    pub limit: Option<i64>,
}
