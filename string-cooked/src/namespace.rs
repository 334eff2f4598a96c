//! Explicit registration of `cooked` as a static member of a string
//! namespace. Nothing is registered until [`install`] is called.

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use crate::cook::cook;
use crate::value::Value;

/// Name `cooked` is installed under.
pub const COOKED: &str = "cooked";

/// Signature shared by every static member: a template plus substitutions.
pub type NativeFunction = fn(&Value, &[Value]) -> crate::error::Result<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyAttributes {
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl PropertyAttributes {
    /// Attributes of built-in methods: writable, configurable, hidden from
    /// enumeration.
    pub const BUILTIN_METHOD: Self = Self {
        writable: true,
        enumerable: false,
        configurable: true,
    };

    pub const FROZEN: Self = Self {
        writable: false,
        enumerable: false,
        configurable: false,
    };
}

#[derive(Debug, Clone)]
pub struct StaticMember {
    pub function: NativeFunction,
    pub attributes: PropertyAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("cannot assign to read only member `{0}`")]
    NotWritable(String),

    #[error("cannot redefine or delete non-configurable member `{0}`")]
    NotConfigurable(String),
}

#[derive(Debug, Clone, Default)]
pub struct StringNamespace {
    members: IndexMap<String, StaticMember>,
}

impl StringNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&StaticMember> {
        self.members.get(name)
    }

    /// Adds or replaces a member. A non-configurable member keeps its
    /// enumerability and stays non-configurable; it may only go from writable
    /// to read only. A read-only, non-configurable member rejects every
    /// redefinition, including one with the same function.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        member: StaticMember,
    ) -> Result<(), NamespaceError> {
        let name = name.into();
        if let Some(existing) = self.members.get(&name)
            && !existing.attributes.configurable
        {
            let current = existing.attributes;
            let next = member.attributes;
            let writable_allowed = current.writable || !next.writable;
            if next.configurable || next.enumerable != current.enumerable || !writable_allowed {
                return Err(NamespaceError::NotConfigurable(name));
            }
            if !current.writable {
                return Err(NamespaceError::NotWritable(name));
            }
        }
        self.members.insert(name, member);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Option<StaticMember>, NamespaceError> {
        match self.members.get(name) {
            Some(member) if !member.attributes.configurable => {
                Err(NamespaceError::NotConfigurable(name.to_string()))
            }
            _ => Ok(self.members.shift_remove(name)),
        }
    }

    /// Member names visible to enumeration, in definition order.
    pub fn enumerable_keys(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .filter(|(_, member)| member.attributes.enumerable)
            .map(|(name, _)| name.as_str())
    }

    /// Invokes `name`, or returns `None` when no such member exists.
    pub fn call(
        &self,
        name: &str,
        template: &Value,
        substitutions: &[Value],
    ) -> Option<crate::error::Result<String>> {
        self.members
            .get(name)
            .map(|member| (member.function)(template, substitutions))
    }
}

/// Installs `cooked` unless the namespace already has a member by that name.
/// Returns whether anything was installed; repeat calls are no-ops.
pub fn install(namespace: &mut StringNamespace) -> bool {
    if namespace.contains(COOKED) {
        debug!("`{COOKED}` already present on string namespace; leaving it in place");
        return false;
    }
    namespace.members.insert(
        COOKED.to_string(),
        StaticMember {
            function: cooked,
            attributes: PropertyAttributes::BUILTIN_METHOD,
        },
    );
    debug!("installed `{COOKED}` on string namespace");
    true
}

fn cooked(template: &Value, substitutions: &[Value]) -> crate::error::Result<String> {
    cook(template, substitutions)
}
