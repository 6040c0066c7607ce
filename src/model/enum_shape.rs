//! Enum shapes and the sequential fast path
//!
//! An enum whose member values are exactly `0..n` can be formatted by
//! indexing a name table with the value instead of comparing against each
//! member. The classification depends only on the member list, so it is
//! memoized process-wide keyed by that list.
//!
//! Entries are never evicted; the cache holds one entry per distinct enum
//! shape seen by the process.

use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::base::Name;

/// A declared enum member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumMember {
    pub name: Name,
    pub value: i64,
}

impl EnumMember {
    pub fn new(name: impl Into<Name>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// How generated code maps between enum values and names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum EnumDispatch {
    /// Values are `0..n`: index a name table with the value
    Sequential,
    /// Compare against each member
    Search,
}

/// Ordered member list of an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumShape {
    pub members: Vec<EnumMember>,
}

impl EnumShape {
    pub fn new(members: impl IntoIterator<Item = EnumMember>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Dispatch strategy for this member list (memoized)
    pub fn dispatch(&self) -> EnumDispatch {
        enum_dispatch(&self.members)
    }

    /// Length of the shortest member name, in characters
    pub fn shortest_name_len(&self) -> Option<usize> {
        self.members.iter().map(|m| m.name.chars().count()).min()
    }
}

type DispatchCache = RwLock<FxHashMap<Box<[EnumMember]>, EnumDispatch>>;

static DISPATCH_CACHE: LazyLock<DispatchCache> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// Classify a member list, consulting the structural cache first.
pub fn enum_dispatch(members: &[EnumMember]) -> EnumDispatch {
    if let Some(dispatch) = DISPATCH_CACHE.read().get(members) {
        trace!(members = members.len(), ?dispatch, "enum dispatch cache hit");
        return *dispatch;
    }

    let dispatch = classify_members(members);
    DISPATCH_CACHE.write().entry(members.into()).or_insert(dispatch);
    dispatch
}

/// Pure classification: sequential iff the values are a permutation of `0..n`.
pub fn classify_members(members: &[EnumMember]) -> EnumDispatch {
    if members.is_empty() {
        return EnumDispatch::Search;
    }

    let mut seen = vec![false; members.len()];
    for member in members {
        let slot = usize::try_from(member.value)
            .ok()
            .and_then(|idx| seen.get_mut(idx));
        match slot {
            Some(slot) if !*slot => *slot = true,
            _ => return EnumDispatch::Search,
        }
    }
    EnumDispatch::Sequential
}
