//! # Merge Rule Set ``{ (Symbol, Symbol) -> Symbol }``

use crate::errors::{WFResult, WordfuseError};
use crate::types::{Symbol, SymbolPair, WFHashMap, fuse_pair};

/// A learned merge: ``(left, right) -> left + right``.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeRule {
    /// The adjacent pair to fuse.
    pub pair: SymbolPair,

    /// The fused symbol.
    pub merged: Symbol,
}

impl MergeRule {
    /// Build the rule for `pair`.
    pub fn new(pair: SymbolPair) -> Self {
        let merged = fuse_pair(&pair);
        Self { pair, merged }
    }
}

/// Merge rules in learned order.
///
/// The position of a rule is its rank; earlier rules have lower ranks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeRuleSet {
    /// Rules in learned order.
    rules: Vec<MergeRule>,

    /// ``{ left -> { right -> rank } }``.
    ///
    /// Nested so lookups can borrow ``&str`` keys.
    ranks: WFHashMap<Symbol, WFHashMap<Symbol, usize>>,
}

impl MergeRuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from pairs in learned order.
    ///
    /// ## Returns
    /// A `Result` containing the rule set, or an error if a pair repeats.
    pub fn from_pairs<I>(pairs: I) -> WFResult<Self>
    where
        I: IntoIterator<Item = SymbolPair>,
    {
        let mut rules = Self::new();
        for pair in pairs {
            rules.try_push(pair)?;
        }
        Ok(rules)
    }

    /// Append the rule for `pair` with the next rank.
    ///
    /// ## Returns
    /// A `Result` containing the new rule, or an error if `pair` already has a rule.
    pub fn try_push(
        &mut self,
        pair: SymbolPair,
    ) -> WFResult<&MergeRule> {
        let rank = self.rules.len();
        let (left, right) = &pair;

        let by_right = self.ranks.entry(left.clone()).or_default();
        if by_right.contains_key(right.as_str()) {
            return Err(WordfuseError::VocabConflict(format!(
                "pair {pair:?} has more than one merge rule"
            )));
        }
        by_right.insert(right.clone(), rank);

        self.rules.push(MergeRule::new(pair));
        Ok(&self.rules[rank])
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the rule set empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules, in learned order.
    pub fn rules(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Iterate over the rules, in learned order.
    pub fn iter(&self) -> core::slice::Iter<'_, MergeRule> {
        self.rules.iter()
    }

    /// Looks up the rank of ``(left, right)``.
    pub fn rank(
        &self,
        left: &str,
        right: &str,
    ) -> Option<usize> {
        self.ranks.get(left)?.get(right).copied()
    }

    /// Looks up the rule for ``(left, right)``.
    pub fn lookup(
        &self,
        left: &str,
        right: &str,
    ) -> Option<&MergeRule> {
        self.rank(left, right).map(|rank| &self.rules[rank])
    }

    /// Looks up the merged symbol for ``(left, right)``.
    pub fn lookup_merged(
        &self,
        left: &str,
        right: &str,
    ) -> Option<&Symbol> {
        self.lookup(left, right).map(|rule| &rule.merged)
    }

    /// Build a ``{ (Symbol, Symbol) -> Symbol }`` map of the rules.
    pub fn to_pair_map(&self) -> WFHashMap<SymbolPair, Symbol> {
        self.rules
            .iter()
            .map(|rule| (rule.pair.clone(), rule.merged.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a MergeRuleSet {
    type Item = &'a MergeRule;
    type IntoIter = core::slice::Iter<'a, MergeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
