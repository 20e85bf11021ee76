//! Built-in rule functions.
//!
//! Each rule has the [`RuleFn`](super::registry::RuleFn) signature and is
//! registered in [`RuleRegistry::with_builtins`](super::registry::RuleRegistry::with_builtins).

pub mod deployment;
pub mod persistentvolumeclaim;
