//! Construct grammar set for line-scoped markup.

mod builtin;
mod construct;

pub use builtin::builtin_constructs;
pub use construct::{Construct, ConstructKind, Flank, RenderFn, Trim};

use once_cell::sync::Lazy;

/// Process-wide construct table, indexed by `ConstructKind` discriminant
static CONSTRUCTS: Lazy<Vec<Construct>> = Lazy::new(builtin_constructs);

/// All fixpoint constructs, in the order a sweep applies them
pub fn constructs() -> &'static [Construct] {
    &CONSTRUCTS
}

/// The shared definition for one construct kind
pub fn construct(kind: ConstructKind) -> &'static Construct {
    &CONSTRUCTS[kind as usize]
}
