//! Rendering targets.
//!
//! A [`RenderTarget`] names one output dialect. [`RenderTarget::Standard`] is
//! the canonical target; every other target is a vendor variant identified by
//! its textual prefix (`-webkit-`, `-moz-`, ...).
//!
//! [`TargetSet`] is the small ordered set used by values to declare which
//! non-canonical targets they require. Iteration always follows enum
//! declaration order, which is the order property lines are fanned out in.

/// An output dialect a value can be rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderTarget {
    /// Unprefixed, standard CSS.
    Standard,
    /// Gecko (`-moz-`).
    Mozilla,
    /// Blink and WebKit (`-webkit-`).
    Webkit,
    /// Safari specific WebKit spellings (`-webkit-`).
    Safari,
    /// Internet Explorer and legacy Edge (`-ms-`).
    MicrosoftIE,
    /// JavaFX stylesheets (`-fx-`).
    JavaFx,
}

impl RenderTarget {
    /// All targets, in declaration order.
    pub const ALL: [RenderTarget; 6] = [
        RenderTarget::Standard,
        RenderTarget::Mozilla,
        RenderTarget::Webkit,
        RenderTarget::Safari,
        RenderTarget::MicrosoftIE,
        RenderTarget::JavaFx,
    ];

    /// Returns the textual prefix for this target (empty for [`RenderTarget::Standard`]).
    pub const fn prefix(self) -> &'static str {
        match self {
            RenderTarget::Standard => "",
            RenderTarget::Mozilla => "-moz-",
            RenderTarget::Webkit | RenderTarget::Safari => "-webkit-",
            RenderTarget::MicrosoftIE => "-ms-",
            RenderTarget::JavaFx => "-fx-",
        }
    }

    /// Returns true for the single canonical target.
    pub const fn is_canonical(self) -> bool {
        matches!(self, RenderTarget::Standard)
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// An ordered set of [`RenderTarget`]s.
///
/// # Example
///
/// ```rust
/// use stylist::{RenderTarget, TargetSet};
///
/// let set = TargetSet::of(&[RenderTarget::Safari, RenderTarget::Webkit]);
/// let order: Vec<_> = set.iter().collect();
/// assert_eq!(order, vec![RenderTarget::Webkit, RenderTarget::Safari]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TargetSet(u8);

impl TargetSet {
    /// The empty set.
    pub const EMPTY: TargetSet = TargetSet(0);

    /// Creates an empty set.
    pub const fn new() -> Self {
        TargetSet(0)
    }

    /// Creates a set from a slice of targets.
    pub fn of(targets: &[RenderTarget]) -> Self {
        targets.iter().copied().collect()
    }

    /// Returns a copy of this set with `target` added.
    pub const fn with(self, target: RenderTarget) -> Self {
        TargetSet(self.0 | target.bit())
    }

    /// Adds a target.
    pub fn insert(&mut self, target: RenderTarget) {
        self.0 |= target.bit();
    }

    /// Returns true if `target` is in the set.
    pub const fn contains(self, target: RenderTarget) -> bool {
        self.0 & target.bit() != 0
    }

    /// Returns the union of two sets.
    pub const fn union(self, other: TargetSet) -> Self {
        TargetSet(self.0 | other.0)
    }

    /// Returns true if no target is in the set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of targets in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the targets in declaration order.
    pub fn iter(self) -> impl Iterator<Item = RenderTarget> {
        RenderTarget::ALL
            .into_iter()
            .filter(move |target| self.contains(*target))
    }

    /// The targets a property line is emitted for: canonical first, then
    /// every required target in declaration order.
    pub fn fan_out(self) -> impl Iterator<Item = RenderTarget> {
        self.with(RenderTarget::Standard).iter()
    }
}

impl FromIterator<RenderTarget> for TargetSet {
    fn from_iter<I: IntoIterator<Item = RenderTarget>>(iter: I) -> Self {
        let mut set = TargetSet::new();
        for target in iter {
            set.insert(target);
        }
        set
    }
}

impl From<RenderTarget> for TargetSet {
    fn from(target: RenderTarget) -> Self {
        TargetSet::new().with(target)
    }
}

impl<const N: usize> From<[RenderTarget; N]> for TargetSet {
    fn from(targets: [RenderTarget; N]) -> Self {
        targets.into_iter().collect()
    }
}
