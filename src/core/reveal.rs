//! Scroll reveal orchestrator
//!
//! Elements carrying one of the reveal role classes start hidden (transparent,
//! pushed down a few pixels) and fade into place the first time they scroll
//! into view. Elements sharing an enclosing section are staggered so that a
//! row of cards enters one after another instead of all at once.
//!
//! The orchestrator never touches the DOM directly. It drives a [`RevealHost`],
//! which the browser layer implements on top of `IntersectionObserver` and
//! which tests implement in memory.
//!
//! # Lifecycle
//!
//! 1. [`RevealOrchestrator::init`] enumerates targets, groups them, hides them
//!    and subscribes each one.
//! 2. The host forwards intersection events to [`RevealHandle::on_intersection`].
//! 3. The first intersecting event for an element adds the visible class and
//!    unsubscribes it. Later events for that element are ignored.

use std::time::Duration;

use super::config::RevealConfig;

/// Capped linear stagger: `min(index * step, cap)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerPolicy {
    pub step: Duration,
    pub cap: Duration,
}

impl StaggerPolicy {
    pub fn new(step: Duration, cap: Duration) -> Self {
        Self { step, cap }
    }

    /// Delay for the element at `index` within its group
    pub fn delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.step.saturating_mul(index).min(self.cap)
    }
}

impl Default for StaggerPolicy {
    fn default() -> Self {
        Self::from(&RevealConfig::default())
    }
}

impl From<&RevealConfig> for StaggerPolicy {
    fn from(config: &RevealConfig) -> Self {
        Self::new(
            Duration::from_millis(config.stagger_step_ms as u64),
            Duration::from_millis(config.stagger_cap_ms as u64),
        )
    }
}

/// Inline style applied to an element while it waits to be revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenStyle {
    pub offset_px: u32,
    pub duration: Duration,
    pub delay: Duration,
}

impl HiddenStyle {
    pub const OPACITY: &'static str = "0";

    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }

    /// CSS `transition` value animating opacity and transform together
    pub fn transition(&self) -> String {
        let duration = self.duration.as_millis();
        let delay = self.delay.as_millis();
        format!(
            "opacity {duration}ms ease {delay}ms, transform {duration}ms ease {delay}ms"
        )
    }
}

/// Position of an element within the reveal plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Group number, in order of first appearance
    pub group: usize,
    /// Position within the group, 0-based
    pub index: usize,
}

/// Partition keys into groups by first-seen order.
///
/// Returns one placement per input key, in input order. Keys only need
/// equality, so hosts can use DOM nodes as keys directly.
pub fn plan_groups<K: PartialEq>(keys: impl IntoIterator<Item = K>) -> Vec<Placement> {
    let mut groups: Vec<(K, usize)> = Vec::new();
    let mut placements = Vec::new();

    for key in keys {
        let group = match groups.iter().position(|(k, _)| *k == key) {
            Some(pos) => pos,
            None => {
                groups.push((key, 0));
                groups.len() - 1
            }
        };
        let slot = &mut groups[group].1;
        placements.push(Placement {
            group,
            index: *slot,
        });
        *slot += 1;
    }

    placements
}

/// Page access needed by the orchestrator
pub trait RevealHost {
    type Element: Clone + PartialEq;
    type GroupKey: PartialEq;

    /// Elements matching `selector` under the host's root, in document order
    fn targets(&self, selector: &str) -> Vec<Self::Element>;

    /// Key of the structural container the element is staggered within
    fn group_key(&self, element: &Self::Element) -> Self::GroupKey;

    /// Called once before the first [`RevealHost::watch`], and only when
    /// there is at least one element to watch
    fn prepare_watch(&mut self, _count: usize) {}

    /// Put the element into its hidden starting state
    fn hide(&mut self, element: &Self::Element, style: &HiddenStyle);

    /// Subscribe to intersection events; `false` when watching is unavailable
    fn watch(&mut self, element: &Self::Element) -> bool;

    /// Move the element into its final state
    fn reveal(&mut self, element: &Self::Element, class: &str);

    fn unwatch(&mut self, element: &Self::Element);

    /// Tear down the underlying subscription mechanism
    fn disconnect(&mut self) {}
}

/// A single element under the orchestrator's control
#[derive(Debug, Clone)]
pub struct WatchedElement<E> {
    pub element: E,
    pub placement: Placement,
    pub delay: Duration,
    pub revealed: bool,
    pub watching: bool,
}

/// Entry point for setting up scroll reveal on a host
pub struct RevealOrchestrator;

impl RevealOrchestrator {
    /// Enumerate, group, hide and subscribe every target on the host.
    ///
    /// An empty page yields a handle with nothing watched.
    pub fn init<H: RevealHost>(mut host: H, config: &RevealConfig) -> RevealHandle<H> {
        let targets = host.targets(&config.selector());
        let placements = plan_groups(targets.iter().map(|el| host.group_key(el)));
        let stagger = StaggerPolicy::from(config);
        if !targets.is_empty() {
            host.prepare_watch(targets.len());
        }

        let mut watched = Vec::with_capacity(targets.len());
        for (element, placement) in targets.into_iter().zip(placements) {
            let delay = stagger.delay(placement.index);
            host.hide(
                &element,
                &HiddenStyle {
                    offset_px: config.offset_px,
                    duration: Duration::from_millis(config.duration_ms as u64),
                    delay,
                },
            );
            let watching = host.watch(&element);
            watched.push(WatchedElement {
                element,
                placement,
                delay,
                revealed: false,
                watching,
            });
        }

        let groups = watched
            .iter()
            .map(|w| w.placement.group + 1)
            .max()
            .unwrap_or(0);
        let unwatched = watched.iter().filter(|w| !w.watching).count();
        if unwatched > 0 {
            tracing::warn!(
                "scroll reveal: {} of {} elements could not be watched and stay hidden",
                unwatched,
                watched.len()
            );
        }
        tracing::debug!(
            "scroll reveal: {} elements in {} groups",
            watched.len(),
            groups
        );

        RevealHandle {
            host,
            visible_class: config.visible_class.clone(),
            watched,
        }
    }
}

/// Disposable handle owning the host and per-element reveal state.
///
/// Dropping the handle leaves every subscription in place; only
/// [`RevealHandle::dispose`] unsubscribes.
pub struct RevealHandle<H: RevealHost> {
    host: H,
    visible_class: String,
    watched: Vec<WatchedElement<H::Element>>,
}

impl<H: RevealHost> RevealHandle<H> {
    /// Handle an intersection event for `element`.
    ///
    /// Returns `true` only when this call revealed the element.
    pub fn on_intersection(&mut self, element: &H::Element, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let Some(entry) = self.watched.iter_mut().find(|w| w.element == *element) else {
            return false;
        };
        if entry.revealed {
            return false;
        }

        self.host.reveal(&entry.element, &self.visible_class);
        if entry.watching {
            self.host.unwatch(&entry.element);
            entry.watching = false;
        }
        entry.revealed = true;
        true
    }

    pub fn is_revealed(&self, element: &H::Element) -> bool {
        self.watched
            .iter()
            .any(|w| w.element == *element && w.revealed)
    }

    /// Number of elements still subscribed
    pub fn watching_count(&self) -> usize {
        self.watched.iter().filter(|w| w.watching).count()
    }

    pub fn elements(&self) -> &[WatchedElement<H::Element>] {
        &self.watched
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Unsubscribe everything still pending and release the host.
    ///
    /// Elements that were never revealed keep their hidden style.
    pub fn dispose(mut self) -> H {
        for entry in self.watched.iter_mut().filter(|w| w.watching) {
            self.host.unwatch(&entry.element);
            entry.watching = false;
        }
        self.host.disconnect();
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_stagger_ramp() {
        let policy = StaggerPolicy::default();
        assert_eq!(policy.delay(0), ms(0));
        assert_eq!(policy.delay(1), ms(30));
        assert_eq!(policy.delay(2), ms(60));
        assert_eq!(policy.delay(5), ms(150));
    }

    #[test]
    fn test_stagger_cap() {
        let policy = StaggerPolicy::default();
        for index in 5..100 {
            assert_eq!(policy.delay(index), ms(150));
        }
        assert_eq!(policy.delay(usize::MAX), ms(150));
    }

    #[test]
    fn test_plan_groups_first_seen_order() {
        let placements = plan_groups(["a", "a", "b", "a", "c", "b"]);
        let pairs: Vec<_> = placements.iter().map(|p| (p.group, p.index)).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0), (0, 2), (2, 0), (1, 1)]);
    }

    #[test]
    fn test_plan_groups_empty() {
        assert!(plan_groups(Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn test_hidden_style_strings() {
        let style = HiddenStyle {
            offset_px: 20,
            duration: ms(300),
            delay: ms(60),
        };
        assert_eq!(style.transform(), "translateY(20px)");
        assert_eq!(
            style.transition(),
            "opacity 300ms ease 60ms, transform 300ms ease 60ms"
        );
    }
}
