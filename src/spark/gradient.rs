//! Gradient Identity Module
//! Stable per-(instance, category) identifiers binding gradient definitions
//! to the fills that reference them.

use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

// Process-wide source of mount-unique instance numbers.
static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Identifier of one mounted chart instance.
///
/// Allocated on mount, owned by the widget struct until teardown, and never
/// reused while the process lives — so gradient ids derived from it stay
/// stable across re-renders and distinct across sibling charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) fn allocate() -> Self {
        let id = InstanceId(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed));
        trace!(instance = %id, "allocated chart instance id");
        id
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spark-{}", self.0)
    }
}

impl From<InstanceId> for String {
    fn from(id: InstanceId) -> String {
        id.to_string()
    }
}

/// Identifier binding a gradient definition to the fill it feeds.
pub type GradientId = String;

/// Compose the gradient id for one category of one mounted instance.
///
/// The instance component never contains ':', so the pair parses back
/// unambiguously: distinct categories within an instance and the same
/// category across instances always produce distinct ids.
pub fn gradient_id(instance: InstanceId, category: &str) -> GradientId {
    format!("{instance}:{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_categories_get_distinct_ids() {
        let instance = InstanceId::allocate();
        assert_ne!(
            gradient_id(instance, "revenue"),
            gradient_id(instance, "profit")
        );
    }

    #[test]
    fn distinct_instances_get_distinct_ids_for_same_category() {
        let first = InstanceId::allocate();
        let second = InstanceId::allocate();
        assert_ne!(first, second);
        assert_ne!(gradient_id(first, "value"), gradient_id(second, "value"));
    }

    #[test]
    fn id_is_stable_across_repeated_calls() {
        let instance = InstanceId::allocate();
        assert_eq!(gradient_id(instance, "value"), gradient_id(instance, "value"));
    }

    #[test]
    fn awkward_category_names_cannot_collide_across_instances() {
        // "spark-N" never contains ':', so the instance prefix is unambiguous
        let first = InstanceId::allocate();
        let second = InstanceId::allocate();
        let a = gradient_id(first, &format!("{second}:value"));
        let b = gradient_id(second, "value");
        assert_ne!(a, b);
    }
}
