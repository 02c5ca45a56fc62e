//! Decides what to present after a completion.

use journey_core::model::TopicId;

use crate::journey::state::ContextSnapshot;

pub struct NextTopicResolver;

impl NextTopicResolver {
    /// First match wins: the server hint, then the positional successor
    /// in the active projection, then `None`, at which point the caller
    /// returns to the topic listing rather than a dead-end screen.
    ///
    /// The hint is authoritative when present; it can encode
    /// cross-category or cross-track sequencing the positional fallback
    /// cannot infer.
    #[must_use]
    pub fn resolve(
        snapshot: &ContextSnapshot,
        completed: TopicId,
        hint: Option<TopicId>,
    ) -> Option<TopicId> {
        if let Some(next) = hint {
            return Some(next);
        }
        let order = snapshot.order();
        let position = order.iter().position(|id| *id == completed)?;
        order.get(position + 1).copied()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use journey_core::model::{NavContext, PhaseId, Progress, Topic, TopicStatus};
    use journey_core::time::fixed_now;

    fn snapshot(ids: &[u64]) -> ContextSnapshot {
        let context = NavContext::flat(PhaseId::new(1));
        let order: Vec<TopicId> = ids.iter().map(|id| TopicId::new(*id)).collect();
        let index: HashMap<TopicId, Topic> = order
            .iter()
            .map(|id| {
                (
                    *id,
                    Topic::new(
                        *id,
                        PhaseId::new(1),
                        None,
                        format!("Topic {id}"),
                        "",
                        TopicStatus::NotStarted,
                        Vec::new(),
                    ),
                )
            })
            .collect();
        let total = u32::try_from(ids.len()).unwrap_or(u32::MAX);
        ContextSnapshot::new(
            context,
            order,
            index,
            Vec::new(),
            Progress::new(0, total),
            fixed_now(),
        )
    }

    #[test]
    fn server_hint_wins_over_positional() {
        let snap = snapshot(&[1, 2, 3]);
        // positional lookup after 1 would say 2
        assert_eq!(
            NextTopicResolver::resolve(&snap, TopicId::new(1), Some(TopicId::new(7))),
            Some(TopicId::new(7))
        );
    }

    #[test]
    fn positional_fallback_returns_following_entry() {
        let snap = snapshot(&[1, 2, 3]);
        assert_eq!(
            NextTopicResolver::resolve(&snap, TopicId::new(1), None),
            Some(TopicId::new(2))
        );
    }

    #[test]
    fn last_topic_resolves_to_none() {
        let snap = snapshot(&[1, 2, 3]);
        assert_eq!(NextTopicResolver::resolve(&snap, TopicId::new(3), None), None);
    }

    #[test]
    fn unknown_topic_resolves_to_none() {
        let snap = snapshot(&[1, 2, 3]);
        assert_eq!(NextTopicResolver::resolve(&snap, TopicId::new(9), None), None);
    }

    #[test]
    fn empty_projection_resolves_to_none() {
        let snap = snapshot(&[]);
        assert_eq!(NextTopicResolver::resolve(&snap, TopicId::new(1), None), None);
    }
}
