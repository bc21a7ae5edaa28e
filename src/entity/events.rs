//! Entity events.
//!
//! An event adds or removes component groups, fires other events, or picks
//! among weighted / sequenced outcomes.

use serde::{Deserialize, Serialize};

use super::components::EventTrigger;
use crate::common::StateValue;
use crate::filter::Filter;
use crate::map::OrderedMap;
use crate::shorthand::Named;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentGroupList {
    pub component_groups: Vec<String>,
}

impl ComponentGroupList {
    pub fn new<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            component_groups: groups.into_iter().map(Into::into).collect(),
        }
    }
}

/// The body shared by top-level events and their randomize/sequence entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<ComponentGroupList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<ComponentGroupList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Named<EventTrigger>>,

    /// Property name to new value or Molang expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_property: Option<OrderedMap<StateValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomize: Option<Vec<RandomizedEvent>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Vec<SequencedEvent>>,
}

impl EntityEvent {
    /// Event that only adds the given component groups.
    pub fn adding<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            add: Some(ComponentGroupList::new(groups)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn removing<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove = Some(ComponentGroupList::new(groups));
        self
    }

    /// Depth of nested randomize/sequence entries; 0 for a flat event.
    #[must_use]
    pub fn depth(&self) -> usize {
        let randomized = self
            .randomize
            .iter()
            .flatten()
            .map(|e| e.event.depth() + 1);
        let sequenced = self.sequence.iter().flatten().map(|e| e.event.depth() + 1);
        randomized.chain(sequenced).max().unwrap_or(0)
    }
}

/// One weighted outcome of a `randomize` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomizedEvent {
    pub weight: u32,

    #[serde(flatten)]
    pub event: EntityEvent,
}

/// One step of a `sequence` event, run when its filters pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencedEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filter>,

    #[serde(flatten)]
    pub event: EntityEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_and_removing() {
        let event = EntityEvent::adding(["mymod:adult"]).removing(["mymod:baby"]);
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"add":{"component_groups":["mymod:adult"]},"remove":{"component_groups":["mymod:baby"]}}"#
        );
        assert_eq!(event.depth(), 0);
    }

    #[test]
    fn randomize_flattens_entries() {
        let json = r#"{"randomize":[
            {"weight":3,"add":{"component_groups":["mymod:red"]}},
            {"weight":1,"sequence":[{"filters":{"test":"is_daytime","value":true},"trigger":"mymod:sunbathe"}]}
        ]}"#;
        let event: EntityEvent = serde_json::from_str(json).unwrap();
        let entries = event.randomize.as_ref().unwrap();
        assert_eq!(entries[0].weight, 3);
        assert!(entries[0].event.add.is_some());
        assert_eq!(event.depth(), 2);

        let again: EntityEvent =
            serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(again, event);
    }
}
