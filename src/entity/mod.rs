//! Entity definitions (`minecraft:entity`).
//!
//! Entities are the richest content kind: besides the always-on
//! `components`, they declare named `component_groups` that `events` add and
//! remove at runtime.

mod components;
mod events;

pub use components::{
    Breathable, DamageSensor, DamageTrigger, Despawn, DespawnDistance, EntityCollisionBox,
    EntityComponent, EnvironmentSensor, EnvironmentTrigger, EventTrigger, Health, JumpStatic,
    LookAtPlayer, Loot, Movement, MovementBasic, Nameable, NavigationWalk, Panic, Physics,
    Priority, Pushable, RandomStroll, Scale, Timer, TypeFamily, VariantValue,
};
pub use events::{ComponentGroupList, EntityEvent, RandomizedEvent, SequencedEvent};

use serde::{Deserialize, Serialize};

use crate::common::MolangValue;
use crate::component::ComponentMap;
use crate::map::OrderedMap;
use crate::storage::{ContentFile, ContentKind, FileLayout};

/// Format version written by [`EntityFile::new`].
pub const ENTITY_FORMAT_VERSION: &str = "1.21.0";

/// A named set of components toggled by events.
pub type ComponentGroup = ComponentMap<EntityComponent>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityFile {
    pub format_version: String,

    #[serde(rename = "minecraft:entity")]
    pub entity: Entity,
}

impl EntityFile {
    #[must_use]
    pub fn new(entity: Entity) -> Self {
        Self {
            format_version: ENTITY_FORMAT_VERSION.to_string(),
            entity,
        }
    }
}

impl ContentFile for EntityFile {
    const KIND: ContentKind = ContentKind::Entity;
    const LAYOUT: FileLayout = FileLayout::IDENTIFIER;

    fn identifier(&self) -> Option<&str> {
        Some(&self.entity.description.identifier)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub description: EntityDescription,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_groups: Option<OrderedMap<ComponentGroup>>,

    #[serde(default)]
    pub components: ComponentGroup,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<OrderedMap<EntityEvent>>,
}

impl Entity {
    pub fn new(description: EntityDescription) -> Self {
        Self {
            description,
            component_groups: None,
            components: ComponentMap::new(),
            events: None,
        }
    }

    #[must_use]
    pub fn with_component(mut self, component: EntityComponent) -> Self {
        self.components.insert(component);
        self
    }

    #[must_use]
    pub fn with_group(mut self, name: impl Into<String>, group: ComponentGroup) -> Self {
        self.component_groups
            .get_or_insert_with(OrderedMap::new)
            .insert(name, group);
        self
    }

    #[must_use]
    pub fn with_event(mut self, name: impl Into<String>, event: EntityEvent) -> Self {
        self.events.get_or_insert_with(OrderedMap::new).insert(name, event);
        self
    }

    /// Component group names referenced by events but never declared.
    #[must_use]
    pub fn undeclared_groups(&self) -> Vec<&str> {
        let declared = |name: &str| {
            self.component_groups
                .as_ref()
                .is_some_and(|groups| groups.contains_key(name))
        };

        let mut missing: Vec<&str> = Vec::new();
        for (_, event) in self.events.iter().flat_map(OrderedMap::iter) {
            collect_group_refs(event, &mut |name| {
                if !declared(name) && !missing.contains(&name) {
                    missing.push(name);
                }
            });
        }
        missing
    }
}

fn collect_group_refs<'a>(event: &'a EntityEvent, visit: &mut impl FnMut(&'a str)) {
    for list in event.add.iter().chain(event.remove.iter()) {
        for name in &list.component_groups {
            visit(name);
        }
    }
    for entry in event.randomize.iter().flatten() {
        collect_group_refs(&entry.event, visit);
    }
    for entry in event.sequence.iter().flatten() {
        collect_group_refs(&entry.event, visit);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescription {
    pub identifier: String,
    pub is_spawnable: bool,
    pub is_summonable: bool,
    pub is_experimental: bool,

    /// Vanilla entity whose hard-coded behavior this one borrows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<OrderedMap<EntityProperty>>,
}

impl EntityDescription {
    /// A spawnable, summonable, non-experimental entity.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            is_spawnable: true,
            is_summonable: true,
            is_experimental: false,
            runtime_identifier: None,
            spawn_category: None,
            properties: None,
        }
    }
}

/// Entity property declaration, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityProperty {
    Bool {
        default: crate::shorthand::Shorthand<bool, String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        client_sync: Option<bool>,
    },
    Int {
        range: [i32; 2],
        default: MolangValue,

        #[serde(skip_serializing_if = "Option::is_none")]
        client_sync: Option<bool>,
    },
    Float {
        range: [f64; 2],
        default: MolangValue,

        #[serde(skip_serializing_if = "Option::is_none")]
        client_sync: Option<bool>,
    },
    Enum {
        values: Vec<String>,
        default: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        client_sync: Option<bool>,
    },
}
