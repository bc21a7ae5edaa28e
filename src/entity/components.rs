//! Built-in entity components and behaviors.

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::filter::Filter;
use crate::shorthand::{OneOrMany, Shorthand};

/// An event fired by a component, optionally on another target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTrigger {
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filter>,
}

impl EventTrigger {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            target: None,
            filters: None,
        }
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFamily {
    pub family: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub value: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityCollisionBox {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Physics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_collision: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_gravity: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pushable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pushable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pushable_by_piston: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementBasic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_turn: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationWalk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_path_over_water: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_water: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_damage_blocks: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_open_doors: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_walk: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpStatic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jump_power: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loot {
    pub table: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DespawnDistance {
    pub min_distance: f64,
    pub max_distance: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Despawn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub despawn_from_distance: Option<DespawnDistance>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub despawn_from_chance: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filter>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breathable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffocate_time: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub breathes_air: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub breathes_water: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nameable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_show: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_name_tag_renaming: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DamageTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deals_damage: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_multiplier: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_damage: Option<EventTrigger>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageSensor {
    pub triggers: OneOrMany<DamageTrigger>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentTrigger {
    pub filters: Filter,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSensor {
    pub triggers: OneOrMany<EnvironmentTrigger>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    /// Seconds: fixed, or a random value in `[min, max]`.
    pub time: Shorthand<f64, [f64; 2]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,

    #[serde(rename = "randomInterval", skip_serializing_if = "Option::is_none")]
    pub random_interval: Option<bool>,

    pub time_down_event: EventTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantValue {
    pub value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    pub priority: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomStroll {
    pub priority: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_multiplier: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xz_dist: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_dist: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookAtPlayer {
    pub priority: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub look_distance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panic {
    pub priority: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_multiplier: Option<f64>,
}

/// Every built-in entity component, keyed by its `minecraft:` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityComponent {
    #[serde(rename = "minecraft:behavior.float")]
    BehaviorFloat(Priority),

    #[serde(rename = "minecraft:behavior.look_at_player")]
    BehaviorLookAtPlayer(LookAtPlayer),

    #[serde(rename = "minecraft:behavior.panic")]
    BehaviorPanic(Panic),

    #[serde(rename = "minecraft:behavior.random_stroll")]
    BehaviorRandomStroll(RandomStroll),

    #[serde(rename = "minecraft:breathable")]
    Breathable(Breathable),

    #[serde(rename = "minecraft:collision_box")]
    CollisionBox(EntityCollisionBox),

    #[serde(rename = "minecraft:damage_sensor")]
    DamageSensor(DamageSensor),

    #[serde(rename = "minecraft:despawn")]
    Despawn(Despawn),

    #[serde(rename = "minecraft:environment_sensor")]
    EnvironmentSensor(EnvironmentSensor),

    #[serde(rename = "minecraft:health")]
    Health(Health),

    #[serde(rename = "minecraft:is_baby")]
    IsBaby(crate::common::Empty),

    #[serde(rename = "minecraft:jump.static")]
    JumpStatic(JumpStatic),

    #[serde(rename = "minecraft:loot")]
    Loot(Loot),

    #[serde(rename = "minecraft:mark_variant")]
    MarkVariant(VariantValue),

    #[serde(rename = "minecraft:movement")]
    Movement(Movement),

    #[serde(rename = "minecraft:movement.basic")]
    MovementBasic(MovementBasic),

    #[serde(rename = "minecraft:nameable")]
    Nameable(Nameable),

    #[serde(rename = "minecraft:navigation.walk")]
    NavigationWalk(NavigationWalk),

    #[serde(rename = "minecraft:physics")]
    Physics(Physics),

    #[serde(rename = "minecraft:pushable")]
    Pushable(Pushable),

    #[serde(rename = "minecraft:scale")]
    Scale(Scale),

    #[serde(rename = "minecraft:timer")]
    Timer(Timer),

    #[serde(rename = "minecraft:type_family")]
    TypeFamily(TypeFamily),

    #[serde(rename = "minecraft:variant")]
    Variant(VariantValue),
}

impl Component for EntityComponent {
    fn name(&self) -> &'static str {
        match self {
            Self::BehaviorFloat(_) => "minecraft:behavior.float",
            Self::BehaviorLookAtPlayer(_) => "minecraft:behavior.look_at_player",
            Self::BehaviorPanic(_) => "minecraft:behavior.panic",
            Self::BehaviorRandomStroll(_) => "minecraft:behavior.random_stroll",
            Self::Breathable(_) => "minecraft:breathable",
            Self::CollisionBox(_) => "minecraft:collision_box",
            Self::DamageSensor(_) => "minecraft:damage_sensor",
            Self::Despawn(_) => "minecraft:despawn",
            Self::EnvironmentSensor(_) => "minecraft:environment_sensor",
            Self::Health(_) => "minecraft:health",
            Self::IsBaby(_) => "minecraft:is_baby",
            Self::JumpStatic(_) => "minecraft:jump.static",
            Self::Loot(_) => "minecraft:loot",
            Self::MarkVariant(_) => "minecraft:mark_variant",
            Self::Movement(_) => "minecraft:movement",
            Self::MovementBasic(_) => "minecraft:movement.basic",
            Self::Nameable(_) => "minecraft:nameable",
            Self::NavigationWalk(_) => "minecraft:navigation.walk",
            Self::Physics(_) => "minecraft:physics",
            Self::Pushable(_) => "minecraft:pushable",
            Self::Scale(_) => "minecraft:scale",
            Self::Timer(_) => "minecraft:timer",
            Self::TypeFamily(_) => "minecraft:type_family",
            Self::Variant(_) => "minecraft:variant",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentMap;

    #[test]
    fn type_family_shape() {
        let c = EntityComponent::TypeFamily(TypeFamily {
            family: vec!["mob".into(), "golem".into()],
        });
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"minecraft:type_family":{"family":["mob","golem"]}}"#
        );
    }

    #[test]
    fn sensors_accept_one_or_many_triggers() {
        let json = r#"{
            "minecraft:damage_sensor": {"triggers": {"cause": "fall", "deals_damage": false}},
            "minecraft:environment_sensor": {"triggers": [
                {"filters": {"test": "is_underwater", "value": true}, "event": "mymod:drown"}
            ]}
        }"#;
        let map: ComponentMap<EntityComponent> = serde_json::from_str(json).unwrap();
        let mut builtins = map.builtins();
        assert!(matches!(
            builtins.next(),
            Some(EntityComponent::DamageSensor(DamageSensor { triggers: OneOrMany::One(t) }))
                if t.cause.as_deref() == Some("fall")
        ));
        assert!(matches!(
            builtins.next(),
            Some(EntityComponent::EnvironmentSensor(EnvironmentSensor { triggers: OneOrMany::Many(t) }))
                if t.len() == 1
        ));
    }

    #[test]
    fn timer_time_range_or_fixed() {
        let fixed: Timer = serde_json::from_str(
            r#"{"time": 3.0, "time_down_event": {"event": "mymod:explode"}}"#,
        )
        .unwrap();
        assert_eq!(fixed.time, Shorthand::Short(3.0));

        let ranged: Timer = serde_json::from_str(
            r#"{"time": [5, 10], "looping": true, "time_down_event": {"event": "mymod:grow", "target": "self"}}"#,
        )
        .unwrap();
        assert_eq!(ranged.time, Shorthand::Full([5.0, 10.0]));
        assert_eq!(ranged.time_down_event.target.as_deref(), Some("self"));
    }

    /// Every variant's `name()` must match the key serde writes for it.
    #[test]
    fn names_match_serde_keys() {
        let samples = vec![
            EntityComponent::BehaviorFloat(Priority { priority: 0 }),
            EntityComponent::BehaviorLookAtPlayer(LookAtPlayer {
                priority: 7,
                look_distance: Some(6.0),
                probability: None,
            }),
            EntityComponent::BehaviorPanic(Panic { priority: 1, speed_multiplier: Some(1.25) }),
            EntityComponent::BehaviorRandomStroll(RandomStroll {
                priority: 6,
                speed_multiplier: None,
                xz_dist: Some(10),
                y_dist: None,
            }),
            EntityComponent::Breathable(Breathable::default()),
            EntityComponent::CollisionBox(EntityCollisionBox { width: 0.6, height: 1.8 }),
            EntityComponent::DamageSensor(DamageSensor {
                triggers: OneOrMany::One(DamageTrigger::default()),
            }),
            EntityComponent::Despawn(Despawn::default()),
            EntityComponent::EnvironmentSensor(EnvironmentSensor {
                triggers: OneOrMany::Many(vec![EnvironmentTrigger {
                    filters: Filter::Test(crate::filter::FilterTest::new("in_water")),
                    event: "mymod:dry".into(),
                    target: None,
                }]),
            }),
            EntityComponent::Health(Health { value: 20, max: None }),
            EntityComponent::IsBaby(crate::common::Empty {}),
            EntityComponent::JumpStatic(JumpStatic::default()),
            EntityComponent::Loot(Loot { table: "loot_tables/entities/x.json".into() }),
            EntityComponent::MarkVariant(VariantValue { value: 1 }),
            EntityComponent::Movement(Movement { value: 0.25, max: None }),
            EntityComponent::MovementBasic(MovementBasic::default()),
            EntityComponent::Nameable(Nameable::default()),
            EntityComponent::NavigationWalk(NavigationWalk::default()),
            EntityComponent::Physics(Physics::default()),
            EntityComponent::Pushable(Pushable::default()),
            EntityComponent::Scale(Scale { value: 0.5 }),
            EntityComponent::Timer(Timer {
                time: Shorthand::Short(2.0),
                looping: None,
                random_interval: None,
                time_down_event: EventTrigger::new("mymod:tick"),
            }),
            EntityComponent::TypeFamily(TypeFamily { family: vec!["mob".into()] }),
            EntityComponent::Variant(VariantValue { value: 2 }),
        ];
        assert_eq!(samples.len(), 24);
        for c in samples {
            let value = serde_json::to_value(&c).unwrap();
            let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
            assert_eq!(keys, vec![c.name()], "{}", c.name());
        }
    }
}
