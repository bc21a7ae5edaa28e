//! Component maps and permutations.
//!
//! A component map is written as one JSON object whose keys are component
//! names. In memory each entry is either a built-in component (one variant
//! of a per-kind enum such as [`BlockComponent`](crate::block::BlockComponent))
//! or a custom component from another namespace, kept as raw JSON.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Namespace of the built-in components.
pub const BUILTIN_NAMESPACE: &str = "minecraft:";

/// A built-in component enum, externally tagged by component name.
pub trait Component: Serialize + DeserializeOwned {
    /// The component's key, e.g. `minecraft:friction`.
    fn name(&self) -> &'static str;
}

/// One entry of a [`ComponentMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentEntry<C> {
    Builtin(C),
    Custom { name: String, value: JsonValue },
}

impl<C: Component> ComponentEntry<C> {
    /// Reads one `name: payload` pair.
    ///
    /// A `minecraft:` name whose payload the built-in enum accepts becomes
    /// [`ComponentEntry::Builtin`]; everything else is kept verbatim.
    pub fn from_json(name: String, value: JsonValue) -> Self {
        if name.starts_with(BUILTIN_NAMESPACE) {
            let mut wrapper = serde_json::Map::new();
            wrapper.insert(name.clone(), value.clone());
            if let Ok(component) = C::deserialize(JsonValue::Object(wrapper)) {
                return Self::Builtin(component);
            }
        }
        Self::Custom { name, value }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(c) => c.name(),
            Self::Custom { name, .. } => name,
        }
    }
}

/// Ordered set of components keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMap<C> {
    entries: Vec<ComponentEntry<C>>,
}

impl<C: Component> ComponentMap<C> {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Builder-style insert of a built-in component.
    #[must_use]
    pub fn with(mut self, component: C) -> Self {
        self.insert(component);
        self
    }

    /// Builder-style insert of a custom component.
    #[must_use]
    pub fn with_custom(mut self, name: impl Into<String>, value: JsonValue) -> Self {
        self.insert_custom(name, value);
        self
    }

    /// Inserts a built-in component, replacing one with the same name in place.
    pub fn insert(&mut self, component: C) -> Option<ComponentEntry<C>> {
        self.put(ComponentEntry::Builtin(component))
    }

    /// Inserts a component given as raw JSON, replacing one with the same
    /// name in place.
    ///
    /// A built-in name with a payload the built-in enum accepts is stored as
    /// that built-in, the same way a parse would read it back.
    pub fn insert_custom(
        &mut self,
        name: impl Into<String>,
        value: JsonValue,
    ) -> Option<ComponentEntry<C>> {
        self.put(ComponentEntry::from_json(name.into(), value))
    }

    fn put(&mut self, entry: ComponentEntry<C>) -> Option<ComponentEntry<C>> {
        if let Some(slot) = self.entries.iter_mut().find(|e| e.name() == entry.name()) {
            return Some(std::mem::replace(slot, entry));
        }
        self.entries.push(entry);
        None
    }

    pub fn get(&self, name: &str) -> Option<&ComponentEntry<C>> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<ComponentEntry<C>> {
        let index = self.entries.iter().position(|e| e.name() == name)?;
        Some(self.entries.remove(index))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ComponentEntry::name)
    }

    /// Iterates over the built-in components only.
    pub fn builtins(&self) -> impl Iterator<Item = &C> {
        self.entries.iter().filter_map(|e| match e {
            ComponentEntry::Builtin(c) => Some(c),
            ComponentEntry::Custom { .. } => None,
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentEntry<C>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Component> Default for ComponentMap<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Component> FromIterator<C> for ComponentMap<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut map = Self::new();
        for c in iter {
            map.insert(c);
        }
        map
    }
}

/// Serializes a built-in component and splits off its `{name: payload}` wrapper.
fn component_payload<C: Component>(component: &C) -> Result<JsonValue, serde_json::Error> {
    let JsonValue::Object(wrapper) = serde_json::to_value(component)? else {
        return Err(ser::Error::custom(format!(
            "component {} did not serialize as a keyed object",
            component.name()
        )));
    };
    let mut fields = wrapper.into_iter();
    match (fields.next(), fields.next()) {
        (Some((key, payload)), None) if key == component.name() => Ok(payload),
        _ => Err(ser::Error::custom(format!(
            "component {} serialized with an unexpected shape",
            component.name()
        ))),
    }
}

impl<C: Component> Serialize for ComponentMap<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            match entry {
                ComponentEntry::Builtin(component) => {
                    let payload = component_payload(component)
                        .map_err(<S::Error as ser::Error>::custom)?;
                    map.serialize_entry(component.name(), &payload)?;
                }
                ComponentEntry::Custom { name, value } => map.serialize_entry(name, value)?,
            }
        }
        map.end()
    }
}

struct ComponentMapVisitor<C>(PhantomData<C>);

impl<'de, C: Component> Visitor<'de> for ComponentMapVisitor<C> {
    type Value = ComponentMap<C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of components keyed by name")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = ComponentMap::new();
        while let Some((name, payload)) = access.next_entry::<String, JsonValue>()? {
            map.put(ComponentEntry::from_json(name, payload));
        }
        Ok(map)
    }
}

impl<'de, C: Component> Deserialize<'de> for ComponentMap<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ComponentMapVisitor(PhantomData))
    }
}

/// A conditional overlay of components.
///
/// The condition is a Molang expression evaluated by the game; it is stored
/// and written verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "C: Component", deserialize = "C: Component"))]
pub struct Permutation<C> {
    pub condition: String,
    pub components: ComponentMap<C>,
}

impl<C: Component> Permutation<C> {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            components: ComponentMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, component: C) -> Self {
        self.components.insert(component);
        self
    }

    #[must_use]
    pub fn with_custom(mut self, name: impl Into<String>, value: JsonValue) -> Self {
        self.components.insert_custom(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum TestComponent {
        #[serde(rename = "minecraft:friction")]
        Friction(f64),
        #[serde(rename = "minecraft:loot")]
        Loot(String),
    }

    impl Component for TestComponent {
        fn name(&self) -> &'static str {
            match self {
                Self::Friction(_) => "minecraft:friction",
                Self::Loot(_) => "minecraft:loot",
            }
        }
    }

    #[test]
    fn serializes_as_single_object_in_order() {
        let map = ComponentMap::new()
            .with(TestComponent::Loot("loot_tables/x.json".into()))
            .with_custom("mymod:glow", serde_json::json!({"speed": 2}))
            .with(TestComponent::Friction(0.6));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"minecraft:loot":"loot_tables/x.json","mymod:glow":{"speed":2},"minecraft:friction":0.6}"#
        );
    }

    #[test]
    fn insert_replaces_same_name_in_place() {
        let mut map = ComponentMap::new()
            .with(TestComponent::Friction(0.1))
            .with(TestComponent::Loot("a".into()));
        let previous = map.insert(TestComponent::Friction(0.9));
        assert_eq!(previous, Some(ComponentEntry::Builtin(TestComponent::Friction(0.1))));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["minecraft:friction", "minecraft:loot"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn deserializes_builtin_and_custom() {
        let map: ComponentMap<TestComponent> =
            serde_json::from_str(r#"{"mymod:x":[1,2],"minecraft:friction":0.4}"#).unwrap();
        assert_eq!(map.builtins().collect::<Vec<_>>(), vec![&TestComponent::Friction(0.4)]);
        assert!(matches!(
            map.get("mymod:x"),
            Some(ComponentEntry::Custom { value, .. }) if value == &serde_json::json!([1, 2])
        ));
    }

    #[test]
    fn unknown_builtin_name_is_kept_as_custom() {
        let map: ComponentMap<TestComponent> =
            serde_json::from_str(r#"{"minecraft:does_not_exist":true,"minecraft:friction":"x"}"#)
                .unwrap();
        assert_eq!(map.builtins().count(), 0);
        assert_eq!(
            map.get("minecraft:does_not_exist"),
            Some(&ComponentEntry::Custom {
                name: "minecraft:does_not_exist".into(),
                value: serde_json::json!(true),
            })
        );
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"minecraft:does_not_exist":true,"minecraft:friction":"x"}"#
        );
    }

    #[test]
    fn custom_insert_of_builtin_name_matches_parse() {
        let mut map: ComponentMap<TestComponent> = ComponentMap::new()
            .with_custom("minecraft:friction", serde_json::json!(0.6))
            .with_custom("minecraft:unit_cube", serde_json::json!({}));
        assert_eq!(map.builtins().collect::<Vec<_>>(), vec![&TestComponent::Friction(0.6)]);

        let text = serde_json::to_string(&map).unwrap();
        let parsed: ComponentMap<TestComponent> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, map);

        let previous = map.insert_custom("minecraft:friction", serde_json::json!(0.2));
        assert_eq!(previous, Some(ComponentEntry::Builtin(TestComponent::Friction(0.6))));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["minecraft:friction", "minecraft:unit_cube"]);
    }

    #[test]
    fn remove_and_contains() {
        let mut map = ComponentMap::new().with(TestComponent::Friction(0.2));
        assert!(map.contains("minecraft:friction"));
        assert!(map.remove("minecraft:friction").is_some());
        assert!(map.is_empty());
    }

    #[test]
    fn permutation_shape() {
        let p = Permutation::new("q.block_state('mymod:lit')")
            .with(TestComponent::Friction(0.3));
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"condition":"q.block_state('mymod:lit')","components":{"minecraft:friction":0.3}}"#
        );
    }
}
