use bedrock_addon::block::{Block, BlockComponent, BlockFile};
use bedrock_addon::geometry::{
    Axis, CubeRotation, ImportBone, ImportCube, ImportFace, ImportFaces, ImportGeometry,
    ImportGeometryFile, GeometryDescription,
};
use bedrock_addon::{
    save_blocking, ComponentEntry, ComponentMap, ContentFile, Permutation, Shorthand,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn custom_components_survive_a_save() {
    let dir = tempfile::tempdir().unwrap();
    let text = r#"{
        "format_version": "1.21.0",
        "minecraft:block": {
            "description": {"identifier": "mymod:ticker"},
            "components": {
                "mymod:on_tick": {"sound": "random.click", "volume": 0.25},
                "minecraft:light_emission": 7,
                "mymod:marker": true
            },
            "permutations": [
                {"condition": "q.block_state('mymod:on')", "components": {"mymod:glow": {}}}
            ]
        }
    }"#;
    let file: BlockFile = serde_json::from_str(text).unwrap();

    let path = save_blocking(&file, dir.path()).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    let components = &written["minecraft:block"]["components"];
    assert_eq!(components["mymod:on_tick"], json!({"sound": "random.click", "volume": 0.25}));
    assert_eq!(components["mymod:marker"], true);
    assert_eq!(
        components.as_object().unwrap().keys().collect::<Vec<_>>(),
        vec!["mymod:on_tick", "minecraft:light_emission", "mymod:marker"]
    );
    assert_eq!(
        written["minecraft:block"]["permutations"][0]["components"],
        json!({"mymod:glow": {}})
    );
}

#[test]
fn replacing_a_component_keeps_its_position() {
    let mut components: ComponentMap<BlockComponent> = ComponentMap::new()
        .with(BlockComponent::LightEmission(3))
        .with(BlockComponent::Friction(0.6))
        .with_custom("mymod:rotator", json!({}));
    components.insert(BlockComponent::LightEmission(12));

    let block = Block {
        components,
        ..Block::new("mymod:lamp")
    }
    .with_permutation(
        Permutation::new("q.block_state('mymod:off')").with(BlockComponent::LightEmission(0)),
    );

    let value = serde_json::to_value(BlockFile::new(block)).unwrap();
    let keys: Vec<&String> = value["minecraft:block"]["components"]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(
        keys,
        vec!["minecraft:light_emission", "minecraft:friction", "mymod:rotator"]
    );
    assert_eq!(value["minecraft:block"]["components"]["minecraft:light_emission"], 12);
}

#[test]
fn import_geometry_saves_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let import = ImportGeometryFile::new(ImportGeometry {
        description: GeometryDescription::new("geometry.pillar"),
        bones: vec![ImportBone {
            name: "shaft".into(),
            cubes: vec![ImportCube {
                from: [4.0, 0.0, 4.0],
                to: [12.0, 16.0, 12.0],
                rotation: Some(CubeRotation {
                    angle: 45.0,
                    axis: Axis::Y,
                    origin: [8.0, 8.0, 8.0],
                }),
                faces: ImportFaces {
                    north: Some(ImportFace {
                        uv: [4.0, 0.0, 12.0, 16.0],
                        texture: Some("#side".into()),
                        rotation: None,
                        cullface: None,
                    }),
                    ..ImportFaces::default()
                },
                inflate: None,
            }],
            ..ImportBone::default()
        }],
    });

    let import_dir = dir.path().join("import");
    let model_dir = dir.path().join("models");
    let import_path = save_blocking(&import, &import_dir).unwrap();
    let model_path = save_blocking(&import.to_model(), &model_dir).unwrap();

    assert_eq!(import_path, import_dir.join("pillar.geo.json"));
    assert_eq!(model_path, model_dir.join("pillar.geo.json"));
    assert_eq!(import.relative_path().unwrap(), import.to_model().relative_path().unwrap());

    let model: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(model_path).unwrap()).unwrap();
    let cube = &model["minecraft:geometry"][0]["bones"][0]["cubes"][0];
    assert_eq!(cube["origin"], json!([-4.0, 0.0, -4.0]));
    assert_eq!(cube["pivot"], json!([0.0, 8.0, 0.0]));
    assert_eq!(cube["size"], json!([8.0, 16.0, 8.0]));
    assert_eq!(cube["rotation"], json!([0.0, 45.0, 0.0]));
    assert_eq!(
        cube["uv"]["north"],
        json!({"uv": [4.0, 0.0], "uv_size": [8.0, 16.0], "material_instance": "side"})
    );
}

#[test]
fn shorthand_values_keep_their_spelling() {
    let file = BlockFile::new(
        Block::new("mymod:soft")
            .with_component(BlockComponent::DestructibleByExplosion(Shorthand::Short(false))),
    );
    let value = serde_json::to_value(&file).unwrap();
    assert_eq!(
        value["minecraft:block"]["components"]["minecraft:destructible_by_explosion"],
        false
    );
}

#[test]
fn unknown_builtin_name_reads_back_as_custom() {
    let dir = tempfile::tempdir().unwrap();
    let file = BlockFile::new(Block {
        components: ComponentMap::new()
            .with(BlockComponent::LightEmission(4))
            .with_custom("minecraft:unit_cube", json!({})),
        ..Block::new("mymod:cube")
    });

    let path = save_blocking(&file, dir.path()).unwrap();
    let parsed: BlockFile = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(parsed, file);
    assert!(matches!(
        parsed.block.components.get("minecraft:unit_cube"),
        Some(ComponentEntry::Custom { value, .. }) if value == &json!({})
    ));
}

#[test]
fn custom_insert_under_a_builtin_name_reads_back_equal() {
    let dir = tempfile::tempdir().unwrap();
    let file = BlockFile::new(Block {
        components: ComponentMap::new().with_custom("minecraft:friction", json!(0.6)),
        ..Block::new("mymod:ice")
    });
    assert_eq!(
        file.block.components.get("minecraft:friction"),
        Some(&ComponentEntry::Builtin(BlockComponent::Friction(0.6)))
    );

    let path = save_blocking(&file, dir.path()).unwrap();
    let parsed: BlockFile = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(parsed, file);
}
