use std::collections::HashSet;

use approx::assert_relative_eq;
use frame_generator::prelude::*;

fn params(bays_x: usize, bays_z: usize, stories: usize) -> FrameParams {
    FrameParams::new(bays_x, bays_z, 24.0, 20.0, stories, 12.0)
}

fn assert_unique<T: std::hash::Hash + Eq>(what: &str, ids: impl Iterator<Item = T>) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(seen.insert(id), "duplicate {} id", what);
    }
}

/// Fixed-base counts, id uniqueness and restraint layout across a grid sweep
#[test]
fn fixed_base_sweep() {
    for bays_x in 1..=5 {
        for bays_z in 1..=5 {
            for stories in [1, 2, 5, 10] {
                let p = params(bays_x, bays_z, stories).with_diaphragms(true);
                let model = generate_model(&p).unwrap();
                let per_floor = (bays_x + 1) * (bays_z + 1);
                let case = format!("{}x{}x{}", bays_x, bays_z, stories);

                assert_eq!(model.nodes.len(), per_floor * (stories + 1), "{}", case);
                let stats = model.stats();
                assert_eq!(stats.ground_nodes, 0, "{}", case);
                assert_eq!(stats.columns, per_floor * stories, "{}", case);
                assert_eq!(stats.beams_x, bays_x * (bays_z + 1) * stories, "{}", case);
                assert_eq!(stats.beams_z, (bays_x + 1) * bays_z * stories, "{}", case);
                assert_eq!(model.loads.len(), per_floor * stories, "{}", case);
                assert_eq!(model.diaphragms.len(), stories, "{}", case);
                assert!(model.bearings.is_empty());

                assert_unique("node", model.nodes.iter().map(|n| n.id));
                assert_unique("element", model.elements.iter().map(|e| e.id));
                assert_unique("load", model.loads.iter().map(|l| l.id));
                assert_unique("diaphragm", model.diaphragms.iter().map(|d| d.id));

                for node in &model.nodes {
                    assert!(node.y >= 0.0);
                    if node.y == 0.0 {
                        assert!(node.restraint.is_fixed(), "{} node {}", case, node.id);
                    } else {
                        assert!(node.restraint.is_free(), "{} node {}", case, node.id);
                    }
                }
                assert!(model.validate().is_ok());
            }
        }
    }
}

#[test]
fn scenario_single_bay_fixed() {
    let p = FrameParams::new(1, 1, 20.0, 20.0, 1, 15.0).with_diaphragms(true);
    let model = generate_model(&p).unwrap();

    assert_eq!(model.nodes.len(), 8);
    assert_eq!(model.elements.len(), 8);
    assert_eq!(model.columns().count(), 4);
    assert_eq!(model.beams().count(), 4);
    assert_eq!(model.materials.len(), 1);
    assert_eq!(model.materials[0].e, 29000.0);
    assert!(model.sections.len() >= 2);
    assert_eq!(model.loads.len(), 4);
    assert!(model.loads.iter().all(|l| l.fy < 0.0));
    assert!(model.bearings.is_empty());
    assert_eq!(model.diaphragms.len(), 1);
    assert_eq!(model.diaphragms[0].constrained_node_ids.len(), 3);
    assert_eq!(model.model_info.name, "1x1x1 steel fixed");
    assert_eq!(model.model_info.units, "kip-in");
    assert!(!model.model_info.description.is_empty());
    assert!(model.ground_motions.is_empty());

    // Feet are converted to inches
    let top = model.node(8).unwrap();
    assert_eq!((top.x, top.y, top.z), (240.0, 180.0, 240.0));
}

#[test]
fn element_ordering_and_connectivity() {
    let model = generate_model(&params(2, 1, 2)).unwrap();
    // 6 columns per story, then X beams, then Z beams
    let kinds: Vec<ElementType> = model.elements.iter().map(|e| e.kind).collect();
    assert!(kinds[..12].iter().all(|k| *k == ElementType::Column));
    assert!(kinds[12..].iter().all(|k| *k == ElementType::Beam));

    for (i, element) in model.elements.iter().enumerate() {
        assert_eq!(element.id, i + 1);
        let a = model.node(element.node_i).unwrap();
        let b = model.node(element.node_j).unwrap();
        let moved = [a.x != b.x, a.y != b.y, a.z != b.z];
        assert_eq!(moved.iter().filter(|&&m| m).count(), 1, "element {}", element.id);
        if element.is_column() {
            assert_relative_eq!(b.y - a.y, 144.0);
        } else {
            assert!(a.y > 0.0, "beam {} on the base level", element.id);
            let span = (b.x - a.x) + (b.z - a.z);
            assert!(span == 288.0 || span == 240.0, "beam {} spans {}", element.id, span);
        }
    }
}

#[test]
fn loads_follow_tributary_ratios() {
    let p = FrameParams::new(3, 3, 30.0, 30.0, 5, 13.0);
    let model = generate_model(&p).unwrap();
    let load_on = |node_id: usize| {
        model
            .loads
            .iter()
            .find(|l| l.node_id == node_id)
            .map(|l| -l.fy)
            .unwrap()
    };

    // Level 1: corner 17, edge 18, interior 22
    let (corner, edge, interior) = (load_on(17), load_on(18), load_on(22));
    assert_relative_eq!(interior, 67.5, epsilon = 1e-9);
    assert_relative_eq!(corner / interior, 0.25, epsilon = 1e-12);
    assert!(corner < edge && edge < interior);
    assert_relative_eq!(edge / interior, 0.5, epsilon = 1e-12);

    let base: HashSet<usize> = model.nodes_at(0.0).map(|n| n.id).collect();
    for load in &model.loads {
        assert!(!base.contains(&load.node_id));
        assert_eq!([load.fx, load.fz, load.mx, load.my, load.mz], [0.0; 5]);
    }

    // 75 psf over a 90 ft x 90 ft floor, five floors
    assert_relative_eq!(model.stats().total_gravity_load, 75.0 * 8100.0 / 1000.0 * 5.0, epsilon = 1e-6);
}

#[test]
fn floor_mass_matches_gravity_load() {
    let model = generate_model(&params(2, 2, 3)).unwrap();
    for load in &model.loads {
        let node = model.node(load.node_id).unwrap();
        assert_relative_eq!(node.mass * 386.4, -load.fy, epsilon = 1e-9);
    }
    assert!(model.nodes_at(0.0).all(|n| n.mass == 0.0));
}

#[test]
fn column_stiffness_non_decreasing_with_stories() {
    for material in [MaterialKind::Steel, MaterialKind::Concrete] {
        let mut previous = 0.0;
        for stories in 1..=30 {
            let p = FrameParams::new(3, 3, 30.0, 30.0, stories, 13.0).with_material(material);
            let model = generate_model(&p).unwrap();
            let column = model.section(model.columns().next().unwrap().section_id).unwrap();
            assert!(column.ix >= previous, "{} at {} stories", material, stories);
            previous = column.ix;
        }
    }
}

#[test]
fn rectangular_bays_get_separate_beam_sections() {
    let model = generate_model(&FrameParams::new(2, 2, 40.0, 20.0, 3, 13.0)).unwrap();
    assert_eq!(model.sections.len(), 3);

    let section_of = |run_along_x: bool| {
        model
            .beams()
            .find(|e| (model.node(e.node_i).unwrap().x != model.node(e.node_j).unwrap().x) == run_along_x)
            .map(|e| e.section_id)
            .unwrap()
    };
    assert_eq!(section_of(true), 2);
    assert_eq!(section_of(false), 3);
    assert!(model.section(2).unwrap().ix > model.section(3).unwrap().ix);
}

#[test]
fn concrete_frame() {
    let p = FrameParams::new(2, 3, 24.0, 24.0, 4, 12.0).with_material(MaterialKind::Concrete);
    let model = generate_model(&p).unwrap();
    assert_eq!(model.model_info.name, "2x3x4 concrete fixed");
    assert_eq!(model.materials.len(), 1);
    assert!(model.materials[0].name.contains("Concrete"));
    assert_eq!(model.materials[0].e, 3600.0);
    assert_eq!(model.materials[0].fy, 4.0);
    assert!(model.sections.iter().all(|s| s.name.starts_with("RC ")));
    assert!(model.validate().is_ok());
}

#[test]
fn invalid_parameters_rejected() {
    let cases = [
        (FrameParams::new(0, 1, 20.0, 20.0, 1, 12.0), "baysX"),
        (FrameParams::new(1, 0, 20.0, 20.0, 1, 12.0), "baysZ"),
        (FrameParams::new(1, 1, 0.0, 20.0, 1, 12.0), "bayWidthX"),
        (FrameParams::new(1, 1, 20.0, -5.0, 1, 12.0), "bayWidthZ"),
        (FrameParams::new(1, 1, 20.0, 20.0, 0, 12.0), "stories"),
        (FrameParams::new(1, 1, 20.0, 20.0, 1, f64::NAN), "storyHeight"),
    ];
    for (p, expected) in cases {
        match generate_model(&p) {
            Err(GenError::InvalidParameter { field, .. }) => assert_eq!(field, expected),
            other => panic!("{} accepted: {:?}", expected, other.map(|m| m.model_info.name)),
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let p = FrameParams::new(3, 2, 25.0, 30.0, 4, 13.0)
        .with_base(BaseType::Isolated)
        .with_diaphragms(true);
    let first = generate_model(&p).unwrap();
    let second = generate_model(&p).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn json_document_shape() {
    let p = FrameParams::new(1, 1, 20.0, 20.0, 1, 15.0)
        .with_base(BaseType::Isolated)
        .with_diaphragms(true);
    let json: serde_json::Value = serde_json::from_str(&generate_model(&p).unwrap().to_json().unwrap()).unwrap();

    for key in [
        "modelInfo", "nodes", "elements", "sections", "materials", "loads", "bearings",
        "diaphragms", "groundMotions",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["elements"][0]["type"], "column");
    assert_eq!(json["elements"][0]["nodeI"], 1);
    assert!(json["sections"][0].get("Ix").is_some());
    assert!(json["materials"][0].get("E").is_some());
    assert_eq!(json["nodes"][0]["restraint"], serde_json::json!([false, false, false, false, false, false]));
    assert_eq!(json["bearings"][0]["surfaces"][0]["type"], "VelDependent");
    assert!(json["bearings"][0]["surfaces"][0].get("muSlow").is_some());
    assert_eq!(json["diaphragms"][0]["perpDirection"], 2);
}

#[test]
fn frame_params_from_json() {
    let p: FrameParams = serde_json::from_str(
        r#"{"baysX":2,"baysZ":2,"bayWidthX":25,"bayWidthZ":25,"stories":3,
            "storyHeight":12,"material":"concrete","diaphragms":true,"baseType":"isolated"}"#,
    )
    .unwrap();
    assert_eq!(p.material, MaterialKind::Concrete);
    assert_eq!(p.base_type, BaseType::Isolated);
    let model = generate_model(&p).unwrap();
    assert_eq!(model.model_info.name, "2x2x3 concrete isolated");
}

/// Grids whose node count overflows, and bay sizes whose tributary load
/// underflows or overflows, fail validation instead of panicking or
/// emitting degenerate loads
#[test]
fn degenerate_grids_rejected() {
    let cases = [
        (FrameParams::new(usize::MAX, 1, 20.0, 20.0, 1, 12.0), "baysX"),
        (FrameParams::new(1, 1, 20.0, 20.0, usize::MAX, 12.0), "stories"),
        (FrameParams::new(1, 1, 1e-170, 1e-170, 1, 12.0), "bayWidthX"),
        (FrameParams::new(1, 1, 1e200, 1e200, 1, 12.0), "bayWidthX"),
    ];
    for (p, expected) in cases {
        for base in [BaseType::Fixed, BaseType::Isolated] {
            match generate_model(&p.clone().with_base(base)) {
                Err(GenError::InvalidParameter { field, .. }) => assert_eq!(field, expected),
                other => panic!("{} accepted: {:?}", expected, other.map(|m| m.model_info.name)),
            }
        }
    }
}
