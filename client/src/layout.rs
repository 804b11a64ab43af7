use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use corridor_common::{
    camera::LoopMode,
    images::ImagePool,
    portal::PortalRig,
    scene::{FrameDescription, SceneAssembler},
    segment::CorridorDimensions,
    theme::ThemeConfig,
};

use crate::config::FrameSource;

// ============================================================================
// Layout Export
// ============================================================================

#[derive(Serialize)]
struct LayoutDump<'a> {
    theme: &'a ThemeConfig,
    frames: Vec<&'a FrameSource>,
    num_segments: usize,
    dimensions: &'a CorridorDimensions,
    loop_threshold: f32,
    loop_offset: f32,
    loop_mode: LoopMode,
    portal_rig: &'a PortalRig,
    frame: FrameDescription<'a>,
}

// The scene as it stands before the first tick
pub fn layout_json(
    theme: &ThemeConfig,
    frames: &ImagePool<FrameSource>,
    scene: &SceneAssembler,
) -> Result<String> {
    let corridor = scene.corridor();
    let dump = LayoutDump {
        theme,
        frames: frames.iter().collect(),
        num_segments: corridor.num_segments(),
        dimensions: corridor.dimensions(),
        loop_threshold: corridor.loop_threshold(),
        loop_offset: corridor.loop_offset(),
        loop_mode: scene.loop_mode(),
        portal_rig: scene.rig(),
        frame: scene.frame(),
    };
    serde_json::to_string_pretty(&dump).context("failed to serialize layout")
}

pub fn write_layout(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json).with_context(|| format!("failed to write layout to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::frame_pool;
    use corridor_common::corridor::CorridorModel;

    #[test]
    fn layout_lists_every_element_and_the_loop_geometry() {
        let theme = ThemeConfig::warm();
        let frames = frame_pool(Vec::new()).unwrap();
        let corridor = CorridorModel::build(10, 12.0, &theme, &frames).unwrap();
        let scene = SceneAssembler::new(corridor, &theme, LoopMode::Wrap);

        let json = layout_json(&theme, &frames, &scene).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["theme"]["name"], "warm");
        assert_eq!(value["frames"].as_array().unwrap().len(), 8);
        assert_eq!(value["loop_mode"], "wrap");
        assert!((value["dimensions"]["segment_length"].as_f64().unwrap() - 12.0).abs() < 1e-6);
        assert!((value["loop_threshold"].as_f64().unwrap() + 96.0).abs() < 1e-4);
        assert!((value["loop_offset"].as_f64().unwrap() - 108.0).abs() < 1e-4);
        assert_eq!(
            value["frame"]["static_elements"].as_array().unwrap().len(),
            scene.frame().static_elements.len()
        );
        assert!(value["portal_rig"]["elements"].is_array());
    }

    #[test]
    fn layout_is_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        write_layout(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
