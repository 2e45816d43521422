use anyhow::{Context, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::blend::BlendMode;
use crate::color::Color;
use crate::image::Image;
use crate::math::Viewport;
use crate::rasterizer::Rasterizer;
use crate::sprite::Sprite;

/// Declarative scene description for the demo binary: a target size, an
/// optional clip rectangle, and a list of sprite placements over procedural
/// source images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    /// Background clear color (HTML color string). Default: black.
    #[serde(default)]
    pub background: Option<String>,
    /// Clip rectangle as `[x, y, width, height]`. Default: unclipped.
    #[serde(default)]
    pub clip: Option<[i32; 4]>,
    pub sprites: Vec<SpriteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteConfig {
    pub source: SourceConfig,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub uv: [i32; 2],
    /// Sprite size in pixels. Default: the full source image.
    #[serde(default)]
    pub size: Option<[i32; 2]>,
    /// Tint color (HTML color string). Default: white, i.e. untinted.
    #[serde(default)]
    pub tint: Option<String>,
    #[serde(default)]
    pub blend: BlendMode,
}

/// Procedurally generated source images; decoding real image files is a
/// collaborator's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    Solid {
        width: u32,
        height: u32,
        color: String,
    },
    Checker {
        width: u32,
        height: u32,
        cell: u32,
        light: String,
        dark: String,
    },
    /// Full hue sweep left to right, alpha ramp top to bottom.
    HueRamp { width: u32, height: u32 },
}

impl SourceConfig {
    pub fn build(&self) -> Result<Image> {
        match self {
            SourceConfig::Solid {
                width,
                height,
                color,
            } => {
                let mut image = Image::new(*width, *height);
                image.clear(parse_color(color)?);
                Ok(image)
            }
            SourceConfig::Checker {
                width,
                height,
                cell,
                light,
                dark,
            } => {
                let cell = (*cell).max(1);
                let light = parse_color(light)?;
                let dark = parse_color(dark)?;
                let mut image = Image::new(*width, *height);
                for y in 0..*height {
                    for x in 0..*width {
                        let even = (x / cell + y / cell) % 2 == 0;
                        image.set_pixel(x, y, if even { light } else { dark });
                    }
                }
                Ok(image)
            }
            SourceConfig::HueRamp { width, height } => {
                let mut image = Image::new(*width, *height);
                for y in 0..*height {
                    let alpha = if *height > 1 {
                        (y * 255 / (*height - 1)) as u8
                    } else {
                        255
                    };
                    for x in 0..*width {
                        let hue = x as f32 * 360.0 / *width as f32;
                        image.set_pixel(x, y, Color::from_hsv(hue, 1.0, 1.0).with_alpha(alpha));
                    }
                }
                Ok(image)
            }
        }
    }
}

fn parse_color(s: &str) -> Result<Color> {
    Color::from_html(s).with_context(|| format!("unrecognized color {s:?}"))
}

/// Rasterize a scene into a fresh image.
pub fn render(config: &SceneConfig) -> Result<Image> {
    let sources = config
        .sprites
        .iter()
        .map(|s| s.source.build())
        .collect::<Result<Vec<_>>>()?;

    let background = match &config.background {
        Some(s) => parse_color(s)?,
        None => Color::BLACK,
    };

    let mut target = Image::new(config.width, config.height);
    let mut rasterizer = Rasterizer {
        color_target: Some(&mut target),
        clip_rect: match config.clip {
            Some([x, y, w, h]) => Viewport::new(x, y, w.max(0) as u32, h.max(0) as u32),
            None => Viewport::MAX,
        },
    };

    rasterizer.clear(background);

    for (placement, source) in config.sprites.iter().zip(&sources) {
        let mut sprite = Sprite::new(source)
            .with_uv(IVec2::from(placement.uv))
            .with_blend_mode(placement.blend);
        if let Some(size) = placement.size {
            sprite = sprite.with_size(IVec2::from(size));
        }
        if let Some(tint) = &placement.tint {
            sprite = sprite.with_color(parse_color(tint)?);
        }
        rasterizer.draw_sprite(&sprite, placement.x, placement.y);
    }
    drop(rasterizer);

    Ok(target)
}

/// The scene rendered when no description file is given: a checkerboard
/// backdrop, a hue ramp alpha-blended over it, and two tinted squares
/// showing additive and multiplicative blending.
pub fn default_scene() -> SceneConfig {
    SceneConfig {
        width: 320,
        height: 240,
        background: Some("midnightblue".into()),
        clip: None,
        sprites: vec![
            SpriteConfig {
                source: SourceConfig::Checker {
                    width: 320,
                    height: 240,
                    cell: 16,
                    light: "#303030".into(),
                    dark: "#101010".into(),
                },
                x: 0,
                y: 0,
                uv: [0, 0],
                size: None,
                tint: None,
                blend: BlendMode::Alpha,
            },
            SpriteConfig {
                source: SourceConfig::HueRamp {
                    width: 256,
                    height: 128,
                },
                x: 32,
                y: 32,
                uv: [0, 0],
                size: None,
                tint: None,
                blend: BlendMode::Alpha,
            },
            SpriteConfig {
                source: SourceConfig::Solid {
                    width: 96,
                    height: 96,
                    color: "orange".into(),
                },
                x: 40,
                y: 120,
                uv: [0, 0],
                size: None,
                tint: None,
                blend: BlendMode::Additive,
            },
            SpriteConfig {
                source: SourceConfig::Solid {
                    width: 96,
                    height: 96,
                    color: "#80ff80".into(),
                },
                x: 180,
                y: 120,
                uv: [0, 0],
                size: None,
                tint: Some("gray".into()),
                blend: BlendMode::Multiply,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_renders() {
        let config = default_scene();
        let image = render(&config).unwrap();
        assert_eq!(image.width(), 320);
        assert_eq!(image.height(), 240);
    }

    #[test]
    fn test_solid_source_build() {
        let source = SourceConfig::Solid {
            width: 2,
            height: 2,
            color: "red".into(),
        };
        let image = source.build().unwrap();
        assert!(image.data().iter().all(|&c| c == Color::RED));
    }

    #[test]
    fn test_unknown_color_is_an_error() {
        let source = SourceConfig::Solid {
            width: 2,
            height: 2,
            color: "vantablack".into(),
        };
        assert!(source.build().is_err());
    }

    #[test]
    fn test_scene_round_trips_through_json() {
        let config = default_scene();
        let json = serde_json::to_string(&config).unwrap();
        let back: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sprites.len(), config.sprites.len());
        assert_eq!(back.width, config.width);
    }

    #[test]
    fn test_clip_rect_applies_to_render() {
        let config = SceneConfig {
            width: 8,
            height: 8,
            background: None,
            clip: Some([0, 0, 4, 4]),
            sprites: vec![SpriteConfig {
                source: SourceConfig::Solid {
                    width: 8,
                    height: 8,
                    color: "red".into(),
                },
                x: 0,
                y: 0,
                uv: [0, 0],
                size: None,
                tint: None,
                blend: BlendMode::Alpha,
            }],
        };
        let image = render(&config).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Color::RED));
        assert_eq!(image.pixel(5, 5), Some(Color::BLACK));
    }
}
