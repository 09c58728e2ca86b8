use serde::Serialize;

use crate::models::story::UploadedImage;

// Minimum width requested for hero placements.
pub const HERO_MIN_WIDTH: u32 = 1920;
// scale_crop on the CDN rejects anything above this in either dimension.
pub const MAX_TRANSFORM_DIMENSION: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl From<&UploadedImage> for ImageDimensions {
    fn from(image: &UploadedImage) -> Self {
        Self {
            width: image.original_width,
            height: image.original_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropSpec {
    pub width: u32,
    pub height: u32,
    /// Crop around the center, then fit. Never stretches.
    pub center: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    Original,
    ScaleCrop(CropSpec),
}

/// Works out which crop to ask the image CDN for so that `image` is shown at
/// `aspect_ratio`. Hero placements are additionally upscaled to at least
/// [`HERO_MIN_WIDTH`].
pub fn compute_crop(image: ImageDimensions, aspect_ratio: Option<f64>, is_hero: bool) -> Framing {
    let desired = match aspect_ratio {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => ratio,
        _ => return Framing::Original,
    };
    if image.width == 0 || image.height == 0 {
        return Framing::Original;
    }

    let width = f64::from(image.width);
    let height = f64::from(image.height);
    let actual = width / height;

    let hero_target = (HERO_MIN_WIDTH, round_dimension(f64::from(HERO_MIN_WIDTH) / desired));

    let (mut target_width, mut target_height) = if actual > desired {
        // too wide: keep the height, cut the sides
        (round_dimension(height * desired), image.height)
    } else if actual < desired {
        // too tall: keep the width, cut top and bottom
        (image.width, round_dimension(width / desired))
    } else if is_hero && image.width < HERO_MIN_WIDTH {
        hero_target
    } else {
        return Framing::Original;
    };

    if is_hero && target_width < HERO_MIN_WIDTH {
        (target_width, target_height) = hero_target;
    }

    let (width, height) = constrain(target_width, target_height);
    Framing::ScaleCrop(CropSpec {
        width,
        height,
        center: true,
    })
}

/// Scales a target down so that neither side exceeds [`MAX_TRANSFORM_DIMENSION`].
fn constrain(width: u32, height: u32) -> (u32, u32) {
    if width < MAX_TRANSFORM_DIMENSION && height < MAX_TRANSFORM_DIMENSION {
        return (width, height);
    }

    let max = f64::from(MAX_TRANSFORM_DIMENSION);
    let (w, h) = (f64::from(width), f64::from(height));
    (
        round_dimension(w / h * max).min(MAX_TRANSFORM_DIMENSION),
        round_dimension(h / w * max).min(MAX_TRANSFORM_DIMENSION),
    )
}

fn round_dimension(value: f64) -> u32 {
    value.round().max(1.0) as u32
}

/// Builds the CDN URL for `image` with `framing` applied on top of the effects
/// already stored with the upload.
pub fn cdn_url(base: &str, image: &UploadedImage, framing: Framing) -> String {
    let mut url = format!("{}/{}/", base.trim_end_matches('/'), image.uuid);

    for effect in &image.effects {
        let effect = effect.trim_matches('/');
        if effect.is_empty() {
            continue;
        }
        url.push_str("-/");
        url.push_str(effect.trim_start_matches("-/"));
        url.push('/');
    }

    if let Framing::ScaleCrop(crop) = framing {
        url.push_str(&format!("-/scale_crop/{}x{}/", crop.width, crop.height));
        if crop.center {
            url.push_str("center/");
        }
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> ImageDimensions {
        ImageDimensions { width, height }
    }

    fn crop(width: u32, height: u32) -> Framing {
        Framing::ScaleCrop(CropSpec {
            width,
            height,
            center: true,
        })
    }

    #[test]
    fn no_aspect_ratio_passes_through() {
        assert_eq!(compute_crop(dims(1200, 800), None, false), Framing::Original);
        assert_eq!(compute_crop(dims(1200, 800), None, true), Framing::Original);
    }

    #[test]
    fn degenerate_inputs_pass_through() {
        assert_eq!(compute_crop(dims(1200, 800), Some(0.0), false), Framing::Original);
        assert_eq!(compute_crop(dims(1200, 800), Some(f64::NAN), true), Framing::Original);
        assert_eq!(compute_crop(dims(0, 800), Some(1.5), true), Framing::Original);
    }

    #[test]
    fn matching_ratio_is_left_alone_outside_hero() {
        assert_eq!(compute_crop(dims(1600, 900), Some(16.0 / 9.0), false), Framing::Original);
        assert_eq!(compute_crop(dims(800, 450), Some(16.0 / 9.0), false), Framing::Original);
    }

    #[test]
    fn matching_ratio_hero_is_upscaled() {
        assert_eq!(compute_crop(dims(800, 450), Some(16.0 / 9.0), true), crop(1920, 1080));
    }

    #[test]
    fn matching_ratio_hero_already_wide_enough() {
        assert_eq!(compute_crop(dims(1920, 1080), Some(16.0 / 9.0), true), Framing::Original);
    }

    #[test]
    fn wide_image_keeps_height() {
        // 2.0 > 1.5
        assert_eq!(compute_crop(dims(2000, 1000), Some(1.5), false), crop(1500, 1000));
        assert_eq!(compute_crop(dims(4000, 2000), Some(1.0), false), crop(2000, 2000));
    }

    #[test]
    fn tall_image_keeps_width() {
        assert_eq!(compute_crop(dims(1200, 1200), Some(16.0 / 9.0), false), crop(1200, 675));
        assert_eq!(compute_crop(dims(2000, 4000), Some(1.0), false), crop(2000, 2000));
    }

    #[test]
    fn hero_floor_overrides_crop() {
        // crop would give 1200x675
        assert_eq!(compute_crop(dims(1200, 1200), Some(16.0 / 9.0), true), crop(1920, 1080));
        // crop would give 400x300
        assert_eq!(compute_crop(dims(800, 300), Some(4.0 / 3.0), true), crop(1920, 1440));
    }

    #[test]
    fn hero_floor_ignored_for_wide_targets() {
        assert_eq!(compute_crop(dims(2400, 1000), Some(2.0), true), crop(2000, 1000));
    }

    #[test]
    fn ceiling_clamps_square_crop() {
        assert_eq!(compute_crop(dims(6000, 3000), Some(1.0), false), crop(3000, 3000));
        assert_eq!(compute_crop(dims(3500, 3000), Some(1.0), true), crop(3000, 3000));
    }

    #[test]
    fn ceiling_preserves_ratio() {
        // 8000x4000 at 16:9 -> 7111x4000 -> 3000x1688
        let framing = compute_crop(dims(8000, 4000), Some(16.0 / 9.0), false);
        assert_eq!(framing, crop(3000, 1688));

        let Framing::ScaleCrop(spec) = framing else {
            panic!("expected a crop");
        };
        let ratio = f64::from(spec.width) / f64::from(spec.height);
        assert!((ratio - 7111.0 / 4000.0).abs() < 0.01);
    }

    #[test]
    fn ceiling_applies_at_exactly_the_limit() {
        // 3000 wide target is touched too, and stays at 3000
        assert_eq!(compute_crop(dims(3000, 3000), Some(1.5), false), crop(3000, 2000));
    }

    #[test]
    fn ceiling_on_tall_target() {
        // 3000x6000 -> keeps width 3000, height 3000 for ratio 1
        assert_eq!(compute_crop(dims(3000, 6000), Some(1.0), false), crop(3000, 3000));
        // 2000x8000 at 1:2 -> 2000x4000 -> 1500x3000
        assert_eq!(compute_crop(dims(2000, 8000), Some(0.5), false), crop(1500, 3000));
    }

    #[test]
    fn cdn_url_appends_scale_crop() {
        let image = UploadedImage {
            uuid: "a6b1c2d3".to_string(),
            filename: None,
            original_width: 1000,
            original_height: 1000,
            effects: vec!["/preview/".to_string(), "-/quality/smart/".to_string()],
        };

        assert_eq!(
            cdn_url("https://cdn.example.com/", &image, crop(1200, 675)),
            "https://cdn.example.com/a6b1c2d3/-/preview/-/quality/smart/-/scale_crop/1200x675/center/"
        );
        assert_eq!(
            cdn_url("https://cdn.example.com", &image, Framing::Original),
            "https://cdn.example.com/a6b1c2d3/-/preview/-/quality/smart/"
        );
    }
}
