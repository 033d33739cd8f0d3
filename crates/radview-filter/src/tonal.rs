//! Tonal filter mapping
//!
//! Applies a composed contrast / brightness / saturation adjustment to
//! RGBA pixels, mirroring the whole-surface post-multiply a simplified
//! renderer would express as `contrast(c) brightness(b) saturate(s)`.
//!
//! Contrast and brightness are precomputed as a single 256-entry
//! lookup table; saturation is a luma-anchored mix applied after the
//! LUT. Alpha is never modified.

use radview_core::ModalityProfile;
use radview_core::color::luma;

/// A 256-entry lookup table mapping input channel values to output.
pub type TonalLut = [u8; 256];

/// Precomputed tonal mapping for one profile.
#[derive(Debug, Clone)]
pub struct TonalMap {
    lut: TonalLut,
    saturation: f32,
    identity: bool,
}

impl TonalMap {
    /// Build the tonal mapping for a modality profile.
    ///
    /// Brightness is a straight multiply; contrast pivots at mid-gray
    /// (127.5), so `contrast > 1.0` darkens shadows and lightens
    /// highlights symmetrically.
    pub fn new(profile: &ModalityProfile) -> Self {
        let mut lut = [0u8; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let v = i as f32 * profile.brightness;
            let v = (v - 127.5) * profile.contrast + 127.5;
            *entry = v.round().clamp(0.0, 255.0) as u8;
        }
        Self {
            lut,
            saturation: profile.saturation,
            identity: profile.is_identity(),
        }
    }

    /// Whether this mapping leaves every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// Apply the mapping to one RGBA pixel. Alpha passes through.
    #[inline]
    pub fn apply(&self, rgba: [u8; 4]) -> [u8; 4] {
        if self.identity {
            return rgba;
        }
        let r = self.lut[rgba[0] as usize];
        let g = self.lut[rgba[1] as usize];
        let b = self.lut[rgba[2] as usize];
        if self.saturation == 1.0 {
            return [r, g, b, rgba[3]];
        }
        // Saturation: mix each channel with its luma. s=0 collapses to
        // grayscale, s>1 pushes channels away from the luma axis.
        let l = luma(r, g, b) as f32;
        let s = self.saturation;
        let mix = |c: u8| -> u8 {
            let v = l + (c as f32 - l) * s;
            v.round().clamp(0.0, 255.0) as u8
        };
        [mix(r), mix(g), mix(b), rgba[3]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radview_core::Modality;

    #[test]
    fn test_identity_profile_passthrough() {
        let map = TonalMap::new(&ModalityProfile::default());
        assert!(map.is_identity());
        assert_eq!(map.apply([12, 34, 56, 78]), [12, 34, 56, 78]);
    }

    #[test]
    fn test_contrast_spreads_around_midgray() {
        let map = TonalMap::new(&ModalityProfile::new(1.5, 1.0, 1.0, 0.5));
        let dark = map.apply([64, 64, 64, 255]);
        let light = map.apply([192, 192, 192, 255]);
        assert!(dark[0] < 64, "dark pixel should darken, got {}", dark[0]);
        assert!(
            light[0] > 192,
            "light pixel should lighten, got {}",
            light[0]
        );
    }

    #[test]
    fn test_brightness_lifts_values() {
        let map = TonalMap::new(&ModalityProfile::new(1.0, 1.2, 1.0, 0.5));
        let out = map.apply([100, 100, 100, 255]);
        assert_eq!(out[0], 120);
        assert_eq!(out[3], 255);
    }

    #[test]
    fn test_saturation_zero_is_grayscale() {
        let map = TonalMap::new(&ModalityProfile::new(1.0, 1.0, 0.0, 0.5));
        let out = map.apply([200, 50, 30, 255]);
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
    }

    #[test]
    fn test_saturation_boost_spreads_channels() {
        let map = TonalMap::new(&ModalityProfile::new(1.0, 1.0, 1.2, 0.5));
        let input = [200u8, 50, 30, 255];
        let out = map.apply(input);
        // Channels above the luma move up, channels below move down.
        assert!(out[0] > input[0], "red should move away from luma");
        assert!(out[1] < input[1], "green should move away from luma");
    }

    #[test]
    fn test_alpha_untouched() {
        let map = TonalMap::new(&Modality::Cr.profile());
        assert_eq!(map.apply([10, 20, 30, 99])[3], 99);
    }

    #[test]
    fn test_clamping() {
        let map = TonalMap::new(&ModalityProfile::new(3.0, 2.0, 1.0, 0.5));
        let out = map.apply([250, 250, 250, 255]);
        assert_eq!(out[0], 255);
        let out = map.apply([2, 2, 2, 255]);
        assert_eq!(out[0], 0);
    }
}
