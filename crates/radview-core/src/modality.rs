//! Modality identification and tonal filter profiles
//!
//! Maps a DICOM-style modality code to a deterministic tonal profile:
//! contrast, brightness and saturation coefficients applied during
//! compositing, plus the blend strength used by the adaptive contrast
//! enhancement pass.
//!
//! Selection is a total function: codes are matched case-insensitively
//! and anything unrecognized resolves to the default profile, never to
//! an error.

/// Imaging modality tag.
///
/// A closed enumeration: free-form modality strings are parsed once at
/// the boundary and everything downstream matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modality {
    /// Digital radiography
    Dx,
    /// Computed radiography
    Cr,
    /// Direct radiography
    Dr,
    /// Mammography
    Mg,
    /// Computed tomography
    Ct,
    /// Magnetic resonance
    Mr,
    /// Ultrasound
    Us,
    /// X-ray angiography
    Xa,
    /// Radio fluoroscopy
    Rf,
    /// Unrecognized code; uses the default profile
    #[default]
    Unknown,
}

impl Modality {
    /// Parse a free-form modality code.
    ///
    /// Matching is case-insensitive and total: `"MRI"` is accepted as
    /// an alias for MR, and any unrecognized code yields
    /// [`Modality::Unknown`].
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "DX" => Modality::Dx,
            "CR" => Modality::Cr,
            "DR" => Modality::Dr,
            "MG" => Modality::Mg,
            "CT" => Modality::Ct,
            "MR" | "MRI" => Modality::Mr,
            "US" => Modality::Us,
            "XA" => Modality::Xa,
            "RF" => Modality::Rf,
            _ => Modality::Unknown,
        }
    }

    /// Look up the tonal profile for this modality.
    ///
    /// Table-driven and deterministic: the same modality always yields
    /// the same profile.
    pub fn profile(self) -> ModalityProfile {
        match self {
            Modality::Dx => ModalityProfile::new(1.20, 1.05, 1.00, 0.60),
            Modality::Cr => ModalityProfile::new(1.25, 1.10, 1.00, 0.60),
            Modality::Dr => ModalityProfile::new(1.20, 1.05, 1.00, 0.60),
            Modality::Mg => ModalityProfile::new(1.30, 1.00, 1.00, 0.65),
            Modality::Ct => ModalityProfile::new(1.15, 1.00, 1.00, 0.40),
            Modality::Mr => ModalityProfile::new(1.20, 1.05, 1.00, 0.40),
            Modality::Us => ModalityProfile::new(1.10, 1.10, 1.20, 0.80),
            Modality::Xa => ModalityProfile::new(1.25, 1.05, 1.00, 0.50),
            Modality::Rf => ModalityProfile::new(1.20, 1.10, 1.00, 0.50),
            Modality::Unknown => ModalityProfile::default(),
        }
    }
}

/// Tonal coefficients for one modality.
///
/// `contrast`, `brightness` and `saturation` compose the tonal filter
/// applied while compositing; `enhancement_strength` is the blend
/// fraction for the histogram-equalization pass (0.0 leaves the frame
/// untouched, 1.0 is full equalization).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalityProfile {
    /// Contrast multiplier, pivoted at mid-gray
    pub contrast: f32,
    /// Brightness multiplier
    pub brightness: f32,
    /// Saturation mix factor (1.0 = unchanged, 0.0 = grayscale)
    pub saturation: f32,
    /// Histogram-equalization blend strength in [0.0, 1.0]
    pub enhancement_strength: f32,
}

impl ModalityProfile {
    /// Construct a profile from raw coefficients.
    pub const fn new(
        contrast: f32,
        brightness: f32,
        saturation: f32,
        enhancement_strength: f32,
    ) -> Self {
        Self {
            contrast,
            brightness,
            saturation,
            enhancement_strength,
        }
    }

    /// Render the profile as a CSS-style filter string.
    ///
    /// This is the fallback presentation path: a simplified renderer
    /// that cannot run the buffer-level passes can still approximate
    /// the profile with a whole-surface post-multiply.
    pub fn css_filter(&self) -> String {
        format!(
            "contrast({}) brightness({}) saturate({})",
            self.contrast, self.brightness, self.saturation
        )
    }

    /// Whether the tonal filter is an identity mapping.
    pub fn is_identity(&self) -> bool {
        self.contrast == 1.0 && self.brightness == 1.0 && self.saturation == 1.0
    }
}

impl Default for ModalityProfile {
    /// The neutral profile used for unknown modalities.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 0.5)
    }
}
