use image::imageops::FilterType;

/// Output geometry and naming for the generated header.
#[derive(Clone, Debug)]
pub struct TargetConfig {
    pub width: u32,
    pub height: u32,
    /// Resampling filter for the forced resize.
    pub filter: FilterType,
    /// `<prefix>_WIDTH` / `<prefix>_HEIGHT`
    pub macro_prefix: String,
    pub array_name: String,
    pub platform_header: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 170,
            filter: FilterType::Lanczos3,
            macro_prefix: "GALLERY_IMG".to_string(),
            array_name: "gallery_image".to_string(),
            platform_header: "Arduino.h".to_string(),
        }
    }
}

