//! Embedded picture buffer.
//!
//! A [`Picture`] is filled by the `\pict` destination: the image type comes
//! from the blip keyword, the bytes from the hex run (or `\bin` data) and the
//! display size from `\picwgoal`/`\pichgoal`. When no goal size was given the
//! size is derived from the image itself the first time it is asked for.

use super::symbols::Minor;
use crate::common::binary::{bounds_i16, bounds_i32, le_u16, le_u32};
use crate::common::unit::{DEFAULT_DPI, twips_to_pixels, units_to_pixels};
use once_cell::unsync::OnceCell;

/// Image formats a picture destination can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    /// `\pngblip`
    Png,
    /// `\jpegblip`
    Jpeg,
    /// `\wmetafileN`
    Wmf,
    /// `\emfblip`
    Emf,
}

impl ImageType {
    /// Image type selected by a picture keyword.
    pub fn from_minor(minor: Minor) -> Option<Self> {
        match minor {
            Minor::PngBlip => Some(ImageType::Png),
            Minor::JpegBlip => Some(ImageType::Jpeg),
            Minor::WinMetafile => Some(ImageType::Wmf),
            Minor::EnhancedMetafile => Some(ImageType::Emf),
            _ => None,
        }
    }

    /// Keyword code used for the synthetic token announcing a finished picture.
    pub fn minor(self) -> Minor {
        match self {
            ImageType::Png => Minor::PngBlip,
            ImageType::Jpeg => Minor::JpegBlip,
            ImageType::Wmf => Minor::WinMetafile,
            ImageType::Emf => Minor::EnhancedMetafile,
        }
    }
}

const WMF_PLACEABLE_KEY: u32 = 0x9AC6_CDD7;
const EMF_HEADER_RECORD: u32 = 1;
const EMF_SIGNATURE: u32 = 0x464D_4520; // " EMF"

/// Detect image type from binary signature.
pub fn detect_image_type(data: &[u8]) -> Option<ImageType> {
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(ImageType::Png);
    }
    if data.starts_with(&[0xFF, 0xD8]) {
        return Some(ImageType::Jpeg);
    }
    if le_u32(data, 0) == Some(WMF_PLACEABLE_KEY) {
        return Some(ImageType::Wmf);
    }
    if le_u32(data, 0) == Some(EMF_HEADER_RECORD) && le_u32(data, 40) == Some(EMF_SIGNATURE) {
        return Some(ImageType::Emf);
    }
    None
}

/// Picture decoded from a `\pict` group.
#[derive(Debug, Clone)]
pub struct Picture {
    image_type: Option<ImageType>,
    data: Vec<u8>,
    dpi: f32,
    width: Option<u32>,
    height: Option<u32>,
    source_width: Option<i32>,
    source_height: Option<i32>,
    scale_x: Option<i32>,
    scale_y: Option<i32>,
    intrinsic: OnceCell<Option<(u32, u32)>>,
}

impl Default for Picture {
    fn default() -> Self {
        Self::new(DEFAULT_DPI)
    }
}

impl Picture {
    /// Empty picture converting twips at `dpi`.
    pub fn new(dpi: f32) -> Self {
        Self {
            image_type: None,
            data: Vec::new(),
            dpi,
            width: None,
            height: None,
            source_width: None,
            source_height: None,
            scale_x: None,
            scale_y: None,
            intrinsic: OnceCell::new(),
        }
    }

    #[inline]
    pub fn image_type(&self) -> Option<ImageType> {
        self.image_type
    }

    /// Decoded image bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    /// `\picw`, in the picture's own units.
    #[inline]
    pub fn source_width(&self) -> Option<i32> {
        self.source_width
    }

    /// `\pich`, in the picture's own units.
    #[inline]
    pub fn source_height(&self) -> Option<i32> {
        self.source_height
    }

    /// `\picscalex` percentage.
    #[inline]
    pub fn scale_x(&self) -> Option<i32> {
        self.scale_x
    }

    /// `\picscaley` percentage.
    #[inline]
    pub fn scale_y(&self) -> Option<i32> {
        self.scale_y
    }

    /// A picture is usable once it has bytes and a known format.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.data.is_empty() && self.image_type.is_some()
    }

    /// Display width in pixels: the goal width if one was set, otherwise the
    /// image's own width.
    pub fn width(&self) -> Option<u32> {
        self.width.or_else(|| self.intrinsic_size().map(|(w, _)| w))
    }

    /// Display height in pixels, see [`Picture::width`].
    pub fn height(&self) -> Option<u32> {
        self.height.or_else(|| self.intrinsic_size().map(|(_, h)| h))
    }

    /// Size stored in the image data itself, computed once.
    pub fn intrinsic_size(&self) -> Option<(u32, u32)> {
        *self.intrinsic.get_or_init(|| self.compute_intrinsic_size())
    }

    pub(crate) fn set_image_type(&mut self, image_type: ImageType) {
        self.image_type = Some(image_type);
        self.intrinsic = OnceCell::new();
    }

    pub(crate) fn push_byte(&mut self, byte: u8) {
        self.data.push(byte);
    }

    pub(crate) fn extend_data(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub(crate) fn set_width_twips(&mut self, twips: i32) {
        self.width = Some(twips_to_pixels(twips, self.dpi));
    }

    pub(crate) fn set_height_twips(&mut self, twips: i32) {
        self.height = Some(twips_to_pixels(twips, self.dpi));
    }

    pub(crate) fn set_source_size(&mut self, width: Option<i32>, height: Option<i32>) {
        if width.is_some() {
            self.source_width = width;
        }
        if height.is_some() {
            self.source_height = height;
        }
    }

    pub(crate) fn set_scale(&mut self, x: Option<i32>, y: Option<i32>) {
        if x.is_some() {
            self.scale_x = x;
        }
        if y.is_some() {
            self.scale_y = y;
        }
    }

    fn compute_intrinsic_size(&self) -> Option<(u32, u32)> {
        match self.image_type? {
            ImageType::Png | ImageType::Jpeg => raster_size(&self.data),
            ImageType::Wmf => wmf_size(&self.data, self.dpi),
            ImageType::Emf => emf_size(&self.data),
        }
    }
}

#[cfg(feature = "imgconv")]
fn raster_size(data: &[u8]) -> Option<(u32, u32)> {
    use std::io::Cursor;

    let reader = image::ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?;
    match reader.into_dimensions() {
        Ok(size) => Some(size),
        Err(e) => {
            log::warn!("cannot read picture dimensions: {}", e);
            None
        },
    }
}

#[cfg(not(feature = "imgconv"))]
fn raster_size(_data: &[u8]) -> Option<(u32, u32)> {
    None
}

/// Size from an Aldus placeable metafile header.
fn wmf_size(data: &[u8], dpi: f32) -> Option<(u32, u32)> {
    if le_u32(data, 0)? != WMF_PLACEABLE_KEY {
        return None;
    }
    let (width, height) = bounds_i16(data, 6)?.extent(false)?;
    let inch = u32::from(le_u16(data, 14)?);
    Some((
        units_to_pixels(width, inch, dpi),
        units_to_pixels(height, inch, dpi),
    ))
}

/// Size from the bounds rectangle of the EMF header (device units).
fn emf_size(data: &[u8]) -> Option<(u32, u32)> {
    if le_u32(data, 0)? != EMF_HEADER_RECORD {
        return None;
    }
    let (width, height) = bounds_i32(data, 8)?.extent(true)?;
    Some((u32::try_from(width).ok()?, u32::try_from(height).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeable_wmf(width: i16, height: i16, inch: u16) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&WMF_PLACEABLE_KEY.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        for v in [0i16, 0, width, height] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        data.extend_from_slice(&inch.to_le_bytes());
        data.extend_from_slice(&[0; 6]);
        data
    }

    #[test]
    fn test_goal_width_conversion() {
        let mut pic = Picture::new(96.0);
        pic.set_width_twips(1440);
        pic.set_height_twips(720);
        assert_eq!(pic.width(), Some(96));
        assert_eq!(pic.height(), Some(48));
    }

    #[test]
    fn test_validity() {
        let mut pic = Picture::default();
        assert!(!pic.is_valid());
        pic.push_byte(0x89);
        assert!(!pic.is_valid());
        pic.set_image_type(ImageType::Png);
        assert!(pic.is_valid());
    }

    #[test]
    fn test_wmf_intrinsic_size() {
        let mut pic = Picture::new(96.0);
        pic.set_image_type(ImageType::Wmf);
        pic.extend_data(&placeable_wmf(1440, 720, 1440));
        assert_eq!(pic.intrinsic_size(), Some((96, 48)));
        assert_eq!(pic.width(), Some(96));
    }

    #[test]
    fn test_goal_size_wins_over_intrinsic() {
        let mut pic = Picture::new(96.0);
        pic.set_image_type(ImageType::Wmf);
        pic.extend_data(&placeable_wmf(1440, 1440, 1440));
        pic.set_width_twips(2880);
        assert_eq!(pic.width(), Some(192));
        assert_eq!(pic.height(), Some(96));
    }

    #[test]
    fn test_emf_intrinsic_size() {
        let mut data = Vec::new();
        data.extend_from_slice(&EMF_HEADER_RECORD.to_le_bytes());
        data.extend_from_slice(&108u32.to_le_bytes());
        for v in [0i32, 0, 199, 99] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        data.resize(40, 0);
        data.extend_from_slice(&EMF_SIGNATURE.to_le_bytes());
        assert_eq!(detect_image_type(&data), Some(ImageType::Emf));

        let mut pic = Picture::default();
        pic.set_image_type(ImageType::Emf);
        pic.extend_data(&data);
        assert_eq!(pic.intrinsic_size(), Some((200, 100)));
    }

    #[test]
    fn test_truncated_data_has_no_size() {
        let mut pic = Picture::default();
        pic.set_image_type(ImageType::Wmf);
        pic.extend_data(&[0xD7, 0xCD]);
        assert_eq!(pic.width(), None);
    }

    #[test]
    fn test_detect() {
        assert_eq!(
            detect_image_type(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
            Some(ImageType::Png)
        );
        assert_eq!(detect_image_type(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageType::Jpeg));
        assert_eq!(
            detect_image_type(&placeable_wmf(1, 1, 1440)),
            Some(ImageType::Wmf)
        );
        assert_eq!(detect_image_type(b"BM"), None);
        assert_eq!(detect_image_type(&[]), None);
    }

    #[test]
    fn test_minor_mapping() {
        for ty in [ImageType::Png, ImageType::Jpeg, ImageType::Wmf, ImageType::Emf] {
            assert_eq!(ImageType::from_minor(ty.minor()), Some(ty));
        }
        assert_eq!(ImageType::from_minor(Minor::MacQD), None);
    }

    #[cfg(feature = "imgconv")]
    #[test]
    fn test_png_intrinsic_size() {
        let img = image::RgbImage::new(3, 2);
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let mut pic = Picture::default();
        pic.set_image_type(ImageType::Png);
        pic.extend_data(&bytes);
        assert_eq!(pic.intrinsic_size(), Some((3, 2)));
    }
}
