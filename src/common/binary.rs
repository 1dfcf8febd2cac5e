//! Little-endian field access for the metafile headers embedded in RTF
//! pictures.
//!
//! Picture buffers come straight from the document and may be truncated, so
//! every read is bounds-checked and yields `None` past the end.

use zerocopy::{FromBytes, I16, I32, LE, U16, U32};

/// Bounding box stored in a metafile header, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Width and height, or `None` for an empty or inverted box.
    pub fn extent(&self, inclusive: bool) -> Option<(i32, i32)> {
        let pad = i32::from(inclusive);
        let width = self.right.checked_sub(self.left)?.checked_add(pad)?;
        let height = self.bottom.checked_sub(self.top)?.checked_add(pad)?;
        (width > 0 && height > 0).then_some((width, height))
    }
}

macro_rules! le_reader {
    ($(#[$doc:meta])* $name:ident, $wire:ty, $out:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(data: &[u8], offset: usize) -> Option<$out> {
            let end = offset.checked_add(size_of::<$out>())?;
            <$wire>::read_from_bytes(data.get(offset..end)?)
                .ok()
                .map(|v| v.get())
        }
    };
}

le_reader!(
    /// `u16` at `offset`.
    ///
    /// ```
    /// use rtfkit::common::binary::le_u16;
    /// assert_eq!(le_u16(&[0x34, 0x12], 0), Some(0x1234));
    /// assert_eq!(le_u16(&[0x34], 0), None);
    /// ```
    le_u16, U16<LE>, u16
);
le_reader!(le_i16, I16<LE>, i16);
le_reader!(le_u32, U32<LE>, u32);
le_reader!(le_i32, I32<LE>, i32);

/// Four consecutive `i16` coordinates (WMF placeable header).
pub fn bounds_i16(data: &[u8], offset: usize) -> Option<Bounds> {
    Some(Bounds {
        left: le_i16(data, offset)?.into(),
        top: le_i16(data, offset + 2)?.into(),
        right: le_i16(data, offset + 4)?.into(),
        bottom: le_i16(data, offset + 6)?.into(),
    })
}

/// Four consecutive `i32` coordinates (EMF header).
pub fn bounds_i32(data: &[u8], offset: usize) -> Option<Bounds> {
    Some(Bounds {
        left: le_i32(data, offset)?,
        top: le_i32(data, offset + 4)?,
        right: le_i32(data, offset + 8)?,
        bottom: le_i32(data, offset + 12)?,
    })
}
