/// Bounds-checked field extraction from raw frame buffers.
///
/// Every read goes through [`validate_bounds`] first. Offsets and widths are
/// parser constants described by [`Field`]; byte order is always explicit.
use thiserror::Error;

/// Byte order of a multi-byte field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

/// A field does not fit inside the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("field at offset {offset} with length {len} exceeds buffer of {available} bytes")]
pub struct OutOfBounds {
    pub offset: usize,
    pub len: usize,
    pub available: usize,
}

/// Check that `len` bytes starting at `offset` lie inside `buf`.
pub fn validate_bounds(buf: &[u8], offset: usize, len: usize) -> Result<(), OutOfBounds> {
    match offset.checked_add(len) {
        Some(end) if end <= buf.len() => Ok(()),
        _ => Err(OutOfBounds {
            offset,
            len,
            available: buf.len(),
        }),
    }
}

/// Borrow `len` bytes starting at `offset`.
pub fn slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], OutOfBounds> {
    validate_bounds(buf, offset, len)?;
    Ok(&buf[offset..offset + len])
}

/// Position of a fixed-width field: `N` bytes at `offset`, in `order`.
///
/// Reads are provided for the widths 802.11 actually uses (1, 2, 4, 6, 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<const N: usize> {
    pub offset: usize,
    pub order: ByteOrder,
}

impl<const N: usize> Field<N> {
    /// Little-endian field (the 802.11 default for fixed fields).
    pub const fn le(offset: usize) -> Self {
        Self {
            offset,
            order: ByteOrder::Little,
        }
    }

    /// Big-endian field (network order, e.g. LLC/SNAP EtherType).
    pub const fn be(offset: usize) -> Self {
        Self {
            offset,
            order: ByteOrder::Big,
        }
    }

    /// First byte past the end of this field.
    pub const fn end(&self) -> usize {
        self.offset + N
    }

    pub fn validate(&self, buf: &[u8]) -> Result<(), OutOfBounds> {
        validate_bounds(buf, self.offset, N)
    }

    /// The raw bytes of this field, in wire order.
    pub fn bytes(&self, buf: &[u8]) -> Result<[u8; N], OutOfBounds> {
        let raw = slice(buf, self.offset, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(raw);
        Ok(out)
    }
}

impl Field<1> {
    pub fn read(&self, buf: &[u8]) -> Result<u8, OutOfBounds> {
        Ok(self.bytes(buf)?[0])
    }
}

impl Field<2> {
    pub fn read(&self, buf: &[u8]) -> Result<u16, OutOfBounds> {
        let b = self.bytes(buf)?;
        Ok(match self.order {
            ByteOrder::Little => u16::from_le_bytes(b),
            ByteOrder::Big => u16::from_be_bytes(b),
        })
    }
}

impl Field<4> {
    pub fn read(&self, buf: &[u8]) -> Result<u32, OutOfBounds> {
        let b = self.bytes(buf)?;
        Ok(match self.order {
            ByteOrder::Little => u32::from_le_bytes(b),
            ByteOrder::Big => u32::from_be_bytes(b),
        })
    }
}

impl Field<6> {
    /// MAC addresses are byte strings; order does not apply.
    pub fn read(&self, buf: &[u8]) -> Result<[u8; 6], OutOfBounds> {
        self.bytes(buf)
    }
}

impl Field<8> {
    pub fn read(&self, buf: &[u8]) -> Result<u64, OutOfBounds> {
        let b = self.bytes(buf)?;
        Ok(match self.order {
            ByteOrder::Little => u64::from_le_bytes(b),
            ByteOrder::Big => u64::from_be_bytes(b),
        })
    }
}
