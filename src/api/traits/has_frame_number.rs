use crate::FrameNumber;

/// Implemented by anything that can be positioned in a frame sequence,
/// e.g. a decoded video frame or a log record with a sequence number.
pub trait HasFrameNumber {
    /// Returns the frame number of this item.
    fn frame_number(&self) -> FrameNumber;
}

impl HasFrameNumber for i64 {
    fn frame_number(&self) -> FrameNumber {
        *self
    }
}

impl HasFrameNumber for i32 {
    fn frame_number(&self) -> FrameNumber {
        FrameNumber::from(*self)
    }
}

impl HasFrameNumber for u32 {
    fn frame_number(&self) -> FrameNumber {
        FrameNumber::from(*self)
    }
}

impl<T: HasFrameNumber + ?Sized> HasFrameNumber for &T {
    fn frame_number(&self) -> FrameNumber {
        (**self).frame_number()
    }
}
