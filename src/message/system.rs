use crate::{
    message::EventKind,
    reader::{ReadResult, Reader},
};

/// Skip a system exclusive or system common block.
///
/// Both `0xF0` and the `0xF7` escape are handled the same way: one length
/// byte, then that many bytes that are discarded. The content is not kept.
pub(super) fn skip_system_exclusive(reader: &mut Reader<'_>) -> ReadResult<EventKind> {
    let length = reader.read_u8()?;
    reader.read_exact(length as usize)?;
    Ok(EventKind::SystemExclusive)
}
