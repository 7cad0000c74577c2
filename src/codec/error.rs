use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Fewer bytes remain in the frame than the read asked for. `requested`
    /// saturates at `usize::MAX` when `rows * width` overflows.
    #[error("short read in {context}: requested {requested} bytes, {remaining} remaining")]
    ShortRead {
        context: Cow<'static, str>,
        requested: usize,
        remaining: usize,
    },
}

impl CodecError {
    pub(crate) fn short_read(
        context: impl Into<Cow<'static, str>>,
        requested: usize,
        remaining: usize,
    ) -> Self {
        CodecError::ShortRead {
            context: context.into(),
            requested,
            remaining,
        }
    }

    /// Prefixes the context with the operation that issued the failing read,
    /// e.g. `decode UInt16 column: read raw`.
    pub fn within(self, outer: impl AsRef<str>) -> Self {
        match self {
            CodecError::ShortRead {
                context,
                requested,
                remaining,
            } => CodecError::ShortRead {
                context: Cow::Owned(format!("{}: {}", outer.as_ref(), context)),
                requested,
                remaining,
            },
        }
    }

    pub fn context(&self) -> &str {
        match self {
            CodecError::ShortRead { context, .. } => context,
        }
    }

    pub fn is_short_read(&self) -> bool {
        matches!(self, CodecError::ShortRead { .. })
    }
}
