//! Stack of open nested containers (`DEVC`, `STRM`).
//!
//! Containers are tracked so each token knows its nesting depth,
//! but child entries are not scoped to their parent: the decoder
//! folds everything between two boundaries into one flat interval.

use log::warn;

use super::FourCC;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Frame {
    pub fourcc: FourCC,
    /// Child bytes left before the container closes.
    pub remaining: u64,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ContainerStack(Vec<Frame>);

impl ContainerStack {
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Open a container with `len` bytes of children.
    /// Zero length containers close immediately and are not pushed.
    pub fn open(&mut self, fourcc: FourCC, len: u64) {
        if len > 0 {
            self.0.push(Frame { fourcc, remaining: len });
        }
    }

    /// Charge `bytes` of framed data to every open container,
    /// closing those that are used up.
    pub fn consume(&mut self, bytes: u64) {
        for frame in self.0.iter_mut() {
            if bytes > frame.remaining {
                warn!(
                    "{} overrun by {} bytes, closing container",
                    frame.fourcc,
                    bytes - frame.remaining
                );
                frame.remaining = 0;
            } else {
                frame.remaining -= bytes;
            }
        }
        self.0.retain(|f| f.remaining > 0);
    }
}
