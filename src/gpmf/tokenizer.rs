//! Turns a GPMF byte stream into a sequence of KLV tokens.
//!
//! The source is read once, front to back. Nested entries are emitted as
//! payload-less tokens followed by their children, `EMPT` entries are skipped,
//! and padding is consumed but never returned.
//!
//! A short read ends the sequence with `GpmfError::UnexpectedEof`.
//! Any other error also ends the sequence, the tokenizer is fused after
//! the first error.

use std::io::{ErrorKind, Read};

use log::{debug, trace};

use crate::constants::{EMPT_PAYLOAD_SIZE, KLV_HEADER_SIZE};
use crate::GpmfError;

use super::container::ContainerStack;
use super::klv::{padding, KlvDescriptor};
use super::{FourCC, Token, ValueType};

pub struct Tokenizer<R> {
    reader: R,
    /// Bytes consumed so far.
    position: u64,
    containers: ContainerStack,
    /// Set once the stream is exhausted or an error was returned.
    done: bool,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
            containers: ContainerStack::default(),
            done: false,
        }
    }

    /// Number of bytes consumed from the source, padding included.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read until `buf` is full or the source is exhausted.
    /// Returns the number of bytes read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, GpmfError> {
        let mut total = 0;
        while total < buf.len() {
            match self.reader.read(&mut buf[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
        self.position += total as u64;
        Ok(total)
    }

    /// Fill `buf` completely or fail with `UnexpectedEof`.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), GpmfError> {
        let offset = self.position;
        let got = self.fill(buf)?;
        if got < buf.len() {
            return Err(GpmfError::UnexpectedEof {
                offset,
                expected: buf.len() as u64,
                got: got as u64,
            });
        }
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<Token>, GpmfError> {
        loop {
            let offset = self.position;

            let mut fourcc_buf = [0_u8; 4];
            let got = self.fill(&mut fourcc_buf)?;
            if got == 0 {
                // Stream ends on an entry boundary
                return Ok(None);
            }
            if got < fourcc_buf.len() {
                return Err(GpmfError::UnexpectedEof {
                    offset,
                    expected: fourcc_buf.len() as u64,
                    got: got as u64,
                });
            }
            let fourcc = FourCC::from_bytes(fourcc_buf, offset)?;

            let mut desc_buf = [0_u8; 4];
            self.read_exact(&mut desc_buf)?;
            let desc = KlvDescriptor::from_bytes(desc_buf)?;
            let value_type = ValueType::from(desc.value_type);
            let depth = self.containers.depth();

            if value_type.is_nested() {
                self.containers.consume(KLV_HEADER_SIZE as u64);
                self.containers.open(fourcc, desc.len() as u64);
                trace!("{fourcc} @{offset} opens {} bytes, depth {depth}", desc.len());
                return Ok(Some(Token {
                    fourcc,
                    value_type,
                    size: desc.size,
                    repeat: desc.repeat,
                    payload: Vec::new(),
                    offset,
                    padding: 0,
                    depth,
                }));
            }

            if fourcc == FourCC::EMPT {
                let mut reserved = [0_u8; EMPT_PAYLOAD_SIZE];
                self.read_exact(&mut reserved)?;
                self.containers.consume((KLV_HEADER_SIZE + EMPT_PAYLOAD_SIZE) as u64);
                trace!("EMPT @{offset} skipped");
                continue;
            }

            let len = desc.len();
            let mut payload = vec![0_u8; len];
            self.read_exact(&mut payload)?;

            let pad = padding(len);
            let mut pad_buf = [0_u8; 3];
            let skipped = self.fill(&mut pad_buf[..pad])?;
            if skipped < pad {
                // Payload is complete, only trailing alignment is missing
                debug!("{fourcc} @{offset}: stream ends inside padding ({skipped} of {pad} bytes)");
                self.done = true;
            }

            self.containers.consume((KLV_HEADER_SIZE + len + skipped) as u64);
            trace!(
                "{fourcc} @{offset} type {value_type}, {} x {} bytes, depth {depth}",
                desc.repeat,
                desc.size
            );

            return Ok(Some(Token {
                fourcc,
                value_type,
                size: desc.size,
                repeat: desc.repeat,
                payload,
                offset,
                padding: skipped,
                depth,
            }));
        }
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = Result<Token, GpmfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
