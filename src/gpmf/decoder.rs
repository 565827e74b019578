//! Folds tokens into interval records.
//!
//! Intervals are delimited by `DVID`. This is the best known anchor
//! for "about one second of data", observed on HERO5 era streams,
//! not something the format guarantees.
//!
//! ```rs
//! use gpmf_telemetry::Decoder;
//!
//! let bytes = std::fs::read("GOPRO_VIDEO.gpmf")?;
//! for interval in Decoder::from_slice(&bytes) {
//!     let interval = interval?;
//!     println!("{} accelerometer samples", interval.accelerometer.len());
//! }
//! ```

use std::io::{Cursor, Read};

use log::{debug, trace, warn};

use crate::content_types::{Sample, SensorType};
use crate::telemetry::IntervalRecord;
use crate::GpmfError;

use super::{FourCC, ScaleRegistry, Token, Tokenizer};

#[derive(Debug, Default)]
enum State {
    /// No boundary seen and no samples yet.
    #[default]
    Empty,
    Accumulating(IntervalRecord),
}

pub struct Decoder<R> {
    tokens: Tokenizer<R>,
    scale: ScaleRegistry,
    state: State,
    /// Set at end of stream or after the first hard error.
    done: bool,
    /// Stream ended mid-structure.
    truncated: bool,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            tokens: Tokenizer::new(reader),
            scale: ScaleRegistry::default(),
            state: State::Empty,
            done: false,
            truncated: false,
        }
    }

    /// Number of bytes consumed from the source.
    pub fn position(&self) -> u64 {
        self.tokens.position()
    }

    /// Returns `true` if the stream ended inside a structure.
    /// Only meaningful once the iterator is exhausted.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Apply a single token. Returns a closed interval
    /// if the token was a boundary.
    fn apply(&mut self, token: Token) -> Result<Option<IntervalRecord>, GpmfError> {
        // Container headers carry no payload, even a nested DVID
        if token.is_container() {
            return Ok(None);
        }

        if token.fourcc.is_boundary() {
            return Ok(self.boundary());
        }

        match token.fourcc {
            FourCC::SCAL => {
                self.scale
                    .set(&token.payload, token.size)
                    .map_err(|err| err.locate(FourCC::SCAL.to_str(), token.offset))?;
                trace!("SCAL @{}: {:?}", token.offset, self.scale.as_slice());
            }

            FourCC::ACCL
            | FourCC::GYRO
            | FourCC::MAGN
            | FourCC::GPS5
            | FourCC::GPSU
            | FourCC::GPSF
            | FourCC::GPSP
            | FourCC::TMPC
            | FourCC::TSMP => self.fold_samples(&token)?,

            FourCC::DEVC
            | FourCC::DVID
            | FourCC::DVNM
            | FourCC::STRM
            | FourCC::STNM
            | FourCC::SIUN
            | FourCC::UNIT
            | FourCC::TYPE
            | FourCC::EMPT
            | FourCC::TICK
            | FourCC::ALLD
            | FourCC::FACE
            | FourCC::FCNM
            | FourCC::ISOE
            | FourCC::ISOG
            | FourCC::SHUT
            | FourCC::WBAL
            | FourCC::WRGB
            | FourCC::GPRO
            | FourCC::HD5 => trace!("{} @{} ignored", token.fourcc, token.offset),
        }

        Ok(None)
    }

    /// Decode every element of a sample token into the open interval.
    fn fold_samples(&mut self, token: &Token) -> Result<(), GpmfError> {
        // Zero width elements would yield no windows at all
        if token.size == 0 && token.repeat > 0 {
            if let Some(expected) = Sample::width(token.fourcc) {
                return Err(GpmfError::InvalidLength {
                    fourcc: token.fourcc.to_str().to_owned(),
                    offset: token.offset,
                    expected,
                    got: 0,
                });
            }
        }

        for element in token.elements() {
            let sample = Sample::decode(token.fourcc, element, &self.scale)
                .map_err(|err| err.locate(token.fourcc.to_str(), token.offset))?;
            let Some(sample) = sample else {
                continue;
            };

            if matches!(self.state, State::Empty) {
                self.state = State::Accumulating(IntervalRecord::default());
            }
            if let State::Accumulating(interval) = &mut self.state {
                if let Some(replaced) = interval.push(sample) {
                    warn!(
                        "GPSU @{}: interval already anchored at {replaced}, keeping the later value",
                        token.offset
                    );
                }
            }
        }
        Ok(())
    }

    /// Close the interval in progress and open a new one.
    ///
    /// The first boundary of a stream precedes any data,
    /// so closing an interval that was never opened yields nothing.
    fn boundary(&mut self) -> Option<IntervalRecord> {
        match std::mem::replace(&mut self.state, State::Accumulating(IntervalRecord::default())) {
            State::Empty => None,
            State::Accumulating(interval) => {
                debug!(
                    "interval closed @{}: {} GPS5, {} ACCL, {} GYRO, {} MAGN, anchor {:?}",
                    self.tokens.position(),
                    interval.gps.len(),
                    interval.sensor(SensorType::Accelerometer).len(),
                    interval.sensor(SensorType::Gyroscope).len(),
                    interval.sensor(SensorType::Magnetometer).len(),
                    interval.time
                );
                Some(interval)
            }
        }
    }

    /// Take the interval in progress at end of stream, if it holds anything.
    fn flush(&mut self) -> Option<IntervalRecord> {
        match std::mem::take(&mut self.state) {
            State::Accumulating(interval) if !interval.is_empty() => {
                debug!("trailing interval flushed: {} GPS5", interval.gps.len());
                Some(interval)
            }
            _ => None,
        }
    }
}

impl Decoder<Cursor<Vec<u8>>> {
    /// Decode an in-memory GPMF stream, e.g. a track extracted with FFmpeg.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::new(Cursor::new(bytes.to_owned()))
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = Result<IntervalRecord, GpmfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let result = match self.tokens.next() {
                Some(Ok(token)) => self.apply(token),
                Some(Err(err)) if err.is_eof() => {
                    warn!("{err} Flushing pending interval.");
                    self.truncated = true;
                    self.done = true;
                    return self.flush().map(Ok);
                }
                Some(Err(err)) => Err(err),
                None => {
                    self.done = true;
                    return self.flush().map(Ok);
                }
            };

            match result {
                Ok(Some(interval)) => return Some(Ok(interval)),
                Ok(None) => continue,
                Err(err) => {
                    // Pending interval is dropped, byte alignment is lost
                    self.done = true;
                    self.state = State::Empty;
                    return Some(Err(err));
                }
            }
        }
    }
}
