//! Synthetic GPMF streams, laid out like HERO5 telemetry tracks.

#![allow(dead_code)]

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Accelerometer divisor logged by HERO5 Black.
pub const ACCL_SCALE: u32 = 418;
pub const GPS5_SCALE: [u32; 5] = [10_000_000, 10_000_000, 1000, 1000, 100];

#[derive(Debug, Default, Clone)]
pub struct StreamBuilder {
    bytes: Vec<u8>,
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn klv(mut self, fourcc: &[u8; 4], value_type: u8, size: u8, repeat: u16, payload: &[u8]) -> Self {
        assert_eq!(payload.len(), size as usize * repeat as usize);
        self.bytes.extend_from_slice(fourcc);
        self.bytes.push(value_type);
        self.bytes.push(size);
        self.bytes.extend_from_slice(&repeat.to_be_bytes());
        self.bytes.extend_from_slice(payload);
        while self.bytes.len() % 4 != 0 {
            self.bytes.push(0);
        }
        self
    }

    /// Nested entry wrapping everything in `children`.
    pub fn container(mut self, fourcc: &[u8; 4], children: StreamBuilder) -> Self {
        let len = children.bytes.len();
        self.bytes.extend_from_slice(fourcc);
        self.bytes.push(0);
        self.bytes.push(1);
        self.bytes.extend_from_slice(&(len as u16).to_be_bytes());
        self.bytes.extend(children.bytes);
        self
    }

    pub fn devc(self, children: StreamBuilder) -> Self {
        self.container(b"DEVC", children)
    }

    pub fn strm(self, children: StreamBuilder) -> Self {
        self.container(b"STRM", children)
    }

    pub fn dvid(self, id: u32) -> Self {
        self.klv(b"DVID", b'L', 4, 1, &id.to_be_bytes())
    }

    pub fn string(self, fourcc: &[u8; 4], value: &str) -> Self {
        self.klv(fourcc, b'c', value.len() as u8, 1, value.as_bytes())
    }

    pub fn empt(self) -> Self {
        self.klv(b"EMPT", b'L', 4, 1, &[0; 4])
    }

    pub fn scal(self, divisors: &[u32]) -> Self {
        let payload = divisors.iter().flat_map(|d| d.to_be_bytes()).collect::<Vec<_>>();
        self.klv(b"SCAL", b'L', 4, divisors.len() as u16, &payload)
    }

    pub fn scal16(self, divisors: &[u16]) -> Self {
        let payload = divisors.iter().flat_map(|d| d.to_be_bytes()).collect::<Vec<_>>();
        self.klv(b"SCAL", b's', 2, divisors.len() as u16, &payload)
    }

    pub fn sensor(self, fourcc: &[u8; 4], xyz: &[[i16; 3]]) -> Self {
        let payload = xyz.iter().flatten().flat_map(|v| v.to_be_bytes()).collect::<Vec<_>>();
        self.klv(fourcc, b's', 6, xyz.len() as u16, &payload)
    }

    pub fn gps5(self, points: &[[i32; 5]]) -> Self {
        let payload = points.iter().flatten().flat_map(|v| v.to_be_bytes()).collect::<Vec<_>>();
        self.klv(b"GPS5", b'l', 20, points.len() as u16, &payload)
    }

    pub fn gpsu(self, datetime: &str) -> Self {
        self.klv(b"GPSU", b'U', 16, 1, datetime.as_bytes())
    }

    pub fn gpsf(self, fix: u32) -> Self {
        self.klv(b"GPSF", b'L', 4, 1, &fix.to_be_bytes())
    }

    pub fn gpsp(self, cm: u16) -> Self {
        self.klv(b"GPSP", b'S', 2, 1, &cm.to_be_bytes())
    }

    pub fn tmpc(self, celsius: f32) -> Self {
        self.klv(b"TMPC", b'f', 4, 1, &celsius.to_be_bytes())
    }

    pub fn tsmp(self, count: u32) -> Self {
        self.klv(b"TSMP", b'L', 4, 1, &count.to_be_bytes())
    }

    /// One `DEVC` of a HERO5 stream: accelerometer, gyroscope and GPS streams.
    pub fn hero5_devc(self, gpsu: &str, points: &[[i32; 5]], temperature: f32) -> Self {
        let accl = StreamBuilder::new().strm(
            StreamBuilder::new()
                .tsmp(4)
                .string(b"STNM", "Accelerometer (up/down, right/left, forward/back)")
                .tmpc(temperature)
                .string(b"SIUN", "m/s2")
                .scal16(&[ACCL_SCALE as u16])
                .sensor(b"ACCL", &[[4180, 0, -418], [4180, 418, -836], [0, 0, 0], [-418, 0, 0]]),
        );
        let gyro = StreamBuilder::new().strm(
            StreamBuilder::new()
                .string(b"STNM", "Gyroscope (z,x,y)")
                .string(b"SIUN", "rad/s")
                .scal16(&[3755])
                .sensor(b"GYRO", &[[3755, 0, 0], [0, 3755, 0]]),
        );
        let gps = StreamBuilder::new().strm(
            StreamBuilder::new()
                .gpsf(3)
                .gpsu(gpsu)
                .gpsp(452)
                .string(b"UNIT", "degdegmm/sm/s")
                .scal(&GPS5_SCALE)
                .gps5(points),
        );

        self.devc(
            StreamBuilder::new()
                .dvid(1)
                .string(b"DVNM", "Camera")
                .append(accl)
                .append(gyro)
                .append(gps),
        )
    }

    pub fn append(mut self, other: StreamBuilder) -> Self {
        self.bytes.extend(other.bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// `n` raw `GPS5` positions moving north from 59°N 18°E at `speed` m/s.
pub fn northbound(n: usize, speed: f64) -> Vec<[i32; 5]> {
    (0..n as i32)
        .map(|i| {
            [
                590_000_000 + i * 100,
                180_000_000,
                25_000,
                (speed * GPS5_SCALE[3] as f64) as i32,
                (speed * GPS5_SCALE[4] as f64) as i32,
            ]
        })
        .collect()
}
