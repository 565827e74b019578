//! Byte builders for unit tests.

/// Frame a single KLV entry, padding included.
pub(crate) fn klv(fourcc: &[u8; 4], value_type: u8, size: u8, repeat: u16, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + payload.len() + 3);
    bytes.extend_from_slice(fourcc);
    bytes.push(value_type);
    bytes.push(size);
    bytes.extend_from_slice(&repeat.to_be_bytes());
    bytes.extend_from_slice(payload);
    while bytes.len() % 4 != 0 {
        bytes.push(0);
    }
    bytes
}

/// Container header with `len` bytes of children.
pub(crate) fn container(fourcc: &[u8; 4], len: u16) -> Vec<u8> {
    klv(fourcc, 0, 1, len, &[])
}

pub(crate) fn dvid(id: u32) -> Vec<u8> {
    klv(b"DVID", b'L', 4, 1, &id.to_be_bytes())
}

pub(crate) fn scal(divisors: &[u32]) -> Vec<u8> {
    let payload = divisors.iter().flat_map(|d| d.to_be_bytes()).collect::<Vec<_>>();
    klv(b"SCAL", b'L', 4, divisors.len() as u16, &payload)
}

pub(crate) fn accl(xyz: &[[i16; 3]]) -> Vec<u8> {
    let payload = xyz.iter().flatten().flat_map(|v| v.to_be_bytes()).collect::<Vec<_>>();
    klv(b"ACCL", b's', 6, xyz.len() as u16, &payload)
}

pub(crate) fn gps5(points: &[[i32; 5]]) -> Vec<u8> {
    let payload = points.iter().flatten().flat_map(|v| v.to_be_bytes()).collect::<Vec<_>>();
    klv(b"GPS5", b'l', 20, points.len() as u16, &payload)
}

pub(crate) fn gpsu(datetime: &str) -> Vec<u8> {
    klv(b"GPSU", b'U', 16, 1, datetime.as_bytes())
}
