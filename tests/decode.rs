mod common;

use common::{init_logger, northbound, StreamBuilder};
use gpmf_telemetry::{Decoder, FourCC, GpmfError, GpsFix, IntervalRecord, SensorType, Tokenizer};

fn hero5(intervals: usize, points: usize) -> Vec<u8> {
    (0..intervals)
        .fold(StreamBuilder::new(), |stream, i| {
            stream.hero5_devc(&format!("170412102{:03}.000", i), &northbound(points, 0.0), 40.0 + i as f32)
        })
        .build()
}

fn decode(stream: &[u8]) -> Vec<Result<IntervalRecord, GpmfError>> {
    Decoder::from_slice(stream).collect()
}

#[test]
fn tokenizer_framing_covers_whole_stream() {
    init_logger();
    let stream = StreamBuilder::new()
        .empt()
        .append(StreamBuilder::new().hero5_devc("170412102000.000", &northbound(3, 0.0), 40.0))
        .empt()
        .build();

    let mut tokenizer = Tokenizer::new(stream.as_slice());
    let tokens = tokenizer.by_ref().collect::<Result<Vec<_>, _>>().unwrap();
    let framed: usize = tokens.iter().map(|t| t.framed_len()).sum();

    // two EMPT entries, 8 byte header and 4 reserved bytes each
    assert_eq!(framed + 2 * 12, stream.len());
    assert_eq!(tokenizer.position(), stream.len() as u64);
    assert!(tokens.iter().all(|t| t.fourcc != FourCC::EMPT));
    assert_eq!(tokens.iter().filter(|t| t.is_container()).count(), 4);
}

/// `DVID` as interval boundary is an observed assumption, not a documented rule.
#[test]
fn dvid_is_assumed_interval_boundary() {
    init_logger();
    let intervals = decode(&hero5(3, 5))
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    // first DVID precedes all data, the last interval is flushed at end of stream
    assert_eq!(intervals.len(), 3);

    for (i, interval) in intervals.iter().enumerate() {
        assert!(interval.is_anchored());
        assert_eq!(interval.gps.len(), 5);
        assert_eq!(interval.sensor(SensorType::Accelerometer).len(), 4);
        assert_eq!(interval.sensor(SensorType::Gyroscope).len(), 2);
        assert_eq!(interval.fix, Some(GpsFix::Lock3D));
        assert_eq!(interval.accuracy, Some(452));
        assert_eq!(interval.temperature, Some(40.0 + i as f32));
        assert_eq!(interval.sample_count, Some(4));
    }
}

#[test]
fn sensors_use_their_own_scale() {
    let intervals = decode(&hero5(1, 2));
    let interval = intervals[0].as_ref().unwrap();

    let accl = &interval.accelerometer[1];
    assert_eq!((accl.x, accl.y, accl.z), (10.0, 1.0, -2.0));

    let gyro = &interval.gyroscope[1];
    assert_eq!((gyro.x, gyro.y, gyro.z), (0.0, 1.0, 0.0));

    let gps = &interval.gps[1];
    assert_eq!(gps.latitude, 59.00001);
    assert_eq!(gps.longitude, 18.0);
    assert_eq!(gps.altitude, 25.0);
}

#[test]
fn magnetometer_is_decoded() {
    let stream = StreamBuilder::new()
        .dvid(1)
        .scal16(&[10])
        .sensor(b"MAGN", &[[100, -100, 5]])
        .build();
    let intervals = decode(&stream);
    let magn = intervals[0].as_ref().unwrap().sensor(SensorType::Magnetometer).to_vec();
    assert_eq!(magn.len(), 1);
    assert_eq!((magn[0].x, magn[0].y, magn[0].z), (10.0, -10.0, 0.5));
}

#[test]
fn interval_without_gps_is_emitted() {
    let stream = StreamBuilder::new()
        .dvid(1)
        .scal16(&[1])
        .sensor(b"ACCL", &[[1, 2, 3]])
        .dvid(1)
        .gpsu("170412102000.000")
        .build();
    let intervals = decode(&stream)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(intervals.len(), 2);
    assert!(intervals[0].gps.is_empty());
    assert!(!intervals[0].is_anchored());
    assert!(intervals[1].is_anchored());
}

#[test]
fn truncated_stream_keeps_prior_intervals() {
    init_logger();
    let mut stream = hero5(3, 5);
    // cut the final GPS5 payload in half
    stream.truncate(stream.len() - 50);

    let mut decoder = Decoder::from_slice(&stream);
    let intervals = decoder.by_ref().collect::<Result<Vec<_>, _>>().unwrap();

    assert!(decoder.is_truncated());
    assert_eq!(intervals.len(), 3);
    assert_eq!(intervals[1].gps.len(), 5);
    // anchor was read, positions were not
    assert!(intervals[2].is_anchored());
    assert!(intervals[2].gps.is_empty());
}

#[test]
fn unknown_tag_aborts_without_further_records() {
    let first = StreamBuilder::new()
        .hero5_devc("170412102000.000", &northbound(5, 0.0), 40.0)
        .build();
    let stream = StreamBuilder::new()
        .append(StreamBuilder::new().hero5_devc("170412102000.000", &northbound(5, 0.0), 40.0))
        .klv(b"ABCD", b'L', 4, 1, &[0; 4])
        .hero5_devc("170412102001.000", &northbound(5, 0.0), 40.0)
        .build();

    let intervals = decode(&stream);
    assert_eq!(intervals.len(), 1);
    match &intervals[0] {
        Err(GpmfError::UnknownTag { fourcc, offset, .. }) => {
            assert_eq!(fourcc, "ABCD");
            assert_eq!(*offset, first.len() as u64);
        }
        other => panic!("expected UnknownTag, got {other:?}"),
    }
}

#[test]
fn scale_underflow_aborts() {
    let stream = StreamBuilder::new()
        .dvid(1)
        .scal(&[1, 1])
        .gps5(&northbound(1, 0.0))
        .dvid(1)
        .build();
    let intervals = decode(&stream);
    assert_eq!(intervals.len(), 1);
    assert!(matches!(
        intervals[0],
        Err(GpmfError::ScaleUnderflow { index: 4, len: 2 })
    ));
}

#[test]
fn invalid_timestamp_aborts() {
    let stream = StreamBuilder::new()
        .dvid(1)
        .klv(b"GPSU", b'U', 16, 1, b"17041210200.0000")
        .build();
    let intervals = decode(&stream);
    assert!(matches!(intervals[0], Err(GpmfError::InvalidTimestamp(_))));
}
