use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::workout::Workout;

/// One reading received from a sensor: a short workout code plus the
/// positional numeric payload for that workout's constructor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SensorPacket {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPacket {
    pub fn new(code: &str, data: Vec<f64>) -> Self {
        Self {
            code: code.to_string(),
            data,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PacketError {
    #[error("unknown workout code: '{0}'")]
    UnknownCode(String),
    #[error("'{code}' packet expects {expected} values, got {got}")]
    BadPayload {
        code: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Dispatch a sensor reading to the matching workout variant.
///
/// Payload order follows the sensor protocol: action, duration (h),
/// weight (kg), then the variant extras (height for WLK; pool length
/// and lap count for SWM). Payload values themselves are not
/// validated, only the count.
pub fn read_packet(code: &str, data: &[f64]) -> Result<Workout, PacketError> {
    match code {
        "RUN" => {
            check_payload("RUN", data, 3)?;
            Ok(Workout::Running {
                action: data[0] as u32,
                duration: data[1],
                weight: data[2],
            })
        }
        "WLK" => {
            check_payload("WLK", data, 4)?;
            Ok(Workout::SportsWalking {
                action: data[0] as u32,
                duration: data[1],
                weight: data[2],
                height: data[3],
            })
        }
        "SWM" => {
            check_payload("SWM", data, 5)?;
            Ok(Workout::Swimming {
                action: data[0] as u32,
                duration: data[1],
                weight: data[2],
                length_pool: data[3],
                count_pool: data[4] as u32,
            })
        }
        other => Err(PacketError::UnknownCode(other.to_string())),
    }
}

fn check_payload(code: &'static str, data: &[f64], expected: usize) -> Result<(), PacketError> {
    if data.len() != expected {
        return Err(PacketError::BadPayload {
            code,
            expected,
            got: data.len(),
        });
    }
    Ok(())
}

/// Load a batch of packets from a JSON file (an array of
/// `{"code": ..., "data": [...]}` objects).
pub fn load_packets<P: AsRef<Path>>(path: P) -> Result<Vec<SensorPacket>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Could not open packet file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let packets = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid packet file: {}", path.display()))?;
    Ok(packets)
}
