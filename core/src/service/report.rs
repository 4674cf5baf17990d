use crate::model::summary::Summary;
use crate::packet::{read_packet, PacketError, SensorPacket};

/// Dispatch one packet and compute its summary.
pub fn summarize(packet: &SensorPacket) -> Result<Summary, PacketError> {
    let workout = read_packet(&packet.code, &packet.data)?;
    Ok(workout.summary())
}

/// Summarize a batch, one result per packet. A malformed packet does
/// not abort the rest; the caller decides how to report failures.
pub fn summarize_batch(packets: &[SensorPacket]) -> Vec<Result<Summary, PacketError>> {
    packets.iter().map(summarize).collect()
}
