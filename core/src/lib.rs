pub mod model;
pub mod packet;
pub mod service;

pub use model::summary::Summary;
pub use model::workout::Workout;
pub use packet::{load_packets, read_packet, PacketError, SensorPacket};
pub use service::report::{summarize, summarize_batch};
